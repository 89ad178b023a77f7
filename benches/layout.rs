// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_alert::alert::layout::{self, ActionAxis, LayoutInput};
use iced_alert::alert::{Action, ActionStyle, Alert, Message};
use std::hint::black_box;

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("alert_layout");

    let input = LayoutInput {
        viewport: Size::new(1024.0, 768.0),
        icon_height: 100.0,
        title_height: 22.0,
        message_height: Some(400.0),
        action_count: 3,
        axis: ActionAxis::Vertical,
        action_spacing: 0.0,
    };
    group.bench_function("compute", |b| {
        b.iter(|| black_box(layout::compute(black_box(&input))));
    });

    let message = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(50);
    group.bench_function("estimate_text_height", |b| {
        b.iter(|| black_box(layout::estimate_text_height(black_box(&message), 14.0, 250.0, None)));
    });

    let mut alert = Alert::<()>::without_icon("Terms", Some(message.clone()))
        .with_action(Action::new("OK", ActionStyle::Normal));
    group.bench_function("resize_relayout", |b| {
        b.iter(|| {
            alert.update(Message::ViewportResized(black_box(Size::new(800.0, 600.0))));
        });
    });

    group.finish();
}

criterion_group!(benches, layout_benchmark);
criterion_main!(benches);
