// SPDX-License-Identifier: MPL-2.0
use iced_alert::app::{self, Flags};
use iced_alert::ui::theming::ThemeMode;
use std::path::PathBuf;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();

    let theme = match args.opt_value_from_str::<_, ThemeMode>("--theme") {
        Ok(theme) => theme,
        Err(err) => {
            log::warn!("ignoring --theme: {err}");
            None
        }
    };
    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir").unwrap_or_default();
    let icon_path: Option<PathBuf> = args.opt_value_from_str("--icon").unwrap_or_default();

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    app::run(Flags {
        theme,
        config_dir,
        icon_path,
    })
}
