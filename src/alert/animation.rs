// SPDX-License-Identifier: MPL-2.0
//! Spring-damped transitions for the alert surface.
//!
//! A [`Transition`] moves the surface's vertical translation between two
//! values over a fixed duration. Progress follows a damped harmonic
//! oscillator normalized to the duration: underdamped springs overshoot and
//! settle, a damping of 1.0 glides in without overshoot. Transitions are
//! sampled on every frame and snap to their target once the duration has
//! elapsed.

use std::time::{Duration, Instant};

/// Duration shared by the entrance and exit transitions.
pub const DURATION: Duration = Duration::from_millis(400);

/// Initial velocity shared by both transitions, in distances per duration.
pub const INITIAL_VELOCITY: f32 = 0.5;

/// Damping of the entrance spring: visibly bouncy.
pub const ENTRANCE_DAMPING: f32 = 0.6;

/// Damping of the exit spring: critically damped.
pub const EXIT_DAMPING: f32 = 1.0;

/// Translation reached by the entrance, lifting the surface from its resting
/// position to the viewport center.
pub const ENTRANCE_TRANSLATION: f32 = -100.0;

/// Translation reached by the exit, dropping the surface below rest.
pub const EXIT_TRANSLATION: f32 = 50.0;

/// Stiffness of the normalized spring. High enough that the residual
/// oscillation is invisible at the end of the duration.
const NATURAL_FREQUENCY: f32 = 12.0;

/// Spring parameters of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub duration: Duration,
    pub damping: f32,
    pub velocity: f32,
}

impl Spring {
    /// Spring used when the alert is presented.
    pub const ENTRANCE: Spring = Spring {
        duration: DURATION,
        damping: ENTRANCE_DAMPING,
        velocity: INITIAL_VELOCITY,
    };

    /// Spring used when the alert is dismissed.
    pub const EXIT: Spring = Spring {
        duration: DURATION,
        damping: EXIT_DAMPING,
        velocity: INITIAL_VELOCITY,
    };

    /// Same spring, completing instantly. Used when animations are disabled.
    #[must_use]
    pub fn instant(self) -> Self {
        Self {
            duration: Duration::ZERO,
            ..self
        }
    }

    /// Normalized spring position for normalized time `t` in `[0, 1]`.
    ///
    /// Starts at 0 with the configured initial velocity and converges to 1.
    #[must_use]
    pub fn progress(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let omega = NATURAL_FREQUENCY;
        let zeta = self.damping.max(0.0);
        let v = self.velocity;

        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * t).exp();
            let coefficient = (zeta * omega - v) / omega_d;
            1.0 - decay * ((omega_d * t).cos() + coefficient * (omega_d * t).sin())
        } else {
            // Critically damped; overdamped springs are treated the same.
            let decay = (-omega * t).exp();
            1.0 - decay * (1.0 + (omega - v) * t)
        }
    }
}

/// A running translation from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Instant,
    spring: Spring,
}

impl Transition {
    /// Starts a transition at `now`.
    #[must_use]
    pub fn new(from: f32, to: f32, spring: Spring, now: Instant) -> Self {
        Self {
            from,
            to,
            started_at: now,
            spring,
        }
    }

    /// Fraction of the duration elapsed at `now`, in `[0, 1]`.
    #[must_use]
    pub fn elapsed_fraction(&self, now: Instant) -> f32 {
        if self.spring.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.spring.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Translation at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let progress = self.spring.progress(self.elapsed_fraction(now));
        self.from + (self.to - self.from) * progress
    }

    /// Whether the transition reached its target at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.elapsed_fraction(now) >= 1.0
    }

    /// Target translation.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn spring(&self) -> Spring {
        self.spring
    }
}
