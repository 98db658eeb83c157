//! One-shot tween animations
//!
//! Pure sampling logic behind the mount animations on the landing page:
//! - [`CubicBezier`] shapes linear progress
//! - [`Tween`] maps elapsed time to an interpolated value
//! - [`OneShot`] owns a tween and its single `Unstarted -> Complete` transition
//!
//! Nothing here touches the DOM. The browser-side frame loop lives in
//! `ui::mount_animation` and feeds elapsed time into these types.

use std::time::Duration;

/// Duration of both mount animations
pub const MOUNT_ANIMATION_DURATION: Duration = Duration::from_secs(2);

/// Final width of the watch-percentage bar, in percent
pub const WATCH_PERCENTAGE_TARGET: f64 = 80.0;

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f64 = 1e-7;

/// CSS-style cubic bezier timing curve with endpoints fixed at (0,0) and (1,1)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// The CSS `ease-in-out` curve. framer-motion's keyframes generator uses
    /// the same curve when a transition only sets a duration.
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Map linear progress `x` in [0, 1] to eased progress
    pub fn apply(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        let t = self.solve_t(x);
        bezier(t, self.y1, self.y2)
    }

    /// Find the curve parameter whose x coordinate equals `x`
    fn solve_t(&self, x: f64) -> f64 {
        // Newton-Raphson converges quickly for well-behaved curves
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = bezier(t, self.x1, self.x2) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = bezier_slope(t, self.x1, self.x2);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            t -= error / slope;
        }

        // Fall back to bisection when the slope flattens out
        let (mut low, mut high) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = bezier(t, self.x1, self.x2);
            if (value - x).abs() < SOLVE_EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }
}

/// One coordinate of the curve at parameter `t`
fn bezier(t: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Interpolation from one scalar to another over a fixed duration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub curve: CubicBezier,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            curve: CubicBezier::EASE_IN_OUT,
        }
    }

    /// Linear progress in [0, 1] after `elapsed`
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Interpolated value after `elapsed`
    pub fn sample(&self, elapsed: Duration) -> f64 {
        if self.is_finished(elapsed) {
            return self.to;
        }
        let eased = self.curve.apply(self.progress(elapsed));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Width of the watch-percentage bar, 0% to 80%
pub fn watch_percentage_tween() -> Tween {
    Tween::new(0.0, WATCH_PERCENTAGE_TARGET, MOUNT_ANIMATION_DURATION)
}

/// Opacity and traced path length of the engagement chart, 0 to 1
pub fn chart_reveal_tween() -> Tween {
    Tween::new(0.0, 1.0, MOUNT_ANIMATION_DURATION)
}

/// Lifecycle of a one-shot animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    Unstarted,
    Complete,
}

impl AnimationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationPhase::Unstarted => "unstarted",
            AnimationPhase::Complete => "complete",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, AnimationPhase::Complete)
    }
}

/// Result of advancing a one-shot animation by one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame {
    /// Still interpolating; render this value and request another frame
    Continue(f64),
    /// Reached the target; render this value and stop
    Done(f64),
}

impl Frame {
    pub fn value(&self) -> f64 {
        match self {
            Frame::Continue(value) | Frame::Done(value) => *value,
        }
    }
}

/// A tween that runs forward once and never resets
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OneShot {
    tween: Tween,
    phase: AnimationPhase,
}

impl OneShot {
    pub fn new(tween: Tween) -> Self {
        Self {
            tween,
            phase: AnimationPhase::Unstarted,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Resting value for the current phase
    pub fn value(&self) -> f64 {
        match self.phase {
            AnimationPhase::Unstarted => self.tween.from,
            AnimationPhase::Complete => self.tween.to,
        }
    }

    /// Sample the tween at `elapsed`, completing it once the duration has passed
    pub fn advance(&mut self, elapsed: Duration) -> Frame {
        if self.phase.is_complete() {
            return Frame::Done(self.tween.to);
        }
        if self.tween.is_finished(elapsed) {
            self.phase = AnimationPhase::Complete;
            return Frame::Done(self.tween.to);
        }
        Frame::Continue(self.tween.sample(elapsed))
    }

    /// Jump straight to the target.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn finish(&mut self) -> bool {
        if self.phase.is_complete() {
            return false;
        }
        self.phase = AnimationPhase::Complete;
        true
    }
}

/// Elapsed time between two millisecond timestamps; a clock that steps
/// backwards yields zero
pub fn elapsed_between(started_at_ms: f64, now_ms: f64) -> Duration {
    let delta = now_ms - started_at_ms;
    if !delta.is_finite() || delta <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(delta / 1000.0)
}

/// Round for inline styles so re-renders don't churn on float noise
fn style_number(value: f64) -> f64 {
    // Adding 0.0 normalizes -0.0
    (value * 100.0).round() / 100.0 + 0.0
}

/// Inline style for the watch-percentage bar
pub fn width_style(percent: f64) -> String {
    format!("width: {}%", style_number(percent))
}

/// Inline style revealing an SVG path drawn with `pathLength="1"`
pub fn path_reveal_style(fraction: f64) -> String {
    let fraction = style_number(fraction.clamp(0.0, 1.0));
    format!("opacity: {fraction}; stroke-dasharray: {fraction} 1")
}
