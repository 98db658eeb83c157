//! Mount-time one-shot animations
//!
//! `use_mount_animation` starts a [`Tween`] when the calling component mounts
//! in the browser and drives it with `requestAnimationFrame` until it reaches
//! its target. The pending frame is cancelled when the component's owner is
//! cleaned up, so an unmounted page leaves no frame callbacks behind.
//!
//! On the server nothing animates and the unstarted values are rendered. A
//! browser without a usable clock or frame loop jumps straight to the final
//! state.

use leptos::prelude::*;
use thiserror::Error;

use crate::core::animation::{AnimationPhase, Tween};

/// Why a mount animation could not run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    #[error("no browser window available")]
    NoWindow,
    #[error("no monotonic clock available")]
    NoClock,
    #[error("failed to request an animation frame: {0}")]
    FrameRequest(String),
}

/// Reactive view of a running one-shot animation
#[derive(Clone, Copy)]
pub struct MountAnimation {
    /// Current interpolated value
    pub value: ReadSignal<f64>,
    pub phase: ReadSignal<AnimationPhase>,
}

/// Run `tween` once, starting when the calling component mounts
pub fn use_mount_animation(tween: Tween) -> MountAnimation {
    let (value, set_value) = signal(tween.from);
    let (phase, set_phase) = signal(AnimationPhase::Unstarted);

    #[cfg(feature = "hydrate")]
    {
        let driver = driver::FrameDriver::new(tween, driver::BrowserFrames, set_value, set_phase);

        // Effects only run in the browser, after the element is mounted
        Effect::new(move |_| driver.start_or_settle());
        on_cleanup(move || driver.cancel());
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (set_value, set_phase);
    }

    MountAnimation { value, phase }
}

#[cfg(any(feature = "hydrate", test))]
mod driver {
    use leptos::logging::warn;
    use leptos::prelude::*;

    use super::AnimationError;
    use crate::core::animation::{AnimationPhase, Frame, OneShot, Tween, elapsed_between};

    /// Clock and frame scheduler the driver runs against
    pub(super) trait FrameSource: Copy + Send + Sync + 'static {
        type Handle: Copy + Send + Sync + 'static;

        /// Monotonic timestamp in milliseconds
        fn now_ms(&self) -> Result<f64, AnimationError>;

        fn request_frame(
            &self,
            callback: impl FnOnce() + 'static,
        ) -> Result<Self::Handle, AnimationError>;

        fn cancel_frame(&self, handle: Self::Handle);
    }

    /// `performance.now()` and `requestAnimationFrame`
    #[cfg(feature = "hydrate")]
    #[derive(Clone, Copy)]
    pub(super) struct BrowserFrames;

    #[cfg(feature = "hydrate")]
    impl FrameSource for BrowserFrames {
        type Handle = AnimationFrameRequestHandle;

        fn now_ms(&self) -> Result<f64, AnimationError> {
            let window = web_sys::window().ok_or(AnimationError::NoWindow)?;
            let performance = window.performance().ok_or(AnimationError::NoClock)?;
            Ok(performance.now())
        }

        fn request_frame(
            &self,
            callback: impl FnOnce() + 'static,
        ) -> Result<Self::Handle, AnimationError> {
            request_animation_frame_with_handle(callback)
                .map_err(|err| AnimationError::FrameRequest(format!("{err:?}")))
        }

        fn cancel_frame(&self, handle: Self::Handle) {
            handle.cancel();
        }
    }

    /// Frame loop state; every field is an arena handle, so the driver is `Copy`
    #[derive(Clone, Copy)]
    pub(super) struct FrameDriver<S: FrameSource> {
        source: S,
        animation: StoredValue<OneShot>,
        started_at: StoredValue<Option<f64>>,
        pending: StoredValue<Option<S::Handle>>,
        set_value: WriteSignal<f64>,
        set_phase: WriteSignal<AnimationPhase>,
    }

    impl<S: FrameSource> FrameDriver<S> {
        pub(super) fn new(
            tween: Tween,
            source: S,
            set_value: WriteSignal<f64>,
            set_phase: WriteSignal<AnimationPhase>,
        ) -> Self {
            Self {
                source,
                animation: StoredValue::new(OneShot::new(tween)),
                started_at: StoredValue::new(None),
                pending: StoredValue::new(None),
                set_value,
                set_phase,
            }
        }

        /// Start the frame loop, or show the final state if it can't run
        pub(super) fn start_or_settle(self) {
            if let Err(err) = self.start() {
                warn!("mount animation skipped, showing final state: {err}");
                self.settle();
            }
        }

        fn start(self) -> Result<(), AnimationError> {
            let now = self.source.now_ms()?;
            self.started_at.try_update_value(|started_at| *started_at = Some(now));
            self.schedule()
        }

        fn schedule(self) -> Result<(), AnimationError> {
            let handle = self.source.request_frame(move || self.on_frame())?;
            self.pending.try_update_value(|pending| *pending = Some(handle));
            Ok(())
        }

        fn on_frame(self) {
            // The owner may have been disposed between scheduling and this frame
            let Some(Some(started_at)) = self.started_at.try_get_value() else {
                return;
            };
            self.pending.try_update_value(|pending| *pending = None);

            let now = match self.source.now_ms() {
                Ok(now) => now,
                Err(err) => {
                    warn!("mount animation lost its clock, showing final state: {err}");
                    self.settle();
                    return;
                }
            };
            let elapsed = elapsed_between(started_at, now);
            let Some(frame) = self
                .animation
                .try_update_value(|animation| animation.advance(elapsed))
            else {
                return;
            };

            self.set_value.try_set(frame.value());
            match frame {
                Frame::Continue(_) => {
                    if let Err(err) = self.schedule() {
                        warn!("mount animation interrupted, showing final state: {err}");
                        self.settle();
                    }
                }
                Frame::Done(_) => {
                    self.set_phase.try_set(AnimationPhase::Complete);
                }
            }
        }

        /// Jump to the resting final state
        fn settle(self) {
            let Some(value) = self.animation.try_update_value(|animation| {
                animation.finish();
                animation.value()
            }) else {
                return;
            };
            self.set_value.try_set(value);
            self.set_phase.try_set(AnimationPhase::Complete);
        }

        /// Drop the pending frame, if any
        pub(super) fn cancel(self) {
            if let Some(Some(handle)) = self.pending.try_get_value() {
                self.source.cancel_frame(handle);
            }
            self.pending.try_update_value(|pending| *pending = None);
        }
    }

    #[cfg(test)]
    pub(super) mod manual {
        //! Hand-cranked clock and frame queue, one per test thread

        use std::cell::{Cell, RefCell};

        use super::{AnimationError, FrameSource};

        type Callback = Box<dyn FnOnce()>;

        thread_local! {
            static NOW_MS: Cell<f64> = const { Cell::new(0.0) };
            static NEXT_HANDLE: Cell<u64> = const { Cell::new(1) };
            static REFUSE_FRAMES: Cell<bool> = const { Cell::new(false) };
            static QUEUE: RefCell<Vec<(u64, Callback)>> = const { RefCell::new(Vec::new()) };
        }

        #[derive(Clone, Copy)]
        pub struct ManualFrames;

        impl ManualFrames {
            pub fn advance_clock(millis: f64) {
                NOW_MS.set(NOW_MS.get() + millis);
            }

            pub fn refuse_frames() {
                REFUSE_FRAMES.set(true);
            }

            pub fn pending() -> usize {
                QUEUE.with_borrow(Vec::len)
            }

            /// Run every queued callback once; callbacks may queue new frames
            pub fn run_frames() {
                let due = QUEUE.take();
                for (_, callback) in due {
                    callback();
                }
            }

            /// Remove queued callbacks without running or cancelling them
            pub fn take_frames() -> Vec<Box<dyn FnOnce()>> {
                QUEUE.take().into_iter().map(|(_, callback)| callback).collect()
            }
        }

        impl FrameSource for ManualFrames {
            type Handle = u64;

            fn now_ms(&self) -> Result<f64, AnimationError> {
                Ok(NOW_MS.get())
            }

            fn request_frame(
                &self,
                callback: impl FnOnce() + 'static,
            ) -> Result<u64, AnimationError> {
                if REFUSE_FRAMES.get() {
                    return Err(AnimationError::FrameRequest("refused".to_string()));
                }
                let handle = NEXT_HANDLE.get();
                NEXT_HANDLE.set(handle + 1);
                QUEUE.with_borrow_mut(|queue| queue.push((handle, Box::new(callback))));
                Ok(handle)
            }

            fn cancel_frame(&self, handle: u64) {
                QUEUE.with_borrow_mut(|queue| queue.retain(|(queued, _)| *queued != handle));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::driver::FrameDriver;
    use super::driver::manual::ManualFrames;
    use super::*;
    use crate::core::animation::{
        WATCH_PERCENTAGE_TARGET, chart_reveal_tween, watch_percentage_tween,
    };

    struct Harness {
        owner: Owner,
        driver: FrameDriver<ManualFrames>,
        animation: MountAnimation,
    }

    impl Harness {
        /// Mounts a watch-percentage driver with cancel-on-cleanup wiring
        fn mount() -> Self {
            let owner = Owner::new();
            let (driver, animation) = owner.with(|| {
                let (value, set_value) = signal(0.0);
                let (phase, set_phase) = signal(AnimationPhase::Unstarted);
                let driver =
                    FrameDriver::new(watch_percentage_tween(), ManualFrames, set_value, set_phase);
                on_cleanup(move || driver.cancel());
                (driver, MountAnimation { value, phase })
            });
            Self {
                owner,
                driver,
                animation,
            }
        }

        fn value(&self) -> f64 {
            self.owner.with(|| self.animation.value.get_untracked())
        }

        fn phase(&self) -> AnimationPhase {
            self.owner.with(|| self.animation.phase.get_untracked())
        }

        fn start(&self) {
            self.owner.with(|| self.driver.start_or_settle());
        }

        fn run_frames(&self) {
            self.owner.with(ManualFrames::run_frames);
        }
    }

    #[test]
    fn test_server_render_starts_unstarted() {
        let owner = Owner::new();
        owner.with(|| {
            let animation = use_mount_animation(watch_percentage_tween());
            assert_eq!(animation.value.get_untracked(), 0.0);
            assert_eq!(animation.phase.get_untracked(), AnimationPhase::Unstarted);
        });
    }

    #[test]
    fn test_each_animation_starts_from_its_origin() {
        let owner = Owner::new();
        owner.with(|| {
            let watch = use_mount_animation(watch_percentage_tween());
            let chart = use_mount_animation(chart_reveal_tween());
            assert_eq!(watch.value.get_untracked(), 0.0);
            assert_eq!(chart.value.get_untracked(), 0.0);
        });
    }

    #[test]
    fn test_start_schedules_one_frame() {
        let harness = Harness::mount();
        harness.start();

        assert_eq!(ManualFrames::pending(), 1);
        assert_eq!(harness.phase(), AnimationPhase::Unstarted);
    }

    #[test]
    fn test_midway_frame_interpolates_and_reschedules() {
        let harness = Harness::mount();
        harness.start();

        ManualFrames::advance_clock(1000.0);
        harness.run_frames();

        let value = harness.value();
        assert!(value > 0.0 && value < WATCH_PERCENTAGE_TARGET);
        assert_eq!(harness.phase(), AnimationPhase::Unstarted);
        assert_eq!(ManualFrames::pending(), 1);
    }

    #[test]
    fn test_final_frame_completes_and_stops() {
        let harness = Harness::mount();
        harness.start();

        ManualFrames::advance_clock(2000.0);
        harness.run_frames();

        assert_eq!(harness.value(), WATCH_PERCENTAGE_TARGET);
        assert_eq!(harness.phase(), AnimationPhase::Complete);
        assert_eq!(ManualFrames::pending(), 0);
    }

    #[test]
    fn test_refused_frames_settle_at_final_state() {
        ManualFrames::refuse_frames();
        let harness = Harness::mount();
        harness.start();

        assert_eq!(harness.value(), WATCH_PERCENTAGE_TARGET);
        assert_eq!(harness.phase(), AnimationPhase::Complete);
        assert_eq!(ManualFrames::pending(), 0);
    }

    #[test]
    fn test_cleanup_cancels_pending_frame() {
        let harness = Harness::mount();
        harness.start();
        ManualFrames::advance_clock(500.0);
        harness.run_frames();
        assert_eq!(ManualFrames::pending(), 1);

        harness.owner.cleanup();

        assert_eq!(ManualFrames::pending(), 0);
    }

    #[test]
    fn test_frame_after_disposal_is_ignored() {
        let owner = Owner::new();
        owner.with(|| {
            let (_, set_value) = signal(0.0);
            let (_, set_phase) = signal(AnimationPhase::Unstarted);
            // No cleanup hook, so the frame outlives its owner
            FrameDriver::new(chart_reveal_tween(), ManualFrames, set_value, set_phase)
                .start_or_settle();
        });
        let late_frames = ManualFrames::take_frames();
        assert_eq!(late_frames.len(), 1);

        owner.cleanup();
        ManualFrames::advance_clock(500.0);
        owner.with(|| {
            for frame in late_frames {
                frame();
            }
        });

        assert_eq!(ManualFrames::pending(), 0);
    }

    #[test]
    fn test_animation_error_messages() {
        assert_eq!(
            AnimationError::NoWindow.to_string(),
            "no browser window available"
        );
        assert_eq!(
            AnimationError::NoClock.to_string(),
            "no monotonic clock available"
        );
        assert_eq!(
            AnimationError::FrameRequest("denied".into()).to_string(),
            "failed to request an animation frame: denied"
        );
    }
}
