//! Timer-stepped knob animation.
//!
//! The engine moves the knob a fixed number of pixels per timer tick until
//! it reaches one of the two rail ends. A request that arrives while an
//! animation is running waits in a single pending slot; a newer request
//! replaces an older one.

use flipswitch_core::Timer;

/// An animation in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    /// Knob offset the animation ends at. Always `0` or the full travel.
    pub target: i32,
    /// State committed once the knob arrives.
    pub result: bool,
}

impl Animation {
    /// Animation toward the rail end for `result`.
    #[must_use]
    pub const fn toward(result: bool, travel: i32) -> Self {
        Self {
            target: if result { travel } else { 0 },
            result,
        }
    }

    /// Next knob offset after one step of `step` pixels, never overshooting
    /// the target.
    #[must_use]
    pub fn step_from(&self, value: i32, step: i32) -> i32 {
        if self.result {
            value.saturating_add(step).min(self.target)
        } else {
            value.saturating_sub(step).max(self.target)
        }
    }
}

/// Result of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No animation is running.
    Idle,
    /// The knob moved and has further to go.
    Moved(i32),
    /// The knob reached the target.
    Arrived(i32),
}

/// Drives the knob toward a rail end on a recurring timer.
#[derive(Debug, Clone)]
pub struct AnimationEngine {
    timer: Timer,
    step: i32,
    active: Option<Animation>,
    pending: Option<bool>,
    ticks: u64,
}

impl AnimationEngine {
    /// Create an idle engine.
    #[must_use]
    pub const fn new(step: i32, interval_ms: u32) -> Self {
        Self {
            timer: Timer::new(interval_ms),
            step,
            active: None,
            pending: None,
            ticks: 0,
        }
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// The animation in flight, if any.
    #[must_use]
    pub const fn current(&self) -> Option<Animation> {
        self.active
    }

    /// Request waiting for the current animation to finish.
    #[must_use]
    pub const fn pending(&self) -> Option<bool> {
        self.pending
    }

    /// Whether the tick timer is armed.
    #[must_use]
    pub const fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Ticks run since the last animation began, whether fed by
    /// [`AnimationEngine::advance`] or driven one at a time by the host.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Change the step. Applies from the next tick.
    pub fn set_step(&mut self, step: i32) {
        self.step = step;
    }

    /// Change the tick interval. Applies from the next tick.
    pub fn set_interval_ms(&mut self, interval_ms: u32) {
        self.timer.set_interval_ms(interval_ms);
    }

    /// Store a request to run after the current animation. Replaces any
    /// earlier pending request.
    pub fn queue(&mut self, result: bool) {
        self.pending = Some(result);
    }

    /// Remove and return the pending request.
    pub fn take_pending(&mut self) -> Option<bool> {
        self.pending.take()
    }

    /// Start animating toward the rail end for `result`. The timer is only
    /// armed when `timed` is set; otherwise the caller finishes at once.
    pub fn begin(&mut self, result: bool, travel: i32, timed: bool) -> Animation {
        let animation = Animation::toward(result, travel);
        self.active = Some(animation);
        self.ticks = 0;
        if timed {
            self.timer.start();
        }
        animation
    }

    /// Feed elapsed time into the timer. Returns the number of ticks due.
    pub fn advance(&mut self, delta_ms: u32) -> u32 {
        if self.active.is_none() {
            return 0;
        }
        self.timer.advance(delta_ms)
    }

    /// Move the knob one step from `value`.
    pub fn tick(&mut self, value: i32) -> TickOutcome {
        let Some(animation) = self.active else {
            return TickOutcome::Idle;
        };
        self.ticks += 1;
        let next = animation.step_from(value, self.step);
        if next == animation.target {
            TickOutcome::Arrived(next)
        } else {
            TickOutcome::Moved(next)
        }
    }

    /// End the current animation and disarm the timer.
    pub fn finish(&mut self) -> Option<Animation> {
        self.timer.stop();
        self.active.take()
    }

    /// Keep an "on" animation aimed at the rail end after the rail length
    /// changed. Returns `true` if the target moved.
    pub fn retarget(&mut self, new_travel: i32) -> bool {
        match self.active.as_mut() {
            Some(animation) if animation.result && animation.target != new_travel => {
                animation.target = new_travel;
                true
            }
            _ => false,
        }
    }

    /// Stop everything, dropping the animation and any pending request.
    pub fn shutdown(&mut self) {
        self.timer.stop();
        self.active = None;
        self.pending = None;
    }
}
