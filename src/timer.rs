use crate::clock::{Clock, SystemClock};
use crate::surface::PresentationSurface;

/// Countdown length used when the host doesn't specify one.
pub const DEFAULT_DURATION_MILLIS: u64 = 10_000;

/// Truncating milliseconds-to-seconds conversion for the display properties
/// (10 999 ms → 10 s).
fn to_seconds(millis: u64) -> u64 {
    millis / 1_000
}

/// The stateful core of the timer bar.
///
/// Owns the configured duration and the wall-clock timestamp of the last
/// start, and pushes display values and lifecycle commands to the
/// presentation surface it owns. Remaining time and running status are
/// derived from the clock on every read; nothing is cached and no
/// background task ticks.
///
/// Carries no internal synchronization. A host sharing a timer across
/// threads imposes its own.
pub struct TimerState<S, C = SystemClock> {
    duration_millis: u64,
    started_at_millis: Option<u64>,
    surface: S,
    clock: C,
}

impl<S: PresentationSurface> TimerState<S> {
    /// A timer with the default 10-second duration.
    pub fn new(surface: S) -> Self {
        Self::with_duration(surface, DEFAULT_DURATION_MILLIS)
    }

    pub fn with_duration(surface: S, duration_millis: u64) -> Self {
        Self::with_clock(surface, duration_millis, SystemClock)
    }
}

impl<S: PresentationSurface, C: Clock> TimerState<S, C> {
    /// Construct with an explicit clock. Tests pass a
    /// [`ManualClock`](crate::clock::ManualClock) here to simulate elapsed
    /// time deterministically.
    pub fn with_clock(surface: S, duration_millis: u64, clock: C) -> Self {
        let mut timer = Self {
            duration_millis: 0,
            started_at_millis: None,
            surface,
            clock,
        };
        timer.set_duration(duration_millis);
        timer
    }

    /// Reconfigure the countdown length and refresh the displayed total and
    /// remaining values to it.
    ///
    /// Reconfiguring while a countdown is running stops it (the surface gets
    /// the stop command first), so the display never disagrees with
    /// [`remaining_millis`](Self::remaining_millis).
    pub fn set_duration(&mut self, duration_millis: u64) {
        self.duration_millis = duration_millis;
        if self.started_at_millis.is_some() {
            self.stop();
        }
        let secs = to_seconds(duration_millis);
        self.surface.set_display(secs, secs);
    }

    pub fn duration_millis(&self) -> u64 {
        self.duration_millis
    }

    /// Start the countdown from zero elapsed.
    ///
    /// Always restarts: starting a running timer discards its progress. The
    /// surface sees reset's refresh first, then the start command.
    pub fn start(&mut self) {
        self.reset();
        self.started_at_millis = Some(self.clock.now_millis());
        self.surface.start();
    }

    /// Stop the countdown. Stopping an already-stopped timer leaves state
    /// unchanged; the surface still receives the command.
    pub fn stop(&mut self) {
        self.started_at_millis = None;
        self.surface.stop();
    }

    /// Stop and return the display to the full duration.
    pub fn reset(&mut self) {
        self.stop();
        self.set_duration(self.duration_millis);
        self.surface.reset();
    }

    /// Milliseconds left on the countdown, saturating at zero.
    ///
    /// Returns the full duration when the timer has not been started.
    pub fn remaining_millis(&self) -> u64 {
        match self.started_at_millis {
            None => self.duration_millis,
            Some(started_at) => {
                let elapsed = self.clock.now_millis().saturating_sub(started_at);
                self.duration_millis.saturating_sub(elapsed)
            }
        }
    }

    /// Whether the countdown is live. Derived, not stored: a timer whose
    /// duration has fully elapsed reports `false` even if [`stop`](Self::stop)
    /// was never called.
    pub fn is_running(&self) -> bool {
        self.started_at_millis.is_some() && self.remaining_millis() > 0
    }

    /// The owned presentation surface, for rendering.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
