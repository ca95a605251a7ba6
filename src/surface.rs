/// Rendering contract between [`TimerState`](crate::TimerState) and whatever
/// draws the bar.
///
/// The surface is a passive renderer: it receives property writes and verb
/// commands, owns all animation timing and layout, and is never queried.
/// This crate implements it for a ratatui widget; a host could equally back
/// it with a GUI progress bar or a no-op for headless use.
pub trait PresentationSurface {
    /// Push the configured total and the remaining time, both in whole
    /// seconds (truncated from milliseconds).
    fn set_display(&mut self, total_secs: u64, remaining_secs: u64);

    /// Begin counting down visually from the current remaining value.
    fn start(&mut self);

    /// Freeze the visual countdown where it stands.
    fn stop(&mut self);

    /// Return the visual state to the full duration, not running.
    fn reset(&mut self);
}

/// Generic sizing capability, independent of timer semantics.
///
/// Kept separate from [`PresentationSurface`] because the timer core never
/// sizes anything; only hosts (like the demo's resize control) do.
pub trait HasSize {
    /// Request a fixed size. For terminal surfaces the units are cells.
    fn set_size(&mut self, width: u16, height: u16);
}
