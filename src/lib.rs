//! timerbar: a countdown timer bar widget for terminal UIs.
//!
//! The stateful core ([`TimerState`]) owns truth: a configured duration and
//! the wall-clock instant of the last start. Rendering is delegated to a
//! [`PresentationSurface`] the host plugs in. This crate ships a ratatui
//! implementation ([`tui::widgets::timer_bar`]) plus an interactive demo
//! screen, but the core compiles against the trait alone.

pub mod cli;
pub mod clock;
pub mod config;
pub mod paths;
pub mod surface;
pub mod timer;
pub mod tui;

// Re-export the types a host application embeds.
pub use clock::{Clock, ManualClock, SystemClock};
pub use surface::{HasSize, PresentationSurface};
pub use timer::TimerState;
