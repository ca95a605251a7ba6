use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Widget};

use crate::surface::{HasSize, PresentationSurface};

/// Animation state of the terminal timer bar.
///
/// This is the presentation side of the widget: it receives display writes
/// and lifecycle commands from the timer core and keeps its own picture of
/// the countdown, advanced by [`tick`](Self::tick) at whatever cadence the
/// host's render loop runs. The core never reads any of this back.
pub struct TimerBarState {
    total_secs: u64,
    /// Fractional so the bar drains smoothly between whole seconds.
    remaining_secs: f64,
    running: bool,
    ended: bool,
    bar_visible: bool,
    timer_visible: bool,
    /// Fixed size in cells; `None` fills the area the widget is given.
    size: Option<(u16, u16)>,
    last_tick: Option<Instant>,
}

impl TimerBarState {
    pub fn new() -> Self {
        Self {
            total_secs: 0,
            remaining_secs: 0.0,
            running: false,
            ended: false,
            bar_visible: true,
            timer_visible: true,
            size: None,
            last_tick: None,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> f64 {
        self.remaining_secs
    }

    /// Whether the visual countdown is animating. Independent of the timer
    /// core's own running status.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once the countdown has drained to zero, until the next reset.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn set_bar_visible(&mut self, visible: bool) {
        self.bar_visible = visible;
    }

    pub fn set_timer_visible(&mut self, visible: bool) {
        self.timer_visible = visible;
    }

    pub fn width(&self) -> Option<u16> {
        self.size.map(|(w, _)| w)
    }

    pub fn height(&self) -> Option<u16> {
        self.size.map(|(_, h)| h)
    }

    /// Advance the animation to `now`.
    ///
    /// The first tick after a start anchors the animation; subsequent ticks
    /// drain the remaining time by the real interval between them. Draining
    /// to zero stops the animation and marks the countdown ended.
    pub fn tick(&mut self, now: Instant) {
        if !self.running {
            return;
        }

        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return;
        };

        self.remaining_secs -= now.saturating_duration_since(last).as_secs_f64();
        self.last_tick = Some(now);

        if self.remaining_secs <= 0.0 {
            self.remaining_secs = 0.0;
            self.running = false;
            self.ended = true;
            self.last_tick = None;
        }
    }
}

impl Default for TimerBarState {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSurface for TimerBarState {
    fn set_display(&mut self, total_secs: u64, remaining_secs: u64) {
        self.total_secs = total_secs;
        self.remaining_secs = remaining_secs as f64;
    }

    fn start(&mut self) {
        self.running = true;
        self.ended = false;
        self.last_tick = None;
    }

    fn stop(&mut self) {
        self.running = false;
        self.last_tick = None;
    }

    fn reset(&mut self) {
        self.running = false;
        self.ended = false;
        self.remaining_secs = self.total_secs as f64;
        self.last_tick = None;
    }
}

impl HasSize for TimerBarState {
    fn set_size(&mut self, width: u16, height: u16) {
        self.size = Some((width, height));
    }
}

/// Format the seconds readout. Values of ten and above show a floored
/// integer; below ten, one decimal, floored (9.99 → "9.9", not "10.0").
fn format_remaining(secs: f64) -> String {
    if secs >= 10.0 {
        format!("{}", secs.floor() as u64)
    } else {
        format!("{:.1}", (secs * 10.0).floor() / 10.0)
    }
}

/// Renders a [`TimerBarState`]: a draining gauge with the seconds readout
/// beside it.
pub struct TimerBar<'a> {
    state: &'a TimerBarState,
}

impl<'a> TimerBar<'a> {
    pub fn new(state: &'a TimerBarState) -> Self {
        Self { state }
    }
}

impl Widget for TimerBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;

        // A fixed size clamps the paint area; otherwise fill what we're given.
        let area = match state.size {
            Some((w, h)) => Rect {
                width: w.min(area.width),
                height: h.min(area.height),
                ..area
            },
            None => area,
        };
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_width = if state.timer_visible { 7 } else { 0 };
        let cols = Layout::horizontal([Constraint::Min(0), Constraint::Length(label_width)])
            .split(area);

        if state.bar_visible {
            let ratio = if state.total_secs == 0 {
                0.0
            } else {
                (state.remaining_secs / state.total_secs as f64).clamp(0.0, 1.0)
            };

            let fill = if state.ended {
                Color::DarkGray
            } else {
                Color::Red
            };

            Gauge::default()
                .block(Block::default().title(" Timer ").borders(Borders::ALL))
                .gauge_style(Style::default().fg(fill))
                .ratio(ratio)
                .label("")
                .render(cols[0], buf);
        }

        if state.timer_visible {
            let text = format!("{}s", format_remaining(state.remaining_secs));
            // Center the readout against the gauge's middle row.
            let label_area = Rect {
                y: area.y + area.height.saturating_sub(1) / 2,
                height: 1,
                ..cols[1]
            };
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )))
            .render(label_area, buf);
        }
    }
}
