use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::config::DisplayConfig;
use crate::surface::HasSize;
use crate::timer::TimerState;
use crate::tui::event::{AppEvent, EventHandler};
use crate::tui::widgets::timer_bar::{TimerBar, TimerBarState};
use crate::tui::Tui;

/// Widths the resize control cycles through, in cells.
const RESIZE_WIDTHS: [u16; 4] = [24, 36, 48, 64];

/// Demo screen: one timer bar, started on entry, with key-driven
/// start/stop/reset/resize controls and a live readout of the host-facing
/// accessors.
///
/// Kept separate from the terminal loop so the integration test can drive
/// keys and ticks against a TestBackend.
pub struct DemoApp {
    pub timer: TimerState<TimerBarState>,
    width_cycle: usize,
    should_quit: bool,
}

impl DemoApp {
    pub fn new(duration_millis: u64, display: &DisplayConfig) -> Self {
        let mut surface = TimerBarState::new();
        surface.set_bar_visible(display.bar_visible);
        surface.set_timer_visible(display.timer_visible);
        surface.set_size(display.width, 3);

        let mut timer = TimerState::with_duration(surface, duration_millis);
        timer.start();

        Self {
            timer,
            width_cycle: 0,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Advance the bar animation to `now`.
    pub fn on_tick(&mut self, now: Instant) {
        self.timer.surface_mut().tick(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('s') => self.timer.start(),
            KeyCode::Char('x') => self.timer.stop(),
            KeyCode::Char('r') => self.timer.reset(),
            KeyCode::Char('w') => self.cycle_width(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn cycle_width(&mut self) {
        self.width_cycle = (self.width_cycle + 1) % RESIZE_WIDTHS.len();
        self.timer
            .surface_mut()
            .set_size(RESIZE_WIDTHS[self.width_cycle], 3);
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let outer = Block::default()
            .title(" timer-bar demo ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let rows = Layout::vertical([
            Constraint::Length(2), // instructions
            Constraint::Length(3), // the widget
            Constraint::Length(2), // host-facing readout
            Constraint::Min(0),
            Constraint::Length(1), // key hints
        ])
        .split(inner);

        let inst = Paragraph::new(Line::from(Span::styled(
            "  A countdown bar driven by start/stop/reset commands.",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(inst, rows[0]);

        frame.render_widget(TimerBar::new(self.timer.surface()), rows[1]);

        let mut status = vec![Span::raw(format!(
            "  remaining: {} ms   running: {}",
            self.timer.remaining_millis(),
            self.timer.is_running(),
        ))];
        if self.timer.surface().is_ended() {
            status.push(Span::styled(
                "   TIME UP",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(status)), rows[2]);

        let key_style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("  [s]", key_style),
            Span::raw(" start  "),
            Span::styled("[x]", key_style),
            Span::raw(" stop  "),
            Span::styled("[r]", key_style),
            Span::raw(" reset  "),
            Span::styled("[w]", key_style),
            Span::raw(" resize  "),
            Span::styled("[q]", key_style),
            Span::raw(" quit"),
        ]));
        frame.render_widget(hint, rows[4]);
    }
}

/// Run the demo until the user quits.
pub fn run(terminal: &mut Tui, duration_millis: u64, display: &DisplayConfig) -> Result<()> {
    let events = EventHandler::new(Duration::from_millis(display.tick_rate_ms));
    let mut app = DemoApp::new(duration_millis, display);

    while !app.should_quit() {
        app.on_tick(Instant::now());
        terminal.draw(|frame| app.render(frame))?;

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
        }
    }

    Ok(())
}
