//! Drives the demo screen against a TestBackend: the terminal equivalent of
//! loading the demo page and clicking its buttons.

use std::time::{Duration, Instant};

use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;

use timerbar::config::DisplayConfig;
use timerbar::tui::screens::demo::DemoApp;

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Render one frame and flatten the buffer to a string for content checks.
fn draw(app: &DemoApp) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn demo_renders_a_live_widget() {
    let app = DemoApp::new(10_000, &DisplayConfig::default());
    let text = draw(&app);

    // The widget came up with real content, counting down from the start.
    assert!(text.contains("timer-bar demo"));
    assert!(text.contains("Timer"));
    assert!(text.contains("10s"));
    assert!(text.contains("running: true"));
}

#[test]
fn stop_key_halts_and_restores_full_duration() {
    let mut app = DemoApp::new(10_000, &DisplayConfig::default());

    app.handle_key(key('x'));

    assert!(!app.timer.is_running());
    assert_eq!(app.timer.remaining_millis(), 10_000);
    assert!(draw(&app).contains("running: false"));
}

#[test]
fn start_key_restarts_after_stop() {
    let mut app = DemoApp::new(10_000, &DisplayConfig::default());

    app.handle_key(key('x'));
    app.handle_key(key('s'));

    assert!(app.timer.is_running());
    assert!(app.timer.surface().is_running());
}

#[test]
fn reset_key_matches_stopped_state() {
    let mut app = DemoApp::new(10_000, &DisplayConfig::default());

    app.handle_key(key('r'));

    assert!(!app.timer.is_running());
    assert_eq!(app.timer.remaining_millis(), 10_000);
    assert_eq!(app.timer.surface().remaining_secs(), 10.0);
}

#[test]
fn resize_key_cycles_widget_width() {
    let mut app = DemoApp::new(10_000, &DisplayConfig::default());
    let initial = app.timer.surface().width();

    app.handle_key(key('w'));

    assert_ne!(app.timer.surface().width(), initial);
    assert_eq!(app.timer.surface().width(), Some(24));
}

#[test]
fn quit_keys_end_the_demo() {
    let mut app = DemoApp::new(10_000, &DisplayConfig::default());
    app.handle_key(key('q'));
    assert!(app.should_quit());

    let mut app = DemoApp::new(10_000, &DisplayConfig::default());
    app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(app.should_quit());
}

#[test]
fn key_release_events_are_ignored() {
    let mut app = DemoApp::new(10_000, &DisplayConfig::default());

    app.handle_key(KeyEvent::new_with_kind(
        KeyCode::Char('x'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));

    assert!(app.timer.is_running());
}

#[test]
fn drained_countdown_shows_time_up() {
    let mut app = DemoApp::new(10_000, &DisplayConfig::default());

    let t0 = Instant::now();
    app.on_tick(t0);
    app.on_tick(t0 + Duration::from_secs(11));

    assert!(app.timer.surface().is_ended());
    assert!(!app.timer.surface().is_running());
    assert!(draw(&app).contains("TIME UP"));
}

#[test]
fn hidden_bar_still_shows_the_readout() {
    let display = DisplayConfig {
        bar_visible: false,
        ..DisplayConfig::default()
    };
    let app = DemoApp::new(10_000, &display);
    let text = draw(&app);

    assert!(!text.contains(" Timer "));
    assert!(text.contains("10s"));
}
