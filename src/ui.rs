//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`: header,
//! optional playlist sidebar, now-playing panel, progress gauge and the
//! controls footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{App, PlaybackState};
use crate::config::{ControlsSettings, UiSettings};
use crate::poller::PlaybackSnapshot;

/// Render the controls help text, incorporating the skip length.
fn controls_text(skip_seconds: u64) -> String {
    format!(
        "[j/l] seek -/+{skip_seconds}s | [k] play/pause | [n] next | [b] playlist | [q] quit"
    )
}

/// Format a position in seconds as `m:ss`, or `h:mm:ss` once an hour is
/// reached.
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.floor() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();

    let s = total % 60;
    let m = total / 60 % 60;
    let h = total / 3600;

    if h > 0 {
        format!("{sign}{h}:{m:02}:{s:02}")
    } else {
        format!("{sign}{m}:{s:02}")
    }
}

/// Gauge ratio for a position within a track, clamped to `0.0..=1.0`.
fn progress_ratio(position: f64, length: f64) -> f64 {
    if length <= 0.0 {
        return 0.0;
    }
    (position / length).clamp(0.0, 1.0)
}

/// Render the entire UI into the provided `frame` using `app` state and
/// settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings, controls: &ControlsSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" adagio ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Main area: optional playlist sidebar + now-playing panel.
    let main_area = if app.show_sidebar {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(ui_settings.sidebar_width),
                Constraint::Min(1),
            ])
            .split(chunks[1]);

        let items: Vec<ListItem> = app
            .entries
            .iter()
            .map(|label| ListItem::new(label.as_str()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" playlist "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        state.select(app.current_index);
        frame.render_stateful_widget(list, split[0], &mut state);

        split[1]
    } else {
        chunks[1]
    };

    let snapshot: Option<PlaybackSnapshot> =
        app.snapshot.lock().ok().and_then(|slot| slot.clone());

    // Now-playing panel
    let status = {
        let mut parts: Vec<String> = Vec::new();

        match &snapshot {
            Some(snap) if !snap.info.is_empty() => {
                parts.push(format!("Song: {}", snap.info));
            }
            _ => parts.push("Nothing loaded".to_string()),
        }

        let state = match app.playback {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        };
        parts.push(state.to_string());

        if let (Some(idx), true) = (app.current_index, app.has_entries()) {
            parts.push(format!("Track {}/{}", idx + 1, app.entries.len()));
        }

        if let Some(notice) = &app.notice {
            parts.push(format!("! {notice}"));
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" now playing "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, main_area);

    // Progress gauge
    let (ratio, label) = match &snapshot {
        Some(snap) => (
            progress_ratio(snap.position, snap.length),
            format!(
                "{} / {}",
                format_clock(snap.position),
                format_clock(snap.length)
            ),
        ),
        None => (0.0, "-:-- / -:--".to_string()),
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, chunks[2]);

    // Controls footer
    let footer = Paragraph::new(controls_text(controls.skip_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
