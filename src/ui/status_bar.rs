use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::app::{AppState, Mode};
use crate::board::Board;

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState, board: &Board) {
    // Drafts and confirmations take over the whole bar
    if let Some(line) = render_full_line_mode(state, area.width as usize) {
        f.render_widget(Paragraph::new(line).style(Theme::status_style()), area);
        return;
    }

    let left = build_left_zone(state, &board.title);
    let right = build_right_zone(state, board);

    let left_width: usize = left.iter().map(|s| s.content.width()).sum();
    let right_width: usize = right.iter().map(|s| s.content.width()).sum();
    let center_avail = (area.width as usize).saturating_sub(left_width + right_width);
    let center = build_center_zone(state, center_avail);

    let mut spans = left;
    spans.extend(center);
    spans.extend(right);
    f.render_widget(Paragraph::new(Line::from(spans)).style(Theme::status_style()), area);
}

pub(crate) fn mode_name(mode: &Mode) -> &'static str {
    match mode {
        Mode::Normal => "NORMAL",
        Mode::Input { .. } => "INPUT",
        Mode::Edit => "EDIT",
        Mode::Confirm { .. } => "CONFIRM",
        Mode::Help => "HELP",
    }
}

/// Mode badge + board title.
fn build_left_zone<'a>(state: &'a AppState, board_title: &'a str) -> Vec<Span<'a>> {
    vec![
        Span::styled(format!(" {} ", mode_name(&state.mode)), Theme::badge_style()),
        Span::raw(" "),
        Span::styled(format!("{board_title} "), Theme::dim_style()),
    ]
}

/// Edit hints while editing, otherwise list and card position.
fn build_right_zone<'a>(state: &'a AppState, board: &'a Board) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    if matches!(state.mode, Mode::Edit) {
        spans.push(Span::styled("Enter save · Esc cancel", Theme::dim_style()));
    } else if let Some(list) = state.focused_list_ref(board) {
        let card_pos = if list.cards.is_empty() {
            "0".to_string()
        } else {
            format!("{}/{}", state.selected_card + 1, list.cards.len())
        };
        spans.push(Span::styled(
            format!("list {}/{} ", state.focused_list + 1, board.lists.len()),
            Theme::dim_style(),
        ));
        spans.push(Span::styled(format!("card {card_pos}"), Style::default().fg(Theme::FG)));
    } else {
        spans.push(Span::styled("? help", Theme::dim_style()));
    }
    spans.push(Span::raw(" "));
    spans
}

/// Notification centered in the remaining space.
fn build_center_zone(state: &AppState, avail_width: usize) -> Vec<Span<'_>> {
    let Some(ref notif) = state.notification else {
        return vec![Span::raw(" ".repeat(avail_width))];
    };
    let notif_width = notif.width();
    if notif_width >= avail_width {
        return vec![Span::raw(super::truncate(notif, avail_width))];
    }
    let pad_total = avail_width - notif_width;
    let pad_left = pad_total / 2;
    vec![
        Span::raw(" ".repeat(pad_left)),
        Span::styled(notif.as_str(), Style::default().fg(Theme::FG)),
        Span::raw(" ".repeat(pad_total - pad_left)),
    ]
}

/// Full-line modes: a draft prompt with its text, or a y/n question.
fn render_full_line_mode(state: &AppState, width: usize) -> Option<Line<'static>> {
    match &state.mode {
        Mode::Input { prompt, buf, .. } => {
            let badge = format!(" {prompt} ");
            let avail = width.saturating_sub(badge.width() + 1);
            let mut spans = vec![Span::styled(badge, Theme::badge_style()), Span::raw(" ")];
            spans.extend(super::edit_line(buf, avail).spans);
            Some(Line::from(spans))
        }
        Mode::Confirm { prompt, .. } => Some(Line::from(Span::styled(
            format!(" {prompt} (y/n) "),
            Theme::badge_style().fg(Theme::DANGER),
        ))),
        _ => None,
    }
}
