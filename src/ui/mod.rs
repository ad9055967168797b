pub mod board_view;
pub mod card_view;
pub mod help;
pub mod list_view;
pub mod status_bar;
pub mod theme;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::app::{AppState, Mode};
use crate::board::Board;
use crate::edit::TextBuffer;
use theme::Theme;

/// Create a centered rect within `area` using percentage-based sizing with minimums.
pub fn centered_rect(area: Rect, w_pct: u16, h_pct: u16, min_w: u16, min_h: u16) -> Rect {
    let scale = |len: u16, pct: u16| (u32::from(len) * u32::from(pct) / 100) as u16;
    let width = scale(area.width, w_pct).max(min_w).min(area.width);
    let height = scale(area.height, h_pct).max(min_h).min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Redraw the whole tree from the board and UI state.
pub fn render(f: &mut Frame, board: &Board, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    board_view::render_board(f, chunks[0], board, state);
    status_bar::render_status_bar(f, chunks[1], state, board);

    if matches!(state.mode, Mode::Help) {
        help::render_help(f, f.area());
    }
}

/// Cut `text` to at most `max_width` display columns, ending in `…` when cut.
/// Splits on grapheme clusters so wide and combined characters stay whole.
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let avail = max_width.saturating_sub(1);
    let truncated: String = text
        .graphemes(true)
        .scan(0, |w, g| {
            let gw = g.width();
            (*w + gw <= avail).then(|| {
                *w += gw;
                g
            })
        })
        .collect();
    if max_width == 0 {
        truncated
    } else {
        format!("{truncated}…")
    }
}

/// One-line view of an edit buffer with a reverse-video caret. When the text
/// is wider than `width`, leading graphemes are dropped so the caret stays in view.
pub(crate) fn edit_line(buf: &TextBuffer, width: usize) -> Line<'static> {
    let (before, after) = buf.split_at_cursor();
    let mut after_graphemes = after.graphemes(true);
    let caret = after_graphemes.next().unwrap_or(" ").to_string();
    let rest: String = after_graphemes.collect();

    let budget = width.saturating_sub(caret.width());
    let mut shown_before: Vec<&str> = Vec::new();
    let mut used = 0;
    for g in before.graphemes(true).rev() {
        let gw = g.width();
        if used + gw > budget {
            break;
        }
        used += gw;
        shown_before.push(g);
    }
    shown_before.reverse();

    Line::from(vec![
        Span::raw(shown_before.concat()),
        Span::styled(caret, Theme::caret_style()),
        Span::styled(truncate(&rest, budget - used), Style::default()),
    ])
}
