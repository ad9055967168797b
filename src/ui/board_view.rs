use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::list_view::render_list;
use super::theme::Theme;
use crate::app::{AppState, InputTarget, Mode};
use crate::board::Board;

/// Width of one list column, borders included.
pub const LIST_WIDTH: u16 = 32;

/// First list to draw so the focused one is inside a window of `fit` columns.
pub(crate) fn first_visible_list(focused: usize, fit: usize) -> usize {
    if fit == 0 || focused < fit {
        0
    } else {
        focused + 1 - fit
    }
}

/// Lay lists out left to right, scrolled so the focused list is visible, with
/// an "add a list" column after the last one when there is room.
pub fn render_board(f: &mut Frame, area: Rect, board: &Board, state: &AppState) {
    if board.lists.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(Span::styled(
                board.title.as_str(),
                Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("No lists yet. Press a to add a list.", Theme::dim_style())),
        ])
        .wrap(Wrap { trim: true });
        f.render_widget(msg, area);
        return;
    }

    let fit = (area.width / LIST_WIDTH).max(1) as usize;
    let first = first_visible_list(state.focused_list, fit);

    let mut x = area.x;
    for (idx, list) in board.lists.iter().enumerate().skip(first).take(fit) {
        let width = LIST_WIDTH.min(area.x + area.width - x);
        let selected = (idx == state.focused_list).then_some(state.selected_card);
        render_list(f, Rect::new(x, area.y, width, area.height), list, selected, &state.edit);
        x += width;
    }

    let remaining = area.x + area.width - x;
    if remaining >= 16 && first + fit >= board.lists.len() {
        render_add_list(f, Rect::new(x, area.y, remaining.min(LIST_WIDTH), 3), state);
    }
}

fn render_add_list(f: &mut Frame, area: Rect, state: &AppState) {
    let drafting = matches!(
        state.mode,
        Mode::Input {
            target: InputTarget::NewList,
            ..
        }
    );
    let style = if drafting {
        Style::default().fg(Theme::ADD).add_modifier(Modifier::BOLD)
    } else {
        Theme::dim_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(Span::styled(" + Add a list", style)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::store::{BoardStore, Intent};
    use crate::ui::tests::render_rows;

    fn store_with(titles: &[&str]) -> BoardStore {
        let mut store = BoardStore::new(Board::new("Sprint"));
        for t in titles {
            store.dispatch(Intent::AddList { title: t.to_string() }).unwrap();
        }
        store
    }

    #[test]
    fn first_visible_list_scrolls_right() {
        assert_eq!(first_visible_list(0, 3), 0);
        assert_eq!(first_visible_list(2, 3), 0);
        assert_eq!(first_visible_list(3, 3), 1);
        assert_eq!(first_visible_list(5, 1), 5);
    }

    #[test]
    fn empty_board_shows_hint() {
        let store = store_with(&[]);
        let state = AppState::new(false);
        let rows = render_rows(store.board(), &state, 80, 10);
        assert!(rows[0].contains("Sprint"));
        assert!(rows.concat().contains("Press a to add a list"));
    }

    #[test]
    fn lists_render_side_by_side_with_add_column() {
        let store = store_with(&["Todo", "Doing"]);
        let state = AppState::new(false);
        let rows = render_rows(store.board(), &state, 100, 12);
        assert!(rows[0].contains("Todo"));
        assert!(rows[0].contains("Doing"));
        assert!(rows[1].contains("+ Add a list"));
    }

    #[test]
    fn focused_list_scrolls_into_view() {
        let store = store_with(&["L0", "L1", "L2", "L3"]);
        let mut state = AppState::new(false);
        state.focused_list = 3;
        // Room for two lists.
        let rows = render_rows(store.board(), &state, 64, 12);
        assert!(rows[0].contains("L3"));
        assert!(rows[0].contains("L2"));
        assert!(!rows[0].contains("L0"));
    }
}
