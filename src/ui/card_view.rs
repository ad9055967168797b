use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use super::theme::Theme;
use crate::board::Card;
use crate::edit::EditCursor;

/// Rows one card occupies: text line plus two border lines.
pub const CARD_HEIGHT: u16 = 3;

/// Border color for a card. Editing wins over selection; unfocused lists are dimmed.
pub(crate) fn card_border_color(is_editing: bool, is_selected: bool) -> Color {
    if is_editing {
        Theme::EDIT_BORDER
    } else if is_selected {
        Theme::CARD_SELECTED_BORDER
    } else {
        Theme::CARD_BORDER
    }
}

/// Render one card: its committed text, or the staged text with a caret when
/// `edit` points at it.
pub fn render_card(f: &mut Frame, area: Rect, card: &Card, is_selected: bool, edit: &EditCursor) {
    if area.width < 4 || area.height < CARD_HEIGHT {
        return;
    }

    let is_editing = edit.is_editing_card(card.id);
    let selected_mod = if is_selected { Modifier::BOLD } else { Modifier::empty() };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(card_border_color(is_editing, is_selected))
                .add_modifier(selected_mod),
        )
        .border_type(if is_selected || is_editing {
            BorderType::Thick
        } else {
            BorderType::Rounded
        });

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let line = match edit {
        EditCursor::CardText { buf, .. } if is_editing => super::edit_line(buf, inner.width as usize),
        _ => Line::from(Span::styled(
            super::truncate(&card.text, inner.width as usize),
            Style::default().fg(Theme::FG).add_modifier(selected_mod),
        )),
    };
    f.render_widget(Paragraph::new(line), Rect::new(inner.x, inner.y, inner.width, 1));
}
