use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;

use super::card_view::{render_card, CARD_HEIGHT};
use super::theme::Theme;
use crate::board::List;
use crate::edit::EditCursor;

/// First card to draw so that `selected` stays inside a window of `max_visible` cards.
pub(crate) fn scroll_offset(selected: usize, card_count: usize, max_visible: usize) -> usize {
    if card_count <= max_visible || selected < max_visible {
        0
    } else {
        selected + 1 - max_visible
    }
}

fn title_line(list: &List, is_editing: bool) -> Line<'_> {
    if is_editing {
        return Line::from(Span::styled(
            " Rename list ",
            Style::default().fg(Theme::EDIT_BORDER).add_modifier(Modifier::BOLD),
        ));
    }
    let title = if list.title.is_empty() {
        Span::styled(" (untitled) ", Theme::dim_style())
    } else {
        Span::styled(
            format!(" {} ", list.title),
            Style::default().fg(Theme::LIST_TITLE).add_modifier(Modifier::BOLD),
        )
    };
    Line::from(vec![
        title,
        Span::styled(format!("({})", list.cards.len()), Theme::dim_style()),
    ])
}

/// Render one list: title (or its inline edit field), its cards, and the
/// add-card affordance. `selected_card` is `Some` only for the focused list.
pub fn render_list(
    f: &mut Frame,
    area: Rect,
    list: &List,
    selected_card: Option<usize>,
    edit: &EditCursor,
) {
    let is_focused = selected_card.is_some();
    let is_editing = edit.is_editing_list(list.id);

    let border_color = if is_editing {
        Theme::EDIT_BORDER
    } else if is_focused {
        Theme::LIST_FOCUSED_BORDER
    } else {
        Theme::LIST_BORDER
    };
    let focused_mod = if is_focused { Modifier::BOLD } else { Modifier::empty() };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).add_modifier(focused_mod))
        .border_type(BorderType::Rounded)
        .title(title_line(list, is_editing))
        .padding(Padding::new(1, 1, 0, 0));

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let mut top = inner.y;
    let bottom = inner.y + inner.height;

    // Title edit field
    if let Some(buf) = edit.buffer().filter(|_| is_editing) {
        f.render_widget(
            Paragraph::new(super::edit_line(buf, inner.width as usize)),
            Rect::new(inner.x, top, inner.width, 1),
        );
        top += 1;
        if top < bottom {
            f.render_widget(
                Paragraph::new(Span::styled("Enter save · Esc cancel", Theme::dim_style())),
                Rect::new(inner.x, top, inner.width, 1),
            );
            top += 1;
        }
    }

    // Footer
    let footer_y = bottom.saturating_sub(1);
    if footer_y >= top {
        let style = if is_focused {
            Style::default().fg(Theme::ADD)
        } else {
            Theme::dim_style()
        };
        f.render_widget(
            Paragraph::new(Span::styled("+ Add a card", style)),
            Rect::new(inner.x, footer_y, inner.width, 1),
        );
    }

    // Cards
    let cards_height = footer_y.saturating_sub(top);
    let max_visible = (cards_height / CARD_HEIGHT) as usize;
    if max_visible == 0 {
        return;
    }
    let offset = scroll_offset(selected_card.unwrap_or(0), list.cards.len(), max_visible);

    for (row, (idx, card)) in list
        .cards
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible)
        .enumerate()
    {
        let y = top + row as u16 * CARD_HEIGHT;
        let card_area = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
        render_card(f, card_area, card, selected_card == Some(idx), edit);
    }

    if list.cards.len() > max_visible {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
        let mut scrollbar_state = ScrollbarState::new(list.cards.len()).position(offset);
        f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}
