use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};
use ratatui::Frame;

use super::theme::Theme;
use crate::input::keymap::{BindingGroup, HELP_GROUPS};

/// Help lines for `groups`, built from the binding registry. Keys are padded
/// to the widest key in `groups`.
pub(crate) fn help_lines(groups: &[BindingGroup]) -> Vec<Line<'static>> {
    let key = Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD);
    let heading = Style::default()
        .fg(Theme::FG)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let key_width = groups
        .iter()
        .flat_map(|g| g.bindings.iter())
        .map(|b| b.key.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(group.name, heading)));
        for binding in group.bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<key_width$}  ", binding.key), key),
                Span::styled(binding.description, Theme::dim_style()),
            ]));
        }
    }
    lines
}

pub fn render_help(f: &mut Frame, area: Rect) {
    let panel_area = super::centered_rect(area, 90, 85, 70, 18);
    f.render_widget(Clear, panel_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::FG))
        .title(Span::styled(
            " Help ",
            Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::new(2, 2, 1, 1));

    let inner = block.inner(panel_area);
    f.render_widget(block, panel_area);
    if inner.height == 0 {
        return;
    }

    let [body, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);

    // Navigation and lists on the left, cards and editing on the right
    let (left_groups, right_groups) = HELP_GROUPS.split_at(HELP_GROUPS.len() / 2);
    f.render_widget(Paragraph::new(help_lines(left_groups)), left);
    f.render_widget(Paragraph::new(help_lines(right_groups)), right);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Press Esc to close",
            Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD),
        )),
        footer,
    );
}
