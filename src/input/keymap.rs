use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action::Action;
use crate::app::Mode;

/// Map a key event to a semantic action based on current mode.
pub fn map_key(key: KeyEvent, mode: &Mode) -> Action {
    match mode {
        Mode::Normal => map_normal(key),
        Mode::Input { .. } | Mode::Edit => map_input(key),
        Mode::Confirm { .. } => map_confirm(key),
        Mode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Action::Quit,
            _ => Action::None,
        },
    }
}

fn map_normal(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('h') | KeyCode::Left => Action::FocusPrevList,
        KeyCode::Char('l') | KeyCode::Right => Action::FocusNextList,
        KeyCode::Char('j') | KeyCode::Down => Action::SelectNextCard,
        KeyCode::Char('k') | KeyCode::Up => Action::SelectPrevCard,
        KeyCode::Char('g') | KeyCode::Home => Action::JumpToFirstCard,
        KeyCode::Char('G') | KeyCode::End => Action::JumpToLastCard,
        KeyCode::Char('a') => Action::NewList,
        KeyCode::Char('r') => Action::RenameList,
        KeyCode::Char('D') => Action::DeleteList,
        KeyCode::Char('n') => Action::NewCard,
        KeyCode::Char('e') | KeyCode::Enter => Action::EditCard,
        KeyCode::Char('d') => Action::DeleteCard,
        KeyCode::Char('?') => Action::ShowHelp,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

fn map_input(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::InputConfirm,
        KeyCode::Esc => Action::InputCancel,
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::InputHome,
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::InputEnd,
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::InputDeleteWord
        }
        KeyCode::Char(c) => Action::InputChar(c),
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Delete => Action::InputDelete,
        KeyCode::Left => Action::InputLeft,
        KeyCode::Right => Action::InputRight,
        KeyCode::Home => Action::InputHome,
        KeyCode::End => Action::InputEnd,
        _ => Action::None,
    }
}

fn map_confirm(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => Action::Confirm,
        KeyCode::Char('n') | KeyCode::Esc => Action::Deny,
        _ => Action::None,
    }
}

// ---------------------------------------------------------------------------
// Binding registry, used by the help overlay and the status bar hints.
// ---------------------------------------------------------------------------

/// A documented keybinding.
pub struct Binding {
    pub key: &'static str,
    pub description: &'static str,
}

/// A group of related bindings (one section in help).
pub struct BindingGroup {
    pub name: &'static str,
    pub bindings: &'static [Binding],
}

pub const NAV_BINDINGS: &[Binding] = &[
    Binding { key: "h / l", description: "Switch lists" },
    Binding { key: "j / k", description: "Move between cards" },
    Binding { key: "g / G", description: "First / last card" },
    Binding { key: "?", description: "Help" },
    Binding { key: "q", description: "Quit" },
];

pub const LIST_BINDINGS: &[Binding] = &[
    Binding { key: "a", description: "Add a list" },
    Binding { key: "r", description: "Rename list" },
    Binding { key: "D", description: "Delete list" },
];

pub const CARD_BINDINGS: &[Binding] = &[
    Binding { key: "n", description: "Add a card" },
    Binding { key: "e / Enter", description: "Edit card" },
    Binding { key: "d", description: "Delete card" },
];

pub const EDIT_BINDINGS: &[Binding] = &[
    Binding { key: "Enter", description: "Save" },
    Binding { key: "Esc", description: "Cancel" },
    Binding { key: "Ctrl-w", description: "Delete word" },
    Binding { key: "Ctrl-a / e", description: "Start / end of line" },
];

pub const HELP_GROUPS: &[BindingGroup] = &[
    BindingGroup { name: "Navigation", bindings: NAV_BINDINGS },
    BindingGroup { name: "Lists", bindings: LIST_BINDINGS },
    BindingGroup { name: "Cards", bindings: CARD_BINDINGS },
    BindingGroup { name: "Editing", bindings: EDIT_BINDINGS },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::InputTarget;
    use crate::edit::TextBuffer;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn input_mode() -> Mode {
        Mode::Input {
            prompt: "New list",
            buf: TextBuffer::empty(),
            target: InputTarget::NewList,
        }
    }

    // ── Normal mode ──

    #[test]
    fn normal_h_l_switch_lists() {
        assert_eq!(map_key(key(KeyCode::Char('h')), &Mode::Normal), Action::FocusPrevList);
        assert_eq!(map_key(key(KeyCode::Left), &Mode::Normal), Action::FocusPrevList);
        assert_eq!(map_key(key(KeyCode::Char('l')), &Mode::Normal), Action::FocusNextList);
        assert_eq!(map_key(key(KeyCode::Right), &Mode::Normal), Action::FocusNextList);
    }

    #[test]
    fn normal_j_k_select_cards() {
        assert_eq!(map_key(key(KeyCode::Char('j')), &Mode::Normal), Action::SelectNextCard);
        assert_eq!(map_key(key(KeyCode::Char('k')), &Mode::Normal), Action::SelectPrevCard);
    }

    #[test]
    fn normal_list_actions() {
        assert_eq!(map_key(key(KeyCode::Char('a')), &Mode::Normal), Action::NewList);
        assert_eq!(map_key(key(KeyCode::Char('r')), &Mode::Normal), Action::RenameList);
        assert_eq!(map_key(key(KeyCode::Char('D')), &Mode::Normal), Action::DeleteList);
    }

    #[test]
    fn normal_card_actions() {
        assert_eq!(map_key(key(KeyCode::Char('n')), &Mode::Normal), Action::NewCard);
        assert_eq!(map_key(key(KeyCode::Char('e')), &Mode::Normal), Action::EditCard);
        assert_eq!(map_key(key(KeyCode::Enter), &Mode::Normal), Action::EditCard);
        assert_eq!(map_key(key(KeyCode::Char('d')), &Mode::Normal), Action::DeleteCard);
    }

    #[test]
    fn normal_ctrl_c_quits() {
        assert_eq!(map_key(key_ctrl(KeyCode::Char('c')), &Mode::Normal), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Char('q')), &Mode::Normal), Action::Quit);
    }

    #[test]
    fn normal_unmapped_key_is_noop() {
        assert_eq!(map_key(key(KeyCode::Char('x')), &Mode::Normal), Action::None);
    }

    // ── Input / Edit mode ──

    #[test]
    fn input_enter_saves_and_esc_cancels() {
        for mode in [input_mode(), Mode::Edit] {
            assert_eq!(map_key(key(KeyCode::Enter), &mode), Action::InputConfirm);
            assert_eq!(map_key(key(KeyCode::Esc), &mode), Action::InputCancel);
        }
    }

    #[test]
    fn input_letters_are_text_not_commands() {
        // 'q' and 'd' must type, not quit or delete.
        assert_eq!(map_key(key(KeyCode::Char('q')), &Mode::Edit), Action::InputChar('q'));
        assert_eq!(map_key(key(KeyCode::Char('d')), &input_mode()), Action::InputChar('d'));
    }

    #[test]
    fn input_control_keys() {
        let mode = input_mode();
        assert_eq!(map_key(key_ctrl(KeyCode::Char('a')), &mode), Action::InputHome);
        assert_eq!(map_key(key_ctrl(KeyCode::Char('e')), &mode), Action::InputEnd);
        assert_eq!(map_key(key_ctrl(KeyCode::Char('w')), &mode), Action::InputDeleteWord);
        assert_eq!(map_key(key(KeyCode::Backspace), &mode), Action::InputBackspace);
        assert_eq!(map_key(key(KeyCode::Delete), &mode), Action::InputDelete);
    }

    // ── Confirm / Help ──

    #[test]
    fn confirm_y_n() {
        use crate::board::store::{BoardStore, Intent};
        let mut store = BoardStore::new(crate::board::Board::new("t"));
        store.dispatch(Intent::AddList { title: "A".into() }).unwrap();
        let mode = Mode::Confirm {
            prompt: "Delete list?",
            target: crate::app::ConfirmTarget::DeleteList(store.board().lists[0].id),
        };
        assert_eq!(map_key(key(KeyCode::Char('y')), &mode), Action::Confirm);
        assert_eq!(map_key(key(KeyCode::Enter), &mode), Action::Confirm);
        assert_eq!(map_key(key(KeyCode::Char('n')), &mode), Action::Deny);
        assert_eq!(map_key(key(KeyCode::Esc), &mode), Action::Deny);
    }

    #[test]
    fn help_closes_on_esc_or_q() {
        assert_eq!(map_key(key(KeyCode::Esc), &Mode::Help), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Char('q')), &Mode::Help), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Char('j')), &Mode::Help), Action::None);
    }

    #[test]
    fn help_groups_cover_every_registry() {
        let names: Vec<_> = HELP_GROUPS.iter().map(|g| g.name).collect();
        assert_eq!(names, ["Navigation", "Lists", "Cards", "Editing"]);
        assert!(HELP_GROUPS.iter().all(|g| !g.bindings.is_empty()));
    }
}
