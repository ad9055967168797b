use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;

use crate::board::store::{BoardStore, Intent, Rejected};
use crate::board::{Board, Card, CardId, List, ListId};
use crate::edit::{EditCursor, TextBuffer};
use crate::input::action::Action;
use crate::input::keymap::map_key;

/// Current interaction mode.
#[derive(Debug, Clone)]
pub enum Mode {
    Normal,
    /// Drafting a new list or card in the status bar.
    Input {
        prompt: &'static str,
        buf: TextBuffer,
        target: InputTarget,
    },
    /// Inline edit of a list title or card; the staged text is in
    /// [`AppState::edit`].
    Edit,
    Confirm {
        prompt: &'static str,
        target: ConfirmTarget,
    },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputTarget {
    NewList,
    NewCard(ListId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmTarget {
    DeleteList(ListId),
    DeleteCard(CardId),
}

/// Transient UI state. The board itself lives in the [`BoardStore`].
pub struct AppState {
    pub mode: Mode,
    pub focused_list: usize,
    pub selected_card: usize,
    pub edit: EditCursor,
    pub confirm_delete: bool,
    pub notification: Option<String>,
    pub notification_expires: Option<Instant>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(confirm_delete: bool) -> Self {
        Self {
            mode: Mode::Normal,
            focused_list: 0,
            selected_card: 0,
            edit: EditCursor::Viewing,
            confirm_delete,
            notification: None,
            notification_expires: None,
            should_quit: false,
        }
    }

    pub fn focused_list_ref<'a>(&self, board: &'a Board) -> Option<&'a List> {
        board.list_at(self.focused_list)
    }

    pub fn selected_card_ref<'a>(&self, board: &'a Board) -> Option<&'a Card> {
        self.focused_list_ref(board)
            .and_then(|list| list.card_at(self.selected_card))
    }

    /// Show a transient notification.
    pub fn notify(&mut self, msg: impl Into<String>) {
        self.notification = Some(msg.into());
        self.notification_expires = Some(Instant::now() + Duration::from_secs(3));
    }

    /// Clear expired notifications.
    pub fn tick_notification(&mut self) {
        if let Some(expires) = self.notification_expires {
            if Instant::now() >= expires {
                self.notification = None;
                self.notification_expires = None;
            }
        }
    }

    /// Keep the focused list and selected card inside the board.
    pub fn clamp_selection(&mut self, board: &Board) {
        if board.lists.is_empty() {
            self.focused_list = 0;
            self.selected_card = 0;
            return;
        }
        self.focused_list = self.focused_list.min(board.lists.len() - 1);
        let cards = board.lists[self.focused_list].cards.len();
        self.selected_card = self.selected_card.min(cards.saturating_sub(1));
    }
}

/// Main TUI loop.
pub fn run(terminal: &mut DefaultTerminal, store: &mut BoardStore, state: &mut AppState) -> color_eyre::Result<()> {
    info!(
        lists = store.board().lists.len(),
        cards = store.board().card_count(),
        "board opened"
    );
    state.clamp_selection(store.board());

    loop {
        state.tick_notification();

        terminal.draw(|f| crate::ui::render(f, store.board(), state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = map_key(key, &state.mode);
                process_action(store, state, action);

                if state.should_quit {
                    break;
                }
            }
        }
    }

    info!(revision = store.revision(), "board closed");
    Ok(())
}

pub fn process_action(store: &mut BoardStore, state: &mut AppState, action: Action) {
    match action {
        Action::None => {}

        Action::FocusPrevList
        | Action::FocusNextList
        | Action::SelectPrevCard
        | Action::SelectNextCard
        | Action::JumpToFirstCard
        | Action::JumpToLastCard => handle_navigation(store.board(), state, action),

        Action::NewList | Action::RenameList | Action::DeleteList => {
            handle_list_action(store, state, action);
        }

        Action::NewCard | Action::EditCard | Action::DeleteCard => {
            handle_card_action(store, state, action);
        }

        Action::InputChar(_)
        | Action::InputBackspace
        | Action::InputDelete
        | Action::InputLeft
        | Action::InputRight
        | Action::InputHome
        | Action::InputEnd
        | Action::InputDeleteWord
        | Action::InputConfirm
        | Action::InputCancel => handle_input(store, state, action),

        Action::Confirm | Action::Deny => handle_confirm(store, state, action),

        Action::ShowHelp => state.mode = Mode::Help,
        Action::Quit => match state.mode {
            Mode::Normal => state.should_quit = true,
            _ => state.mode = Mode::Normal,
        },
    }
}

/// Send an intent to the store and bring the UI state back in line with the
/// board. Rejections are silent.
fn dispatch(store: &mut BoardStore, state: &mut AppState, intent: Intent) -> Result<(), Rejected> {
    let label = intent.label();
    store.dispatch(intent)?;
    if state.edit.reconcile(store.board()) && matches!(state.mode, Mode::Edit) {
        state.mode = Mode::Normal;
    }
    state.clamp_selection(store.board());
    state.notify(label);
    Ok(())
}

// ---------------------------------------------------------------------------
// Handler: Navigation
// ---------------------------------------------------------------------------

fn handle_navigation(board: &Board, state: &mut AppState, action: Action) {
    match action {
        Action::FocusPrevList => {
            if state.focused_list > 0 {
                state.focused_list -= 1;
                state.clamp_selection(board);
            }
        }
        Action::FocusNextList => {
            if state.focused_list + 1 < board.lists.len() {
                state.focused_list += 1;
                state.clamp_selection(board);
            }
        }
        Action::SelectPrevCard => {
            state.selected_card = state.selected_card.saturating_sub(1);
        }
        Action::SelectNextCard => {
            if let Some(list) = state.focused_list_ref(board) {
                if state.selected_card + 1 < list.cards.len() {
                    state.selected_card += 1;
                }
            }
        }
        Action::JumpToFirstCard => state.selected_card = 0,
        Action::JumpToLastCard => {
            if let Some(list) = state.focused_list_ref(board) {
                state.selected_card = list.cards.len().saturating_sub(1);
            }
        }
        _ => unreachable!(),
    }
}

// ---------------------------------------------------------------------------
// Handler: List actions
// ---------------------------------------------------------------------------

fn handle_list_action(store: &mut BoardStore, state: &mut AppState, action: Action) {
    match action {
        Action::NewList => {
            state.mode = Mode::Input {
                prompt: "New list",
                buf: TextBuffer::empty(),
                target: InputTarget::NewList,
            };
        }
        Action::RenameList => {
            if let Some(list) = state.focused_list_ref(store.board()) {
                state.edit.begin_list_edit(list.id, &list.title);
                state.mode = Mode::Edit;
            }
        }
        Action::DeleteList => {
            let Some(id) = state.focused_list_ref(store.board()).map(|l| l.id) else {
                return;
            };
            if state.confirm_delete {
                state.mode = Mode::Confirm {
                    prompt: "Delete list and all its cards?",
                    target: ConfirmTarget::DeleteList(id),
                };
            } else {
                let _ = dispatch(store, state, Intent::DeleteList { list: id });
            }
        }
        _ => unreachable!(),
    }
}

// ---------------------------------------------------------------------------
// Handler: Card actions
// ---------------------------------------------------------------------------

fn handle_card_action(store: &mut BoardStore, state: &mut AppState, action: Action) {
    match action {
        Action::NewCard => {
            if let Some(list) = state.focused_list_ref(store.board()) {
                state.mode = Mode::Input {
                    prompt: "New card",
                    buf: TextBuffer::empty(),
                    target: InputTarget::NewCard(list.id),
                };
            }
        }
        Action::EditCard => {
            if let Some(card) = state.selected_card_ref(store.board()) {
                state.edit.begin_card_edit(card.id, &card.text);
                state.mode = Mode::Edit;
            }
        }
        Action::DeleteCard => {
            let Some(id) = state.selected_card_ref(store.board()).map(|c| c.id) else {
                return;
            };
            if state.confirm_delete {
                state.mode = Mode::Confirm {
                    prompt: "Delete card?",
                    target: ConfirmTarget::DeleteCard(id),
                };
            } else {
                let _ = dispatch(store, state, Intent::DeleteCard { card: id });
            }
        }
        _ => unreachable!(),
    }
}

// ---------------------------------------------------------------------------
// Handler: Text input (drafts and inline edits)
// ---------------------------------------------------------------------------

fn active_buffer(state: &mut AppState) -> Option<&mut TextBuffer> {
    match &mut state.mode {
        Mode::Input { buf, .. } => Some(buf),
        Mode::Edit => state.edit.buffer_mut(),
        _ => None,
    }
}

fn handle_input(store: &mut BoardStore, state: &mut AppState, action: Action) {
    match action {
        Action::InputConfirm => {
            if matches!(state.mode, Mode::Input { .. }) {
                confirm_draft(store, state);
            } else if matches!(state.mode, Mode::Edit) {
                state.mode = Mode::Normal;
                if let Some(intent) = state.edit.save() {
                    let _ = dispatch(store, state, intent);
                }
            }
        }
        Action::InputCancel => {
            if state.edit.is_editing() {
                state.edit.cancel();
            }
            state.mode = Mode::Normal;
        }
        _ => {
            let Some(buf) = active_buffer(state) else {
                return;
            };
            match action {
                Action::InputChar(c) => buf.insert(c),
                Action::InputBackspace => buf.backspace(),
                Action::InputDelete => buf.delete(),
                Action::InputLeft => buf.move_left(),
                Action::InputRight => buf.move_right(),
                Action::InputHome => buf.home(),
                Action::InputEnd => buf.end(),
                Action::InputDeleteWord => buf.delete_word(),
                _ => unreachable!(),
            }
        }
    }
}

/// Create the drafted list or card. A blank draft keeps the prompt open with
/// its text intact.
fn confirm_draft(store: &mut BoardStore, state: &mut AppState) {
    let Mode::Input { prompt, buf, target } = std::mem::replace(&mut state.mode, Mode::Normal) else {
        return;
    };

    let intent = match &target {
        InputTarget::NewList => Intent::AddList { title: buf.input.clone() },
        InputTarget::NewCard(list) => Intent::AddCard { list: *list, text: buf.input.clone() },
    };

    match dispatch(store, state, intent) {
        Ok(()) => match target {
            InputTarget::NewList => {
                state.focused_list = store.board().lists.len().saturating_sub(1);
                state.selected_card = 0;
            }
            InputTarget::NewCard(list) => {
                if let Some(pos) = store.board().list_position(list) {
                    state.focused_list = pos;
                    state.selected_card = store.board().lists[pos].cards.len().saturating_sub(1);
                }
            }
        },
        Err(Rejected::BlankText) => {
            state.mode = Mode::Input { prompt, buf, target };
        }
        // The target list vanished; nothing left to add to.
        Err(_) => {}
    }
}

// ---------------------------------------------------------------------------
// Handler: Confirmation
// ---------------------------------------------------------------------------

fn handle_confirm(store: &mut BoardStore, state: &mut AppState, action: Action) {
    let old_mode = std::mem::replace(&mut state.mode, Mode::Normal);
    if action != Action::Confirm {
        return;
    }
    if let Mode::Confirm { target, .. } = old_mode {
        let intent = match target {
            ConfirmTarget::DeleteList(list) => Intent::DeleteList { list },
            ConfirmTarget::DeleteCard(card) => Intent::DeleteCard { card },
        };
        let _ = dispatch(store, state, intent);
    }
}
