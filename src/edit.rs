//! Edit-mode controller: which list title or card is being edited, and the
//! staged text for it.
//!
//! The staged text lives here until Save. The store only sees the result as an
//! [`Intent`], so Cancel never has anything to undo.

use crate::board::store::Intent;
use crate::board::{Board, CardId, ListId};

/// Text editing buffer with a cursor.
///
/// `cursor` is a **char index** (not byte index), always in `0..=char_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    pub input: String,
    pub cursor: usize,
}

impl TextBuffer {
    /// A buffer holding `input` with the cursor at the end.
    pub fn new(input: impl Into<String>) -> Self {
        let input = input.into();
        let cursor = input.chars().count();
        Self { input, cursor }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_offset(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_idx = self.byte_offset(self.cursor - 1);
            self.input.remove(byte_idx);
            self.cursor -= 1;
        }
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.input.chars().count() {
            let byte_idx = self.byte_offset(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    /// Delete back to the start of the previous word (Ctrl-w).
    pub fn delete_word(&mut self) {
        let byte_pos = self.byte_offset(self.cursor);
        let trimmed = self.input[..byte_pos].trim_end();
        let start_byte = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        self.cursor = self.input[..start_byte].chars().count();
        self.input.drain(start_byte..byte_pos);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.input.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.input.chars().count();
    }

    /// Split the text around the cursor, for rendering a caret.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.input.split_at(self.byte_offset(self.cursor))
    }
}

/// The single edit cursor for the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditCursor {
    #[default]
    Viewing,
    ListTitle { list: ListId, buf: TextBuffer },
    CardText { card: CardId, buf: TextBuffer },
}

impl EditCursor {
    /// Start renaming `list`. Any edit already open is dropped without saving.
    pub fn begin_list_edit(&mut self, list: ListId, current_title: &str) {
        *self = Self::ListTitle {
            list,
            buf: TextBuffer::new(current_title),
        };
    }

    /// Start editing `card`. Any edit already open is dropped without saving.
    pub fn begin_card_edit(&mut self, card: CardId, current_text: &str) {
        *self = Self::CardText {
            card,
            buf: TextBuffer::new(current_text),
        };
    }

    /// Leave edit mode, producing the intent that commits the staged text.
    pub fn save(&mut self) -> Option<Intent> {
        match std::mem::take(self) {
            Self::Viewing => None,
            Self::ListTitle { list, buf } => Some(Intent::RenameList {
                list,
                title: buf.input,
            }),
            Self::CardText { card, buf } => Some(Intent::EditCardText {
                card,
                text: buf.input,
            }),
        }
    }

    /// Leave edit mode and throw the staged text away.
    pub fn cancel(&mut self) {
        *self = Self::Viewing;
    }

    /// Drop back to viewing if the edited list or card is gone.
    /// Returns true if the cursor was reset.
    pub fn reconcile(&mut self, board: &Board) -> bool {
        let stale = match self {
            Self::Viewing => false,
            Self::ListTitle { list, .. } => !board.contains_list(*list),
            Self::CardText { card, .. } => !board.contains_card(*card),
        };
        if stale {
            *self = Self::Viewing;
        }
        stale
    }

    pub fn is_editing(&self) -> bool {
        !matches!(self, Self::Viewing)
    }

    pub fn is_editing_list(&self, id: ListId) -> bool {
        matches!(self, Self::ListTitle { list, .. } if *list == id)
    }

    pub fn is_editing_card(&self, id: CardId) -> bool {
        matches!(self, Self::CardText { card, .. } if *card == id)
    }

    pub fn buffer(&self) -> Option<&TextBuffer> {
        match self {
            Self::Viewing => None,
            Self::ListTitle { buf, .. } | Self::CardText { buf, .. } => Some(buf),
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut TextBuffer> {
        match self {
            Self::Viewing => None,
            Self::ListTitle { buf, .. } | Self::CardText { buf, .. } => Some(buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::store::BoardStore;

    fn board_with(lists: &[(&str, &[&str])]) -> BoardStore {
        let mut store = BoardStore::new(Board::new("Test"));
        for (title, cards) in lists {
            store.dispatch(Intent::AddList { title: title.to_string() }).unwrap();
            let id = store.board().lists.last().unwrap().id;
            for text in *cards {
                store.dispatch(Intent::AddCard { list: id, text: text.to_string() }).unwrap();
            }
        }
        store
    }

    // ── TextBuffer ──

    #[test]
    fn buffer_new_puts_cursor_at_end() {
        let buf = TextBuffer::new("héllo");
        assert_eq!(buf.cursor, 5);
    }

    #[test]
    fn buffer_insert_and_backspace_multibyte() {
        let mut buf = TextBuffer::new("añb");
        buf.move_left();
        buf.backspace();
        assert_eq!(buf.input, "ab");
        buf.insert('ü');
        assert_eq!(buf.input, "aüb");
        assert_eq!(buf.cursor, 2);
    }

    #[test]
    fn buffer_delete_under_cursor() {
        let mut buf = TextBuffer::new("abc");
        buf.home();
        buf.delete();
        assert_eq!(buf.input, "bc");
        buf.end();
        buf.delete();
        assert_eq!(buf.input, "bc");
    }

    #[test]
    fn buffer_delete_word() {
        let mut buf = TextBuffer::new("fix the bug  ");
        buf.delete_word();
        assert_eq!(buf.input, "fix the ");
        assert_eq!(buf.cursor, 8);
        buf.delete_word();
        assert_eq!(buf.input, "fix ");
    }

    #[test]
    fn buffer_cursor_bounds() {
        let mut buf = TextBuffer::new("ab");
        buf.move_right();
        assert_eq!(buf.cursor, 2);
        buf.home();
        buf.move_left();
        assert_eq!(buf.cursor, 0);
    }

    #[test]
    fn buffer_split_at_cursor() {
        let mut buf = TextBuffer::new("añb");
        buf.move_left();
        assert_eq!(buf.split_at_cursor(), ("añ", "b"));
    }

    // ── EditCursor ──

    #[test]
    fn save_list_edit_yields_rename_with_staged_text() {
        let store = board_with(&[("A", &[])]);
        let id = store.board().lists[0].id;
        let mut cursor = EditCursor::Viewing;
        cursor.begin_list_edit(id, "A");
        cursor.buffer_mut().unwrap().insert('!');
        assert_eq!(
            cursor.save(),
            Some(Intent::RenameList { list: id, title: "A!".into() })
        );
        assert_eq!(cursor, EditCursor::Viewing);
    }

    #[test]
    fn save_while_viewing_is_none() {
        let mut cursor = EditCursor::Viewing;
        assert_eq!(cursor.save(), None);
    }

    #[test]
    fn cancel_leaves_store_untouched() {
        let store = board_with(&[("A", &["Fix bug"])]);
        let rev = store.revision();
        let card = store.board().lists[0].cards[0].id;
        let mut cursor = EditCursor::Viewing;
        cursor.begin_card_edit(card, "Fix bug");
        let buf = cursor.buffer_mut().unwrap();
        buf.delete_word();
        for c in "changed".chars() {
            buf.insert(c);
        }
        cursor.cancel();
        assert!(!cursor.is_editing());
        assert_eq!(cursor.save(), None);
        assert_eq!(store.board().lists[0].cards[0].text, "Fix bug");
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn begin_on_another_target_switches_silently() {
        let store = board_with(&[("A", &["a"]), ("B", &["b"])]);
        let (a, b) = (store.board().lists[0].id, store.board().lists[1].id);
        let mut cursor = EditCursor::Viewing;
        cursor.begin_list_edit(a, "A");
        cursor.buffer_mut().unwrap().insert('x');
        cursor.begin_list_edit(b, "B");
        assert!(cursor.is_editing_list(b));
        assert!(!cursor.is_editing_list(a));
        assert_eq!(cursor.buffer().unwrap().input, "B");

        let card = store.board().lists[0].cards[0].id;
        cursor.begin_card_edit(card, "a");
        assert!(cursor.is_editing_card(card));
        assert!(!cursor.is_editing_list(b));
    }

    #[test]
    fn cursor_follows_shifted_list_after_delete() {
        let mut store = board_with(&[("A", &[]), ("B", &[]), ("C", &[])]);
        let b = store.board().lists[1].id;
        let c = store.board().lists[2].id;
        let mut cursor = EditCursor::Viewing;
        cursor.begin_list_edit(c, "C");

        store.dispatch(Intent::DeleteList { list: b }).unwrap();
        assert!(!cursor.reconcile(store.board()));
        assert!(cursor.is_editing_list(c));
        assert_eq!(store.board().list_position(c), Some(1));
        assert_eq!(store.board().list_at(1).unwrap().title, "C");
    }

    #[test]
    fn card_cursor_follows_shifted_card_after_delete() {
        let mut store = board_with(&[("A", &["a0", "a1"])]);
        let a0 = store.board().lists[0].cards[0].id;
        let a1 = store.board().lists[0].cards[1].id;
        let mut cursor = EditCursor::Viewing;
        cursor.begin_card_edit(a1, "a1");
        cursor.buffer_mut().unwrap().insert('!');

        store.dispatch(Intent::DeleteCard { card: a0 }).unwrap();
        assert!(!cursor.reconcile(store.board()));
        assert!(cursor.is_editing_card(a1));

        store.dispatch(cursor.save().unwrap()).unwrap();
        let cards = &store.board().lists[0].cards;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, a1);
        assert_eq!(cards[0].text, "a1!");
    }

    #[test]
    fn cursor_resets_when_its_list_is_deleted() {
        let mut store = board_with(&[("A", &[]), ("B", &[]), ("C", &[])]);
        let b = store.board().lists[1].id;
        let mut cursor = EditCursor::Viewing;
        cursor.begin_list_edit(b, "B");
        store.dispatch(Intent::DeleteList { list: b }).unwrap();
        assert!(cursor.reconcile(store.board()));
        assert_eq!(cursor, EditCursor::Viewing);
    }

    #[test]
    fn card_cursor_resets_when_its_list_is_deleted() {
        let mut store = board_with(&[("A", &["a0", "a1"])]);
        let list = store.board().lists[0].id;
        let card = store.board().lists[0].cards[1].id;
        let mut cursor = EditCursor::Viewing;
        cursor.begin_card_edit(card, "a1");
        store.dispatch(Intent::DeleteList { list }).unwrap();
        assert!(cursor.reconcile(store.board()));
    }

    #[test]
    fn saved_edit_applies_through_store() {
        let mut store = board_with(&[("A", &["Fix bug"])]);
        let card = store.board().lists[0].cards[0].id;
        let mut cursor = EditCursor::Viewing;
        cursor.begin_card_edit(card, "Fix bug");
        for c in " #42".chars() {
            cursor.buffer_mut().unwrap().insert(c);
        }
        // Staged only: the store still holds the committed text.
        assert_eq!(store.board().lists[0].cards[0].text, "Fix bug");
        let intent = cursor.save().unwrap();
        store.dispatch(intent).unwrap();
        assert_eq!(store.board().lists[0].cards[0].text, "Fix bug #42");
    }
}
