//! The board state store.
//!
//! Every mutation of the board goes through [`BoardStore::dispatch`]. Views only
//! ever see `&Board`, so the mutation surface is this one function.

use tracing::debug;

use super::{Board, CardId, ListId};

/// A request to change the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddList { title: String },
    AddCard { list: ListId, text: String },
    DeleteList { list: ListId },
    DeleteCard { card: CardId },
    RenameList { list: ListId, title: String },
    EditCardText { card: CardId, text: String },
}

impl Intent {
    /// Short label for logs and notifications.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddList { .. } => "List added",
            Self::AddCard { .. } => "Card added",
            Self::DeleteList { .. } => "List deleted",
            Self::DeleteCard { .. } => "Card deleted",
            Self::RenameList { .. } => "List renamed",
            Self::EditCardText { .. } => "Card updated",
        }
    }
}

/// Why an intent left the board unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    #[error("text is empty or whitespace")]
    BlankText,
    #[error("no list with id {0}")]
    UnknownList(ListId),
    #[error("no card with id {0}")]
    UnknownCard(CardId),
}

/// Sole owner of the board.
#[derive(Debug, Clone)]
pub struct BoardStore {
    board: Board,
    revision: u64,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self { board, revision: 0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of intents applied so far. Rejected intents don't count.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an intent. On rejection the board is untouched.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), Rejected> {
        let label = intent.label();
        let result = apply(&mut self.board, intent);
        match &result {
            Ok(()) => {
                self.revision += 1;
                debug!(revision = self.revision, "{label}");
            }
            Err(reason) => debug!(%reason, "intent ignored"),
        }
        result
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn apply(board: &mut Board, intent: Intent) -> Result<(), Rejected> {
    match intent {
        Intent::AddList { title } => {
            if is_blank(&title) {
                return Err(Rejected::BlankText);
            }
            board.push_list(title);
        }
        Intent::AddCard { list, text } => {
            if is_blank(&text) {
                return Err(Rejected::BlankText);
            }
            board.push_card(list, text).ok_or(Rejected::UnknownList(list))?;
        }
        Intent::DeleteList { list } => {
            let idx = board.list_position(list).ok_or(Rejected::UnknownList(list))?;
            board.lists.remove(idx);
        }
        Intent::DeleteCard { card } => {
            let (l, c) = board.find_card(card).ok_or(Rejected::UnknownCard(card))?;
            board.lists[l].cards.remove(c);
        }
        // Renames and edits are not validated: clearing a title is allowed.
        Intent::RenameList { list, title } => {
            board.list_mut(list).ok_or(Rejected::UnknownList(list))?.title = title;
        }
        Intent::EditCardText { card, text } => {
            board.card_mut(card).ok_or(Rejected::UnknownCard(card))?.text = text;
        }
    }
    Ok(())
}
