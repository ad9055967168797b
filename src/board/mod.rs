pub mod store;

use std::fmt;

/// Stable identifier of a list. Survives deletes of other lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(u64);

/// Stable identifier of a card. Survives deletes of other cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u64);

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// The root of all session state: an ordered sequence of lists.
#[derive(Debug, Clone)]
pub struct Board {
    pub title: String,
    pub lists: Vec<List>,
    next_id: u64,
}

/// A named, ordered collection of cards (a kanban column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub id: ListId,
    pub title: String,
    pub cards: Vec<Card>,
}

/// A single text item belonging to exactly one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub text: String,
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lists: Vec::new(),
            next_id: 1,
        }
    }

    /// Issue the next id. Lists and cards share one counter, so ids are never
    /// reused within a session.
    fn next_id(&mut self) -> u64 {
        let n = self.next_id;
        self.next_id += 1;
        n
    }

    /// Append a list and return its id. No validation happens here.
    pub(crate) fn push_list(&mut self, title: String) -> ListId {
        let id = ListId(self.next_id());
        self.lists.push(List {
            id,
            title,
            cards: Vec::new(),
        });
        id
    }

    /// Append a card to `list`. Returns `None` if the list doesn't exist.
    pub(crate) fn push_card(&mut self, list: ListId, text: String) -> Option<CardId> {
        let idx = self.list_position(list)?;
        let id = CardId(self.next_id());
        self.lists[idx].cards.push(Card { id, text });
        Some(id)
    }

    pub fn list_mut(&mut self, id: ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| l.id == id)
    }

    /// The list rendered at `index`, if any.
    pub fn list_at(&self, index: usize) -> Option<&List> {
        self.lists.get(index)
    }

    /// Current position of a list in board order.
    pub fn list_position(&self, id: ListId) -> Option<usize> {
        self.lists.iter().position(|l| l.id == id)
    }

    /// Find which list holds a card and the card's position within it.
    pub fn find_card(&self, id: CardId) -> Option<(usize, usize)> {
        for (list_idx, list) in self.lists.iter().enumerate() {
            if let Some(card_idx) = list.cards.iter().position(|c| c.id == id) {
                return Some((list_idx, card_idx));
            }
        }
        None
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let (l, c) = self.find_card(id)?;
        Some(&mut self.lists[l].cards[c])
    }

    pub fn contains_list(&self, id: ListId) -> bool {
        self.list_position(id).is_some()
    }

    pub fn contains_card(&self, id: CardId) -> bool {
        self.find_card(id).is_some()
    }

    /// Total number of cards across every list.
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }
}

impl List {
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }
}
