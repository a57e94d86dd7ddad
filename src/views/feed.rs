use ratatui::widgets::ListState;

use crate::views::cards::PostCard;

/// The container cards are appended to. Cards display top to bottom in
/// insertion order.
pub struct Feed {
    pub state: ListState,
    pub cards: Vec<PostCard>,
}

impl Feed {
    pub fn new() -> Feed {
        Feed {
            state: ListState::default(),
            cards: Vec::new(),
        }
    }

    pub fn with_cards(cards: Vec<PostCard>) -> Feed {
        let mut state = ListState::default();
        // Start with the first card selected
        if !cards.is_empty() {
            state.select(Some(0));
        }
        Feed { state, cards }
    }

    /// Appends one card at the bottom. Nothing de-duplicates here:
    /// appending the same card twice shows it twice.
    pub fn append(&mut self, card: PostCard) {
        self.cards.push(card);
        if self.state.selected().is_none() {
            self.state.select(Some(0));
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i >= self.cards.len() - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i > 0 => i - 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn first(&mut self) {
        if !self.cards.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn last(&mut self) {
        if !self.cards.is_empty() {
            self.state.select(Some(self.cards.len() - 1));
        }
    }
}

impl Default for Feed {
    fn default() -> Feed {
        Feed::new()
    }
}
