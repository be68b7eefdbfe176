//! The ordered card collection of one cardpack.
//!
//! Order is significant: it is preserved through save and load and it
//! numbers the texture cache files.

use super::card::Card;
use super::import::parse_import_text;

/// An ordered sequence of cards. Titles need not be unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cardpack {
    cards: Vec<Card>,
}

impl Cardpack {
    /// Create an empty pack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// The first card, whose style draws missing back textures.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Card> {
        self.cards.iter_mut()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Append a card and return its index.
    pub fn push(&mut self, card: Card) -> usize {
        self.cards.push(card);
        self.cards.len() - 1
    }

    /// Append a placeholder card and return its index.
    pub fn add_card(&mut self) -> usize {
        self.push(Card::new())
    }

    /// Remove the cards at `indices`.
    ///
    /// Indices refer to positions before any removal. Duplicates and
    /// out-of-range indices are ignored. Returns how many cards were removed.
    pub fn delete_cards(&mut self, indices: &[usize]) -> usize {
        let mut sorted: Vec<usize> = indices.iter().copied().filter(|&i| i < self.cards.len()).collect();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();
        for &i in &sorted {
            self.cards.remove(i);
        }
        sorted.len()
    }

    /// Bulk-create cards from pasted text, one title per line with an
    /// optional `(N)` copy count. Returns the indices of the new cards.
    pub fn import_from_text(&mut self, text: &str) -> std::ops::Range<usize> {
        let start = self.cards.len();
        for line in parse_import_text(text) {
            for _ in 0..line.copies {
                self.cards.push(Card::titled(line.title.clone()));
            }
        }
        tracing::debug!(created = self.cards.len() - start, "imported cards from text");
        start..self.cards.len()
    }
}

impl From<Vec<Card>> for Cardpack {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Cardpack {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Cardpack {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a mut Cardpack {
    type Item = &'a mut Card;
    type IntoIter = std::slice::IterMut<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter_mut()
    }
}
