use std::fmt;
use std::sync::Arc;

use image::DynamicImage;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::warn;

use super::images::ImageStore;

/// Error returned when a raw index cannot be converted into a card enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CardCodeError {
    #[error("rank index out of range (expected 0-13): {0}")]
    Rank(u8),
    #[error("suit index out of range (expected 0-3): {0}")]
    Suit(u8),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Rank {
    /// Placeholder card, unusable in standard play.
    Joker = 0,
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    /// Human-readable rank name.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Joker => "Joker",
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    /// Raw rank index (0 = Joker, 1 = Ace, ..., 13 = King).
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardCodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::iter()
            .find(|rank| rank.value() == value)
            .ok_or(CardCodeError::Rank(value))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// Human-readable suit name.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    /// Raw suit index (0 = Clubs, 1 = Diamonds, 2 = Hearts, 3 = Spades).
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardCodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Suit::iter()
            .find(|suit| suit.value() == value)
            .ok_or(CardCodeError::Suit(value))
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

/// A single playing card: immutable rank/suit identity plus the
/// best-effort face and back images loaded for it.
///
/// Equality and ordering look at identity only; whether the image
/// assets were found on disk does not affect either.
#[derive(Debug, Clone)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face: Option<Arc<DynamicImage>>,
    back: Option<Arc<DynamicImage>>,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    // Suit-major, rank-minor: a lower suit index sorts lower regardless
    // of rank. Rank only breaks ties within the same suit.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ordering => ordering,
        }
    }
}

impl Card {
    /// Identity-only construction. Both image slots start empty; use
    /// [`Card::load`] to populate them from an [`ImageStore`].
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face: None,
            back: None,
        }
    }

    /// Constructs a card and loads its face and back images from the
    /// given store.
    ///
    /// Loading is best-effort: a missing or unreadable asset is logged
    /// and leaves the corresponding slot empty. Construction itself
    /// never fails, and the card stays fully usable for identity and
    /// comparison either way.
    ///
    /// Jokers have no face asset of their own; both of their slots
    /// resolve to the shared backside image.
    pub fn load(rank: Rank, suit: Suit, store: &ImageStore) -> Self {
        let face = if rank == Rank::Joker {
            store.back()
        } else {
            match store.load_face(rank, suit) {
                Ok(image) => Some(image),
                Err(err) => {
                    warn!(path = %err.path.display(), "Failed to load card face image");
                    None
                }
            }
        };
        let back = store.back();

        Self {
            rank,
            suit,
            face,
            back,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Raw rank index, matching the `<rank>.<suit>.png` naming scheme.
    pub fn rank_value(&self) -> u8 {
        self.rank.value()
    }

    /// Raw suit index, matching the `<rank>.<suit>.png` naming scheme.
    pub fn suit_value(&self) -> u8 {
        self.suit.value()
    }

    pub fn rank_name(&self) -> &'static str {
        self.rank.name()
    }

    pub fn suit_name(&self) -> &'static str {
        self.suit.name()
    }

    /// User-readable card name: `"<Rank> of <Suit>"`, or just `"Joker"`
    /// for a Joker (its suit carries no meaning).
    pub fn name(&self) -> String {
        if self.is_joker() {
            self.rank.name().to_string()
        } else {
            format!("{} of {}", self.rank, self.suit)
        }
    }

    pub fn is_joker(&self) -> bool {
        self.rank == Rank::Joker
    }

    /// Compares two cards, suit-major then rank-minor.
    ///
    /// Equivalent to the `Ord` impl; kept as a named method because the
    /// tri-state result (`Less`/`Equal`/`Greater`) is the contract the
    /// surrounding game logic sorts and ranks cards by.
    pub fn compared_to(&self, that: &Card) -> std::cmp::Ordering {
        self.cmp(that)
    }

    /// Face and back images, in that order, always exactly two entries.
    /// A missing asset shows up as `None`.
    pub fn images(&self) -> [Option<Arc<DynamicImage>>; 2] {
        [self.face.clone(), self.back.clone()]
    }

    /// All 52 playable cards (no Jokers), in ascending suit-major order.
    pub fn all() -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                if rank != Rank::Joker {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
