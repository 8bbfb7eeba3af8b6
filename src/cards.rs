//! Poker cards with a custom total order.
//!
//! Ranks from lowest to highest: `4 5 6 7 8 9 10 J Q K A 2 3 Joker`.
//! Equal ranks are ordered by suit, from lowest to highest: `♣ ♠ ♦ ♥`.

use crate::{PracticeError, PracticeResult};
use core::{cmp::Ordering, fmt};
use tracing_attributes::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Joker,
}

impl Rank {
    pub const ALL: [Rank; 14] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Joker,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Joker => "Joker",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
    /// Only valid for [Rank::Joker]
    None,
}

impl Suit {
    pub const ALL: [Suit; 5] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades, Suit::None];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
            Suit::None => "",
        };
        f.write_str(symbol)
    }
}

/// A card. Equality is structural; ordering follows [PokerOrder].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Fails with [PracticeError::InvalidArgument] if `suit` is [Suit::None]
    /// and `rank` is not [Rank::Joker].
    #[instrument(level = "trace", err(level = "trace"))]
    pub fn new(suit: Suit, rank: Rank) -> PracticeResult<Self> {
        if suit == Suit::None && rank != Rank::Joker {
            return Err(PracticeError::InvalidArgument { rank, suit });
        }
        Ok(Card { suit, rank })
    }

    pub fn joker() -> Self {
        Card {
            suit: Suit::None,
            rank: Rank::Joker,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        PokerOrder.compare(self, other)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Comparator ordering cards by rank first and by suit on equal ranks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PokerOrder;

impl PokerOrder {
    /// Position of `rank`, lowest first
    pub fn rank_key(rank: Rank) -> u8 {
        match rank {
            Rank::Four => 0,
            Rank::Five => 1,
            Rank::Six => 2,
            Rank::Seven => 3,
            Rank::Eight => 4,
            Rank::Nine => 5,
            Rank::Ten => 6,
            Rank::Jack => 7,
            Rank::Queen => 8,
            Rank::King => 9,
            Rank::Ace => 10,
            Rank::Two => 11,
            Rank::Three => 12,
            Rank::Joker => 13,
        }
    }

    /// Position of `suit`, lowest first. Jokers may carry any suit, the suitless
    /// [Card::joker] sorts below all of them.
    pub fn suit_key(suit: Suit) -> u8 {
        match suit {
            Suit::None => 0,
            Suit::Clubs => 1,
            Suit::Spades => 2,
            Suit::Diamonds => 3,
            Suit::Hearts => 4,
        }
    }

    pub fn compare(&self, x: &Card, y: &Card) -> Ordering {
        Self::rank_key(x.rank)
            .cmp(&Self::rank_key(y.rank))
            .then_with(|| Self::suit_key(x.suit).cmp(&Self::suit_key(y.suit)))
    }

    /// Stable in-place sort, lowest card first
    pub fn sort(&self, cards: &mut [Card]) {
        cards.sort_by(|x, y| self.compare(x, y));
    }
}
