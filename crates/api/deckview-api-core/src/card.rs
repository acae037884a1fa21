#![allow(dead_code)]
//! Card identity: rank and suit with display/parse.
//!
//! `CardFace` renders as e.g. `A♠` or `10♥` and parses the same strings
//! (letter suits `S H D C` are accepted on input for plain-ASCII callers).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
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
}

pub const RANKS: [Rank; 13] = [
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
];

impl Rank {
    pub fn label(self) -> &'static str {
        match self {
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
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANKS
            .iter()
            .copied()
            .find(|r| r.label() == s)
            .ok_or_else(|| ParseCardError::UnknownRank(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    pub fn from_char(c: char) -> Result<Self, ParseCardError> {
        match c {
            '♠' | 'S' | 's' => Ok(Suit::Spades),
            '♥' | 'H' | 'h' => Ok(Suit::Hearts),
            '♦' | 'D' | 'd' => Ok(Suit::Diamonds),
            '♣' | 'C' | 'c' => Ok(Suit::Clubs),
            other => Err(ParseCardError::UnknownSuit(other)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Identity of one card in the 52-card set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    pub rank: Rank,
    pub suit: Suit,
}

impl CardFace {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for CardFace {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let last = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_part = chars.as_str();
        let suit = Suit::from_char(last)?;
        let rank = rank_part.parse()?;
        Ok(CardFace { rank, suit })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseCardError {
    #[error("empty card string")]
    Empty,
    #[error("unknown rank '{0}'")]
    UnknownRank(String),
    #[error("unknown suit '{0}'")]
    UnknownSuit(char),
}
