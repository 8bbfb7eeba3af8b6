//! Provides the error type used throughout this crate.

use crate::cards::{Rank, Suit};
use thiserror::Error;

/// The error type used throughout this crate. Every variant is a contract
/// violation by the caller; nothing here is recovered from internally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeError {
    /// Only the joker comes without a suit
    #[error("Invalid card: suit {suit:?} cannot be paired with rank {rank:?}")]
    InvalidArgument { rank: Rank, suit: Suit },
    #[error("Invalid iterator state: {0}")]
    InvalidState(&'static str),
}

pub type PracticeResult<T> = Result<T, PracticeError>;
