//! Historical draw validation
//!
//! A draw is a fixed-length string of decimal digits. Every draw in a
//! request must share the length of the first one.

use shared::{Pair, MIN_DRAW_LENGTH};
use thiserror::Error;

/// Reasons a draw sequence is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("no draws supplied")]
    Empty,

    #[error("draw {index} is {length} digits long, at least {} required", MIN_DRAW_LENGTH)]
    TooShort { index: usize, length: usize },

    #[error("draw {index} is {found} digits long, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("draw {index} contains non-digit characters: {draw:?}")]
    NonDigit { index: usize, draw: String },
}

/// Check the draw sequence and return the shared draw length
pub fn validate_draws(draws: &[String]) -> Result<usize, DrawError> {
    let first = draws.first().ok_or(DrawError::Empty)?;
    let expected = first.len();

    for (index, draw) in draws.iter().enumerate() {
        if !draw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DrawError::NonDigit {
                index,
                draw: draw.clone(),
            });
        }

        if index == 0 && expected < MIN_DRAW_LENGTH {
            return Err(DrawError::TooShort {
                index,
                length: expected,
            });
        }

        if draw.len() != expected {
            return Err(DrawError::LengthMismatch {
                index,
                expected,
                found: draw.len(),
            });
        }
    }

    Ok(expected)
}

/// Pair read at `position` of an already validated draw
pub(crate) fn pair_at(draw: &str, position: usize) -> Option<Pair> {
    let bytes = draw.as_bytes();
    Pair::from_digits(*bytes.get(position)?, *bytes.get(position + 1)?)
}
