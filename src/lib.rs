//! A 64-bit rework of the 624-word Mersenne twister: the classic 32-bit
//! recurrence and tempering constants applied to unmasked 64-bit words,
//! with tempered output filtered through an inclusive acceptance window
//! before being rescaled onto caller ranges.
//!
//! Statistical use only. Nothing here is safe against an adversary.

pub mod error;
pub mod output;
pub mod seed;
pub mod twister;

pub use error::{Result, TwisterError};
pub use seed::time_seed;
pub use twister::{Twister64, Window, DEFAULT_SEED};
