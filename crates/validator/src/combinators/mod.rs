//! Combinators for composing rules
//!
//! - [`And`]: two rules, both must pass, left first
//! - [`Compose`] / [`compose`]: an ordered sequence, first failure wins
//! - [`WithMessage`]: replaces the failure message of any rule

pub mod and;
pub mod compose;
pub mod message;

pub use and::{And, and};
pub use compose::{Compose, Rules, compose};
pub use message::{WithMessage, with_message};
