//! Built-in rules
//!
//! Each rule comes as a struct with a `.message()` override and a factory
//! function of the same name in snake case:
//!
//! - **Presence**: [`Required`]
//! - **Length**: [`MinLength`], [`MaxLength`]
//! - **Format**: [`Email`], [`Url`], [`Pattern`]
//! - **Numeric**: [`Numeric`], [`Min`], [`Max`]
//! - **Password**: [`Password`], [`PasswordPolicy`]
//! - **Equality**: [`Matches`]
//! - **Predicate**: [`Custom`]

pub mod content;
pub mod custom;
pub mod equality;
pub mod length;
pub mod nullable;
pub mod numeric;
pub mod password;

pub use content::{Email, Pattern, Url, email, pattern, url};
pub use custom::{Custom, custom};
pub use equality::{Matches, matches};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use nullable::{Required, required};
pub use numeric::{Max, Min, Numeric, max, min, numeric};
pub use password::{Password, PasswordPolicy, password};
