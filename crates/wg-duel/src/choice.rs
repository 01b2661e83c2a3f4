//! Choice sets and menu input parsing.
//!
//! A choice set is a small closed enumeration with a fixed menu order.
//! Players pick by 1-based number; parsing returns a typed error so the
//! caller can re-prompt instead of crashing.

use std::fmt;
use std::hash::Hash;

use thiserror::Error;

/// A member of a closed, ordered set of selectable options.
pub trait Choice: Copy + Eq + Hash + fmt::Debug + fmt::Display + 'static {
    /// Every member of the set, in menu order.
    fn all() -> &'static [Self];

    /// Display name shown in menus and verdict lines.
    fn name(self) -> &'static str;
}

/// Why a line of menu input was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidChoice {
    /// The input was not an integer.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// The number was outside the menu range.
    #[error("{0} is not between 1 and {1}")]
    OutOfRange(i64, usize),
}

/// Parse a 1-based menu selection in `1..=max`.
pub fn parse_menu(input: &str, max: usize) -> Result<usize, InvalidChoice> {
    let trimmed = input.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| InvalidChoice::NotANumber(trimmed.to_string()))?;
    usize::try_from(number)
        .ok()
        .filter(|n| (1..=max).contains(n))
        .ok_or(InvalidChoice::OutOfRange(number, max))
}

/// Parse a 1-based menu selection against a choice set.
pub fn parse_choice<C: Choice>(input: &str) -> Result<C, InvalidChoice> {
    let index = parse_menu(input, C::all().len())?;
    Ok(C::all()[index - 1])
}

/// Look up a choice by its 1-based menu index.
pub fn from_index<C: Choice>(index: usize) -> Option<C> {
    index.checked_sub(1).and_then(|i| C::all().get(i).copied())
}
