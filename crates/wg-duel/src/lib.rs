//! Duel engine for Wizard's Gauntlet.
//!
//! Provides closed choice sets, validated outcome rule tables, and the
//! selection sources (menu parsing, uniform random draws, no-repeat grab
//! bags) that the terminal games are built from. Ships with two reference
//! tables: rock-paper-scissors-lizard-Spock and the five-spell wizard
//! duel set.

pub mod choice;
pub mod error;
pub mod preset;
pub mod select;
pub mod table;

pub use choice::{Choice, InvalidChoice, from_index, parse_choice, parse_menu};
pub use error::{DuelError, DuelResult};
pub use preset::{Hand, Spell, rpsls, spellcraft};
pub use select::{GrabBag, random_choice};
pub use table::{RuleTable, Ruling, Verdict};
