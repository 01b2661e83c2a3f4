//! Wizard opponent profiles.
//!
//! Each guardian is one variant of a closed enum carrying its own static
//! text pools. No runtime dispatch; the profile decides only flavor, the
//! duel itself runs on the shared spell table.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// A wizard who guards a room of the castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wizard {
    /// The Red Wizard, keeper of the Great Hall.
    Red,
    /// The Viridian Enchanter, warden of the Armory.
    Viridian,
    /// The Pale Conjurer, who haunts the Library.
    Pale,
    /// The Storm Caller, perched in the North Tower.
    Storm,
    /// The Umbral Magus, last guardian before the treasure.
    Umbral,
}

impl Wizard {
    /// Every profile, in the castle's walking order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Red,
            Self::Viridian,
            Self::Pale,
            Self::Storm,
            Self::Umbral,
        ]
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "the Red Wizard",
            Self::Viridian => "the Viridian Enchanter",
            Self::Pale => "the Pale Conjurer",
            Self::Storm => "the Storm Caller",
            Self::Umbral => "the Umbral Magus",
        }
    }

    /// The line announcing the duel.
    pub fn challenge(self) -> &'static str {
        match self {
            Self::Red => "A Red Wizard blocks your path and challenges you to a spell battle!",
            Self::Viridian => {
                "The Viridian Enchanter steps from between the weapon racks, wand raised."
            }
            Self::Pale => "The Pale Conjurer rises from behind a reading desk, eyes like frost.",
            Self::Storm => "The Storm Caller turns from the tower window, thunder at their back.",
            Self::Umbral => "The Umbral Magus unfolds from the throne's shadow, smiling thinly.",
        }
    }

    /// Lines the wizard may open a duel round with.
    pub fn taunts(self) -> &'static [&'static str] {
        match self {
            Self::Red => &[
                "Cast the correct spell to vanquish the wizard; lose, and you are banished from this castle.",
                "\"No trespasser has ever left my hall standing.\"",
            ],
            Self::Viridian => &[
                "\"Steel is nothing. Show me your sorcery.\"",
                "\"The armory keeps its own, trespasser.\"",
            ],
            Self::Pale => &[
                "\"Quiet in the library. Your defeat will be silent.\"",
                "\"I have read every duel ever fought. Yours ends badly.\"",
            ],
            Self::Storm => &[
                "\"The wind already whispers your mistake.\"",
                "\"Climb no higher, little spark.\"",
            ],
            Self::Umbral => &[
                "\"The treasure lies one door away. It will stay there.\"",
                "\"Every gauntlet saves its cruelest turn for last.\"",
            ],
        }
    }

    /// Draw one taunt from the pool.
    pub fn taunt(self, rng: &mut StdRng) -> &'static str {
        let pool = self.taunts();
        pool[rng.random_range(0..pool.len())]
    }

    /// Printed when the player wins the duel.
    pub fn defeat_line(self) -> &'static str {
        match self {
            Self::Red => "Your spell overwhelms the Red Wizard, who is vanquished from this castle!",
            Self::Viridian => {
                "The Viridian Enchanter's wand clatters to the floor. The armory is yours."
            }
            Self::Pale => "The Pale Conjurer dissolves into drifting pages and is gone.",
            Self::Storm => "The Storm Caller's clouds scatter; the tower falls quiet.",
            Self::Umbral => "The Umbral Magus thins to a shadow and slips beneath the throne.",
        }
    }

    /// Printed when the wizard wins the duel.
    pub fn victory_line(self) -> &'static str {
        match self {
            Self::Red => "The Red Wizard's spell overpowers you. You are banished from this castle.",
            Self::Viridian => {
                "The Viridian Enchanter's hex hurls you back through the castle gates."
            }
            Self::Pale => "The Pale Conjurer closes the book on you. The castle spits you out.",
            Self::Storm => "The Storm Caller's gale sweeps you down the stairs and out the walls.",
            Self::Umbral => "The Umbral Magus snuffs your spell, and the shadows carry you out.",
        }
    }
}

impl std::fmt::Display for Wizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn five_profiles() {
        assert_eq!(Wizard::all().len(), 5);
    }

    #[test]
    fn every_profile_has_text() {
        for &wizard in Wizard::all() {
            assert!(!wizard.name().is_empty());
            assert!(!wizard.challenge().is_empty());
            assert!(!wizard.defeat_line().is_empty());
            assert!(!wizard.victory_line().is_empty());
            assert!(!wizard.taunts().is_empty());
        }
    }

    #[test]
    fn taunt_comes_from_the_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for &wizard in Wizard::all() {
            for _ in 0..10 {
                assert!(wizard.taunts().contains(&wizard.taunt(&mut rng)));
            }
        }
    }
}
