//! Ready-made choice sets and rule tables.
//!
//! Two tables ship with the engine: the five-hand
//! rock-paper-scissors-lizard-Spock table and the five-spell table used
//! for wizard duels. Both are tournaments: each symbol beats exactly two
//! others and loses to the other two.

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::table::RuleTable;

/// A hand sign in rock-paper-scissors-lizard-Spock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    /// Crushes lizard and scissors.
    Rock,
    /// Covers rock and disproves Spock.
    Paper,
    /// Cuts paper and decapitates lizard.
    Scissors,
    /// Poisons Spock and eats paper.
    Lizard,
    /// Smashes scissors and vaporizes rock.
    Spock,
}

impl Choice for Hand {
    fn all() -> &'static [Self] {
        &[
            Self::Rock,
            Self::Paper,
            Self::Scissors,
            Self::Lizard,
            Self::Spock,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
            Self::Lizard => "Lizard",
            Self::Spock => "Spock",
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Build the rock-paper-scissors-lizard-Spock rule table.
pub fn rpsls() -> RuleTable<Hand> {
    RuleTable::new(&[
        (Hand::Scissors, Hand::Lizard, "Scissors decapitate lizard"),
        (Hand::Scissors, Hand::Paper, "Scissors cuts paper"),
        (Hand::Paper, Hand::Rock, "Paper covers rock"),
        (Hand::Rock, Hand::Lizard, "Rock crushes lizard"),
        (Hand::Lizard, Hand::Spock, "Lizard poisons Spock"),
        (Hand::Spock, Hand::Scissors, "Spock smashes scissors"),
        (Hand::Lizard, Hand::Paper, "Lizard eats paper"),
        (Hand::Paper, Hand::Spock, "Paper disproves Spock"),
        (Hand::Spock, Hand::Rock, "Spock vaporizes rock"),
        (Hand::Rock, Hand::Scissors, "Rock crushes scissors"),
    ])
    .expect("rpsls rules form a valid tournament")
}

/// A spell in a wizard duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spell {
    /// Melts ice shard, outburns lightning bolt.
    Fireball,
    /// Cuts through wind gust, freezes earthquake.
    IceShard,
    /// Scatters lightning bolt, snuffs fireball.
    WindGust,
    /// Splits earthquake, shatters ice shard.
    LightningBolt,
    /// Buries fireball, swallows wind gust.
    Earthquake,
}

impl Choice for Spell {
    fn all() -> &'static [Self] {
        &[
            Self::Fireball,
            Self::IceShard,
            Self::WindGust,
            Self::LightningBolt,
            Self::Earthquake,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            Self::Fireball => "Fireball",
            Self::IceShard => "Ice Shard",
            Self::WindGust => "Wind Gust",
            Self::LightningBolt => "Lightning Bolt",
            Self::Earthquake => "Earthquake",
        }
    }
}

impl std::fmt::Display for Spell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Build the five-spell wizard duel rule table.
pub fn spellcraft() -> RuleTable<Spell> {
    RuleTable::new(&[
        (Spell::Fireball, Spell::IceShard, "Fireball melts ice shard"),
        (
            Spell::Fireball,
            Spell::LightningBolt,
            "Fireball outburns lightning bolt",
        ),
        (
            Spell::IceShard,
            Spell::WindGust,
            "Ice shard cuts through wind gust",
        ),
        (
            Spell::IceShard,
            Spell::Earthquake,
            "Ice shard freezes the quaking ground",
        ),
        (
            Spell::WindGust,
            Spell::LightningBolt,
            "Wind gust scatters lightning bolt",
        ),
        (Spell::WindGust, Spell::Fireball, "Wind gust snuffs fireball"),
        (
            Spell::LightningBolt,
            Spell::Earthquake,
            "Lightning bolt splits the earthquake",
        ),
        (
            Spell::LightningBolt,
            Spell::IceShard,
            "Lightning bolt shatters ice shard",
        ),
        (
            Spell::Earthquake,
            Spell::Fireball,
            "Earthquake buries fireball",
        ),
        (
            Spell::Earthquake,
            Spell::WindGust,
            "Earthquake swallows wind gust",
        ),
    ])
    .expect("spellcraft rules form a valid tournament")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Verdict;

    #[test]
    fn rosters_have_five_members() {
        assert_eq!(Hand::all().len(), 5);
        assert_eq!(Spell::all().len(), 5);
    }

    #[test]
    fn both_presets_build() {
        rpsls();
        spellcraft();
    }

    #[test]
    fn rpsls_matches_the_classic_rules() {
        let table = rpsls();
        let wins = [
            (Hand::Scissors, Hand::Lizard),
            (Hand::Scissors, Hand::Paper),
            (Hand::Paper, Hand::Rock),
            (Hand::Rock, Hand::Lizard),
            (Hand::Lizard, Hand::Spock),
            (Hand::Spock, Hand::Scissors),
            (Hand::Lizard, Hand::Paper),
            (Hand::Paper, Hand::Spock),
            (Hand::Spock, Hand::Rock),
            (Hand::Rock, Hand::Scissors),
        ];
        for (winner, loser) in wins {
            assert_eq!(
                table.resolve(winner, loser).verdict,
                Verdict::Win,
                "{winner} should beat {loser}"
            );
        }
    }

    #[test]
    fn spellcraft_matches_the_duel_rules() {
        let table = spellcraft();
        let wins = [
            (Spell::Fireball, Spell::IceShard),
            (Spell::Fireball, Spell::LightningBolt),
            (Spell::IceShard, Spell::WindGust),
            (Spell::IceShard, Spell::Earthquake),
            (Spell::WindGust, Spell::LightningBolt),
            (Spell::WindGust, Spell::Fireball),
            (Spell::LightningBolt, Spell::Earthquake),
            (Spell::LightningBolt, Spell::IceShard),
            (Spell::Earthquake, Spell::Fireball),
            (Spell::Earthquake, Spell::WindGust),
        ];
        for (winner, loser) in wins {
            assert_eq!(
                table.resolve(winner, loser).verdict,
                Verdict::Win,
                "{winner} should beat {loser}"
            );
        }
    }

    #[test]
    fn spell_names_use_spaces() {
        assert_eq!(Spell::IceShard.to_string(), "Ice Shard");
        assert_eq!(Spell::LightningBolt.to_string(), "Lightning Bolt");
    }

    #[test]
    fn every_reason_names_the_winner() {
        let table = rpsls();
        for &hand in Hand::all() {
            for victim in table.victims(hand) {
                let reason = table.resolve(hand, victim).reason.unwrap();
                assert!(
                    reason.to_lowercase().starts_with(&hand.name().to_lowercase()),
                    "'{reason}' should start with {hand}"
                );
            }
        }
    }
}
