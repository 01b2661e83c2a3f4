//! Outcome rule tables.
//!
//! A rule table orients every pair of distinct choices: exactly one side
//! wins, with a one-line justification. Identical choices always tie.
//! The constructor rejects any rule list that is not a valid tournament,
//! so `resolve` is total once a table exists.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::error::{DuelError, DuelResult};

/// The outcome of one round, from the first contestant's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The first contestant's choice wins.
    Win,
    /// The second contestant's choice wins.
    Loss,
    /// Both picked the same choice.
    Tie,
}

impl Verdict {
    /// The same round seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Tie => Self::Tie,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
            Self::Tie => write!(f, "tie"),
        }
    }
}

/// A resolved round: the verdict plus the winning rule's justification.
///
/// `reason` is `None` exactly when the round is a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ruling {
    /// Outcome from the first contestant's perspective.
    pub verdict: Verdict,
    /// The justification attached to whichever rule decided the round.
    pub reason: Option<&'static str>,
}

/// An immutable "beats" table over a closed choice set.
///
/// Built once at startup and passed to whoever resolves rounds; there is
/// no way to mutate a table after construction.
#[derive(Debug, Clone)]
pub struct RuleTable<C: Choice> {
    beats: HashMap<(C, C), &'static str>,
}

impl<C: Choice> RuleTable<C> {
    /// Build a table from `(winner, loser, reason)` rules.
    ///
    /// Fails unless the rules orient every pair of distinct choices
    /// exactly once, with no choice beating itself.
    pub fn new(rules: &[(C, C, &'static str)]) -> DuelResult<Self> {
        let mut beats = HashMap::with_capacity(rules.len());
        for &(winner, loser, reason) in rules {
            if winner == loser {
                return Err(DuelError::SelfBeating(winner.name().to_string()));
            }
            if beats.contains_key(&(winner, loser)) || beats.contains_key(&(loser, winner)) {
                return Err(DuelError::DuplicateRule(
                    winner.name().to_string(),
                    loser.name().to_string(),
                ));
            }
            beats.insert((winner, loser), reason);
        }

        let all = C::all();
        for (i, &a) in all.iter().enumerate() {
            for &b in &all[i + 1..] {
                if !beats.contains_key(&(a, b)) && !beats.contains_key(&(b, a)) {
                    return Err(DuelError::MissingRule(
                        a.name().to_string(),
                        b.name().to_string(),
                    ));
                }
            }
        }

        Ok(Self { beats })
    }

    /// Resolve one round between `first` and `second`.
    pub fn resolve(&self, first: C, second: C) -> Ruling {
        if first == second {
            return Ruling {
                verdict: Verdict::Tie,
                reason: None,
            };
        }
        match self.beats.get(&(first, second)) {
            Some(reason) => Ruling {
                verdict: Verdict::Win,
                reason: Some(reason),
            },
            // the constructor guarantees the reverse edge exists
            None => Ruling {
                verdict: Verdict::Loss,
                reason: self.beats.get(&(second, first)).copied(),
            },
        }
    }

    /// Every choice `winner` beats, in menu order.
    pub fn victims(&self, winner: C) -> Vec<C> {
        C::all()
            .iter()
            .copied()
            .filter(|&loser| self.beats.contains_key(&(winner, loser)))
            .collect()
    }
}
