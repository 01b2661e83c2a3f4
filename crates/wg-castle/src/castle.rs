//! Expedition state: linear progress through the castle.
//!
//! The expedition is a small state machine. The player stands at one room
//! at a time; each recorded duel verdict either advances the run, ends it,
//! or (on a tie) leaves it where it was so the duel is fought again.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use wg_duel::Verdict;

use crate::error::{CastleError, CastleResult};
use crate::room::{CASTLE_ROOMS, Room};

/// Where an expedition stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// Standing at the room with this index, its duel unresolved.
    AtRoom(usize),
    /// Every guardian has fallen and the treasure is claimed.
    Victory,
    /// A guardian won its duel and the player was cast out.
    Banished,
}

/// A single run through a castle's rooms.
#[derive(Debug, Clone)]
pub struct Expedition {
    rooms: Vec<Room>,
    progress: Progress,
}

impl Expedition {
    /// Start an expedition at the first room of the default castle.
    pub fn new() -> Self {
        Self {
            rooms: CASTLE_ROOMS.to_vec(),
            progress: Progress::AtRoom(0),
        }
    }

    /// Start an expedition through a caller-supplied room list.
    pub fn with_rooms(rooms: Vec<Room>) -> CastleResult<Self> {
        if rooms.is_empty() {
            return Err(CastleError::NoRooms);
        }
        Ok(Self {
            rooms,
            progress: Progress::AtRoom(0),
        })
    }

    /// Current position in the run.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// The rooms of this castle, in walking order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The room the player stands in, or `None` once the run has ended.
    pub fn current_room(&self) -> Option<&Room> {
        match self.progress {
            Progress::AtRoom(i) => self.rooms.get(i),
            Progress::Victory | Progress::Banished => None,
        }
    }

    /// Whether the run has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.current_room().is_none()
    }

    /// Feed one duel verdict (from the player's perspective) into the run.
    ///
    /// A win advances to the next room, or to [`Progress::Victory`] from
    /// the last one. A loss ends the run as [`Progress::Banished`]. A tie
    /// changes nothing; the duel is fought again.
    pub fn record(&mut self, verdict: Verdict) -> CastleResult<Progress> {
        let Progress::AtRoom(i) = self.progress else {
            return Err(CastleError::ExpeditionOver);
        };
        self.progress = match verdict {
            Verdict::Win if i + 1 == self.rooms.len() => Progress::Victory,
            Verdict::Win => Progress::AtRoom(i + 1),
            Verdict::Loss => Progress::Banished,
            Verdict::Tie => Progress::AtRoom(i),
        };
        Ok(self.progress)
    }

    /// Put the run back at the first room, as if entering a fresh castle.
    pub fn reset(&mut self) {
        self.progress = Progress::AtRoom(0);
    }
}

impl Default for Expedition {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of doors in the next corridor (2 to 4).
pub fn corridor_doors(rng: &mut StdRng) -> usize {
    rng.random_range(2..=4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Wizard;
    use rand::SeedableRng;

    #[test]
    fn five_wins_reach_victory() {
        let mut expedition = Expedition::new();
        for i in 0..5 {
            assert_eq!(expedition.progress(), Progress::AtRoom(i));
            expedition.record(Verdict::Win).unwrap();
        }
        assert_eq!(expedition.progress(), Progress::Victory);
        assert!(expedition.is_over());
        assert_eq!(expedition.current_room(), None);
    }

    #[test]
    fn a_loss_banishes_without_advancing() {
        let mut expedition = Expedition::new();
        expedition.record(Verdict::Win).unwrap();
        expedition.record(Verdict::Win).unwrap();
        assert_eq!(expedition.progress(), Progress::AtRoom(2));

        expedition.record(Verdict::Loss).unwrap();
        assert_eq!(expedition.progress(), Progress::Banished);
        assert!(expedition.is_over());
    }

    #[test]
    fn a_tie_leaves_the_room_unchanged() {
        let mut expedition = Expedition::new();
        expedition.record(Verdict::Win).unwrap();
        let before = expedition.progress();
        expedition.record(Verdict::Tie).unwrap();
        assert_eq!(expedition.progress(), before);
        assert!(!expedition.is_over());
    }

    #[test]
    fn recording_after_the_end_is_an_error() {
        let mut expedition = Expedition::new();
        expedition.record(Verdict::Loss).unwrap();
        assert_eq!(
            expedition.record(Verdict::Win),
            Err(CastleError::ExpeditionOver)
        );
    }

    #[test]
    fn empty_room_list_is_rejected() {
        assert_eq!(
            Expedition::with_rooms(Vec::new()).unwrap_err(),
            CastleError::NoRooms
        );
    }

    #[test]
    fn single_room_castle_wins_in_one_duel() {
        let mut expedition =
            Expedition::with_rooms(vec![Room::new("Treasure Antechamber", Wizard::Red)]).unwrap();
        expedition.record(Verdict::Win).unwrap();
        assert_eq!(expedition.progress(), Progress::Victory);
    }

    #[test]
    fn reset_returns_to_the_first_room() {
        let mut expedition = Expedition::new();
        expedition.record(Verdict::Loss).unwrap();
        expedition.reset();
        assert_eq!(expedition.progress(), Progress::AtRoom(0));
        assert_eq!(expedition.current_room().map(|r| r.name), Some("Great Hall"));
    }

    #[test]
    fn corridor_always_has_two_to_four_doors() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let doors = corridor_doors(&mut rng);
            assert!((2..=4).contains(&doors));
        }
    }
}
