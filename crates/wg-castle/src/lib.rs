//! Castle adventure engine for Wizard's Gauntlet.
//!
//! A linear gauntlet of castle rooms, each guarded by a wizard with its
//! own voice. Rooms produce randomly generated ambience lines; duels are
//! resolved by the spell table from `wg-duel`. The expedition state
//! machine tracks progress and the two ways a run can end.

pub mod castle;
pub mod error;
pub mod flavor;
pub mod room;
pub mod wizard;

pub use castle::{Expedition, Progress, corridor_doors};
pub use error::{CastleError, CastleResult};
pub use flavor::{CLUES, ClueGenerator, SENSES};
pub use room::{CASTLE_ROOMS, Room};
pub use wizard::Wizard;
