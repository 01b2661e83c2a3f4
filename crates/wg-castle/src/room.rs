//! Castle rooms.

use serde::Serialize;

use crate::wizard::Wizard;

/// One room of the castle and the wizard who guards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Room {
    /// Display name, e.g. "Great Hall".
    pub name: &'static str,
    /// The guardian who must be defeated to pass.
    pub guardian: Wizard,
}

impl Room {
    /// Create a room.
    pub const fn new(name: &'static str, guardian: Wizard) -> Self {
        Self { name, guardian }
    }
}

/// The default castle gauntlet, in walking order.
pub const CASTLE_ROOMS: &[Room] = &[
    Room::new("Great Hall", Wizard::Red),
    Room::new("Armory", Wizard::Viridian),
    Room::new("Library", Wizard::Pale),
    Room::new("North Tower", Wizard::Storm),
    Room::new("Throne Room", Wizard::Umbral),
];
