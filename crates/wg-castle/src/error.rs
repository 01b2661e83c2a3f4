//! Error types for the castle engine.

use thiserror::Error;

/// Result type for castle operations.
pub type CastleResult<T> = Result<T, CastleError>;

/// Errors that can occur while running an expedition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CastleError {
    /// An expedition needs at least one room to walk.
    #[error("a castle needs at least one room")]
    NoRooms,

    /// A duel was recorded after the expedition already ended.
    #[error("the expedition is already over")]
    ExpeditionOver,
}
