//! Common error infrastructure for delve-core.
//!
//! This module provides shared types and traits used across all error types in the crate.
//! Errors are never raised for states the search generates itself; they only describe
//! malformed input or a search that ran out of budget.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each concern has its own error enum with specific variants
//! - **Rich Context**: Errors name the offending room, item or step index
//! - **Severity Classification**: Errors are categorized for recovery strategies

use crate::state::RoomId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with a larger budget or different settings.
    ///
    /// Examples: exploration limit reached
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: neighbor index out of range, route walks through a wall
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all delve-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization and testing.
    fn error_code(&self) -> &'static str;
}

/// Structural problems in the dungeon description or search goal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DungeonError {
    #[error("room {0} does not exist")]
    UnknownRoom(RoomId),

    #[error("room {room} lists neighbor {neighbor}, which does not exist")]
    UnknownNeighbor { room: RoomId, neighbor: RoomId },

    #[error("entrance {0} does not exist")]
    UnknownEntrance(RoomId),

    #[error("treasure room {0} does not exist")]
    UnknownTreasure(RoomId),

    #[error("at least one entrance is required")]
    NoEntrances,
}

impl EngineError for DungeonError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRoom(_) => "DUNGEON_UNKNOWN_ROOM",
            Self::UnknownNeighbor { .. } => "DUNGEON_UNKNOWN_NEIGHBOR",
            Self::UnknownEntrance(_) => "DUNGEON_UNKNOWN_ENTRANCE",
            Self::UnknownTreasure(_) => "DUNGEON_UNKNOWN_TREASURE",
            Self::NoEntrances => "DUNGEON_NO_ENTRANCES",
        }
    }
}

/// Errors surfaced by a search run.
///
/// "No solution" is not an error: it is a regular [`crate::SearchOutcome`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchError {
    #[error("invalid dungeon: {0}")]
    InvalidDungeon(#[from] DungeonError),

    #[error("no solution found within bound: expanded {expanded} states (limit {limit})")]
    ExplorationLimit { limit: usize, expanded: usize },
}

impl EngineError for SearchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidDungeon(inner) => inner.severity(),
            Self::ExplorationLimit { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDungeon(inner) => inner.error_code(),
            Self::ExplorationLimit { .. } => "SEARCH_EXPLORATION_LIMIT",
        }
    }
}
