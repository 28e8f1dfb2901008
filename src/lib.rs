//! Detective Quest: The Final Chapter
//!
//! A mansion-exploring detective text adventure. Walk the rooms of a
//! manor, pick up the clues left behind, watch them pile up against the
//! suspects, then make your accusation.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Move left, right or back through a tree of rooms
//! - **Clues**: Every clue you find is filed once, in alphabetical order
//! - **Suspects**: Each clue encounter counts against the suspect it points to
//! - **Verdict**: An accusation needs at least two clue encounters to stand
//!
//! # Architecture
//!
//! - `data` - Mansion map, clue collection, association table, suspect tally, fixtures
//! - `game` - Exploration engine, verdict rules, narrative text, message log
//! - `tui` - Terminal user interface with ratatui, plus a line-oriented console

pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("The mansion has no rooms")]
    EmptyMansion,

    #[error("Room defined twice: {0}")]
    DuplicateRoom(String),

    #[error("Room not found: {0}")]
    UnknownRoom(String),

    #[error("Room {parent} already has a {side} passage")]
    ChildAlreadyAssigned { parent: String, side: Side },

    #[error("Room {0} is reachable from more than one parent")]
    MultipleParents(String),

    #[error("The entrance {0} cannot be another room's child")]
    RootHasParent(String),

    #[error("Room {0} cannot be reached from the entrance")]
    UnreachableRoom(String),

    #[error("Suspect capacity must be at least 1")]
    InvalidCapacity,

    #[error("Could not read fixture {path}: {source}")]
    FixtureIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Fixture is malformed: {0}")]
    FixtureParse(#[from] toml::de::Error),
}
