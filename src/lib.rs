//! # Mystery Mansion
//!
//! A text detective game over a fixed binary-tree map of rooms.
//!
//! ## Components
//!
//! 1. **Room map**: immutable binary tree of named rooms, built once
//! 2. **Clue ledger**: BST of discovered clues, enumerated in byte order
//! 3. **Suspect index**: chained hash table mapping each clue to a suspect
//! 4. **Explorer**: state machine driven one input line at a time
//!
//! Entering a room listed in the clue catalog records its clue in the
//! ledger and its clue → suspect pair in the index. Exploration ends at a
//! leaf room, on quit, or when input runs out.
//!
//! ## Usage Example
//!
//! ```
//! use mystery_mansion::{build_mansion, Explorer, FinishReason, GameConfig};
//!
//! let mansion = build_mansion()?;
//! let (mut explorer, _intro) = Explorer::start(&mansion, &GameConfig::default())?;
//! for line in ["d", "d", "e"] {
//!     explorer.step(Some(line));
//! }
//! assert_eq!(explorer.finish_reason(), Some(FinishReason::LeafReached));
//! assert_eq!(explorer.suspects().most_cited(), Some("Dr. Watson"));
//! # Ok::<(), mystery_mansion::GameError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod game; // Exploration loop and console adapter
pub mod ledger; // Clue BST
pub mod map; // Room tree and the fixed mansion
pub mod report; // End-of-game summary
pub mod suspects; // Clue → suspect hash table

// Re-exports for convenience
pub use game::{play, Command, Event, Explorer, FinishReason, Input, Level, Phase};
pub use ledger::ClueLedger;
pub use map::{build_mansion, Direction, Room};
pub use report::Report;
pub use suspects::{SuspectIndex, DEFAULT_BUCKETS};

use thiserror::Error;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of buckets in the suspect index
    pub bucket_count: usize,

    /// Feature tier: which commands and structures are active
    pub level: Level,
}

impl GameConfig {
    /// Reject configurations a session cannot start with
    pub fn validate(&self) -> Result<(), GameError> {
        if self.bucket_count == 0 {
            return Err(GameError::InvalidBucketCount(self.bucket_count));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKETS,
            level: Level::Master,
        }
    }
}

/// Errors that can occur while setting up or running a session
#[derive(Error, Debug)]
pub enum GameError {
    /// Suspect index needs at least one bucket
    #[error("Invalid bucket count {0}: the suspect index needs at least one bucket")]
    InvalidBucketCount(usize),

    /// Room names must be unique within a map
    #[error("Duplicate room name in map: {0}")]
    DuplicateRoom(String),

    /// Clue catalog refers to a room the map lacks
    #[error("Clue catalog names unknown room: {0}")]
    UnknownClueRoom(String),

    /// Console input/output failed
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
