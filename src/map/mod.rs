//! Room map
//!
//! A binary tree of named rooms. Each room exclusively owns its two
//! optional subtrees, so the map has no cycles and is dropped recursively.
//! Once built it is never mutated.

mod mansion;
mod room;

pub use mansion::{build_mansion, clue_for_room, RoomClue, ROOM_CLUES, ROOT_ROOM};
pub use room::{Direction, Room, Rooms};

use crate::GameError;
use std::collections::HashSet;

/// Check that a map has unique room names and that every catalog entry
/// names a room present in the map.
pub fn validate_map(root: &Room, catalog: &[RoomClue]) -> Result<(), GameError> {
    let mut names = HashSet::new();
    for room in root.rooms() {
        if !names.insert(room.name()) {
            return Err(GameError::DuplicateRoom(room.name().to_string()));
        }
    }

    for entry in catalog {
        if !names.contains(entry.room) {
            return Err(GameError::UnknownClueRoom(entry.room.to_string()));
        }
    }

    Ok(())
}
