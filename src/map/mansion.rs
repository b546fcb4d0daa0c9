//! The fixed mansion
//!
//! Nine rooms, five clues, three suspects. The layout and the clue catalog
//! are part of the game's contract and are not configurable.
//!
//! ```text
//!                    Hall de Entrada
//!                 /                   \
//!          Biblioteca             Sala de Jantar
//!          /        \             /            \
//!   Escritório  Jardim Interno  Cozinha      Corredor
//!                                            /      \
//!                                        Quarto   Banheiro
//! ```

use super::{validate_map, Room};
use crate::GameError;

/// Name of the room where every exploration starts
pub const ROOT_ROOM: &str = "Hall de Entrada";

/// Clue hidden in a room, and the suspect it points to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomClue {
    /// Room holding the clue
    pub room: &'static str,
    /// Clue text
    pub clue: &'static str,
    /// Suspect associated with the clue
    pub suspect: &'static str,
}

/// Static room → clue → suspect catalog
pub const ROOM_CLUES: [RoomClue; 5] = [
    RoomClue {
        room: "Biblioteca",
        clue: "Carta Misteriosa",
        suspect: "Dr. Watson",
    },
    RoomClue {
        room: "Escritório",
        clue: "Chave Enferrujada",
        suspect: "Professora Moriarty",
    },
    RoomClue {
        room: "Cozinha",
        clue: "Faca de Manteiga",
        suspect: "Professora Moriarty",
    },
    RoomClue {
        room: "Corredor",
        clue: "Pegadas Estranhas",
        suspect: "Jardineiro Gregson",
    },
    RoomClue {
        room: "Quarto",
        clue: "Diário Secreto",
        suspect: "Dr. Watson",
    },
];

/// Look up the clue hidden in `room`, if any
pub fn clue_for_room(room: &str) -> Option<&'static RoomClue> {
    ROOM_CLUES.iter().find(|entry| entry.room == room)
}

/// Build the mansion bottom-up and check it against the clue catalog
pub fn build_mansion() -> Result<Room, GameError> {
    let biblioteca = Room::build(
        "Biblioteca",
        Some(Room::leaf("Escritório")),
        Some(Room::leaf("Jardim Interno")),
    );

    let corredor = Room::build(
        "Corredor",
        Some(Room::leaf("Quarto")),
        Some(Room::leaf("Banheiro")),
    );
    let sala_de_jantar = Room::build("Sala de Jantar", Some(Room::leaf("Cozinha")), Some(corredor));

    let hall = Room::build(ROOT_ROOM, Some(biblioteca), Some(sala_de_jantar));

    validate_map(&hall, &ROOM_CLUES)?;
    tracing::debug!(rooms = hall.room_count(), clues = ROOM_CLUES.len(), "mansion built");

    Ok(hall)
}
