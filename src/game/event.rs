//! Narration events
//!
//! Every observable effect of a step is an [`Event`]. Rendering to text
//! happens through `Display`, so the state machine never touches I/O.

use super::{Command, Level};
use crate::map::Direction;
use std::fmt;

/// Why exploration stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FinishReason {
    /// Player typed `s`
    Quit,

    /// Current room has no exits
    LeafReached,

    /// No more input lines; treated like quit
    InputExhausted,
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishReason::Quit => write!(f, "encerrada pelo jogador"),
            FinishReason::LeafReached => write!(f, "sala-folha alcançada"),
            FinishReason::InputExhausted => write!(f, "fim da entrada"),
        }
    }
}

/// Something the player should be told
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Session opened
    Started {
        /// Active level
        level: Level,
    },

    /// Player is now in `room`
    Entered {
        /// Room name
        room: String,
    },

    /// A clue was found in the current room
    ClueFound {
        /// Clue text
        clue: String,
    },

    /// Waiting for a command
    Prompt {
        /// Active level
        level: Level,
    },

    /// Requested exit does not exist; player stays put
    Blocked {
        /// Requested direction
        direction: Direction,
    },

    /// Line held only whitespace
    EmptyInput {
        /// Active level
        level: Level,
    },

    /// First character is not a command key
    InvalidCommand {
        /// Offending character
        input: char,
        /// Active level
        level: Level,
    },

    /// Command exists but is disabled at this level
    Unavailable {
        /// Requested command
        command: Command,
        /// Active level
        level: Level,
    },

    /// Ledger listing, ascending
    Clues(Vec<String>),

    /// Index listing in scan order
    Associations(Vec<(String, String)>),

    /// Exploration is over
    Finished {
        /// Why it ended
        reason: FinishReason,
    },
}

impl Event {
    /// Prompts are printed without a trailing newline
    pub fn is_prompt(&self) -> bool {
        matches!(self, Event::Prompt { .. })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Started { level } => writeln!(
                f,
                "Exploração iniciada (nível {level}). Comandos: {}.",
                level.key_list()
            ),
            Event::Entered { room } => write!(f, "Você está em: {room}"),
            Event::ClueFound { clue } => write!(f, "🔍 Você encontrou uma pista: '{clue}'"),
            Event::Prompt { level } => write!(f, "{}: ", menu(*level)),
            Event::Blocked { direction } => writeln!(
                f,
                "Não há caminho à {direction} a partir daqui. Tente outra opção."
            ),
            Event::EmptyInput { level } => {
                write!(f, "Opção inválida. Digite {}.", level.key_list())
            }
            Event::InvalidCommand { input, level } => writeln!(
                f,
                "Opção inválida '{input}'. Use {}.",
                level.key_list()
            ),
            Event::Unavailable { command, level } => writeln!(
                f,
                "O comando '{}' não está disponível no nível {level}. Use {}.",
                command.key(),
                level.key_list()
            ),
            Event::Clues(clues) => {
                writeln!(f, "\n📜 Pistas encontradas (em ordem alfabética):")?;
                write_clues(f, clues, "Nenhuma pista encontrada ainda.")
            }
            Event::Associations(pairs) => {
                writeln!(f, "\n🔗 Associações Pista → Suspeito:")?;
                write_associations(f, pairs)
            }
            Event::Finished { reason } => match reason {
                FinishReason::Quit => write!(f, "Exploração encerrada pelo jogador."),
                FinishReason::LeafReached => {
                    write!(f, "Você chegou ao fim deste caminho (sala-folha).")
                }
                FinishReason::InputExhausted => {
                    write!(f, "Entrada encerrada. Exploração finalizada.")
                }
            },
        }
    }
}

fn menu(level: Level) -> &'static str {
    match level {
        Level::Novice => "Escolha um caminho [e/d] ou 's' para sair",
        Level::Adventurer => "Escolha um caminho [e/d], 'p' para ver pistas, ou 's' para sair",
        Level::Master => {
            "Escolha um caminho [e/d], 'p' para ver pistas, 'a' para ver associações, ou 's' para sair"
        }
    }
}

pub(crate) fn write_clues(
    f: &mut fmt::Formatter<'_>,
    clues: &[String],
    when_empty: &str,
) -> fmt::Result {
    if clues.is_empty() {
        return writeln!(f, "  {when_empty}");
    }
    for clue in clues {
        writeln!(f, "  • {clue}")?;
    }
    Ok(())
}

pub(crate) fn write_associations(
    f: &mut fmt::Formatter<'_>,
    pairs: &[(String, String)],
) -> fmt::Result {
    if pairs.is_empty() {
        return writeln!(f, "  Nenhuma associação foi feita ainda.");
    }
    for (clue, suspect) in pairs {
        writeln!(f, "  📌 '{clue}' → 🕵️ {suspect}")?;
    }
    Ok(())
}
