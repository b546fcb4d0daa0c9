//! Exploration state machine
//!
//! States: `AtRoom(room)` and `Finished(reason)`.
//! Each [`Explorer::step`] consumes one input line (or `None` for end of
//! input) and returns the events it produced. No I/O happens here.

use super::{Command, Event, FinishReason, Input, Level};
use crate::ledger::ClueLedger;
use crate::map::{clue_for_room, Direction, Room};
use crate::report::Report;
use crate::suspects::SuspectIndex;
use crate::{GameConfig, GameError};

/// Current state of an exploration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<'m> {
    /// Standing in a non-leaf room, waiting for a command
    AtRoom(&'m Room),

    /// Exploration is over
    Finished(FinishReason),
}

/// One player's walk through a map
///
/// Owns the clue ledger and suspect index; borrows the map.
#[derive(Debug)]
pub struct Explorer<'m> {
    phase: Phase<'m>,
    level: Level,
    ledger: ClueLedger,
    suspects: SuspectIndex,
    path: Vec<&'m str>,
    moves: usize,
}

impl<'m> Explorer<'m> {
    /// Open a session at `root`
    ///
    /// Entering the root already counts as a visit: its clue (if any) is
    /// recorded, and a root without exits finishes immediately.
    pub fn start(root: &'m Room, config: &GameConfig) -> Result<(Self, Vec<Event>), GameError> {
        config.validate()?;

        let mut explorer = Self {
            phase: Phase::AtRoom(root),
            level: config.level,
            ledger: ClueLedger::new(),
            suspects: SuspectIndex::new(config.bucket_count)?,
            path: Vec::new(),
            moves: 0,
        };

        let mut events = vec![Event::Started {
            level: explorer.level,
        }];
        explorer.enter(root, &mut events);

        Ok((explorer, events))
    }

    /// Feed one line of input (`None` once input is exhausted)
    ///
    /// Once finished, further steps are ignored and return no events.
    pub fn step(&mut self, line: Option<&str>) -> Vec<Event> {
        let mut events = Vec::new();

        let Phase::AtRoom(room) = self.phase else {
            return events;
        };

        let Some(line) = line else {
            self.finish(FinishReason::InputExhausted, &mut events);
            return events;
        };

        let level = self.level;
        match Input::parse(line) {
            Input::Empty => {
                tracing::debug!(room = room.name(), "empty input");
                events.push(Event::EmptyInput { level });
                events.push(Event::Prompt { level });
            }
            Input::Unknown(input) => {
                tracing::debug!(room = room.name(), %input, "unknown command");
                events.push(Event::InvalidCommand { input, level });
                events.push(Event::Prompt { level });
            }
            Input::Command(command) if !level.allows(command) => {
                tracing::debug!(room = room.name(), key = %command.key(), %level, "command unavailable");
                events.push(Event::Unavailable { command, level });
                events.push(Event::Prompt { level });
            }
            Input::Command(Command::Move(direction)) => self.walk(room, direction, &mut events),
            Input::Command(Command::ListClues) => {
                events.push(Event::Clues(
                    self.ledger.iter().map(str::to_string).collect(),
                ));
                events.push(Event::Prompt { level });
            }
            Input::Command(Command::ListAssociations) => {
                events.push(Event::Associations(
                    self.suspects
                        .iter()
                        .map(|(clue, suspect)| (clue.to_string(), suspect.to_string()))
                        .collect(),
                ));
                events.push(Event::Prompt { level });
            }
            Input::Command(Command::Quit) => self.finish(FinishReason::Quit, &mut events),
        }

        events
    }

    fn walk(&mut self, room: &'m Room, direction: Direction, events: &mut Vec<Event>) {
        match room.child(direction) {
            Some(next) => {
                self.moves += 1;
                self.enter(next, events);
            }
            None => {
                tracing::debug!(room = room.name(), %direction, "no exit");
                events.push(Event::Blocked { direction });
                events.push(Event::Prompt { level: self.level });
            }
        }
    }

    fn enter(&mut self, room: &'m Room, events: &mut Vec<Event>) {
        tracing::debug!(room = room.name(), moves = self.moves, "entered room");
        self.path.push(room.name());
        events.push(Event::Entered {
            room: room.name().to_string(),
        });

        // Clues are checked before the leaf test so leaf rooms still yield theirs
        if self.level.records_clues() {
            if let Some(found) = clue_for_room(room.name()) {
                self.ledger.insert(found.clue);
                if self.level.records_suspects() {
                    self.suspects.insert(found.clue, found.suspect);
                }
                events.push(Event::ClueFound {
                    clue: found.clue.to_string(),
                });
            }
        }

        if room.is_leaf() {
            self.finish(FinishReason::LeafReached, events);
        } else {
            self.phase = Phase::AtRoom(room);
            events.push(Event::Prompt { level: self.level });
        }
    }

    fn finish(&mut self, reason: FinishReason, events: &mut Vec<Event>) {
        tracing::info!(
            ?reason,
            moves = self.moves,
            clues = self.ledger.len(),
            "exploration finished"
        );
        self.phase = Phase::Finished(reason);
        events.push(Event::Finished { reason });
    }

    /// Current state
    pub fn phase(&self) -> Phase<'m> {
        self.phase
    }

    /// Room the player stands in, while exploring
    pub fn current_room(&self) -> Option<&'m Room> {
        match self.phase {
            Phase::AtRoom(room) => Some(room),
            Phase::Finished(_) => None,
        }
    }

    /// Check if exploration is over
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Why exploration ended, once it has
    pub fn finish_reason(&self) -> Option<FinishReason> {
        match self.phase {
            Phase::Finished(reason) => Some(reason),
            Phase::AtRoom(_) => None,
        }
    }

    /// Active level
    pub fn level(&self) -> Level {
        self.level
    }

    /// Clues found so far
    pub fn ledger(&self) -> &ClueLedger {
        &self.ledger
    }

    /// Clue → suspect associations found so far
    pub fn suspects(&self) -> &SuspectIndex {
        &self.suspects
    }

    /// Names of visited rooms, root first
    pub fn path(&self) -> &[&'m str] {
        &self.path
    }

    /// Successful moves made
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Summarize the session
    pub fn report(&self) -> Report {
        Report::from_explorer(self)
    }
}
