//! Shared helpers: drive an explorer from a script of input lines.

#![allow(dead_code)]

use mystery_mansion::{Event, Explorer, GameConfig, Report, Room};

/// Everything a scripted session produced
pub struct Transcript {
    pub report: Report,
    pub events: Vec<Event>,
}

impl Transcript {
    /// Events rendered the way the console adapter prints them
    pub fn text(&self) -> String {
        let mut out = Vec::new();
        mystery_mansion::game::render(&mut out, &self.events).expect("render to memory");
        String::from_utf8(out).expect("narration is UTF-8")
    }

    /// Rooms entered, in order
    pub fn entered(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Entered { room } => Some(room.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Feed `lines` one by one; if the script runs out before the session
/// ends, signal end of input.
pub fn run_script(root: &Room, config: &GameConfig, lines: &[&str]) -> Transcript {
    let (mut explorer, mut events) = Explorer::start(root, config).expect("session starts");

    for line in lines {
        if explorer.is_finished() {
            break;
        }
        events.extend(explorer.step(Some(*line)));
    }
    if !explorer.is_finished() {
        events.extend(explorer.step(None));
    }

    Transcript {
        report: explorer.report(),
        events,
    }
}
