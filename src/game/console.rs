//! Console adapter
//!
//! Reads one line per prompt, feeds it to the explorer, writes the
//! resulting events. End of input is reported to the explorer as `None`.

use super::{Event, Explorer};
use crate::map::Room;
use crate::report::Report;
use crate::{GameConfig, GameError};
use std::io::{BufRead, Write};

/// Write events to `output`; prompts stay on the same line and flush
pub fn render<W: Write>(output: &mut W, events: &[Event]) -> Result<(), GameError> {
    for event in events {
        if event.is_prompt() {
            write!(output, "{event}")?;
            output.flush()?;
        } else {
            writeln!(output, "{event}")?;
        }
    }
    Ok(())
}

/// Run a whole session against line-oriented input and output
pub fn play<R, W>(
    root: &Room,
    config: &GameConfig,
    mut input: R,
    mut output: W,
) -> Result<Report, GameError>
where
    R: BufRead,
    W: Write,
{
    let (mut explorer, opening) = Explorer::start(root, config)?;
    render(&mut output, &opening)?;

    let mut line = String::new();
    while !explorer.is_finished() {
        line.clear();
        let events = if input.read_line(&mut line)? == 0 {
            explorer.step(None)
        } else {
            explorer.step(Some(line.as_str()))
        };
        render(&mut output, &events)?;
    }

    Ok(explorer.report())
}
