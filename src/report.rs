//! End-of-game summary
//!
//! Snapshot of an explorer's ledger and index, rendered as the final
//! investigation block. Sections follow the session's level.

use crate::game::{write_associations, write_clues, Explorer, FinishReason, Level};
use std::fmt;

const RULE: &str = "═════════════════════════════════════════";

/// Final investigation summary
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Level the session ran at
    pub level: Level,

    /// Visited rooms, root first
    pub path: Vec<String>,

    /// Successful moves
    pub moves: usize,

    /// Why exploration ended (`None` if still running)
    pub finish: Option<FinishReason>,

    /// Clues found, ascending
    pub clues: Vec<String>,

    /// Clue → suspect pairs in index scan order
    pub associations: Vec<(String, String)>,

    /// Citation count per suspect, first-encounter order
    pub citations: Vec<(String, usize)>,

    /// Most cited suspect, if any clue points at someone
    pub prime_suspect: Option<String>,
}

impl Report {
    /// Capture the state of `explorer`
    pub fn from_explorer(explorer: &Explorer<'_>) -> Self {
        let suspects = explorer.suspects();
        let tally = suspects.tally();

        Self {
            level: explorer.level(),
            path: explorer.path().iter().map(|room| room.to_string()).collect(),
            moves: explorer.moves(),
            finish: explorer.finish_reason(),
            clues: explorer.ledger().iter().map(str::to_string).collect(),
            associations: suspects
                .iter()
                .map(|(clue, suspect)| (clue.to_string(), suspect.to_string()))
                .collect(),
            citations: tally
                .citations()
                .iter()
                .map(|c| (c.suspect.to_string(), c.count))
                .collect(),
            prime_suspect: tally.leader().map(|c| c.suspect.to_string()),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n📊 RESUMO FINAL DA INVESTIGAÇÃO")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "\n🚪 Caminho percorrido: {}", self.path.join(" → "))?;
        writeln!(f, "👣 Movimentos: {}", self.moves)?;
        if let Some(reason) = self.finish {
            writeln!(f, "🏁 Exploração {reason}")?;
        }

        if self.level.records_clues() {
            writeln!(f, "\n📜 Pistas encontradas:")?;
            write_clues(f, &self.clues, "Nenhuma pista foi encontrada.")?;
        }

        if self.level.records_suspects() {
            writeln!(f, "\n🔗 Associações Pista → Suspeito:")?;
            write_associations(f, &self.associations)?;

            writeln!(f, "\n🕵️ SUSPEITO PRINCIPAL (mais associado às pistas):")?;
            match &self.prime_suspect {
                Some(suspect) => writeln!(f, "  >>> {suspect} <<<")?,
                None => writeln!(f, "  Impossível determinar (sem dados suficientes).")?,
            }
        }

        write!(f, "\n{RULE}")
    }
}
