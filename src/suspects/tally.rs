//! Suspect citation tally
//!
//! Counts how many stored clues point at each suspect, remembering the
//! order in which suspects were first seen. That order decides ties.

/// Citation count for one suspect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Citation<'a> {
    /// Suspect name
    pub suspect: &'a str,
    /// Number of clues pointing at the suspect
    pub count: usize,
}

/// Per-suspect counts in first-encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationTally<'a> {
    citations: Vec<Citation<'a>>,
}

impl<'a> CitationTally<'a> {
    /// Count one more citation of `suspect`
    pub fn cite(&mut self, suspect: &'a str) {
        match self.citations.iter_mut().find(|c| c.suspect == suspect) {
            Some(citation) => citation.count += 1,
            None => self.citations.push(Citation { suspect, count: 1 }),
        }
    }

    /// Count for a suspect (0 if never cited)
    pub fn count(&self, suspect: &str) -> usize {
        self.citations
            .iter()
            .find(|c| c.suspect == suspect)
            .map_or(0, |c| c.count)
    }

    /// Suspect with the highest count; the earliest seen wins a tie
    pub fn leader(&self) -> Option<Citation<'a>> {
        let mut best: Option<Citation<'a>> = None;
        for citation in &self.citations {
            if best.map_or(true, |b| citation.count > b.count) {
                best = Some(*citation);
            }
        }
        best
    }

    /// All citations in first-encounter order
    pub fn citations(&self) -> &[Citation<'a>] {
        &self.citations
    }

    /// Number of distinct suspects
    pub fn len(&self) -> usize {
        self.citations.len()
    }

    /// Check if nobody was cited
    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for CitationTally<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = CitationTally::default();
        for suspect in iter {
            tally.cite(suspect);
        }
        tally
    }
}
