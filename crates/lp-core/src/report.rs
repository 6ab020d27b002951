//! Per-language outcomes of a patch run.

use std::fmt;

/// What happened for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The module was spliced in at `offset` (bytes, in the buffer as it
    /// was when this entry was processed).
    Applied {
        code: String,
        offset: usize,
        bytes: usize,
    },
    /// Nothing was inserted for this code.
    Skipped {
        code: String,
        error: lp_splice::Error,
    },
}

impl Outcome {
    pub fn code(&self) -> &str {
        match self {
            Self::Applied { code, .. } | Self::Skipped { code, .. } => code,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Human-readable warning for a skipped entry.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Applied { .. } => None,
            Self::Skipped { code, error } => Some(match error {
                lp_splice::Error::MarkerNotFound { .. } => {
                    format!("Could not find {} in file", code)
                }
                lp_splice::Error::UnbalancedSection { depth, .. } => format!(
                    "Could not find end of {} section ({} unclosed bracket(s))",
                    code, depth
                ),
                other => format!("Could not patch {}: {}", code, other),
            }),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied {
                code,
                offset,
                bytes,
            } => write!(f, "{}: inserted {} bytes at {}", code, bytes, offset),
            Self::Skipped { .. } => write!(f, "{}", self.warning().unwrap_or_default()),
        }
    }
}

/// Outcomes in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    outcomes: Vec<Outcome>,
}

impl PatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn applied(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.is_applied())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.is_applied())
    }

    /// Warning lines for every skipped entry, in order.
    pub fn warnings(&self) -> Vec<String> {
        self.outcomes.iter().filter_map(Outcome::warning).collect()
    }

    pub fn applied_count(&self) -> usize {
        self.applied().count()
    }

    /// Total bytes added to the buffer.
    pub fn bytes_added(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                Outcome::Applied { bytes, .. } => *bytes,
                Outcome::Skipped { .. } => 0,
            })
            .sum()
    }

    /// True when every entry was applied.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(Outcome::is_applied)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
