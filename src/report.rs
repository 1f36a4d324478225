//! Result record handed to the display sink

use std::fmt;

use serde::Serialize;

use crate::version::resolver::Resolution;
use crate::version::table;

/// How the reported label bounds the actual installed version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bound {
    Exact,
    Between,
    AtLeast,
    BelowKnownRange,
}

/// What the display sink renders.
///
/// `label` always names a known version: the matched one for `Exact`, the
/// nearest lower bound for `Between` and `AtLeast`, and the oldest known
/// version (the one the installation predates) for `BelowKnownRange`.
/// `upper` is only present for `Between`; building a `Between` report by hand
/// without `upper` renders as a plain lower bound ("at least").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub exact: bool,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<String>,
    pub bound: Bound,
}

impl From<Resolution> for Report {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Exact { label } => Self {
                exact: true,
                label: label.to_string(),
                upper: None,
                bound: Bound::Exact,
            },
            Resolution::Between { lower, upper } => Self {
                exact: false,
                label: lower.to_string(),
                upper: Some(upper.to_string()),
                bound: Bound::Between,
            },
            Resolution::AtLeast { label } => Self {
                exact: false,
                label: label.to_string(),
                upper: None,
                bound: Bound::AtLeast,
            },
            Resolution::BelowKnownRange => Self {
                exact: false,
                label: table::oldest().1.to_string(),
                upper: None,
                bound: Bound::BelowKnownRange,
            },
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bound {
            Bound::Exact => write!(f, "Exact version identified: {}", self.label),
            Bound::Between => {
                writeln!(f, "Could not identify exact version.")?;
                match &self.upper {
                    Some(upper) => {
                        write!(f, "Best guess is between {} and {}", self.label, upper)
                    }
                    None => write!(f, "Best guess is at least {}", self.label),
                }
            }
            Bound::AtLeast => {
                writeln!(f, "Could not identify exact version.")?;
                write!(f, "Best guess is at least {}", self.label)
            }
            Bound::BelowKnownRange => {
                writeln!(f, "Could not identify exact version.")?;
                write!(f, "Installed version is older than {}", self.label)
            }
        }
    }
}
