//! Error types for malformed option sets.
//!
//! These cover author mistakes only. User-input problems (unknown option,
//! bad value, missing required option) are reported through the logging
//! collaborator and folded into the parse state instead.

use thiserror::Error;

/// A single problem found while validating an option set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("option name used multiple times: {0}")]
    DuplicateName(String),
    #[error("option {0} must have at least one long name")]
    MissingLongName(usize),
    #[error("option name `{0}` contains forbidden character '='")]
    ForbiddenCharacter(String),
}

/// The full set of problems found in a malformed option set.
///
/// Raised before any parsing or help rendering is attempted: a broken
/// definition is a programming mistake that must be fixed, never a
/// recoverable runtime condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("ill-specified command line options ({n} problems), unable to parse", n = .problems.len())]
pub struct InvalidDefinitions {
    pub problems: Vec<DefinitionError>,
}
