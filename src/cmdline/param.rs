//! Parameter type system: named, pluggable value validators.
//!
//! A [`Parameter`] never mutates state. Validation is a pure function of the
//! candidate string; failures are reported through the logging collaborator
//! and signalled by the return value. Instances are plain values, freely
//! shared across any number of option sets.

use crate::logging::Log;

/// A named value validator attached to an option slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    kind: ParamKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParamKind {
    /// Any string is valid.
    Str,
    /// Case-insensitive true/false/yes/no/on/off/1/0.
    Bool,
    /// Signed 64-bit integer, optionally within inclusive bounds.
    Int { bounds: Option<(i64, i64)> },
}

impl Parameter {
    pub fn string(name: impl Into<String>) -> Self {
        Parameter { name: name.into(), kind: ParamKind::Str }
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Parameter { name: name.into(), kind: ParamKind::Bool }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Parameter { name: name.into(), kind: ParamKind::Int { bounds: None } }
    }

    /// Bounded integer. Bounds are inclusive and swapped if given out of
    /// order.
    pub fn integer_in(name: impl Into<String>, lower: i64, upper: i64) -> Self {
        let bounds = if lower <= upper { (lower, upper) } else { (upper, lower) };
        Parameter { name: name.into(), kind: ParamKind::Int { bounds: Some(bounds) } }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this parameter is boolean-typed. An option with exactly one
    /// boolean parameter is a switch.
    pub fn is_boolean(&self) -> bool {
        self.kind == ParamKind::Bool
    }

    /// Validate one candidate value. Returns `true` when the value is
    /// acceptable; otherwise logs exactly one error naming the option and
    /// the 1-based parameter position.
    pub fn validate(&self, log: &dyn Log, option_name: &str, value: &str, position: usize) -> bool {
        match &self.kind {
            ParamKind::Str => true,
            ParamKind::Bool => {
                let valid = matches!(
                    value.to_lowercase().as_str(),
                    "true" | "false" | "yes" | "no" | "on" | "off" | "1" | "0"
                );
                if !valid {
                    log.error(&format!(
                        "Argument {position} to '{option_name}' must be a boolean value ('true' or 'false')."
                    ));
                }
                valid
            }
            ParamKind::Int { bounds } => match value.parse::<i64>() {
                Ok(parsed) => match bounds {
                    Some((lower, upper)) if !(*lower <= parsed && parsed <= *upper) => {
                        log.error(&format!(
                            "Argument {position} to '{option_name}' must be an integer within range [{lower},{upper}]."
                        ));
                        false
                    }
                    _ => true,
                },
                Err(_) => {
                    log.error(&format!(
                        "Argument {position} to '{option_name}' must be an integer."
                    ));
                    false
                }
            },
        }
    }
}
