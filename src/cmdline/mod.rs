//! Declarative command-line option model.
//!
//! An option set is an ordered `Vec<OptionDefinition>`, authored once at
//! startup and immutable for the lifetime of a parse or help call. The
//! factory functions below produce the canonical option shapes; hand-rolled
//! `OptionDefinition` values are possible but rarely needed.
//!
//! Behavioral conventions:
//! - Valued options do not provide defaults unless explicitly requested.
//! - Switch options (single-boolean-parameter options) *do* provide a
//!   default: they are set to false when absent.

pub mod action;
pub mod help;
pub mod param;
pub mod parser;

pub use action::Action;
pub use help::{render_help, show_help};
pub use param::Parameter;
pub use parser::{parse_command_line, parse_command_line_into, validate_definitions};

/// Config key the parser checks after the token loop to decide whether help
/// was requested. Applications wire a switch to this key.
pub const SHOW_HELP_KEY: &str = "ShowHelp";

/// Option behavior flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    pub const REQUIRED: Flags = Flags(0x01);

    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

/// One command-line option: names, parameters, actions, and destination.
#[derive(Debug, Clone)]
pub struct OptionDefinition {
    /// Long names; the first is the primary name shown with full syntax in
    /// help text.
    pub long_names: Vec<String>,
    pub short_names: Vec<String>,
    pub parameters: Vec<Parameter>,
    /// Separator for splitting multi-value input and default strings.
    pub delimiter: char,
    /// Performed when the option is matched and its values validate.
    pub if_found: Action,
    /// Performed during default seeding when the option is absent.
    pub if_not_found: Action,
    /// Dotted destination path in the config tree.
    pub config_key: String,
    pub description: String,
    /// Rendered as `[Default: ...]` in help text when non-empty.
    pub default_description: String,
    pub flags: Flags,
}

impl OptionDefinition {
    pub fn is_required(&self) -> bool {
        self.flags.contains(Flags::REQUIRED)
    }

    /// Mark this option required. Meaningless combined with an automatic
    /// default; keeping the two apart is the application's responsibility.
    pub fn required(mut self) -> Self {
        self.flags = self.flags | Flags::REQUIRED;
        self
    }

    /// A switch takes exactly one boolean parameter and may be given bare:
    /// `--option` is shorthand for `--option=true`.
    pub fn is_switch(&self) -> bool {
        self.parameters.len() == 1 && self.parameters[0].is_boolean()
    }

    pub fn primary_name(&self) -> &str {
        self.long_names.first().map(String::as_str).unwrap_or("")
    }
}

/// Outcome of one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserState {
    /// The caller should stop: a parse error occurred or help was requested.
    pub exit: bool,
    /// Genuine malformed input was seen.
    pub parse_error: bool,
}

/// A fresh config tree together with the parse outcome.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub config: crate::config::Node,
    pub state: ParserState,
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|name| name.to_string()).collect()
}

/// Boolean switch, false unless given. `--name` and `--name=true` are
/// equivalent.
pub fn switch_option(long_name: &str, config_key: &str, description: &str) -> OptionDefinition {
    switch_option_with_aliases(&[long_name], &[], config_key, description)
}

/// Switch with alternate long names and short names. Secondary names render
/// as cross-references in help text.
pub fn switch_option_with_aliases(
    long_names: &[&str],
    short_names: &[&str],
    config_key: &str,
    description: &str,
) -> OptionDefinition {
    OptionDefinition {
        long_names: names(long_names),
        short_names: names(short_names),
        parameters: vec![Parameter::boolean("Value")],
        delimiter: ',',
        if_found: Action::StoreValues,
        if_not_found: Action::StoreConstants("false".to_string()),
        config_key: config_key.to_string(),
        description: description.to_string(),
        default_description: String::new(),
        flags: Flags::NONE,
    }
}

/// Companion to an existing switch on the same key, storing the logical
/// inverse of its value. Has *no* default of its own; define it only
/// alongside the switch it complements.
pub fn complement_switch_option(
    long_name: &str,
    config_key: &str,
    description: &str,
) -> OptionDefinition {
    OptionDefinition {
        long_names: names(&[long_name]),
        short_names: Vec::new(),
        parameters: vec![Parameter::boolean("Value")],
        delimiter: ',',
        if_found: Action::StoreInverseBool,
        if_not_found: Action::Nothing,
        config_key: config_key.to_string(),
        description: description.to_string(),
        default_description: String::new(),
        flags: Flags::NONE,
    }
}

/// Single-parameter option with no default; absence leaves the key unset.
pub fn valued_option(
    long_name: &str,
    parameter: Parameter,
    config_key: &str,
    description: &str,
) -> OptionDefinition {
    OptionDefinition {
        long_names: names(&[long_name]),
        short_names: Vec::new(),
        parameters: vec![parameter],
        delimiter: ',',
        if_found: Action::StoreValues,
        if_not_found: Action::Nothing,
        config_key: config_key.to_string(),
        description: description.to_string(),
        default_description: String::new(),
        flags: Flags::NONE,
    }
}

/// Single-parameter option whose absence stores `default_value` exactly as
/// if the user had typed it.
pub fn default_valued_option(
    long_name: &str,
    parameter: Parameter,
    default_value: &str,
    config_key: &str,
    description: &str,
) -> OptionDefinition {
    OptionDefinition {
        long_names: names(&[long_name]),
        short_names: Vec::new(),
        parameters: vec![parameter],
        delimiter: ',',
        if_found: Action::StoreValues,
        if_not_found: Action::StoreConstants(default_value.to_string()),
        config_key: config_key.to_string(),
        description: description.to_string(),
        default_description: default_value.to_string(),
        flags: Flags::NONE,
    }
}

/// Option taking one value per parameter, split on the delimiter. No
/// default.
pub fn multivalued_option(
    long_name: &str,
    parameters: Vec<Parameter>,
    config_key: &str,
    description: &str,
) -> OptionDefinition {
    OptionDefinition {
        long_names: names(&[long_name]),
        short_names: Vec::new(),
        parameters,
        delimiter: ',',
        if_found: Action::StoreValues,
        if_not_found: Action::Nothing,
        config_key: config_key.to_string(),
        description: description.to_string(),
        default_description: String::new(),
        flags: Flags::NONE,
    }
}

/// Multi-valued option whose absence stores `default_values` exactly as if
/// the user had typed the whole delimited string.
pub fn default_multivalued_option(
    long_name: &str,
    parameters: Vec<Parameter>,
    default_values: &str,
    config_key: &str,
    description: &str,
) -> OptionDefinition {
    OptionDefinition {
        long_names: names(&[long_name]),
        short_names: Vec::new(),
        parameters,
        delimiter: ',',
        if_found: Action::StoreValues,
        if_not_found: Action::StoreConstants(default_values.to_string()),
        config_key: config_key.to_string(),
        description: description.to_string(),
        default_description: default_values.to_string(),
        flags: Flags::NONE,
    }
}
