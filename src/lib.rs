//! optdef: declarative command-line option definitions.
//!
//! **optdef turns a declarative list of option definitions into a parsed
//! configuration tree and aligned help text.**
//!
//! Applications author an ordered set of [`cmdline::OptionDefinition`]s once,
//! at startup. The same set drives both sides of the command line:
//!
//! - [`cmdline::parse_command_line`] walks argv against the set, validates
//!   types and arity, and writes results into a hierarchical [`config::Node`]
//!   tree, seeding defaults for options that never appear.
//! - [`cmdline::show_help`] renders a column-aligned, word-wrapped usage and
//!   option listing from the identical definitions, so help text can never
//!   drift from parsing behavior.
//!
//! # Option shapes
//!
//! Six factory functions cover the canonical shapes: plain switches,
//! complement switches (storing the inverse of a paired switch), valued and
//! multi-valued options, and defaulted variants of both. Any option can be
//! marked required with [`cmdline::OptionDefinition::required`].
//!
//! # Error model
//!
//! Mistakes in the option set itself (duplicate names, a missing long name,
//! `=` inside a name) are author errors: they are collected into an
//! [`error::InvalidDefinitions`] and no parse is attempted. Mistakes in user
//! input (unknown option, bad value, missing required option) are logged
//! through the [`logging::Log`] collaborator and folded into a single
//! `parse_error` flag; the parser keeps scanning so one run reports every
//! problem.
//!
//! # Example
//!
//! ```
//! use optdef::cmdline::{self, Parameter};
//! use optdef::logging::StderrLog;
//!
//! let options = vec![
//!     cmdline::switch_option("--verbose", "Verbose", "Enable verbose logging."),
//!     cmdline::default_valued_option(
//!         "--timeout",
//!         Parameter::integer_in("Seconds", 1, 3600),
//!         "30",
//!         "Timeout",
//!         "Request timeout.",
//!     ),
//! ];
//!
//! let args: Vec<String> = vec!["prog".into(), "--timeout=90".into()];
//! let result = cmdline::parse_command_line(&options, &args, &StderrLog).unwrap();
//! assert!(!result.state.parse_error);
//! assert_eq!(result.config.value_as_default("Timeout", 0_i64), 90);
//! assert!(!result.config.bool_default("Verbose", true));
//! ```

pub mod cmdline;
pub mod config;
pub mod error;
pub mod logging;
pub mod text;

pub use cmdline::{OptionDefinition, ParseResult, ParserState};
pub use config::Node;
pub use error::{DefinitionError, InvalidDefinitions};
pub use logging::{Log, StderrLog};
