//! Actions translate option occurrences (or their absence) into config
//! tree writes.
//!
//! Each option carries two actions: one performed when the option is matched
//! on the command line, one when it is absent after the whole parse. The set
//! of behaviors is closed and small, so a tagged enum with exhaustive
//! matching replaces any open extension point.

use crate::config::{self, Node};

use super::OptionDefinition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Write the raw matched string to the option's config key and one child
    /// per parameter underneath it.
    StoreValues,
    /// Store a fixed string exactly as if the user had typed it. Used to
    /// materialize defaults.
    StoreConstants(String),
    /// Store the logical inverse of a single boolean value. Only valid on
    /// single-parameter options.
    StoreInverseBool,
    /// No effect. Used where absence should leave the key unset.
    Nothing,
}

impl Action {
    pub fn perform(&self, config: &mut Node, option: &OptionDefinition, raw: &str, values: &[String]) {
        match self {
            Action::StoreValues => store_values(config, option, raw, values),
            Action::StoreConstants(text) => {
                let parts: Vec<String> =
                    text.split(option.delimiter).map(str::to_string).collect();
                store_values(config, option, text, &parts);
            }
            Action::StoreInverseBool => {
                if values.len() > 1 {
                    panic!("StoreInverseBool can only be used with options taking a single parameter");
                }
                let inverted = if config::parse_bool(raw) { "false" } else { "true" };
                store_values(config, option, inverted, &[inverted.to_string()]);
            }
            Action::Nothing => {}
        }
    }
}

fn store_values(config: &mut Node, option: &OptionDefinition, raw: &str, values: &[String]) {
    let node = config.entry(&option.config_key);
    node.set_value(raw);

    // Remove children left by an earlier default action so repeated stores
    // never accumulate stale sub-values.
    node.remove_children();

    // One sub-node per parameter, but only when the split produced exactly
    // as many values as declared; arity errors were already reported.
    if values.len() == option.parameters.len() {
        for (parameter, value) in option.parameters.iter().zip(values) {
            node.add(parameter.name(), value.clone());
        }
    }
}
