//! Usage and help text rendering.
//!
//! Layout is a pure function of the option set: [`render_help`] returns the
//! full text and [`show_help`] is the thin printing step. The same
//! definitions the parser consumes drive every line, so help can never
//! disagree with parsing behavior.
//!
//! Geometry: 80 display columns, syntax indented with a 2-column tab stop,
//! and descriptions sharing one start column computed from the widest
//! syntax, floored so descriptions never drop below 44 columns.

use rustc_hash::FxHashMap;
use std::path::Path;

use crate::error::InvalidDefinitions;
use crate::logging::Log;
use crate::text::{expand_tabs, wrap_words};

use super::{parser, OptionDefinition};

const DISPLAY_COLUMNS: usize = 80;
const TAB_STOP: usize = 2;
const DESCRIPTION_MIN_COLUMNS: usize = DISPLAY_COLUMNS - 36;

/// Validate the option set, then print its help text to stdout.
pub fn show_help(
    options: &[OptionDefinition],
    args: &[String],
    log: &dyn Log,
) -> Result<(), InvalidDefinitions> {
    parser::validate_definitions(options, log)?;
    print!("{}", render_help(options, &program_name(args)));
    Ok(())
}

/// Program name for the usage line: the file stem of `args[0]`.
pub fn program_name(args: &[String]) -> String {
    args.first()
        .map(|arg0| {
            Path::new(arg0)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| arg0.clone())
        })
        .unwrap_or_default()
}

/// Render the full usage and option listing. Pure; callers decide where the
/// text goes.
pub fn render_help(options: &[OptionDefinition], program: &str) -> String {
    let syntax_map = build_syntax_map(options);
    let widest_syntax = syntax_map.values().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    render_usage(&mut out, options, program, &syntax_map);
    if options.is_empty() {
        return out;
    }

    out.push('\n');
    out.push_str("Options:\n");

    // Start column for descriptions, floored so they keep a minimum width.
    let columns_available =
        if widest_syntax > DISPLAY_COLUMNS { 0 } else { DISPLAY_COLUMNS - widest_syntax };
    let description_start = if columns_available < DESCRIPTION_MIN_COLUMNS {
        DISPLAY_COLUMNS - DESCRIPTION_MIN_COLUMNS
    } else {
        widest_syntax
    };
    let description_columns = DISPLAY_COLUMNS - description_start;

    for option in options {
        render_option(&mut out, option, &syntax_map, description_start, description_columns);
    }
    out
}

/// Full syntax for a primary name: bare for switches, otherwise
/// `name=<param1>,<param2>,...` with parameter names lower-cased.
fn syntax_description(name: &str, option: &OptionDefinition) -> String {
    if option.parameters.is_empty() {
        return name.to_string();
    }
    let parameters: Vec<String> = option
        .parameters
        .iter()
        .map(|parameter| format!("<{}>", parameter.name().to_lowercase()))
        .collect();
    format!("{name}={}", parameters.join(","))
}

/// Tab-expanded syntax column for every name. Primary names carry the full
/// syntax; secondary long names and short names render bare with an extra
/// indent, cross-referencing the primary entry.
fn build_syntax_map(options: &[OptionDefinition]) -> FxHashMap<String, String> {
    let mut map = FxHashMap::default();
    for option in options {
        let primary = option.primary_name();
        let syntax = if option.is_switch() {
            // Switches read as --option rather than --option=<value>.
            primary.to_string()
        } else {
            syntax_description(primary, option)
        };
        map.insert(primary.to_string(), expand_tabs(&format!("\t{syntax}\t"), TAB_STOP));

        for name in option.long_names.iter().skip(1).chain(&option.short_names) {
            map.insert(name.clone(), expand_tabs(&format!("\t\t{name}\t"), TAB_STOP));
        }
    }
    map
}

fn render_usage(
    out: &mut String,
    options: &[OptionDefinition],
    program: &str,
    syntax_map: &FxHashMap<String, String>,
) {
    let required_names: Vec<&str> = options
        .iter()
        .filter(|option| option.is_required())
        .map(|option| option.primary_name())
        .collect();

    let mut parts = vec![program.to_string()];
    for name in &required_names {
        // The syntax map carries alignment whitespace; trim it here.
        if let Some(syntax) = syntax_map.get(*name) {
            parts.push(syntax.trim().to_string());
        }
    }
    if required_names.len() < options.len() {
        parts.push("[options]".to_string());
    }
    let usage_syntax = parts.join(" ");

    let prefix = "Usage: ";
    let lines = wrap_words(&usage_syntax, DISPLAY_COLUMNS - prefix.len());

    // Continuation lines align under the prefix.
    let padding = " ".repeat(prefix.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            out.push_str(prefix);
        } else {
            out.push_str(&padding);
        }
        out.push_str(line);
        out.push('\n');
    }
}

fn render_option(
    out: &mut String,
    option: &OptionDefinition,
    syntax_map: &FxHashMap<String, String>,
    description_start: usize,
    description_columns: usize,
) {
    let mut description_lines = wrap_words(&option.description, description_columns);

    // Append the default annotation to the last description line if it
    // fits, otherwise give it its own line.
    if !option.default_description.is_empty() {
        let defaults = format!("[Default: {}]", option.default_description);
        match description_lines.last_mut() {
            None => description_lines.push(defaults),
            Some(last) if last.is_empty() => *last = defaults,
            Some(last) => {
                let length_with_defaults = last.len() + 1 + defaults.len() + 1;
                if length_with_defaults >= description_columns {
                    description_lines.push(defaults);
                } else {
                    last.push(' ');
                    last.push_str(&defaults);
                }
            }
        }
    }

    let names: Vec<&String> = option.long_names.iter().chain(&option.short_names).collect();
    let num_lines = names.len().max(description_lines.len());

    for i in 0..num_lines {
        let mut line = String::new();
        let mut column = 0;

        if let Some(name) = names.get(i) {
            if let Some(syntax) = syntax_map.get(*name) {
                line.push_str(syntax);
                column = syntax.len();
            }
        }

        if let Some(description) = description_lines.get(i).filter(|d| !d.is_empty()) {
            if column > description_start {
                // Syntax too wide for the shared column; push the
                // description to its own row.
                line.push('\n');
                column = 0;
            }
            if column < description_start {
                line.push_str(&" ".repeat(description_start - column));
            }
            line.push_str(description);
        }

        for row in line.split('\n') {
            out.push_str(row.trim_end());
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmdline::{self, Parameter};

    #[test]
    fn program_name_strips_path_and_extension() {
        assert_eq!(program_name(&["/usr/local/bin/server.exe".to_string()]), "server");
        assert_eq!(program_name(&["prog".to_string()]), "prog");
        assert_eq!(program_name(&[]), "");
    }

    #[test]
    fn switch_syntax_omits_parameters() {
        let option = cmdline::switch_option("--verbose", "Verbose", "More output.");
        let map = build_syntax_map(&[option]);
        assert_eq!(map["--verbose"], "  --verbose ");
    }

    #[test]
    fn valued_syntax_lists_lowercased_parameters() {
        let option = cmdline::multivalued_option(
            "--size",
            vec![Parameter::integer("Width"), Parameter::integer("Height")],
            "Image.Size",
            "Dimensions.",
        );
        let map = build_syntax_map(&[option]);
        assert_eq!(map["--size"], "  --size=<width>,<height> ");
    }

    #[test]
    fn secondary_names_are_indented_and_bare() {
        let option = cmdline::switch_option_with_aliases(
            &["--help", "--halp"],
            &["-h"],
            "ShowHelp",
            "Help.",
        );
        let map = build_syntax_map(&[option]);
        assert_eq!(map["--halp"], "    --halp  ");
        assert_eq!(map["-h"], "    -h  ");
    }

    #[test]
    fn usage_lists_required_syntax_and_options_marker() {
        let options = vec![
            cmdline::valued_option("--model", Parameter::string("Path"), "Model", "Weights.")
                .required(),
            cmdline::switch_option("--verbose", "Verbose", "More output."),
        ];
        let help = render_help(&options, "prog");
        let usage = help.lines().next().unwrap();
        assert_eq!(usage, "Usage: prog --model=<path> [options]");
    }

    #[test]
    fn usage_omits_options_marker_when_everything_is_required() {
        let options = vec![cmdline::valued_option(
            "--model",
            Parameter::string("Path"),
            "Model",
            "Weights.",
        )
        .required()];
        let help = render_help(&options, "prog");
        assert_eq!(help.lines().next().unwrap(), "Usage: prog --model=<path>");
    }

    #[test]
    fn empty_option_set_renders_usage_only() {
        let help = render_help(&[], "prog");
        assert_eq!(help, "Usage: prog\n");
    }
}
