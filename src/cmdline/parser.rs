//! Option set validation and argv parsing.
//!
//! Validation catches author mistakes and runs before every parse and help
//! call; its failures are fatal. Parsing reports user mistakes through the
//! logging collaborator, keeps scanning so one run reports every problem,
//! and folds the outcome into a single [`ParserState`].

use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::Node;
use crate::error::{DefinitionError, InvalidDefinitions};
use crate::logging::Log;

use super::help;
use super::{OptionDefinition, ParseResult, ParserState, SHOW_HELP_KEY};

/// Check an option set for author mistakes: duplicate names across all long
/// and short name lists, options without a long name, and names containing
/// `=`. Every problem is logged and collected before the error is returned.
pub fn validate_definitions(
    options: &[OptionDefinition],
    log: &dyn Log,
) -> Result<(), InvalidDefinitions> {
    let mut problems = validate_unique_names(log, options);
    problems.extend(validate_has_name(log, options));
    if problems.is_empty() {
        Ok(())
    } else {
        Err(InvalidDefinitions { problems })
    }
}

fn validate_unique_names(log: &dyn Log, options: &[OptionDefinition]) -> Vec<DefinitionError> {
    let mut num_times_used: FxHashMap<&str, usize> = FxHashMap::default();
    for option in options {
        for name in option.long_names.iter().chain(&option.short_names) {
            *num_times_used.entry(name.as_str()).or_insert(0) += 1;
        }
    }

    let mut duplicates: Vec<&str> = num_times_used
        .iter()
        .filter(|&(_, &uses)| uses > 1)
        .map(|(&name, _)| name)
        .collect();
    duplicates.sort_unstable();

    duplicates
        .into_iter()
        .map(|name| {
            log.error(&format!("Option name used multiple times: {name}"));
            DefinitionError::DuplicateName(name.to_string())
        })
        .collect()
}

fn validate_names(log: &dyn Log, problems: &mut Vec<DefinitionError>, names: &[String]) -> usize {
    let mut num_names = 0;
    for name in names {
        if !name.is_empty() {
            num_names += 1;
        }
        if name.contains('=') {
            log.error(&format!("Option {name} contains forbidden character '='."));
            problems.push(DefinitionError::ForbiddenCharacter(name.clone()));
        }
    }
    num_names
}

fn validate_has_name(log: &dyn Log, options: &[OptionDefinition]) -> Vec<DefinitionError> {
    let mut problems = Vec::new();
    for (idx, option) in options.iter().enumerate() {
        let num_long_names = validate_names(log, &mut problems, &option.long_names);
        if num_long_names == 0 {
            log.error(&format!("Option {} must have at least one long name.", idx + 1));
            problems.push(DefinitionError::MissingLongName(idx + 1));
        }
        validate_names(log, &mut problems, &option.short_names);
    }
    problems
}

/// Parse argv into a fresh config tree named `CommandLine`.
///
/// `args[0]` is the program name; it is used for the usage line only and
/// never matched as an option.
pub fn parse_command_line(
    options: &[OptionDefinition],
    args: &[String],
    log: &dyn Log,
) -> Result<ParseResult, InvalidDefinitions> {
    let mut config = Node::new("CommandLine");
    let state = parse_command_line_into(&mut config, options, args, log)?;
    Ok(ParseResult { config, state })
}

/// Parse argv into a caller-owned config tree.
pub fn parse_command_line_into(
    config: &mut Node,
    options: &[OptionDefinition],
    args: &[String],
    log: &dyn Log,
) -> Result<ParserState, InvalidDefinitions> {
    validate_definitions(options, log)?;

    // An empty invocation is never auto-satisfied by defaults when
    // something is mandatory.
    if args.len() <= 1 && options.iter().any(OptionDefinition::is_required) {
        print!("{}", help::render_help(options, &help::program_name(args)));
        return Ok(ParserState { exit: true, parse_error: true });
    }

    store_defaults(config, options);

    let mut options_found: FxHashSet<usize> = FxHashSet::default();
    let mut parse_error = false;
    for arg in args.iter().skip(1) {
        let (name, separator_present, raw_values) = split_arg(arg);

        let matched = options.iter().position(|option| {
            option.long_names.iter().any(|n| n == name)
                || option.short_names.iter().any(|n| n == name)
        });
        let Some(idx) = matched else {
            log.error(&format!("Invalid option: {name}"));
            parse_error = true;
            continue;
        };
        let option = &options[idx];

        let mut values = raw_values.to_string();
        let mut value_list: Vec<String> = Vec::new();
        if !values.is_empty() {
            if option.parameters.len() == 1 {
                value_list.push(values.clone());
            } else if option.parameters.len() > 1 {
                value_list = values.split(option.delimiter).map(str::to_string).collect();
            }
        }

        let ok = if values.is_empty() && !separator_present && option.is_switch() {
            // Switch shorthand: forcibly insert "true" so that `--option`
            // is equivalent to `--option=true`, bypassing arity validation.
            values = "true".to_string();
            value_list.push("true".to_string());
            true
        } else {
            validate_occurrence(log, option, name, &value_list)
        };

        if ok {
            option.if_found.perform(config, option, &values, &value_list);
        }

        parse_error |= !ok;
        options_found.insert(idx);
    }

    let mut should_exit = parse_error;
    if config.bool_default(SHOW_HELP_KEY, false) {
        should_exit = true;
        print!("{}", help::render_help(options, &help::program_name(args)));
    } else {
        // When help was requested, omitting required options is not an
        // error.
        parse_error |= !required_options_covered(log, options, &options_found);
    }

    Ok(ParserState { exit: should_exit || parse_error, parse_error })
}

fn store_defaults(config: &mut Node, options: &[OptionDefinition]) {
    for option in options {
        option.if_not_found.perform(config, option, "", &[]);
    }
}

/// Split at the first `=`. The right side only exists when a separator was
/// present; `--opt` and `--opt=` are different inputs.
fn split_arg(arg: &str) -> (&str, bool, &str) {
    match arg.split_once('=') {
        Some((name, values)) => (name, true, values),
        None => (arg, false, ""),
    }
}

/// Check value count and each value's type for one option occurrence.
/// Returns `true` when the occurrence is valid; every per-parameter failure
/// is reported, not just the first.
fn validate_occurrence(
    log: &dyn Log,
    option: &OptionDefinition,
    name: &str,
    value_list: &[String],
) -> bool {
    if option.parameters.len() != value_list.len() {
        if option.parameters.len() == 1 {
            log.error(&format!("'{name}' expects a parameter but none was given."));
        } else {
            let were_given = if value_list.len() == 1 { "was given" } else { "were given" };
            log.error(&format!(
                "'{name}' expects {} parameters but {} {were_given}.",
                option.parameters.len(),
                value_list.len()
            ));
        }
        return false;
    }

    let mut ok = true;
    for (i, (parameter, value)) in option.parameters.iter().zip(value_list).enumerate() {
        ok &= parameter.validate(log, name, value, i + 1);
    }
    ok
}

fn required_options_covered(
    log: &dyn Log,
    options: &[OptionDefinition],
    options_found: &FxHashSet<usize>,
) -> bool {
    let mut all_found = true;
    for (idx, option) in options.iter().enumerate() {
        if option.is_required() && !options_found.contains(&idx) {
            log.error(&format!("Missing required option: {}", option.primary_name()));
            all_found = false;
        }
    }
    all_found
}
