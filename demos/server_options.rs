//! Option handling for a small inference server, end to end: define the
//! option set, parse the process arguments, then dump the resulting
//! configuration tree as JSON.
//!
//! Try `--help`, or e.g.:
//!
//! ```text
//! cargo run --example server_options -- --model=weights.gguf --port=9000 --verbose
//! ```

use std::process::ExitCode;

use optdef::cmdline::{self, Parameter, SHOW_HELP_KEY};
use optdef::logging::{Log, StderrLog};

fn options() -> Vec<cmdline::OptionDefinition> {
    vec![
        cmdline::switch_option_with_aliases(
            &["--help"],
            &["-h", "-?"],
            SHOW_HELP_KEY,
            "Show this help text.",
        ),
        cmdline::valued_option(
            "--model",
            Parameter::string("Path"),
            "Model.Weights",
            "Path to the GGUF model weights.",
        )
        .required(),
        cmdline::valued_option(
            "--mmproj",
            Parameter::string("Path"),
            "Model.Projector",
            "Path to the multimodal projector weights.",
        ),
        cmdline::default_valued_option(
            "--host",
            Parameter::string("Address"),
            "0.0.0.0",
            "Server.Host",
            "Interface to bind the listening socket to.",
        ),
        cmdline::default_valued_option(
            "--port",
            Parameter::integer_in("Port", 1, 65535),
            "8080",
            "Server.Port",
            "TCP port to listen on.",
        ),
        cmdline::default_multivalued_option(
            "--image-size",
            vec![Parameter::integer("Width"), Parameter::integer("Height")],
            "336,336",
            "Image.Size",
            "Maximum input image dimensions; larger images are scaled down.",
        ),
        cmdline::complement_switch_option(
            "--no-color",
            "Console.Color",
            "Disable colored console output.",
        ),
        cmdline::switch_option("--verbose", "Verbose", "Enable verbose logging."),
    ]
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let log = StderrLog;

    let result = match cmdline::parse_command_line(&options(), &args, &log) {
        Ok(result) => result,
        Err(err) => {
            log.error(&err.to_string());
            return ExitCode::FAILURE;
        }
    };
    if result.state.exit {
        return if result.state.parse_error {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    match serde_json::to_string_pretty(&result.config) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log.error(&format!("failed to serialize configuration: {err}"));
            ExitCode::FAILURE
        }
    }
}
