use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("gbp-ps")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Watch the build processes of a Gentoo Build Publisher server")
        .long_about("gbp-ps polls the GraphQL endpoint of a Gentoo Build Publisher server for the ebuild processes currently running on its build machines and shows them as a table with elapsed time and phase progress.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .short('u')
                .help("Base URL of the Gentoo Build Publisher server (overrides config and GBP_PS_URL)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("ps")
                .about("Show the build processes currently running")
                .arg(
                    Arg::new("continuous")
                        .long("continuous")
                        .short('c')
                        .help("Keep polling and redraw the table until Ctrl+C")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("update-interval")
                        .long("update-interval")
                        .short('i')
                        .help("Milliseconds between polls in continuous mode (default: 500)")
                        .allow_hyphen_values(true)
                )
                .arg(
                    Arg::new("node")
                        .long("node")
                        .short('n')
                        .help("Show the build host of each process")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .short('s')
                        .help("Show the start time of each process")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("no-progress")
                        .long("no-progress")
                        .help("Hide the phase progress bar")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("gradient-colors")
                        .long("gradient-colors")
                        .help("JSON array of phase colours, e.g. '[\"#4d5e6f\", \"#f5a623\"]'")
                        .conflicts_with("gradient-file")
                )
                .arg(
                    Arg::new("gradient-file")
                        .long("gradient-file")
                        .help("File containing a JSON array of phase colours")
                        .value_parser(value_parser!(PathBuf))
                )
        )
        .subcommand(
            Command::new("add-process")
                .about("Report a build process to the server")
                .arg(
                    Arg::new("machine")
                        .help("Machine the build belongs to")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("number")
                        .help("Build number")
                        .required(true)
                        .index(2)
                )
                .arg(
                    Arg::new("package")
                        .help("Package being built, e.g. sys-apps/portage-3.0.51")
                        .required(true)
                        .index(3)
                )
                .arg(
                    Arg::new("phase")
                        .help("Current ebuild phase")
                        .required(true)
                        .index(4)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(value_parser!(Shell))
                )
        )
}
