use clap::ArgMatches;
use tracing::error;

use gbp_ps_core::events;

pub mod helpers;

mod add_process;
mod completions;
mod ps;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("ps", sub_matches)) => ps::handle_ps_command(sub_matches),
        Some(("add-process", sub_matches)) => add_process::handle_add_process_command(sub_matches),
        Some(("completions", sub_matches)) => completions::handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
