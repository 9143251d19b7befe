use chrono::Utc;
use clap::ArgMatches;
use sysinfo::System;
use tracing::{error, info};

use gbp_ps_core::{BuildId, BuildProcess, GraphQlClient, events};

use super::helpers::{load_config_with_warning, runtime, server_url};

pub(crate) fn handle_add_process_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let machine = required_arg(matches, "machine")?;
    let number = required_arg(matches, "number")?;
    let package = required_arg(matches, "package")?;
    let phase = required_arg(matches, "phase")?;

    let config = load_config_with_warning();
    let url = server_url(matches, &config)?;
    let client = GraphQlClient::new(&url)?;

    let process = BuildProcess {
        machine,
        id: BuildId::Text(number),
        build_host: System::host_name().unwrap_or_else(|| "localhost".to_string()),
        package,
        phase,
        start_time: Utc::now().fixed_offset(),
    };

    info!(
        event = "cli.add_process_started",
        machine = process.machine,
        id = %process.id,
        package = process.package,
        phase = process.phase,
        build_host = process.build_host
    );

    match runtime()?.block_on(client.add_process(&process)) {
        Ok(()) => {
            println!(
                "✅ Added {} {} {} ({})",
                process.machine, process.id, process.package, process.phase
            );
            info!(event = "cli.add_process_completed", machine = process.machine);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to add build process: {}", e);
            error!(event = "cli.add_process_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Fetch a positional argument, rejecting blank values.
fn required_arg(matches: &ArgMatches, name: &str) -> Result<String, Box<dyn std::error::Error>> {
    let value = matches
        .get_one::<String>(name)
        .ok_or_else(|| format!("{} argument is required", name))?;

    if value.trim().is_empty() {
        eprintln!("❌ Invalid {}: must not be empty", name);
        error!(event = "cli.add_process_invalid_argument", argument = name);
        return Err(format!("{} must not be empty", name).into());
    }

    Ok(value.clone())
}
