use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::Local;
use clap::ArgMatches;
use tracing::{error, info};

use gbp_ps_core::config::PsConfig;
use gbp_ps_core::config::defaults::UPDATE_INTERVAL_ENV_VAR;
use gbp_ps_core::poller::{IntervalSources, resolve_update_interval};
use gbp_ps_core::{
    GraphQlClient, PhaseColors, PollConfig, TableBody, events, gradient_ops, poll_ops, processes,
};

use super::helpers::{load_config_with_warning, runtime, server_url};
use crate::table::{JsonTableBody, TableOptions, TerminalTableBody};

pub(crate) fn handle_ps_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let continuous = matches.get_flag("continuous");
    let json_output = matches.get_flag("json");

    let config = load_config_with_warning();
    let url = server_url(matches, &config)?;
    let poll_config = build_poll_config(matches, &config, &url)?;
    let client = GraphQlClient::new(&url)?;

    let options = TableOptions {
        show_node: matches.get_flag("node") || config.display.node,
        show_start: matches.get_flag("start"),
        show_progress: !matches.get_flag("no-progress"),
        color: std::io::stdout().is_terminal(),
        clear_screen: continuous,
        hide_when_empty: !continuous,
        footer: continuous.then(|| {
            format!(
                "Refreshing every {}ms. Press Ctrl+C to exit.",
                poll_config.interval.as_millis()
            )
        }),
    };

    info!(
        event = "cli.ps_started",
        endpoint = %client.endpoint(),
        continuous = continuous,
        json_output = json_output,
        interval_ms = poll_config.interval.as_millis() as u64
    );

    let stdout = std::io::stdout();
    if json_output {
        run(&client, JsonTableBody::new(stdout), &poll_config, continuous)
    } else {
        run(
            &client,
            TerminalTableBody::new(stdout, options),
            &poll_config,
            continuous,
        )
    }
}

fn build_poll_config(
    matches: &ArgMatches,
    config: &PsConfig,
    url: &url::Url,
) -> Result<PollConfig, Box<dyn std::error::Error>> {
    let env_interval = std::env::var(UPDATE_INTERVAL_ENV_VAR).ok();
    let interval = resolve_update_interval(&IntervalSources {
        flag: matches
            .get_one::<String>("update-interval")
            .map(String::as_str),
        url: Some(url),
        env: env_interval.as_deref(),
        config: config.poll.update_interval,
    });

    let gradient = gradient_ops::resolve_gradient(
        matches.get_one::<String>("gradient-colors").map(String::as_str),
        matches.get_one::<PathBuf>("gradient-file").map(PathBuf::as_path),
        &config.display,
    )
    .inspect_err(|e| {
        eprintln!("❌ Invalid gradient colours: {}", e);
        error!(event = "cli.ps_gradient_invalid", error = %e);
        events::log_app_error(e);
    })?;

    Ok(PollConfig {
        interval,
        colors: PhaseColors::new(&gradient),
    })
}

fn run<B: TableBody>(
    client: &GraphQlClient,
    body: B,
    poll_config: &PollConfig,
    continuous: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if continuous {
        run_continuous(client, body, poll_config)
    } else {
        run_once(client, body, poll_config)
    }
}

/// One fetch, one render. Failures are reported since there is no next cycle.
fn run_once<B: TableBody>(
    client: &GraphQlClient,
    mut body: B,
    poll_config: &PollConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = runtime()?.block_on(client.get_processes());

    match result {
        Ok(build_processes) => {
            let rows = processes::build_rows(&build_processes, &Local::now(), &poll_config.colors);
            let count = rows.len();
            body.replace_rows(rows)?;

            info!(event = "cli.ps_completed", count = count);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to fetch build processes: {}", e);
            error!(event = "cli.ps_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Poll until Ctrl+C. Cycle failures keep the previous table on screen.
fn run_continuous<B: TableBody>(
    client: &GraphQlClient,
    mut body: B,
    poll_config: &PollConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let cycles = runtime()?.block_on(poll_ops::run_poll_loop(
        client,
        &mut body,
        poll_config,
        async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(event = "cli.ps_signal_failed", error = %e);
            }
        },
    ));

    events::log_app_shutdown();
    info!(event = "cli.ps_completed", cycles = cycles);

    Ok(())
}
