use clap::ArgMatches;
use clap_complete::Shell;
use tracing::info;

use crate::app::build_cli;

pub(crate) fn handle_completions_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let shell = *matches
        .get_one::<Shell>("shell")
        .ok_or("Shell argument is required")?;

    info!(event = "cli.completions_started", shell = %shell);

    let mut cmd = build_cli();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout().lock());

    Ok(())
}
