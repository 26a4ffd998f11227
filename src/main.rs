use clap::Parser;
use protolog::{handle_admin_commands, handle_report_commands, load_config, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if handle_admin_commands(&cli)? {
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    handle_report_commands(&cli, &config)
}
