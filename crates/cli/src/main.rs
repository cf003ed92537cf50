use anyhow::{Context, Result};
use clap::Parser;
use multichain_cli::{command_listing, render_result, CliArgs};
use multichain_rpc_client::{Command, RpcClient};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = CliArgs::parse();

    if cli.list_commands {
        for line in command_listing() {
            println!("{line}");
        }
        return Ok(());
    }

    let name = cli.command.as_deref().context("no command given")?;
    let command: Command = name.parse()?;
    let config = cli
        .connection_config()
        .context("invalid connection settings")?;
    let client = RpcClient::new(&config)?;

    debug!(
        target: "multichain",
        command = command.as_str(),
        host = %config.host,
        port = config.port,
        "running command"
    );

    let result = client.execute(command, cli.params()).await?;
    if let Some(output) = render_result(&result) {
        println!("{output}");
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,multichain=info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
