use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use lan_chat::{
    cli::{self, Cli},
    session,
};

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "lan-chat".to_string());
    if args.next().is_none() {
        // Running without arguments is an informational exit, not an error.
        println!("{program}: missing required options");
        println!("Try '{program} --help' for more information.");
        return Ok(());
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // One console reader for the whole process: the nickname prompt and
    // the broadcaster loop read from the same buffer.
    let mut console = BufReader::new(tokio::io::stdin()).lines();
    let display_name = cli::prompt_display_name(&mut console).await?;
    let config = cli.into_config(display_name);

    session::run(config, console).await
}
