use std::process;

use anyhow::Result;
use clap::Parser;
use rsinfo::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let subscriber = tracing_subscriber::fmt()
    .with_max_level(cli.verbose.tracing_level_filter())
    .with_writer(std::io::stderr)
    .without_time()
    .finish();
  tracing::subscriber::set_global_default(subscriber)?;
  tracing_log::LogTracer::init()?;

  match &cli.commands {
    Commands::Describe(args) => {
      if let Err(err) = rsinfo::describe(args).await {
        eprintln!("{err:#}");
        process::exit(1);
      }
    }
  }

  Ok(())
}
