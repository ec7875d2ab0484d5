pub mod clients;
pub mod config;
pub mod error;
pub mod output;
pub mod redshift;
pub mod tags;

use std::env;

use anstyle::{AnsiColor, Color, Style};
use anyhow::Result;
use aws_config::meta::region::RegionProviderChain;
use aws_types::region::Region;
use clap::{Args, Parser, Subcommand, builder::Styles};
use clap_verbosity_flag::Verbosity;
use serde::{Deserialize, Serialize};

use crate::clients::RealRedshiftClients;

fn styles() -> Styles {
  Styles::styled()
    .header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
    .usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
    .literal(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Green))))
    .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
}

#[derive(Parser, Debug)]
#[command(author, about, version)]
#[command(propagate_version = true)]
#[command(styles = styles())]
pub struct Cli {
  #[command(subcommand)]
  pub commands: Commands,

  #[clap(flatten)]
  pub verbose: Verbosity,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  #[command(arg_required_else_help = true)]
  Describe(Describe),
}

/// Describe an Amazon Redshift cluster and its audit logging configuration
#[derive(Args, Debug, Serialize, Deserialize)]
pub struct Describe {
  /// The identifier of the cluster to describe
  #[arg(short, long, alias = "cluster-identifier", value_parser = clap::builder::NonEmptyStringValueParser::new())]
  pub cluster: String,

  /// The AWS region where the cluster is provisioned
  #[arg(short, long)]
  pub region: Option<String>,

  #[arg(short, long, value_enum, default_value_t)]
  pub format: output::Format,

  /// Write to file instead of stdout
  #[arg(short, long)]
  pub output: Option<String>,

  /// Path to a configuration file (defaults to `.rsinfo.yaml` when present)
  #[arg(long)]
  pub config: Option<String>,

  /// Tag key to exclude from the output; may be repeated
  #[arg(long = "ignore-tag-key", value_name = "KEY")]
  pub ignore_tag_keys: Vec<String>,

  /// Tag key prefix to exclude from the output; may be repeated
  #[arg(long = "ignore-tag-key-prefix", value_name = "PREFIX")]
  pub ignore_tag_key_prefixes: Vec<String>,
}

/// Look up the cluster and write the resulting record
pub async fn describe(args: &Describe) -> Result<()> {
  let config =
    config::load(args.config.as_deref())?.with_ignore_tags(&args.ignore_tag_keys, &args.ignore_tag_key_prefixes);

  let aws_config = get_config(&args.region).await?;
  let clients = RealRedshiftClients::new(&aws_config);

  let record = redshift::fetch(&clients, &config.ignore_tags, &args.cluster).await?;
  output::output(&record, &args.format, &args.output)?;

  Ok(())
}

/// Get the configuration to authn/authz with AWS that will be used across AWS clients
async fn get_config(region: &Option<String>) -> Result<aws_config::SdkConfig> {
  let aws_region = match region {
    Some(region) => Some(Region::new(region.to_owned())),
    None => env::var("AWS_REGION").ok().map(Region::new),
  };

  let region_provider = RegionProviderChain::first_try(aws_region).or_default_provider();

  Ok(aws_config::from_env().region(region_provider).load().await)
}
