use std::{fs::File, io::prelude::*};

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::{Table, settings::Style};

use crate::redshift::ClusterRecord;

#[derive(Clone, Copy, Debug, Default, ValueEnum, Serialize, Deserialize)]
pub enum Format {
  /// JSON format used for logging or writing to a *.json file
  Json,
  /// Text format used for writing to stdout
  #[default]
  Text,
}

/// Render the record as an attribute table, followed by a node table when nodes are reported
pub fn to_stdout_table(record: &ClusterRecord) -> String {
  let mut output = String::new();

  let mut table = Table::new(record.attributes());
  table.with(Style::sharp());
  output.push_str(&format!("{table}\n"));

  if !record.cluster_nodes.is_empty() {
    let mut nodes = Table::new(&record.cluster_nodes);
    nodes.with(Style::sharp());
    output.push_str(&format!("{nodes}\n"));
  }

  output
}

pub fn render(record: &ClusterRecord, format: &Format) -> Result<String> {
  let output = match format {
    Format::Json => serde_json::to_string_pretty(record)?,
    Format::Text => to_stdout_table(record),
  };

  Ok(output)
}

pub(crate) fn output(record: &ClusterRecord, format: &Format, filename: &Option<String>) -> Result<()> {
  let output = render(record, format)?;

  match filename {
    Some(filename) => {
      let mut file = File::create(filename)?;
      file.write_all(output.as_bytes())?;
    }
    None => {
      println!("{output}");
    }
  }

  Ok(())
}
