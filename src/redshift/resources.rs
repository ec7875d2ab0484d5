use std::{error::Error, fmt::Debug};

use anyhow::{Result, anyhow};
use aws_sdk_redshift::{
  Client as RedshiftClient,
  error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
  operation::describe_clusters::DescribeClustersError,
  types::Cluster,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reduce an SDK failure to a one-line description
///
/// Service errors keep only their code and message. The full error context,
/// including the raw response, goes to the debug log.
fn api_error<E, R>(err: SdkError<E, R>) -> anyhow::Error
where
  E: ProvideErrorMetadata + Error + Send + Sync + 'static,
  R: Debug + Send + Sync + 'static,
{
  debug!("{}", DisplayErrorContext(&err));

  match err.as_service_error() {
    Some(service) => match (service.code(), service.message()) {
      (Some(code), Some(message)) => anyhow!("{code}: {message}"),
      (Some(code), None) => anyhow!("{code}"),
      _ => anyhow!("{service}"),
    },
    None => anyhow::Error::new(err),
  }
}

/// Describe the cluster(s) matching the identifier
///
/// An identifier query is an exact match, so the result holds at most one
/// cluster. Redshift reports an unknown identifier as `ClusterNotFoundFault`;
/// that, like an absent list, is returned as empty and deciding that this
/// means "not found" is left to the caller.
pub async fn describe_clusters(client: &RedshiftClient, identifier: &str) -> Result<Vec<Cluster>> {
  let response = match client.describe_clusters().cluster_identifier(identifier).send().await {
    Ok(response) => response,
    Err(err) if matches!(err.as_service_error(), Some(DescribeClustersError::ClusterNotFoundFault(_))) => {
      debug!("DescribeClusters reported no cluster named {identifier}");
      return Ok(Vec::new());
    }
    Err(err) => return Err(api_error(err)),
  };

  let clusters = response.clusters.unwrap_or_default();
  debug!("DescribeClusters returned {} cluster(s) for {identifier}", clusters.len());

  Ok(clusters)
}

/// Audit logging configuration of a cluster
///
/// Owned copy of the `DescribeLoggingStatus` output so that it can be
/// cloned and constructed freely by callers and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingStatus {
  /// `Some(true)` only when logging is currently turned on
  pub logging_enabled: Option<bool>,
  /// S3 bucket receiving the log files
  pub bucket_name: Option<String>,
  /// Prefix applied to the log file names
  pub s3_key_prefix: Option<String>,
  /// `s3` or `cloudwatch`
  pub log_destination_type: Option<String>,
  /// Log types being exported (`connectionlog`, `userlog`, `useractivitylog`)
  pub log_exports: Vec<String>,
}

impl LoggingStatus {
  pub fn is_enabled(&self) -> bool {
    self.logging_enabled.unwrap_or_default()
  }
}

/// Describe the audit logging status of the cluster
pub async fn describe_logging_status(client: &RedshiftClient, identifier: &str) -> Result<LoggingStatus> {
  let output = client
    .describe_logging_status()
    .cluster_identifier(identifier)
    .send()
    .await
    .map_err(api_error)?;

  Ok(LoggingStatus {
    logging_enabled: output.logging_enabled.into(),
    bucket_name: output.bucket_name().map(ToOwned::to_owned),
    s3_key_prefix: output.s3_key_prefix().map(ToOwned::to_owned),
    log_destination_type: output.log_destination_type().map(|d| d.as_str().to_owned()),
    log_exports: output.log_exports().to_owned(),
  })
}
