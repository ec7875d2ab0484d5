use std::sync::Mutex;

use anyhow::{Result, bail};
use aws_sdk_redshift::types::Cluster;

use rsinfo::clients::RedshiftClients;
use rsinfo::redshift::LoggingStatus;

/// Mock AWS client for testing. Defaults to no described clusters with logging off.
/// Override specific fields to simulate different cluster states.
#[derive(Default)]
pub struct MockAwsClients {
  pub clusters: Vec<Cluster>,
  pub logging_status: LoggingStatus,
  /// Operations invoked, in order, with the identifier they were given
  pub calls: Mutex<Vec<(&'static str, String)>>,
}

impl MockAwsClients {
  pub fn with_cluster(cluster: Cluster) -> Self {
    Self {
      clusters: vec![cluster],
      ..Default::default()
    }
  }

  pub fn calls(&self) -> Vec<(&'static str, String)> {
    self.calls.lock().unwrap().clone()
  }

  fn record(&self, operation: &'static str, identifier: &str) {
    self.calls.lock().unwrap().push((operation, identifier.to_string()));
  }
}

impl RedshiftClients for MockAwsClients {
  async fn describe_clusters(&self, identifier: &str) -> Result<Vec<Cluster>> {
    self.record("DescribeClusters", identifier);
    Ok(self.clusters.clone())
  }

  async fn describe_logging_status(&self, identifier: &str) -> Result<LoggingStatus> {
    self.record("DescribeLoggingStatus", identifier);
    Ok(self.logging_status.clone())
  }
}

/// Mock that returns errors for all methods, used for error path testing
pub struct MockAwsClientsError;

impl RedshiftClients for MockAwsClientsError {
  async fn describe_clusters(&self, _identifier: &str) -> Result<Vec<Cluster>> { bail!("mock AWS error") }
  async fn describe_logging_status(&self, _identifier: &str) -> Result<LoggingStatus> { bail!("mock AWS error") }
}

/// Mock whose cluster describe succeeds but whose logging status call fails
pub struct MockLoggingError {
  pub cluster: Cluster,
}

impl RedshiftClients for MockLoggingError {
  async fn describe_clusters(&self, _identifier: &str) -> Result<Vec<Cluster>> {
    Ok(vec![self.cluster.clone()])
  }

  async fn describe_logging_status(&self, _identifier: &str) -> Result<LoggingStatus> {
    bail!("AccessDenied: not authorized to perform redshift:DescribeLoggingStatus")
  }
}
