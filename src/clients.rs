use anyhow::Result;
use aws_sdk_redshift::types::Cluster;

use crate::redshift::resources::{self, LoggingStatus};

/// Trait abstracting all AWS API operations used by rsinfo
pub trait RedshiftClients {
  fn describe_clusters(&self, identifier: &str) -> impl std::future::Future<Output = Result<Vec<Cluster>>> + Send;
  fn describe_logging_status(&self, identifier: &str)
  -> impl std::future::Future<Output = Result<LoggingStatus>> + Send;
}

/// Real AWS client implementation wrapping the SDK client
pub struct RealRedshiftClients {
  redshift: aws_sdk_redshift::Client,
}

impl RealRedshiftClients {
  pub fn new(config: &aws_config::SdkConfig) -> Self {
    Self::from(aws_sdk_redshift::Client::new(config))
  }
}

impl From<aws_sdk_redshift::Client> for RealRedshiftClients {
  fn from(redshift: aws_sdk_redshift::Client) -> Self {
    Self { redshift }
  }
}

impl RedshiftClients for RealRedshiftClients {
  async fn describe_clusters(&self, identifier: &str) -> Result<Vec<Cluster>> {
    resources::describe_clusters(&self.redshift, identifier).await
  }

  async fn describe_logging_status(&self, identifier: &str) -> Result<LoggingStatus> {
    resources::describe_logging_status(&self.redshift, identifier).await
  }
}
