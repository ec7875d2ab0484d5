use thiserror::Error;

/// Failures that terminate a cluster lookup
///
/// Every variant names the cluster so that a caller rendering the error to a
/// user does not need to carry the identifier separately. No partial record is
/// ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum LookupError {
  /// No cluster identifier was supplied
  #[error("A Redshift Cluster identifier is required")]
  InvalidIdentifier,

  /// The Redshift API call itself failed (transport, auth, throttling, service fault)
  #[error("Error calling {operation} for Redshift Cluster: {identifier}, error: {source:#}")]
  Api {
    identifier: String,
    operation: &'static str,
    #[source]
    source: anyhow::Error,
  },

  /// The describe call succeeded but returned no matching cluster
  #[error("Error describing Redshift Cluster: {identifier}, cluster information not found")]
  NotFound { identifier: String },

  /// A derived attribute could not be computed from the cluster's fields
  #[error("Error reading Redshift Cluster ({identifier}): {reason}")]
  Derivation { identifier: String, reason: String },

  /// A flattened list or map could not be stored on the record
  #[error("Error saving {attribute} to state for Redshift Cluster ({identifier}): {reason}")]
  StateWrite {
    identifier: String,
    attribute: &'static str,
    reason: String,
  },
}

impl LookupError {
  /// True when the cluster does not exist, as opposed to the lookup failing
  ///
  /// Callers tracking state use this to drop the cluster rather than abort.
  pub fn is_not_found(&self) -> bool {
    matches!(self, LookupError::NotFound { .. })
  }
}
