use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Cluster type reported when the cluster has more than one node entry
pub const MULTI_NODE: &str = "multi-node";

/// Cluster type reported for zero or one node entries
pub const SINGLE_NODE: &str = "single-node";

/// Flattened view of a Redshift cluster and its audit logging configuration
///
/// Attribute names follow the data source schema the record stands in for.
/// `None` and empty collections mean the attribute is unset and are omitted
/// from serialized output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterRecord {
  /// The identifier exactly as the caller supplied it
  pub id: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub allow_version_upgrade: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub aqua_configuration_status: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub automated_snapshot_retention_period: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub availability_zone: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub availability_zone_relocation_enabled: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bucket_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cluster_identifier: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cluster_namespace_arn: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub cluster_nodes: Vec<ClusterNode>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cluster_parameter_group_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cluster_public_key: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cluster_revision_number: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub cluster_security_groups: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cluster_subnet_group_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cluster_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cluster_version: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub database_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub default_iam_role_arn: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub elastic_ip: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub enable_logging: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub encrypted: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub endpoint: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub enhanced_vpc_routing: Option<bool>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub iam_roles: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub kms_key_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub log_destination_type: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub log_exports: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub maintenance_track_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub manual_snapshot_retention_period: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub master_username: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub node_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub number_of_nodes: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub port: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub preferred_maintenance_window: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub publicly_accessible: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub s3_key_prefix: Option<String>,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub tags: BTreeMap<String, String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub vpc_id: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub vpc_security_group_ids: Vec<String>,
}

/// A single compute node entry of the cluster
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Tabled)]
#[tabled(rename_all = "UpperCase")]
pub struct ClusterNode {
  /// `LEADER`, `COMPUTE` or `SHARED`
  #[tabled(rename = "ROLE")]
  pub node_role: String,
  #[tabled(rename = "PRIVATE IP")]
  pub private_ip_address: String,
  #[tabled(rename = "PUBLIC IP")]
  pub public_ip_address: String,
}

/// One row of the text rendering of a record
#[derive(Debug, Tabled)]
#[tabled(rename_all = "UpperCase")]
pub(crate) struct Attribute {
  pub(crate) attribute: &'static str,
  pub(crate) value: String,
}

fn opt<T: ToString>(value: &Option<T>) -> Option<String> {
  value.as_ref().map(ToString::to_string)
}

fn list(values: &[String]) -> Option<String> {
  (!values.is_empty()).then(|| values.join(", "))
}

impl ClusterRecord {
  /// The attributes that are set, in schema order, rendered as display strings
  ///
  /// Node entries are excluded; they are rendered as their own table.
  pub(crate) fn attributes(&self) -> Vec<Attribute> {
    let tags = (!self.tags.is_empty()).then(|| {
      self
        .tags
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
    });

    let rows = vec![
      ("id", Some(self.id.clone())),
      ("allow_version_upgrade", opt(&self.allow_version_upgrade)),
      ("aqua_configuration_status", opt(&self.aqua_configuration_status)),
      (
        "automated_snapshot_retention_period",
        opt(&self.automated_snapshot_retention_period),
      ),
      ("availability_zone", opt(&self.availability_zone)),
      (
        "availability_zone_relocation_enabled",
        opt(&self.availability_zone_relocation_enabled),
      ),
      ("bucket_name", opt(&self.bucket_name)),
      ("cluster_identifier", opt(&self.cluster_identifier)),
      ("cluster_namespace_arn", opt(&self.cluster_namespace_arn)),
      ("cluster_parameter_group_name", opt(&self.cluster_parameter_group_name)),
      ("cluster_public_key", opt(&self.cluster_public_key)),
      ("cluster_revision_number", opt(&self.cluster_revision_number)),
      ("cluster_security_groups", list(&self.cluster_security_groups)),
      ("cluster_subnet_group_name", opt(&self.cluster_subnet_group_name)),
      ("cluster_type", opt(&self.cluster_type)),
      ("cluster_version", opt(&self.cluster_version)),
      ("database_name", opt(&self.database_name)),
      ("default_iam_role_arn", opt(&self.default_iam_role_arn)),
      ("elastic_ip", opt(&self.elastic_ip)),
      ("enable_logging", opt(&self.enable_logging)),
      ("encrypted", opt(&self.encrypted)),
      ("endpoint", opt(&self.endpoint)),
      ("enhanced_vpc_routing", opt(&self.enhanced_vpc_routing)),
      ("iam_roles", list(&self.iam_roles)),
      ("kms_key_id", opt(&self.kms_key_id)),
      ("log_destination_type", opt(&self.log_destination_type)),
      ("log_exports", list(&self.log_exports)),
      ("maintenance_track_name", opt(&self.maintenance_track_name)),
      ("manual_snapshot_retention_period", opt(&self.manual_snapshot_retention_period)),
      ("master_username", opt(&self.master_username)),
      ("node_type", opt(&self.node_type)),
      ("number_of_nodes", opt(&self.number_of_nodes)),
      ("port", opt(&self.port)),
      ("preferred_maintenance_window", opt(&self.preferred_maintenance_window)),
      ("publicly_accessible", opt(&self.publicly_accessible)),
      ("s3_key_prefix", opt(&self.s3_key_prefix)),
      ("tags", tags),
      ("vpc_id", opt(&self.vpc_id)),
      ("vpc_security_group_ids", list(&self.vpc_security_group_ids)),
    ];

    rows
      .into_iter()
      .filter_map(|(attribute, value)| value.map(|value| Attribute { attribute, value }))
      .collect()
  }
}
