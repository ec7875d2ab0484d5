use aws_sdk_redshift::types::Cluster;
use tracing::{debug, info, warn};

use crate::{
  clients::RedshiftClients,
  error::LookupError,
  redshift::{
    record::{self, ClusterNode, ClusterRecord},
    resources::LoggingStatus,
  },
  tags::{IgnoreTagsConfig, KeyValueTags},
};

/// Look up a Redshift cluster and flatten it, with its logging status, into a record
///
/// Two calls are made in sequence: `DescribeClusters` and then
/// `DescribeLoggingStatus`. The first failure ends the lookup; nothing is
/// returned for a cluster that was only partially read.
pub async fn fetch<C: RedshiftClients>(
  clients: &C,
  ignore_tags: &IgnoreTagsConfig,
  identifier: &str,
) -> Result<ClusterRecord, LookupError> {
  // An empty identifier would turn the describe call into a list of every cluster
  if identifier.trim().is_empty() {
    return Err(LookupError::InvalidIdentifier);
  }

  info!("Reading Redshift Cluster Information: {identifier}");
  let clusters = clients
    .describe_clusters(identifier)
    .await
    .map_err(|source| LookupError::Api {
      identifier: identifier.to_owned(),
      operation: "DescribeClusters",
      source,
    })?;

  if clusters.len() > 1 {
    warn!(
      "DescribeClusters returned {} clusters for {identifier}, using the first",
      clusters.len()
    );
  }
  let cluster = clusters.first().ok_or_else(|| LookupError::NotFound {
    identifier: identifier.to_owned(),
  })?;

  let mut record = cluster_record(identifier, cluster, ignore_tags)?;

  info!("Reading Redshift Cluster Logging Status: {identifier}");
  let logging = clients
    .describe_logging_status(identifier)
    .await
    .map_err(|source| LookupError::Api {
      identifier: identifier.to_owned(),
      operation: "DescribeLoggingStatus",
      source,
    })?;
  merge_logging_status(&mut record, &logging);

  Ok(record)
}

/// Map the described cluster onto a fresh record
pub(crate) fn cluster_record(
  identifier: &str,
  cluster: &Cluster,
  ignore_tags: &IgnoreTagsConfig,
) -> Result<ClusterRecord, LookupError> {
  let relocation_enabled =
    availability_zone_relocation_enabled(cluster).map_err(|reason| LookupError::Derivation {
      identifier: identifier.to_owned(),
      reason,
    })?;

  let state_write = |attribute: &'static str| {
    move |reason: String| LookupError::StateWrite {
      identifier: identifier.to_owned(),
      attribute,
      reason,
    }
  };

  let cluster_security_groups = flatten(cluster.cluster_security_groups(), "cluster security group name", |g| {
    g.cluster_security_group_name()
  })
  .map_err(state_write("cluster_security_groups"))?;

  let iam_roles =
    flatten(cluster.iam_roles(), "IAM role ARN", |r| r.iam_role_arn()).map_err(state_write("iam_roles"))?;

  let vpc_security_group_ids = flatten(cluster.vpc_security_groups(), "VPC security group ID", |g| {
    g.vpc_security_group_id()
  })
  .map_err(state_write("vpc_security_group_ids"))?;

  let tags = KeyValueTags::from_sdk(cluster.tags())
    .map_err(|err| state_write("tags")(err.to_string()))?
    .ignore_aws()
    .ignore_config(ignore_tags)
    .into_map();

  let mut record = ClusterRecord {
    id: identifier.to_owned(),
    allow_version_upgrade: cluster.allow_version_upgrade.into(),
    aqua_configuration_status: cluster
      .aqua_configuration()
      .and_then(|aqua| aqua.aqua_configuration_status())
      .map(|status| status.as_str().to_owned()),
    automated_snapshot_retention_period: cluster.automated_snapshot_retention_period.into(),
    availability_zone: owned(cluster.availability_zone()),
    availability_zone_relocation_enabled: Some(relocation_enabled),
    cluster_identifier: owned(cluster.cluster_identifier()),
    cluster_namespace_arn: owned(cluster.cluster_namespace_arn()),
    cluster_nodes: cluster_nodes(cluster),
    // Only the first parameter group is reported
    cluster_parameter_group_name: cluster
      .cluster_parameter_groups()
      .first()
      .and_then(|group| owned(group.parameter_group_name())),
    cluster_public_key: owned(cluster.cluster_public_key()),
    cluster_revision_number: owned(cluster.cluster_revision_number()),
    cluster_security_groups,
    cluster_subnet_group_name: owned(cluster.cluster_subnet_group_name()),
    cluster_type: Some(cluster_type(cluster).to_owned()),
    cluster_version: owned(cluster.cluster_version()),
    database_name: owned(cluster.db_name()),
    default_iam_role_arn: owned(cluster.default_iam_role_arn()),
    elastic_ip: cluster.elastic_ip_status().and_then(|eip| owned(eip.elastic_ip())),
    encrypted: cluster.encrypted.into(),
    enhanced_vpc_routing: cluster.enhanced_vpc_routing.into(),
    iam_roles,
    kms_key_id: owned(cluster.kms_key_id()),
    maintenance_track_name: owned(cluster.maintenance_track_name()),
    manual_snapshot_retention_period: cluster.manual_snapshot_retention_period.into(),
    master_username: owned(cluster.master_username()),
    node_type: owned(cluster.node_type()),
    number_of_nodes: cluster.number_of_nodes.into(),
    preferred_maintenance_window: owned(cluster.preferred_maintenance_window()),
    publicly_accessible: cluster.publicly_accessible.into(),
    tags,
    vpc_id: owned(cluster.vpc_id()),
    vpc_security_group_ids,
    ..Default::default()
  };

  // A cluster that is still provisioning has no endpoint yet
  match cluster.endpoint() {
    Some(endpoint) => {
      record.endpoint = owned(endpoint.address());
      record.port = endpoint.port.into();
    }
    None => debug!("Redshift Cluster {identifier} has no endpoint"),
  }

  Ok(record)
}

/// Copy the logging attributes onto the record when logging is turned on
///
/// When logging is off the attributes are left untouched; every lookup starts
/// from a fresh record so they are simply unset.
pub(crate) fn merge_logging_status(record: &mut ClusterRecord, logging: &LoggingStatus) {
  if !logging.is_enabled() {
    debug!("Audit logging is not enabled for Redshift Cluster {}", record.id);
    return;
  }

  record.enable_logging = logging.logging_enabled;
  record.bucket_name = logging.bucket_name.clone();
  record.s3_key_prefix = logging.s3_key_prefix.clone();
  record.log_destination_type = logging.log_destination_type.clone();
  record.log_exports = logging.log_exports.clone();
}

/// Derive whether availability zone relocation is turned on
///
/// Transitional states report the state being transitioned to. The status is
/// a free-form string in the API; any value outside the known set (including
/// an absent one) is an error rather than a guess.
pub(crate) fn availability_zone_relocation_enabled(cluster: &Cluster) -> Result<bool, String> {
  match cluster.availability_zone_relocation_status().unwrap_or_default() {
    "enabled" | "pending_enabling" => Ok(true),
    "disabled" | "pending_disabling" => Ok(false),
    status => Err(format!(
      "unexpected AvailabilityZoneRelocationStatus value {status:?} returned by API"
    )),
  }
}

/// `multi-node` when there is more than one node entry, otherwise `single-node`
///
/// Counts the node entries actually reported rather than `NumberOfNodes`;
/// the two diverge while a resize is in progress.
pub(crate) fn cluster_type(cluster: &Cluster) -> &'static str {
  if cluster.cluster_nodes().len() > 1 {
    record::MULTI_NODE
  } else {
    record::SINGLE_NODE
  }
}

fn cluster_nodes(cluster: &Cluster) -> Vec<ClusterNode> {
  cluster
    .cluster_nodes()
    .iter()
    .map(|node| ClusterNode {
      node_role: node.node_role().unwrap_or_default().to_owned(),
      private_ip_address: node.private_ip_address().unwrap_or_default().to_owned(),
      public_ip_address: node.public_ip_address().unwrap_or_default().to_owned(),
    })
    .collect()
}

/// Extract one string per entry, preserving order
///
/// An entry missing the extracted value has nothing to contribute to the list
/// and fails the whole list.
fn flatten<'a, T>(
  entries: &'a [T],
  what: &str,
  extract: impl Fn(&'a T) -> Option<&'a str>,
) -> Result<Vec<String>, String> {
  entries
    .iter()
    .enumerate()
    .map(|(idx, entry)| {
      extract(entry)
        .map(ToOwned::to_owned)
        .ok_or_else(|| format!("entry {idx} has no {what}"))
    })
    .collect()
}

fn owned(value: Option<&str>) -> Option<String> {
  value.map(ToOwned::to_owned)
}
