use aws_sdk_redshift::types::{
  AquaConfiguration, AquaConfigurationStatus, Cluster, ClusterIamRole, ClusterNode, ClusterParameterGroupStatus,
  ClusterSecurityGroupMembership, ElasticIpStatus, Endpoint, Tag, VpcSecurityGroupMembership,
};

use rsinfo::redshift::LoggingStatus;

/// Builds an available two node cluster with every optional sub-object populated
pub fn available_cluster() -> Cluster {
  Cluster::builder()
    .cluster_identifier("demo-1")
    .cluster_status("available")
    .cluster_namespace_arn("arn:aws:redshift:us-east-1:123456789012:namespace:5a7f")
    .allow_version_upgrade(true)
    .aqua_configuration(
      AquaConfiguration::builder()
        .aqua_configuration_status(AquaConfigurationStatus::Disabled)
        .build(),
    )
    .automated_snapshot_retention_period(1)
    .availability_zone("us-east-1a")
    .availability_zone_relocation_status("disabled")
    .cluster_nodes(make_node("LEADER", "10.0.1.10"))
    .cluster_nodes(make_node("COMPUTE-0", "10.0.1.11"))
    .cluster_parameter_groups(
      ClusterParameterGroupStatus::builder()
        .parameter_group_name("default.redshift-1.0")
        .parameter_apply_status("in-sync")
        .build(),
    )
    .cluster_public_key("ssh-rsa AAAAB3NzaC1yc2E Amazon-Redshift")
    .cluster_revision_number("54321")
    .cluster_subnet_group_name("demo-subnets")
    .cluster_version("1.0")
    .db_name("dev")
    .default_iam_role_arn("arn:aws:iam::123456789012:role/redshift-s3")
    .elastic_ip_status(ElasticIpStatus::builder().elastic_ip("52.1.2.3").status("active").build())
    .encrypted(true)
    .endpoint(
      Endpoint::builder()
        .address("demo-1.abc123.us-east-1.redshift.amazonaws.com")
        .port(5439)
        .build(),
    )
    .enhanced_vpc_routing(false)
    .iam_roles(make_role("arn:aws:iam::123456789012:role/redshift-s3"))
    .kms_key_id("arn:aws:kms:us-east-1:123456789012:key/1234abcd")
    .maintenance_track_name("current")
    .manual_snapshot_retention_period(-1)
    .master_username("admin")
    .node_type("ra3.xlplus")
    .number_of_nodes(2)
    .preferred_maintenance_window("sun:05:00-sun:05:30")
    .publicly_accessible(false)
    .tags(make_tag("Name", "demo"))
    .tags(make_tag("aws:cloudformation:stack-id", "arn:aws:cloudformation:us-east-1:123456789012:stack/demo"))
    .vpc_id("vpc-0abc")
    .vpc_security_groups(
      VpcSecurityGroupMembership::builder()
        .vpc_security_group_id("sg-0123")
        .status("active")
        .build(),
    )
    .build()
}

/// Builds a cluster that has just been created and has no endpoint or nodes yet
pub fn provisioning_cluster() -> Cluster {
  Cluster::builder()
    .cluster_identifier("demo-1")
    .cluster_status("creating")
    .availability_zone_relocation_status("disabled")
    .node_type("ra3.xlplus")
    .number_of_nodes(2)
    .build()
}

/// Creates a cluster with the given cluster security group names
pub fn cluster_with_security_groups(names: &[&str]) -> Cluster {
  names
    .iter()
    .fold(
      Cluster::builder()
        .cluster_identifier("demo-1")
        .availability_zone_relocation_status("enabled"),
      |builder, name| {
        builder.cluster_security_groups(
          ClusterSecurityGroupMembership::builder()
            .cluster_security_group_name(*name)
            .status("active")
            .build(),
        )
      },
    )
    .build()
}

/// Creates a cluster reporting `count` node entries
pub fn cluster_with_nodes(count: usize) -> Cluster {
  (0..count)
    .fold(
      Cluster::builder()
        .cluster_identifier("demo-1")
        .availability_zone_relocation_status("disabled"),
      |builder, idx| builder.cluster_nodes(make_node("COMPUTE", &format!("10.0.2.{idx}"))),
    )
    .build()
}

pub fn make_node(role: &str, private_ip: &str) -> ClusterNode {
  ClusterNode::builder().node_role(role).private_ip_address(private_ip).build()
}

pub fn make_role(arn: &str) -> ClusterIamRole {
  ClusterIamRole::builder().iam_role_arn(arn).apply_status("in-sync").build()
}

pub fn make_tag(key: &str, value: &str) -> Tag {
  Tag::builder().key(key).value(value).build()
}

/// Logging turned on, delivering to S3
pub fn logging_enabled() -> LoggingStatus {
  LoggingStatus {
    logging_enabled: Some(true),
    bucket_name: Some("logs-bucket".into()),
    s3_key_prefix: Some("prefix/".into()),
    log_destination_type: Some("s3".into()),
    log_exports: vec!["connectionlog".into(), "userlog".into()],
  }
}

/// Logging turned off
pub fn logging_disabled() -> LoggingStatus {
  LoggingStatus {
    logging_enabled: Some(false),
    ..Default::default()
  }
}
