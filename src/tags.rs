use std::collections::BTreeMap;

use anyhow::{Result, bail};
use aws_sdk_redshift::types::Tag;
use serde::{Deserialize, Serialize};

/// Prefix reserved by AWS for tags it applies itself (CloudFormation, Service Catalog, etc.)
pub const AWS_RESERVED_PREFIX: &str = "aws:";

/// Tag keys the caller never wants to see on a record
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreTagsConfig {
  /// Exact tag keys to drop
  #[serde(default)]
  pub keys: Vec<String>,

  /// Tag key prefixes to drop
  #[serde(default)]
  pub key_prefixes: Vec<String>,
}

impl IgnoreTagsConfig {
  pub fn is_empty(&self) -> bool {
    self.keys.is_empty() && self.key_prefixes.is_empty()
  }

  fn ignores(&self, key: &str) -> bool {
    self.keys.iter().any(|k| k == key) || self.key_prefixes.iter().any(|p| key.starts_with(p.as_str()))
  }
}

/// Key/value view over a raw tag set
///
/// Mirrors the chained filter style used for provider tags: build from the
/// SDK tags, drop what is not the caller's, then collapse into a plain map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyValueTags(BTreeMap<String, String>);

impl KeyValueTags {
  /// Build from the SDK's tag list
  ///
  /// A tag without a key has nothing to be stored under and is rejected.
  /// A missing value is kept as an empty string.
  pub fn from_sdk(tags: &[Tag]) -> Result<Self> {
    let mut map = BTreeMap::new();

    for (idx, tag) in tags.iter().enumerate() {
      let Some(key) = tag.key() else {
        bail!("tag entry {idx} has no key");
      };
      map.insert(key.to_string(), tag.value().unwrap_or_default().to_string());
    }

    Ok(Self(map))
  }

  /// Drop tags under the AWS reserved prefix
  pub fn ignore_aws(self) -> Self {
    Self(
      self
        .0
        .into_iter()
        .filter(|(k, _)| !k.starts_with(AWS_RESERVED_PREFIX))
        .collect(),
    )
  }

  /// Drop tags matched by the caller's ignore configuration
  pub fn ignore_config(self, config: &IgnoreTagsConfig) -> Self {
    if config.is_empty() {
      return self;
    }

    Self(self.0.into_iter().filter(|(k, _)| !config.ignores(k)).collect())
  }

  pub fn into_map(self) -> BTreeMap<String, String> {
    self.0
  }
}

#[cfg(test)]
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyValueTags {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }
}
