//! Annotates records with the classification of one of their fields.
//!
//! ```toml
//! source = "src_ip"
//! target_ipv = "[src][ipv]"
//! target_pub_ip = "[src][public]"
//! tag_on_invalid_ip = ["_invalid_ip"]
//! ```

use itertools::Itertools;
use serde::Deserialize;

use crate::{
    config::ConfigError,
    net::{reserved, Classification, IpVersion, ParseError, ParsedAddress},
};

pub mod event;
pub mod field_ref;

pub use event::{Event, FieldAccessor};
pub use field_ref::FieldRef;

pub const DEFAULT_TARGET_IPV: &str = "ip_version";
pub const DEFAULT_TARGET_PUB_IP: &str = "public_ip";
pub const DEFAULT_INVALID_TAG: &str = "_invalid_ip";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Field holding the address. Required.
    pub source: String,
    pub target_ipv: String,
    pub target_pub_ip: String,
    pub tag_on_invalid_ip: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            source: String::new(),
            target_ipv: DEFAULT_TARGET_IPV.to_owned(),
            target_pub_ip: DEFAULT_TARGET_PUB_IP.to_owned(),
            tag_on_invalid_ip: vec![DEFAULT_INVALID_TAG.to_owned()],
        }
    }
}

/// What the filter did to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Version and public flag were written.
    Matched { version: IpVersion, public: bool },
    /// The source held no valid address; invalid tags were added.
    Tagged(ParseError),
}

#[derive(Debug, Clone)]
pub struct PublicIpFilter {
    source: FieldRef,
    target_ipv: FieldRef,
    target_pub_ip: FieldRef,
    tag_on_invalid_ip: Vec<String>,
}

impl PublicIpFilter {
    pub fn new(config: FilterConfig) -> Result<Self, ConfigError> {
        if config.source.is_empty() {
            return Err(ConfigError::MissingSource);
        }
        Ok(PublicIpFilter {
            source: config.source.parse()?,
            target_ipv: config.target_ipv.parse()?,
            target_pub_ip: config.target_pub_ip.parse()?,
            tag_on_invalid_ip: config.tag_on_invalid_ip.into_iter().unique().collect(),
        })
    }

    pub fn source(&self) -> &FieldRef {
        &self.source
    }

    pub fn filter<E: FieldAccessor>(&self, event: &mut E) -> FilterOutcome {
        let parsed = ParsedAddress::parse(event.get(&self.source));

        if let Ok(addr) = &parsed {
            if tracing::enabled!(tracing::Level::TRACE) {
                match reserved::matching_range(addr) {
                    Some(range) => tracing::trace!("{addr} is non-public: {range}"),
                    None => tracing::trace!("{addr} is public"),
                }
            }
        }

        match Classification::from(parsed) {
            Classification::Valid { version, public } => {
                event.set_str(&self.target_ipv, version.as_str());
                event.set_bool(&self.target_pub_ip, public);
                FilterOutcome::Matched { version, public }
            }
            Classification::Invalid(e) => {
                tracing::debug!("Invalid IP in {}: {e}", self.source);
                for tag in &self.tag_on_invalid_ip {
                    event.add_tag(tag);
                }
                FilterOutcome::Tagged(e)
            }
        }
    }
}
