//! Classification of single textual ip addresses.
//!
//! [`classify`] is the entry point: it parses the raw value with [`ip`] and
//! checks the result against the [`reserved`] table.

pub mod ip;
pub mod reserved;

pub use ip::{IpVersion, ParseError, ParsedAddress};
pub use reserved::ReservedRange;

/// Outcome of classifying one raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Valid { version: IpVersion, public: bool },
    Invalid(ParseError),
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Classification::Valid { .. })
    }

    /// [`IpVersion::Unknown`] for invalid input.
    pub fn version(&self) -> IpVersion {
        match self {
            Classification::Valid { version, .. } => *version,
            Classification::Invalid(_) => IpVersion::Unknown,
        }
    }

    /// `None` for invalid input.
    pub fn is_public(&self) -> Option<bool> {
        match self {
            Classification::Valid { public, .. } => Some(*public),
            Classification::Invalid(_) => None,
        }
    }
}

impl From<Result<ParsedAddress, ParseError>> for Classification {
    fn from(parsed: Result<ParsedAddress, ParseError>) -> Self {
        match parsed {
            Ok(addr) => Classification::Valid {
                version: addr.version(),
                public: !reserved::is_non_public(&addr),
            },
            Err(e) => Classification::Invalid(e),
        }
    }
}

pub fn classify(raw: Option<&str>) -> Classification {
    Classification::from(ParsedAddress::parse(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_ipv4() {
        let c = classify(Some("10.0.0.1"));
        assert!(c.is_valid());
        assert_eq!(c.version(), IpVersion::V4);
        assert_eq!(c.is_public(), Some(false));
    }

    #[test]
    fn public_ipv4() {
        assert_eq!(
            classify(Some("8.8.8.8")),
            Classification::Valid { version: IpVersion::V4, public: true }
        );
    }

    #[test]
    fn ipv6() {
        assert_eq!(
            classify(Some("2606:4700:4700::1001")),
            Classification::Valid { version: IpVersion::V6, public: true }
        );
        assert_eq!(
            classify(Some("::1")),
            Classification::Valid { version: IpVersion::V6, public: false }
        );
    }

    #[test]
    fn invalid() {
        let c = classify(Some("10000.0.0.1"));
        assert!(!c.is_valid());
        assert_eq!(c.version(), IpVersion::Unknown);
        assert_eq!(c.is_public(), None);
        assert_eq!(classify(None), Classification::Invalid(ParseError::Missing));
        assert_eq!(classify(Some("")), Classification::Invalid(ParseError::Empty));
    }
}
