//! Parses textual ip addresses into typed values.
//!
//! Accepted:
//!     IPv4 dotted-quad    10.0.0.1
//!     IPv6 full           2001:0db8:0000:0000:0000:0000:0000:0001
//!     IPv6 compressed     ::1, 2606:4700:4700::1001
//!     IPv6 dotted tail    ::ffff:10.0.0.1
//!
//! Rejected:
//!     surrounding whitespace, CIDR suffixes (10.0.0.0/8), brackets ([::1]),
//!     zone ids (fe80::1%eth0), zero-padded octets (010.0.0.1)

use std::{fmt, net::IpAddr};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no address given")]
    Missing,
    #[error("address is empty")]
    Empty,
    #[error("{0:?} is not an ip address")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
    Unknown,
}

impl IpVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            IpVersion::V4 => "4",
            IpVersion::V6 => "6",
            IpVersion::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully parsed address. Only [`ParsedAddress::parse`] creates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedAddress(IpAddr);

impl ParsedAddress {
    pub fn parse(raw: Option<&str>) -> Result<Self, ParseError> {
        let raw = raw.ok_or(ParseError::Missing)?;
        if raw.is_empty() {
            return Err(ParseError::Empty);
        }
        raw.parse::<IpAddr>()
            .map(ParsedAddress)
            .map_err(|_| ParseError::Malformed(raw.to_owned()))
    }

    pub fn addr(&self) -> IpAddr {
        self.0
    }

    pub fn version(&self) -> IpVersion {
        match self.0 {
            IpAddr::V4(_) => IpVersion::V4,
            IpAddr::V6(_) => IpVersion::V6,
        }
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
