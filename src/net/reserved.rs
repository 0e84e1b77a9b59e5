//! Address space that is not publicly routable.
//!
//! The table is plain `const` data: nothing is parsed or allocated at runtime,
//! and every lookup walks the same 28 blocks.

use std::{
    fmt,
    net::{Ipv4Addr, Ipv6Addr},
};

use ipnet::{IpNet, Ipv4Net, Ipv6Net};

use super::ip::ParsedAddress;

/// A reserved block and the reason it is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedRange {
    pub block: IpNet,
    pub rfc: &'static str,
    pub purpose: &'static str,
}

impl fmt::Display for ReservedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}: {})", self.block, self.rfc, self.purpose)
    }
}

const fn v4(a: u8, b: u8, c: u8, d: u8, len: u8, rfc: &'static str, purpose: &'static str) -> ReservedRange {
    ReservedRange {
        block: IpNet::V4(Ipv4Net::new_assert(Ipv4Addr::new(a, b, c, d), len)),
        rfc,
        purpose,
    }
}

const fn v6(segments: [u16; 8], len: u8, rfc: &'static str, purpose: &'static str) -> ReservedRange {
    let [a, b, c, d, e, f, g, h] = segments;
    ReservedRange {
        block: IpNet::V6(Ipv6Net::new_assert(Ipv6Addr::new(a, b, c, d, e, f, g, h), len)),
        rfc,
        purpose,
    }
}

pub const RESERVED_RANGES: [ReservedRange; 28] = [
    v4(0, 0, 0, 0, 8, "RFC1700", "source address only"),
    v4(10, 0, 0, 0, 8, "RFC1918", "private networking"),
    v4(100, 64, 0, 0, 10, "RFC6598", "shared address space"),
    v4(127, 0, 0, 0, 8, "RFC1112", "loopback"),
    v4(169, 254, 0, 0, 16, "RFC3927", "link-local"),
    v4(172, 16, 0, 0, 12, "RFC1918", "private networking"),
    v4(192, 0, 0, 0, 24, "RFC6890", "IETF protocol assignments"),
    v4(192, 0, 0, 8, 32, "RFC7600", "dummy address"),
    v4(192, 0, 2, 0, 24, "RFC5737", "TEST-NET-1 documentation"),
    v4(192, 31, 196, 0, 24, "RFC7535", "AS112-v4"),
    v4(192, 52, 193, 0, 24, "RFC7450", "AMT"),
    v4(192, 88, 99, 0, 24, "RFC7526", "former 6to4 relay anycast"),
    v4(192, 168, 0, 0, 16, "RFC1918", "private networking"),
    v4(198, 18, 0, 0, 15, "RFC2544", "benchmark testing"),
    v4(198, 51, 100, 0, 24, "RFC5737", "TEST-NET-2 documentation"),
    v4(203, 0, 113, 0, 24, "RFC5737", "TEST-NET-3 documentation"),
    v4(224, 0, 0, 0, 4, "RFC1112", "multicast"),
    v4(240, 0, 0, 0, 4, "RFC6890", "reserved for future use"),
    v4(255, 255, 255, 255, 32, "RFC8190", "limited broadcast"),
    v6([0xfc00, 0, 0, 0, 0, 0, 0, 0], 7, "RFC4193", "unique local address"),
    v6([0xfe80, 0, 0, 0, 0, 0, 0, 0], 10, "RFC4291", "link-local"),
    v6([0xff00, 0, 0, 0, 0, 0, 0, 0], 8, "RFC4291", "multicast"),
    v6([0x2001, 0xdb8, 0, 0, 0, 0, 0, 0], 32, "RFC3849", "documentation"),
    v6([0x2001, 0x20, 0, 0, 0, 0, 0, 0], 28, "RFC7343", "ORCHIDv2"),
    v6([0, 0, 0, 0, 0, 0, 0, 1], 128, "RFC8190", "loopback"),
    v6([0, 0, 0, 0, 0, 0, 0, 0], 128, "RFC8190", "unspecified"),
    v6([0x100, 0, 0, 0, 0, 0, 0, 0], 64, "RFC6666", "discard prefix"),
    v6([0x64, 0xff9b, 0, 0, 0, 0, 0, 0], 96, "RFC6052", "IPv4/IPv6 translation"),
];

pub fn ranges() -> &'static [ReservedRange] {
    &RESERVED_RANGES
}

/// Blocks of the other family never match.
pub fn is_non_public(addr: &ParsedAddress) -> bool {
    let addr = addr.addr();
    RESERVED_RANGES.iter().any(|range| range.block.contains(&addr))
}

/// First reserved range in table order that holds `addr`.
pub fn matching_range(addr: &ParsedAddress) -> Option<&'static ReservedRange> {
    let addr = addr.addr();
    RESERVED_RANGES.iter().find(|range| range.block.contains(&addr))
}
