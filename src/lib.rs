pub mod config;
pub mod filter;
pub mod log;
pub mod net;
pub mod stream;

pub use net::{classify, Classification, IpVersion, ParseError};
