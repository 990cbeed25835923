pub mod config;
pub mod error;
pub mod filter;
pub mod ipv4;
pub mod pipeline;
pub mod split;

pub use config::Config;
pub use error::{Error, ParseError};
pub use ipv4::{Ipv4, Ipv4Pool};
