#![doc = include_str!("../README.md")]

mod capabilities;
mod client;
/// NNTP command builders and response parsers
pub mod commands;
mod config;
/// Replication engine: progress store, filter lists, worker pool, orchestrator
pub mod engine;
mod error;
mod response;

pub use capabilities::Capabilities;
pub use client::NntpClient;
pub use commands::{DistributionInfo, HdrEntry, ModeratorInfo, XoverEntry};
pub use config::ServerConfig;
pub use error::{NntpError, Result};
pub use response::{codes, NntpBinaryResponse, NntpResponse};
