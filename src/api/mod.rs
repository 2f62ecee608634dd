//! Remote query API module.
//!
//! This module provides:
//! - The HTTP client issuing the metadata query and asset requests
//! - Query variables and response types

pub mod client;
pub mod types;

pub use client::PostFetcher;
pub use types::{Metadata, QueryResponse, QueryVariables};
