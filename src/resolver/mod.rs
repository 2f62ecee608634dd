//! Post URL resolution.
//!
//! This module provides:
//! - URL validation (generic shape check, then the host/path check)
//! - Short code extraction from post paths
//! - The validated [`Post`] type

pub mod post;
pub mod short_code;
pub mod validate;

pub use post::Post;
pub use short_code::{extract_short_code, SHORT_CODE_MARKERS};
pub use validate::{is_well_formed_url, UrlResolver};
