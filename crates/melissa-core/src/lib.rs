//! Core types and code tables for the Melissa GlobalAddress client.
//!
//! This crate provides the foundational types used across the Melissa library:
//!
//! - **Types**: Typed representations of the GlobalAddress request and response
//! - **Code tables**: Descriptions for transmission, result, geocode and address codes
//! - **Errors**: Error handling with [`MelissaError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use melissa_core::{Response, RESULT_CODES};
//!
//! fn explain(response: &Response) {
//!     for record in &response.records {
//!         for code in record.result_codes() {
//!             println!("{code}: {:?}", RESULT_CODES.get(code));
//!         }
//!     }
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/melissa-core/0.1.0")]

pub mod codes;
mod error;
pub mod types;

pub use codes::*;
pub use error::{MelissaError, Result};
pub use types::*;
