//! Rust client for Melissa's GlobalAddress address verification service.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use melissa::{AddressLine, AddressQuery, MelissaClient};
//!
//! #[tokio::main]
//! async fn main() -> melissa::Result<()> {
//!     let client = MelissaClient::new("your-license-key")?;
//!     client.ping().await?;
//!
//!     let query = AddressQuery::new()
//!         .address_line(AddressLine::Line1, "22382 Avenida Empresa")
//!         .locality("Rancho Santa Margarita")
//!         .administrative_area("CA")
//!         .postal_code("92688")
//!         .country("US");
//!
//!     let response = client.query(&query).await?;
//!     for record in &response.records {
//!         println!("{}", record.formatted_address);
//!         for (code, description) in record.result_descriptions() {
//!             println!("  {code}: {}", description.unwrap_or("unknown code"));
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/melissa/0.1.0")]

// Re-export core types
pub use melissa_core::*;

// Re-export client
pub use melissa_client::{
    ClientConfig, MelissaClient, MelissaClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
