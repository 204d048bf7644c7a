//! HTTP client for the Melissa GlobalAddress service.
//!
//! This crate provides [`MelissaClient`], which checks connectivity with
//! [`MelissaClient::ping`] and verifies addresses with [`MelissaClient::query`].

#![doc(html_root_url = "https://docs.rs/melissa-client/0.1.0")]

mod client;
mod config;

pub use client::{MelissaClient, MelissaClientBuilder};
pub use config::*;
pub use melissa_core::{MelissaError, Result};
