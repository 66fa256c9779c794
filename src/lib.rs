//! Leave summary service
//!
//! This crate computes monthly leave and absence summaries from an HR
//! backend's time-tracking records and writes them back as planned working
//! time records.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
