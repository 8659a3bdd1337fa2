//! All remote summarization functionality

pub mod client;

// Re-export main types for convenience
pub use client::{Candidate, ClientConfig, SummaryClient, extract_summary};
