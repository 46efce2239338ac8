//! Feedback Analyzer Core
//!
//! Types shared between the scorers and the HTTP server.
//!
//! This crate provides:
//! - The request and result shapes exchanged with the frontend
//! - The overall sentiment label
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{AnalysisRequest, LabelScore, Overall, SentimentResult};

