//! Core library components.
//!
//! This module contains the retrieval pipeline: spec parsing, the token
//! exchange, secret fetching, and export file handling.

pub mod config;
pub mod constants;
pub mod export;
pub mod http;
pub mod pipeline;
pub mod retrieve;
pub mod secret;
pub mod token;
