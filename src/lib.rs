//! Tensorscope
//!
//! Visualization data generation for AI-framework detection
//! in native binaries.
//!
//! This crate provides the core implementation for the
//! `tensorscope` CLI tool: it turns detection reports (recovered
//! control-flow graphs, framework confidence scores, tensor-operation
//! observations) into JSON documents shaped for front-end charting.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install tensorscope
//! tensorscope --help
//! ```

pub mod cfg;
pub mod chart;
pub mod commands;
pub mod output;
pub mod report;
pub mod utils;
