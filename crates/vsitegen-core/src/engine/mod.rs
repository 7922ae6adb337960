//! # Engine Module
//!
//! The passes that make up a generation run.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Generation mode, vsite switch and auxiliary type name
//! - **Parameter Editing** ([`editor`]) - Pattern-based removal of redundant interactions
//! - **Group Merging** ([`merge`]) - Fusing overlapping linear triples into four-atom chains
//! - **Group Reduction** ([`reduction`]) - Mass redistribution onto an anchor and a particle
//! - **State Tracking** ([`state`]) - The ordered stages of a run
//! - **Progress Monitoring** ([`progress`]) - Optional callback sink for phases and diagnostics
//! - **Error Handling** ([`error`]) - Fatal conditions that abort a run

pub mod config;
pub mod editor;
pub mod error;
pub mod merge;
pub mod progress;
pub mod reduction;
pub mod state;
