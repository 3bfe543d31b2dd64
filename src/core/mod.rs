//! Core library components.
//!
//! This module contains the reusable logic for parsing env files,
//! reconciling variable edits against stored state, and exporting and
//! presenting the result.

pub mod backend;
pub mod config;
pub mod constants;
pub mod domain;
pub mod env;
pub mod export;
pub mod present;
pub mod reconcile;
pub mod resolve;
pub mod types;
pub mod variables;
