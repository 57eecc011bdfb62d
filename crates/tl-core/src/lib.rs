//! # tl-core
//!
//! Core types and utilities for TrackLink RS.
//!
//! This crate provides the building blocks shared by the query crate:
//! - Common error types
//! - Result type alias
//! - Parameter set types (ParamSet, ParamValue)
//! - Builder configuration

pub mod error;
pub mod result;
pub mod types;
pub mod config;

pub use error::*;
pub use result::*;
pub use types::*;
pub use config::BuilderConfig;
