//! Waymark Core - Domain models, state holder, and configuration
//!
//! This crate contains the domain logic and port definitions for the Waymark
//! map application: saved points, named paths between them, and the active
//! map style.

pub mod config;
pub mod error;
pub mod id;
pub mod models;
pub mod ports;
pub mod seed;
pub mod state;

pub use error::{Result, WaymarkError};
