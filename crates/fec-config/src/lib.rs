//! Configuration management for the channel codec tools
//!
//! This crate provides configuration loading and parsing:
//! - TOML configuration file parsing
//! - Channel model and simulation settings

pub mod codec_config;
pub mod toml_config;

pub use codec_config::*;
pub use toml_config::*;
