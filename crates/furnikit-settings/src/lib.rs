//! Furnikit Settings Crate
//!
//! Loads, validates and saves the application configuration and converts it
//! into the explicit settings each library crate takes.

pub mod config;

pub use config::{Config, ExportSettings, GenerationSettings, MethodKind, PricingSettings};
