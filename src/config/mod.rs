//! Configuration loading and management for the Payslip Computation Engine.
//!
//! This module provides functionality to load payroll policy from YAML
//! files, including the organisation identity and the working-day
//! denominator used for attendance pro-ration.
//!
//! # Example
//!
//! ```no_run
//! use payslip_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Loaded policy for: {}", config.organisation());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::PayrollPolicy;
