//! Configuration module for cert-check

pub mod settings;

pub use settings::CheckConfig;
