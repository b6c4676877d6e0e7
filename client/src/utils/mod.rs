//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`runtime`]**: Global Tokio runtime bridging eframe and reqwest

pub mod runtime;
