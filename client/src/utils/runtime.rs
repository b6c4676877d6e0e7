//! Global Tokio runtime for async HTTP operations
//!
//! eframe drives the UI thread without an async runtime, but reqwest needs a
//! tokio context to execute in. This static runtime bridges the two: `main`
//! enters it before starting the frame loop, click handlers `tokio::spawn`
//! flows onto it, and results come back over the app's event channel.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
