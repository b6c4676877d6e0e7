//! # Banter Desktop Client - Library Root
//!
//! A **native desktop GUI** for the Banter chat service. This library crate
//! contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │               client (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  egui-notify   - Toast notifications                   │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  rfd           - Native file dialogs                   │
//! └────────────────────────────────────────────────────────┘
//!                          │
//!                          │ HTTP
//!                          ▼
//!               ┌─────────────────────┐
//!               │   Banter API server │
//!               └─────────────────────┘
//! ```
//!
//! ### Module Structure
//!
//! - **app**: Application state, events, and click handlers
//!   - Core orchestrator of the GUI
//!   - Event-driven architecture with async flows
//!   - Screen navigation and the auth guard
//!
//! - **services**: External integrations
//!   - `api`: Banter HTTP client (identity, documents, storage)
//!
//! - **ui**: Rendering framework
//!   - `screens`: Screen-specific rendering (auth, chat)
//!   - `widgets`: Form components and toast notifications
//!   - `theme`: Color palette and styling
//!
//! - **core**: Error types and the [`ApiService`](core::ApiService) seam
//!
//! - **utils**: The global Tokio runtime bridging eframe and reqwest
//!
//! ### Event-Driven Architecture
//!
//! Click handlers spawn async flows onto the Tokio runtime and return
//! immediately. Each flow posts its `Result` back over an unbounded channel;
//! the frame loop drains the channel every tick and applies results under a
//! brief write lock. The UI only ever renders a clone of the state.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use core::{AppError, Result};
