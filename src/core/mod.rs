//! # Core Application Logic
//!
//! This module contains the corrector's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • tasks (remote calls) │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │   remote   │
//!     │  Adapter   │                          │  (HTTP)    │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`tasks`]: Startup and correction calls, resolved into actions
//! - [`config`]: Settings and their override hierarchy
//! - [`prefs`]: The persisted mode preference
//! - [`notice`]: Transient user notifications

pub mod action;
pub mod config;
pub mod notice;
pub mod prefs;
pub mod state;
pub mod tasks;
