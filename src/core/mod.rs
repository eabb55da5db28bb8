//! # Core Application Logic
//!
//! This module contains DeDash's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Directory (data)     │
//!                    │  • State (view state)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`restaurant`]: `Restaurant` and `MenuItem` records
//! - [`directory`]: The read-only collection and its loader
//! - [`sort`]: `SortKey` and list ordering
//! - [`detail`]: Detail page resolution (found / not found)
//! - [`panel`]: Profile panel open/closed state
//! - [`state`]: The `App` struct holding all application state
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: `~/.dedash/config.toml` loading and resolution

pub mod action;
pub mod config;
pub mod detail;
pub mod directory;
pub mod panel;
pub mod restaurant;
pub mod sort;
pub mod state;
