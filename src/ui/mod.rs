//! UI module for the interactive session
//!
//! This module provides the numbered text menu that drives the graph
//! queries, and the key-press pause shown between actions.

mod app;
pub mod pause;

pub use app::{run_app, App, MenuChoice};
pub use pause::{KeyPause, NoPause, Pause};
