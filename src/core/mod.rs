//! Core game module - states, events, configuration and data loading errors.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod error;
mod events;
mod plugin;
mod states;

pub use config::*;
pub use error::DataLoadError;
pub use events::*;
pub use plugin::{CorePlugin, FrameSet};
pub use states::*;
