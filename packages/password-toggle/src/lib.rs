#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod config;
mod error;
mod memory;
mod mode;
mod toggle;
mod tree;

#[cfg(feature = "web")]
mod web;

pub use config::Config;
pub use error::{ElementRole, ToggleError};
pub use memory::{MemoryHandle, MemoryTree};
pub use mode::InputMode;
pub use toggle::{toggle_password, try_toggle_password};
pub use tree::ElementTree;

#[cfg(feature = "web")]
pub use web::*;
