pub mod catalog;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod runner;
pub mod scanner;
// cmd and reports are modules of the binary crate (main.rs).

pub use error::{AfResult, ArmorForgeError};
