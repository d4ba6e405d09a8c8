//! Cinder compiler driver.
//!
//! Owns everything the scanner borrows: the source bytes, the long-lived
//! [`StringArena`](cinder_ir::StringArena) and the diagnostic queue. The
//! `cinder` binary is a thin argument parser over [`commands`].

pub mod commands;
mod compiler;
mod config;
mod error;
mod tracing_setup;

pub use compiler::{CompileOutput, Compiler, EXTENSION};
pub use config::{parse_args, CompilerConfig, ConfigError};
pub use error::CompileError;
pub use tracing_setup::init_tracing;
