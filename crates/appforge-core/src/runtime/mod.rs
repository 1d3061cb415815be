//! Toolchain detection and external command execution
//!
//! This module provides:
//! - Toolchain probing (Node.js, Yarn, npx) with a Node version advisory
//! - `CommandRunner` / `PackageManager` - external command invocation with
//!   an explicit success/failure result

pub mod check;
pub mod command;

pub use check::{check_node, check_npx, check_toolchain, check_yarn, RuntimeInfo};
pub use command::{CommandRunner, FailurePolicy, PackageManager};
