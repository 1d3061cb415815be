//! Appforge Core - Next.js project scaffolding with feature layering
//!
//! This library generates a base Next.js project through external commands
//! and then layers optional features (lint rules, styling, generators, UI
//! kits) onto it by mutating the project's configuration artifacts.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Capabilities** - config store, template fetcher, command
//!   runner, toolchain checks
//! - **Layer 2: Feature units** - self-contained transformations over the
//!   project's config artifacts and file tree
//! - **Layer 3: Orchestration** - the composer's ordering/run loop, base
//!   generation, and the optional cliclack prompt flow
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use appforge_core::composer::{self, Selection};
//!
//! let selection = Selection::from_codes("sm", false)?;
//! let plan = composer::resolve(&selection)?;
//! let report = composer::execute(&mut workspace, &plan).await;
//! ```

pub mod composer;
pub mod config;
pub mod context;
pub mod error;
pub mod features;
pub mod generator;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use composer::{execute, resolve, FeatureFailure, RunReport, Selection};
pub use config::ConfigStore;
pub use context::ProjectContext;
pub use error::ScaffoldError;
pub use features::{Feature, InstalledSet, Workspace};
pub use runtime::{CommandRunner, FailurePolicy, PackageManager};
pub use templates::{TemplateFetcher, TemplateRef};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};

/// User agent sent with template fetches
pub const USER_AGENT: &str = "appforge";
