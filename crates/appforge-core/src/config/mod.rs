//! Typed read/modify/write access to project configuration artifacts
//!
//! This module provides:
//! - `ConfigStore` - load/save/update of JSON and text artifacts rooted at
//!   the project destination
//! - Artifact shapes (`EslintConfig`, `PackageManifest`, `BabelConfig`,
//!   `TsConfig`) that preserve keys they do not model

pub mod artifacts;
pub mod store;

pub use artifacts::{
    BabelConfig, EslintConfig, PackageManifest, TsConfig, BABEL_RC, ESLINT_RC, PACKAGE_JSON,
    PRETTIER_RC, TSCONFIG_JSON, VSCODE_SETTINGS,
};
pub use store::ConfigStore;
