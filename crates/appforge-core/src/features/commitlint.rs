//! Conventional-commit message linting
//!
//! Runs only as part of the auto sequence; there is no short-code for it.

use super::Workspace;
use crate::error::ScaffoldError;

const CONFIG_FILE: &str = "commitlint.config.js";

const CONFIG_TEXT: &str =
    "module.exports = { extends: ['@commitlint/config-conventional'] }\n";

pub(super) async fn apply(ws: &mut Workspace) -> Result<(), ScaffoldError> {
    ws.packages
        .add_dev(&["@commitlint/config-conventional", "@commitlint/cli"])
        .await?;
    ws.store.write_text(CONFIG_FILE, CONFIG_TEXT)
}
