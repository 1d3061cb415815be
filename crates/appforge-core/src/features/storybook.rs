//! Storybook interactive documentation
//!
//! Delegates project wiring to the opaque `npx sb init` generator, then
//! overrides its main config and removes the generated example stories.

use super::Workspace;
use crate::error::ScaffoldError;
use crate::templates::TemplateRef;

const MAIN_JS: TemplateRef = TemplateRef::new("main.js");

pub(super) async fn apply(ws: &mut Workspace) -> Result<(), ScaffoldError> {
    ws.packages.runner().run("npx", &["sb", "init"]).await?;

    ws.store.ensure_dir(".storybook")?;
    ws.write_fetched(&MAIN_JS, ".storybook/main.js").await?;

    // sb init seeds example stories; a missing directory is fine on re-runs
    ws.store.remove_dir("src/stories")
}
