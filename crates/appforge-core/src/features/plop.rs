//! Plop component generator
//!
//! Creates the generator directory tree, fetches the plopfile and its
//! handlebars templates (placeholder content on fallback, the run
//! continues), and merges the `generate` script into the package manifest.

use super::Workspace;
use crate::config::{PackageManifest, PACKAGE_JSON};
use crate::error::ScaffoldError;
use crate::templates::TemplateRef;
use serde_json::Value;

const PLOPFILE: TemplateRef = TemplateRef::new("plopfile.js");
const COMPONENT_HBS: TemplateRef = TemplateRef::new("plop_templates/Component.tsx.hbs");
const STORIES_HBS: TemplateRef = TemplateRef::new("plop_templates/stories.tsx.hbs");
const STYLES_HBS: TemplateRef = TemplateRef::new("plop_templates/styles.ts.hbs");

const GENERATE_SCRIPT: &str = "yarn plop --plopfile generators/plopfile.js";

pub(super) async fn apply(ws: &mut Workspace) -> Result<(), ScaffoldError> {
    ws.store.ensure_dir("generators/templates")?;

    ws.packages.add_dev(&["plop"]).await?;

    ws.write_fetched(&PLOPFILE, "generators/plopfile.js").await?;
    ws.write_fetched(&COMPONENT_HBS, "generators/templates/Component.tsx.hbs")
        .await?;
    ws.write_fetched(&STORIES_HBS, "generators/templates/stories.tsx.hbs")
        .await?;
    ws.write_fetched(&STYLES_HBS, "generators/templates/styles.ts.hbs")
        .await?;

    // Merge into the scripts map; entries from the generator or other
    // features stay untouched
    ws.store
        .update_required(PACKAGE_JSON, |manifest: &mut PackageManifest| {
            manifest.scripts.insert(
                "generate".to_string(),
                Value::String(GENERATE_SCRIPT.to_string()),
            );
        })
}
