//! Material UI kit
//!
//! Always adds the base packages. The styled-components compatibility
//! engine and the manifest alias are added only when the styled-components
//! unit is already in the installed set - decided by membership check, not
//! by re-deriving state from the file tree.

use super::{Feature, Workspace};
use crate::config::{PackageManifest, PACKAGE_JSON};
use crate::error::ScaffoldError;

const STYLED_ENGINE: &str = "@mui/styled-engine";
const STYLED_ENGINE_SC: &str = "@mui/styled-engine-sc";

pub(super) async fn apply(ws: &mut Workspace) -> Result<(), ScaffoldError> {
    ws.packages
        .add(&["@mui/material", "@emotion/react", "@emotion/styled"])
        .await?;

    if ws.installed.contains(Feature::StyledComponents) {
        ws.packages.add(&[STYLED_ENGINE]).await?;
        ws.store
            .update_required(PACKAGE_JSON, |manifest: &mut PackageManifest| {
                manifest.add_alias(STYLED_ENGINE, STYLED_ENGINE_SC);
            })?;
    }

    Ok(())
}
