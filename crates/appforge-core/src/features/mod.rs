//! Optional feature units layered onto a generated project
//!
//! Each unit reads the current state of the config artifacts, computes new
//! state, and writes it back through the `ConfigStore`, optionally fetching
//! template files and requesting package installs. Cross-feature decisions
//! are made by membership checks against the `InstalledSet`, never by
//! inspecting file contents.

mod commitlint;
mod eslint_imports;
mod material_ui;
mod plop;
mod storybook;
mod styled_components;

use crate::config::ConfigStore;
use crate::context::ProjectContext;
use crate::error::ScaffoldError;
use crate::runtime::PackageManager;
use crate::templates::{TemplateFetcher, TemplateRef};

/// The optional capabilities a run can layer onto the base project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    EslintImports,
    /// Part of the auto sequence only; has no selection short-code
    Commitlint,
    StyledComponents,
    Storybook,
    Plop,
    MaterialUi,
}

impl Feature {
    /// Stable identifier used in CLI messages and errors
    pub fn id(&self) -> &'static str {
        match self {
            Feature::EslintImports => "eslint-import-helpers",
            Feature::Commitlint => "commitlint",
            Feature::StyledComponents => "styled-components",
            Feature::Storybook => "storybook",
            Feature::Plop => "plop",
            Feature::MaterialUi => "material-ui",
        }
    }

    /// Name recorded in the installed set and shown in the final summary
    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::EslintImports => "Eslint",
            Feature::Commitlint => "Commitlint",
            Feature::StyledComponents => "Styled Components",
            Feature::Storybook => "Storybook",
            Feature::Plop => "Plop",
            Feature::MaterialUi => "Material UI",
        }
    }

    /// Map a selection short-code to its feature. Commitlint is not
    /// individually toggleable and has no code.
    pub fn from_code(code: char) -> Option<Feature> {
        match code {
            'e' => Some(Feature::EslintImports),
            's' => Some(Feature::StyledComponents),
            'b' => Some(Feature::Storybook),
            'p' => Some(Feature::Plop),
            'm' => Some(Feature::MaterialUi),
            _ => None,
        }
    }

    /// Features that must run earlier when they are co-selected with this
    /// one. Running without the prerequisite selected at all is fine; the
    /// dependent behavior is simply skipped.
    pub fn prerequisites(&self) -> &'static [Feature] {
        match self {
            Feature::MaterialUi => &[Feature::StyledComponents],
            _ => &[],
        }
    }

    /// Run this unit against the workspace
    pub async fn apply(&self, ws: &mut Workspace) -> Result<(), ScaffoldError> {
        match self {
            Feature::EslintImports => eslint_imports::apply(ws).await,
            Feature::Commitlint => commitlint::apply(ws).await,
            Feature::StyledComponents => styled_components::apply(ws).await,
            Feature::Storybook => storybook::apply(ws).await,
            Feature::Plop => plop::apply(ws).await,
            Feature::MaterialUi => material_ui::apply(ws).await,
        }
    }
}

/// Ordered record of the feature units completed during the current run.
/// Grows monotonically; later units consult it for cross-feature decisions.
#[derive(Debug, Clone, Default)]
pub struct InstalledSet {
    features: Vec<Feature>,
}

impl InstalledSet {
    pub fn record(&mut self, feature: Feature) {
        if !self.contains(feature) {
            self.features.push(feature);
        }
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Display names in completion order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.features.iter().map(|f| f.display_name())
    }
}

/// Everything a feature unit needs to read and mutate the project
pub struct Workspace {
    pub ctx: ProjectContext,
    pub store: ConfigStore,
    pub fetcher: TemplateFetcher,
    pub packages: PackageManager,
    pub installed: InstalledSet,
}

impl Workspace {
    pub fn new(ctx: ProjectContext, fetcher: TemplateFetcher, packages: PackageManager) -> Self {
        let store = ConfigStore::new(ctx.destination());
        Self {
            ctx,
            store,
            fetcher,
            packages,
            installed: InstalledSet::default(),
        }
    }

    /// Fetch a template and write it at the given relative path. Fallback
    /// content is written too; the degradation has already been reported by
    /// the fetcher.
    pub async fn write_fetched(
        &self,
        reference: &TemplateRef,
        rel: &str,
    ) -> Result<(), ScaffoldError> {
        let fetched = self.fetcher.fetch(reference).await;
        self.store.write_text(rel, &fetched.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_codes_map_to_features() {
        assert_eq!(Feature::from_code('e'), Some(Feature::EslintImports));
        assert_eq!(Feature::from_code('s'), Some(Feature::StyledComponents));
        assert_eq!(Feature::from_code('b'), Some(Feature::Storybook));
        assert_eq!(Feature::from_code('p'), Some(Feature::Plop));
        assert_eq!(Feature::from_code('m'), Some(Feature::MaterialUi));
        assert_eq!(Feature::from_code('x'), None);
    }

    #[test]
    fn test_commitlint_has_no_short_code() {
        for code in "abcdefghijklmnopqrstuvwxyz".chars() {
            assert_ne!(Feature::from_code(code), Some(Feature::Commitlint));
        }
    }

    #[test]
    fn test_installed_set_is_ordered_and_monotonic() {
        let mut installed = InstalledSet::default();
        installed.record(Feature::StyledComponents);
        installed.record(Feature::MaterialUi);
        installed.record(Feature::StyledComponents);

        assert_eq!(installed.len(), 2);
        let names: Vec<_> = installed.names().collect();
        assert_eq!(names, vec!["Styled Components", "Material UI"]);
    }

    #[test]
    fn test_material_ui_orders_after_styled_components() {
        assert_eq!(
            Feature::MaterialUi.prerequisites(),
            &[Feature::StyledComponents]
        );
        assert!(Feature::StyledComponents.prerequisites().is_empty());
    }
}
