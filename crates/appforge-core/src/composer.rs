//! Feature selection, ordering, and the run loop
//!
//! The composer turns the user's selection into an execution plan and runs
//! each unit in sequence. A unit-local failure is contained at the unit
//! boundary: it is recorded and later units still run. Only base
//! generation failures (handled upstream) abort a run.

use crate::error::ScaffoldError;
use crate::features::{Feature, InstalledSet, Workspace};
use anyhow::Result;
use colored::Colorize;

/// Canonical execution order used when the auto composite is selected
const AUTO_SEQUENCE: &[Feature] = &[
    Feature::EslintImports,
    Feature::Commitlint,
    Feature::StyledComponents,
    Feature::Storybook,
    Feature::Plop,
    Feature::MaterialUi,
];

/// The feature set requested for a run
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Expand to the full canonical sequence, ignoring individual toggles
    pub auto: bool,
    /// Individually toggled features, in the order the user gave them
    pub features: Vec<Feature>,
}

impl Selection {
    /// Parse a short-code string (`"esp"` etc.) into a selection.
    /// Unrecognized codes are rejected rather than silently dropped.
    pub fn from_codes(codes: &str, auto: bool) -> Result<Self> {
        let mut features = Vec::new();
        for code in codes.chars() {
            if code.is_whitespace() || code == ',' {
                continue;
            }
            let feature = Feature::from_code(code).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown feature code '{}' (valid: e, s, b, p, m)",
                    code
                )
            })?;
            if !features.contains(&feature) {
                features.push(feature);
            }
        }
        Ok(Self { auto, features })
    }

    pub fn is_empty(&self) -> bool {
        !self.auto && self.features.is_empty()
    }
}

/// Resolve a selection into a dependency-respecting execution plan.
///
/// Auto expands to the fixed canonical order regardless of other toggles.
/// Individually toggled features keep the literal order the user gave; a
/// selection where a unit's prerequisite is co-selected but ordered later
/// is rejected instead of silently producing wrong output.
pub fn resolve(selection: &Selection) -> Result<Vec<Feature>> {
    let plan: Vec<Feature> = if selection.auto {
        AUTO_SEQUENCE.to_vec()
    } else {
        selection.features.clone()
    };

    validate_order(&plan)?;
    Ok(plan)
}

fn validate_order(plan: &[Feature]) -> Result<()> {
    for (position, feature) in plan.iter().enumerate() {
        for prerequisite in feature.prerequisites() {
            let earlier = plan[..position].contains(prerequisite);
            let selected = plan.contains(prerequisite);
            if selected && !earlier {
                anyhow::bail!(
                    "{} must run before {} - reorder the selection",
                    prerequisite.id(),
                    feature.id()
                );
            }
        }
    }
    Ok(())
}

/// A unit that did not complete, with the error that stopped it
#[derive(Debug)]
pub struct FeatureFailure {
    pub feature: Feature,
    pub error: ScaffoldError,
}

/// Outcome of running an execution plan
#[derive(Debug, Default)]
pub struct RunReport {
    pub installed: InstalledSet,
    pub failures: Vec<FeatureFailure>,
}

impl RunReport {
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every unit of the plan in order. Successes are recorded into the
/// workspace's installed set as they happen, so later units observe them.
pub async fn execute(ws: &mut Workspace, plan: &[Feature]) -> RunReport {
    let mut failures = Vec::new();

    for feature in plan {
        println!("{} {}", "Installing".cyan(), feature.display_name());

        match feature.apply(ws).await {
            Ok(()) => {
                ws.installed.record(*feature);
                println!("  {} {}", "done".green(), feature.display_name());
            }
            Err(error) => {
                eprintln!(
                    "{} {} failed: {}",
                    "Warning:".yellow(),
                    feature.display_name(),
                    error
                );
                failures.push(FeatureFailure {
                    feature: *feature,
                    error,
                });
            }
        }
    }

    RunReport {
        installed: ws.installed.clone(),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BabelConfig, PackageManifest, BABEL_RC, PACKAGE_JSON};
    use crate::context::ProjectContext;
    use crate::runtime::{CommandRunner, PackageManager};
    use crate::templates::TemplateFetcher;
    use serde_json::json;
    use std::path::Path;
    use url::Url;

    #[test]
    fn test_auto_expands_to_canonical_order_ignoring_toggles() {
        let selection = Selection {
            auto: true,
            features: vec![Feature::Plop, Feature::MaterialUi],
        };
        let plan = resolve(&selection).unwrap();
        assert_eq!(plan, AUTO_SEQUENCE);
    }

    #[test]
    fn test_manual_selection_keeps_user_order() {
        let selection = Selection::from_codes("pe", false).unwrap();
        let plan = resolve(&selection).unwrap();
        assert_eq!(plan, vec![Feature::Plop, Feature::EslintImports]);
    }

    #[test]
    fn test_codes_are_deduplicated() {
        let selection = Selection::from_codes("sse", false).unwrap();
        assert_eq!(
            selection.features,
            vec![Feature::StyledComponents, Feature::EslintImports]
        );
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(Selection::from_codes("ez", false).is_err());
    }

    #[test]
    fn test_prerequisite_after_dependent_is_rejected() {
        let selection = Selection::from_codes("ms", false).unwrap();
        let err = resolve(&selection).unwrap_err();
        assert!(err.to_string().contains("styled-components"));
    }

    #[test]
    fn test_prerequisite_before_dependent_is_accepted() {
        let selection = Selection::from_codes("sm", false).unwrap();
        let plan = resolve(&selection).unwrap();
        assert_eq!(
            plan,
            vec![Feature::StyledComponents, Feature::MaterialUi]
        );
    }

    #[test]
    fn test_dependent_without_prerequisite_is_accepted() {
        let selection = Selection::from_codes("m", false).unwrap();
        let plan = resolve(&selection).unwrap();
        assert_eq!(plan, vec![Feature::MaterialUi]);
    }

    /// Workspace over a temp directory: fetches hit a refused port (every
    /// template falls back) and package installs are skipped.
    fn test_workspace(root: &Path) -> Workspace {
        let ctx = ProjectContext::with_base("demo", root, root.to_path_buf()).unwrap();
        std::fs::create_dir_all(ctx.destination()).unwrap();

        let fetcher = TemplateFetcher::new(
            Url::parse("http://127.0.0.1:9/templates").unwrap(),
            "appforge-test",
        );
        let packages = PackageManager::new(CommandRunner::disabled(ctx.destination()));
        Workspace::new(ctx, fetcher, packages)
    }

    #[tokio::test]
    async fn test_styling_alone_creates_transform_config_and_style_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = test_workspace(dir.path());

        let report = execute(&mut ws, &[Feature::StyledComponents]).await;
        assert!(report.success());

        let babel: BabelConfig = ws.store.load_required(BABEL_RC).unwrap();
        assert_eq!(babel.presets, vec!["next/babel", "@babel/preset-typescript"]);
        assert_eq!(babel.plugins.len(), 1);
        assert_eq!(babel.plugins[0][0], json!("babel-plugin-styled-components"));
        assert_eq!(babel.plugins[0][1]["ssr"], json!(true));
        assert_eq!(babel.plugins[0][1]["displayName"], json!(true));
        assert_eq!(
            babel.env["test"]["plugins"][0][1]["ssr"],
            json!(false)
        );

        assert!(ws.store.exists("src/pages/_document.tsx"));
        assert!(ws.store.exists("src/pages/_app.tsx"));
        assert!(ws.store.exists("src/styles/global.ts"));
        assert!(ws.store.exists("src/styles/theme.ts"));
        assert!(ws.store.exists("styled-components.d.ts"));

        let names: Vec<_> = report.installed.names().collect();
        assert_eq!(names, vec!["Styled Components"]);
    }

    #[tokio::test]
    async fn test_styling_merge_preserves_existing_babel_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = test_workspace(dir.path());
        ws.store
            .save(BABEL_RC, &json!({ "assumptions": { "setPublicClassFields": true } }))
            .unwrap();

        let report = execute(&mut ws, &[Feature::StyledComponents]).await;
        assert!(report.success());

        let babel: serde_json::Value = ws.store.load_required(BABEL_RC).unwrap();
        assert_eq!(babel["assumptions"]["setPublicClassFields"], json!(true));
        assert_eq!(babel["presets"][0], json!("next/babel"));
    }

    #[tokio::test]
    async fn test_ui_kit_adds_alias_only_after_styling() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = test_workspace(dir.path());
        ws.store
            .save(PACKAGE_JSON, &json!({ "scripts": { "dev": "next dev" } }))
            .unwrap();

        let report = execute(
            &mut ws,
            &[Feature::StyledComponents, Feature::MaterialUi],
        )
        .await;
        assert!(report.success());

        let manifest: PackageManifest = ws.store.load_required(PACKAGE_JSON).unwrap();
        let alias = manifest.alias.expect("alias block should exist");
        assert_eq!(
            alias.get("@mui/styled-engine"),
            Some(&json!("@mui/styled-engine-sc"))
        );
        // Keys from the generator survive the merge
        assert_eq!(manifest.scripts.get("dev"), Some(&json!("next dev")));
    }

    #[tokio::test]
    async fn test_ui_kit_without_styling_adds_no_alias() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = test_workspace(dir.path());
        ws.store
            .save(PACKAGE_JSON, &json!({ "scripts": {} }))
            .unwrap();

        let report = execute(&mut ws, &[Feature::MaterialUi]).await;
        assert!(report.success());

        let manifest: PackageManifest = ws.store.load_required(PACKAGE_JSON).unwrap();
        assert!(manifest.alias.is_none());
    }

    #[tokio::test]
    async fn test_missing_lint_config_fails_unit_but_run_continues() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = test_workspace(dir.path());

        let report = execute(
            &mut ws,
            &[Feature::EslintImports, Feature::StyledComponents],
        )
        .await;

        assert!(!report.success());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].feature, Feature::EslintImports);
        assert!(matches!(
            report.failures[0].error,
            ScaffoldError::MissingBaseConfig(_)
        ));

        // The independent unit after the failure still ran
        assert!(ws.store.exists(BABEL_RC));
        let names: Vec<_> = report.installed.names().collect();
        assert_eq!(names, vec!["Styled Components"]);
    }

    #[tokio::test]
    async fn test_generator_scripts_merge_into_existing_map() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = test_workspace(dir.path());
        ws.store
            .save(PACKAGE_JSON, &json!({ "scripts": { "build": "next build" } }))
            .unwrap();

        let report = execute(&mut ws, &[Feature::Plop]).await;
        assert!(report.success());

        let manifest: PackageManifest = ws.store.load_required(PACKAGE_JSON).unwrap();
        assert_eq!(manifest.scripts.get("build"), Some(&json!("next build")));
        assert_eq!(
            manifest.scripts.get("generate"),
            Some(&json!("yarn plop --plopfile generators/plopfile.js"))
        );
        assert!(ws.store.exists("generators/templates/Component.tsx.hbs"));
    }

    #[tokio::test]
    async fn test_feature_rerun_keeps_prior_generator_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = test_workspace(dir.path());
        ws.store.save(PACKAGE_JSON, &json!({ "scripts": {} })).unwrap();

        execute(&mut ws, &[Feature::Plop]).await;
        ws.store
            .write_text("generators/templates/custom.hbs", "hand written")
            .unwrap();
        let report = execute(&mut ws, &[Feature::Plop]).await;

        assert!(report.success());
        assert!(ws.store.exists("generators/templates/custom.hbs"));
    }
}
