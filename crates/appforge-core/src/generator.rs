//! Base Next.js project generation
//!
//! Runs the opaque `create-next-app` generator in the base directory, then
//! applies the baseline lint/format/editor configuration every feature
//! unit builds on. Failures here are fatal to the run: the artifacts this
//! step produces are hard prerequisites for everything after it.

use crate::config::{
    EslintConfig, TsConfig, ESLINT_RC, PRETTIER_RC, TSCONFIG_JSON, VSCODE_SETTINGS,
};
use crate::error::ScaffoldError;
use crate::features::Workspace;
use anyhow::{Context, Result};
use serde_json::{json, Map};

const EDITOR_CONFIG: &str = "\
root = true

[*]
indent_style = space
indent_size = 2
end_of_line = lf
charset = utf-8
trim_trailing_whitespace = true
insert_final_newline = true
";

/// Generate the base project and write its baseline configuration
pub async fn generate_base(ws: &Workspace) -> Result<()> {
    ws.packages
        .runner()
        .run_in(
            ws.ctx.base_dir(),
            "yarn",
            &["create", "next-app", ws.ctx.name(), "--typescript"],
        )
        .await
        .context("Failed to run create-next-app")?;

    ensure_lint_config(ws).await?;

    // Baseline replaces the generated rules/extends/plugins/settings;
    // top-level keys the baseline does not model are preserved
    ws.store
        .update_required(ESLINT_RC, |cfg: &mut EslintConfig| {
            cfg.rules = Map::new();
            cfg.rules.insert("react/prop-types".to_string(), json!("off"));
            cfg.rules
                .insert("react/react-in-js-scope".to_string(), json!("off"));
            cfg.rules.insert(
                "@typescript-eslint/explicit-module-boundary-types".to_string(),
                json!("off"),
            );

            cfg.settings = Map::new();
            cfg.settings
                .insert("react".to_string(), json!({ "version": "detect" }));

            cfg.extends = vec![
                "next/core-web-vitals".to_string(),
                "plugin:prettier/recommended".to_string(),
            ];
            cfg.plugins = Vec::new();
        })
        .context("Failed to write baseline lint configuration")?;

    ws.packages
        .add_dev(&[
            "eslint-plugin-react@latest",
            "@typescript-eslint/eslint-plugin@latest",
            "@typescript-eslint/parser@latest",
        ])
        .await?;
    ws.packages.add_dev(&["eslint-plugin-react-hooks"]).await?;

    ws.store.write_text(".editorconfig", EDITOR_CONFIG)?;

    ws.store.save(
        PRETTIER_RC,
        &json!({
            "trailingComma": "none",
            "semi": false,
            "singleQuote": true
        }),
    )?;
    ws.packages.add_dev_exact(&["prettier"]).await?;
    ws.packages
        .add_dev(&["eslint-plugin-prettier", "eslint-config-prettier"])
        .await?;

    ws.store.save(
        VSCODE_SETTINGS,
        &json!({
            "editor.formatOnSave": false,
            "editor.codeActionsOnSave": { "source.fixAll.eslint": true }
        }),
    )?;

    // Pages live under src/; the generated top-level directories go away
    ws.store.ensure_dir("src/pages")?;
    ws.store.remove_dir("pages")?;
    ws.store.remove_dir("styles")?;

    ws.store
        .update_required(TSCONFIG_JSON, |cfg: &mut TsConfig| {
            cfg.compiler_options
                .insert("baseUrl".to_string(), json!("src"));
        })
        .context("tsconfig.json is missing or unreadable after generation")?;

    Ok(())
}

/// The generator is expected to leave a lint config behind; when it does
/// not, initialize one and retry before giving up.
async fn ensure_lint_config(ws: &Workspace) -> Result<()> {
    if ws.store.exists(ESLINT_RC) {
        return Ok(());
    }

    ws.packages.add_dev(&["eslint"]).await?;
    ws.packages.runner().run("yarn", &["eslint", "--init"]).await?;

    if !ws.store.exists(ESLINT_RC) {
        return Err(ScaffoldError::MissingBaseConfig(ws.store.path(ESLINT_RC)))
            .context("Lint configuration could not be initialized");
    }
    Ok(())
}
