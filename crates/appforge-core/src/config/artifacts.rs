//! Shapes of the JSON artifacts the scaffolder mutates
//!
//! Each shape models only the keys the scaffolder touches; everything else
//! lands in a flattened spill map and survives load-modify-save round
//! trips. A feature therefore never discards keys written by the generator
//! or by an earlier feature.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// ESLint configuration produced by project generation
pub const ESLINT_RC: &str = ".eslintrc.json";

/// Package manifest produced by project generation
pub const PACKAGE_JSON: &str = "package.json";

/// Babel transform configuration (created on demand)
pub const BABEL_RC: &str = ".babelrc";

/// TypeScript compiler options produced by project generation
pub const TSCONFIG_JSON: &str = "tsconfig.json";

/// Prettier configuration written during base generation
pub const PRETTIER_RC: &str = ".prettierrc";

/// Editor settings written during base generation
pub const VSCODE_SETTINGS: &str = ".vscode/settings.json";

/// `.eslintrc.json`: rules map, ordered extends/plugins lists, settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EslintConfig {
    #[serde(default)]
    pub rules: Map<String, Value>,

    #[serde(default)]
    pub extends: Vec<String>,

    #[serde(default)]
    pub plugins: Vec<String>,

    #[serde(default)]
    pub settings: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `package.json`: scripts map plus the optional bundler alias block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub scripts: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PackageManifest {
    /// Insert an alias entry, creating the block when absent. Existing
    /// entries for other packages are kept.
    pub fn add_alias(&mut self, from: &str, to: &str) {
        self.alias
            .get_or_insert_with(Map::new)
            .insert(from.to_string(), Value::String(to.to_string()));
    }
}

/// `.babelrc`: presets, plugin tuples, and per-environment overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BabelConfig {
    #[serde(default)]
    pub presets: Vec<String>,

    /// Plugin entries are either names or `[name, options]` tuples
    #[serde(default)]
    pub plugins: Vec<Value>,

    #[serde(default)]
    pub env: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `tsconfig.json`: nested compiler options object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TsConfig {
    #[serde(default, rename = "compilerOptions")]
    pub compiler_options: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_eslint_config_preserves_unknown_keys() {
        let raw = json!({
            "root": true,
            "rules": { "semi": "off" },
            "extends": ["next/core-web-vitals"],
            "parserOptions": { "ecmaVersion": 2022 }
        });

        let mut cfg: EslintConfig = serde_json::from_value(raw).unwrap();
        cfg.plugins.push("eslint-plugin-import-helpers".to_string());

        let round_trip = serde_json::to_value(&cfg).unwrap();
        assert_eq!(round_trip["root"], json!(true));
        assert_eq!(round_trip["parserOptions"]["ecmaVersion"], json!(2022));
        assert_eq!(round_trip["rules"]["semi"], json!("off"));
    }

    #[test]
    fn test_package_manifest_alias_absent_by_default() {
        let manifest = PackageManifest::default();
        let value = serde_json::to_value(&manifest).unwrap();
        assert!(value.get("alias").is_none());
    }

    #[test]
    fn test_package_manifest_add_alias_merges() {
        let mut manifest = PackageManifest::default();
        manifest.add_alias("left", "right");
        manifest.add_alias("up", "down");

        let alias = manifest.alias.as_ref().unwrap();
        assert_eq!(alias.get("left"), Some(&json!("right")));
        assert_eq!(alias.get("up"), Some(&json!("down")));
    }

    #[test]
    fn test_babel_config_plugin_tuple_shape() {
        let mut cfg = BabelConfig::default();
        cfg.plugins
            .push(json!(["babel-plugin-styled-components", { "ssr": true }]));

        let value = serde_json::to_value(&cfg).unwrap();
        assert_eq!(value["plugins"][0][0], json!("babel-plugin-styled-components"));
        assert_eq!(value["plugins"][0][1]["ssr"], json!(true));
    }

    #[test]
    fn test_tsconfig_compiler_options_rename() {
        let raw = json!({ "compilerOptions": { "strict": true }, "include": ["src"] });
        let mut cfg: TsConfig = serde_json::from_value(raw).unwrap();
        cfg.compiler_options
            .insert("baseUrl".to_string(), json!("src"));

        let value = serde_json::to_value(&cfg).unwrap();
        assert_eq!(value["compilerOptions"]["strict"], json!(true));
        assert_eq!(value["compilerOptions"]["baseUrl"], json!("src"));
        assert_eq!(value["include"], json!(["src"]));
    }
}
