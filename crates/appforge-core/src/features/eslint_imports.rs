//! Import-order linting via eslint-plugin-import-helpers
//!
//! Requires the `.eslintrc.json` produced by base generation; fails with
//! `MissingBaseConfig` when it is absent. The plugin reference is appended
//! to the existing plugin list, never overwriting it.

use super::Workspace;
use crate::config::{EslintConfig, ESLINT_RC};
use crate::error::ScaffoldError;
use serde_json::{json, Value};

const PLUGIN: &str = "eslint-plugin-import-helpers";
const RULE: &str = "import-helpers/order-imports";

pub(super) async fn apply(ws: &mut Workspace) -> Result<(), ScaffoldError> {
    // Check the prerequisite before touching the package manifest
    if !ws.store.exists(ESLINT_RC) {
        return Err(ScaffoldError::MissingBaseConfig(ws.store.path(ESLINT_RC)));
    }

    ws.packages.add_dev(&[PLUGIN]).await?;

    ws.store.update_required(ESLINT_RC, |cfg: &mut EslintConfig| {
        if !cfg.plugins.iter().any(|p| p == PLUGIN) {
            cfg.plugins.push(PLUGIN.to_string());
        }
        cfg.rules.insert(RULE.to_string(), order_imports_rule());
    })
}

fn order_imports_rule() -> Value {
    json!([
        "warn",
        {
            "newlinesBetween": "always",
            "groups": [
                "module",
                "/^@shared/",
                ["parent", "sibling", "index"]
            ],
            "alphabetize": { "order": "asc", "ignoreCase": true }
        }
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_block_shape() {
        let rule = order_imports_rule();
        assert_eq!(rule[0], "warn");
        assert_eq!(rule[1]["newlinesBetween"], "always");
        assert_eq!(rule[1]["groups"][2], json!(["parent", "sibling", "index"]));
        assert_eq!(rule[1]["alphabetize"]["ignoreCase"], json!(true));
    }
}
