//! styled-components integration
//!
//! Ensures a Babel transform configuration exists (creating it with the
//! default structure, merging into an existing one otherwise), writes the
//! document/app wrappers and base style files from templates, and writes
//! the deterministic theme type declaration.

use super::Workspace;
use crate::config::{BabelConfig, BABEL_RC};
use crate::error::ScaffoldError;
use crate::templates::TemplateRef;
use serde_json::json;

const BABEL_PLUGIN: &str = "babel-plugin-styled-components";

const DOCUMENT_TSX: TemplateRef = TemplateRef::new("_document.tsx").with_manual_url(
    "https://github.com/vercel/next.js/blob/main/examples/with-styled-components/pages/_document.js",
);

const APP_TSX: TemplateRef = TemplateRef::new("_app.tsx");

const GLOBAL_STYLES: TemplateRef =
    TemplateRef::new("global.ts").with_fallback(GLOBAL_STYLES_FALLBACK);

const THEME: TemplateRef = TemplateRef::new("theme.ts").with_fallback("export default {}\n");

const GLOBAL_STYLES_FALLBACK: &str = r#"import { createGlobalStyle } from 'styled-components'

const GlobalStyles = createGlobalStyle`
  * {
    padding: 0;
    margin: 0;
    box-sizing: border-box;
  }

  a {
    text-decoration: none;
  }

  html {
    font-size: 62.5%;
  }

  body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen,
      Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
  }
`

export default GlobalStyles
"#;

const THEME_DECLARATION: &str = r#"import theme from 'styles/theme'

type Theme = typeof theme

declare module 'styled-components' {
  // eslint-disable-next-line @typescript-eslint/no-empty-interface
  export interface DefaultTheme extends Theme {}
}
"#;

pub(super) async fn apply(ws: &mut Workspace) -> Result<(), ScaffoldError> {
    ws.packages
        .add_dev(&["@types/styled-components", BABEL_PLUGIN])
        .await?;

    // Create-or-merge: foreign keys of an existing .babelrc survive
    ws.store.update(BABEL_RC, |cfg: &mut BabelConfig| {
        cfg.presets = vec![
            "next/babel".to_string(),
            "@babel/preset-typescript".to_string(),
        ];
        cfg.plugins = vec![json!([
            BABEL_PLUGIN,
            { "ssr": true, "displayName": true }
        ])];
        cfg.env.insert(
            "test".to_string(),
            json!({
                "plugins": [[BABEL_PLUGIN, { "ssr": false, "displayName": false }]]
            }),
        );
    })?;

    ws.packages.add(&["styled-components"]).await?;

    // Wrappers are written even when the fetch fell back
    ws.write_fetched(&DOCUMENT_TSX, "src/pages/_document.tsx").await?;
    ws.write_fetched(&APP_TSX, "src/pages/_app.tsx").await?;

    ws.store.ensure_dir("src/styles")?;
    ws.write_fetched(&GLOBAL_STYLES, "src/styles/global.ts").await?;
    ws.write_fetched(&THEME, "src/styles/theme.ts").await?;

    ws.store.write_text("styled-components.d.ts", THEME_DECLARATION)
}
