//! Template fetching with static fallbacks
//!
//! Template files are served as raw text from a base URL. A failed fetch is
//! never an error: the fetcher substitutes the reference's static fallback
//! (or an empty placeholder), warns the user, and lets the calling feature
//! write the file and continue. Forward progress is preferred over strict
//! correctness of the generated content.

use colored::Colorize;
use url::Url;

/// Environment variable overriding the template base URL
pub const TEMPLATE_BASE_ENV: &str = "APPFORGE_TEMPLATE_URL";

/// Default source for template files
const DEFAULT_TEMPLATE_BASE: &str =
    "https://raw.githubusercontent.com/appforge-dev/templates/main/next";

/// A fetchable template file and what to do when retrieval fails
#[derive(Debug, Clone, Copy)]
pub struct TemplateRef {
    /// Path appended to the template base URL
    pub remote_path: &'static str,
    /// Substitute text written when the fetch fails; empty placeholder when
    /// no static fallback exists
    pub fallback: Option<&'static str>,
    /// Human-followable page with equivalent content, offered on failure
    pub manual_url: Option<&'static str>,
}

impl TemplateRef {
    pub const fn new(remote_path: &'static str) -> Self {
        Self {
            remote_path,
            fallback: None,
            manual_url: None,
        }
    }

    pub const fn with_fallback(mut self, fallback: &'static str) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub const fn with_manual_url(mut self, manual_url: &'static str) -> Self {
        self.manual_url = Some(manual_url);
        self
    }

    /// File name portion of the remote path, used in warnings
    pub fn file_name(&self) -> &'static str {
        self.remote_path
            .rsplit('/')
            .next()
            .unwrap_or(self.remote_path)
    }
}

/// Outcome of a fetch: the text to write plus whether it is substitute
/// content
#[derive(Debug, Clone)]
pub struct FetchedText {
    pub text: String,
    pub degraded: bool,
}

/// Retrieves template text by reference, substituting fallbacks on failure
pub struct TemplateFetcher {
    base: Url,
    client: reqwest::Client,
    /// Open manual-retrieval links in the browser on fallback
    open_links: bool,
}

impl TemplateFetcher {
    /// Create a fetcher with an explicit base URL
    pub fn new(base: Url, user_agent: &str) -> Self {
        Self {
            base,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            open_links: false,
        }
    }

    /// Create a fetcher from the environment, falling back to the default
    /// template source
    pub fn from_env(user_agent: &str) -> anyhow::Result<Self> {
        let url_str = std::env::var(TEMPLATE_BASE_ENV)
            .unwrap_or_else(|_| DEFAULT_TEMPLATE_BASE.to_string());
        let base = Url::parse(&url_str)
            .map_err(|e| anyhow::anyhow!("Invalid template URL '{}': {}", url_str, e))?;
        Ok(Self::new(base, user_agent))
    }

    /// Enable opening manual-retrieval links in the browser on fallback
    pub fn open_links(mut self, open_links: bool) -> Self {
        self.open_links = open_links;
        self
    }

    /// Build the full URL for a reference, appending each path segment
    fn build_url(&self, remote_path: &str) -> Option<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().ok()?;
            segments.pop_if_empty();
            for segment in remote_path.split('/') {
                segments.push(segment);
            }
        }
        Some(url)
    }

    /// Fetch a template's text. Always resolves to some text; a failed
    /// fetch substitutes the fallback (or an empty placeholder) and warns.
    pub async fn fetch(&self, reference: &TemplateRef) -> FetchedText {
        if let Some(url) = self.build_url(reference.remote_path) {
            match self.client.get(url).send().await {
                Ok(response) if response.status().is_success() => match response.text().await {
                    Ok(text) => {
                        return FetchedText {
                            text,
                            degraded: false,
                        }
                    }
                    Err(_) => {}
                },
                _ => {}
            }
        }

        self.warn_fallback(reference);
        FetchedText {
            text: reference.fallback.unwrap_or_default().to_string(),
            degraded: true,
        }
    }

    fn warn_fallback(&self, reference: &TemplateRef) {
        eprintln!(
            "{} {} was not retrieved - wrote substitute content, review it manually",
            "Warning:".yellow(),
            reference.file_name()
        );
        if let Some(link) = reference.manual_url {
            eprintln!("  See {}", link);
            if self.open_links {
                let _ = open::that(link);
            }
        }
    }
}
