//! Project identity and paths, fixed once at the start of a run
//!
//! The base directory is captured explicitly and threaded through every
//! file and command operation; nothing in the crate changes the process
//! working directory.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Immutable snapshot of what is being scaffolded and where
#[derive(Debug, Clone)]
pub struct ProjectContext {
    name: String,
    destination: PathBuf,
    base_dir: PathBuf,
}

impl ProjectContext {
    /// Create a context from raw user input, resolving paths against the
    /// current working directory
    pub fn new(raw_name: &str, dest: &Path) -> Result<Self> {
        let base_dir = std::env::current_dir()?;
        Self::with_base(raw_name, dest, base_dir)
    }

    /// Create a context against an explicit base directory
    pub fn with_base(raw_name: &str, dest: &Path, base_dir: PathBuf) -> Result<Self> {
        let name = slugify(raw_name);
        if name.is_empty() {
            anyhow::bail!("Project name '{}' contains no usable characters", raw_name);
        }

        let dest = if dest.is_absolute() {
            dest.to_path_buf()
        } else {
            base_dir.join(dest)
        };

        Ok(Self {
            destination: dest.join(&name),
            name,
            base_dir,
        })
    }

    /// Slugified project name (lowercase, hyphen-separated)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute directory the project is generated into
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Directory that was current when the command was invoked
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Reduce arbitrary user input to a lowercase hyphen-separated slug
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_spaces_and_case() {
        assert_eq!(slugify("My Next App"), "my-next-app");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("  hello__world!! "), "hello-world");
        assert_eq!(slugify("a..b--c"), "a-b-c");
    }

    #[test]
    fn test_slugify_trims_leading_and_trailing_separators() {
        assert_eq!(slugify("--edge--"), "edge");
    }

    #[test]
    fn test_context_resolves_relative_destination() {
        let ctx =
            ProjectContext::with_base("My App", Path::new("projects"), PathBuf::from("/work"))
                .unwrap();
        assert_eq!(ctx.name(), "my-app");
        assert_eq!(ctx.destination(), Path::new("/work/projects/my-app"));
        assert_eq!(ctx.base_dir(), Path::new("/work"));
    }

    #[test]
    fn test_context_keeps_absolute_destination() {
        let ctx =
            ProjectContext::with_base("app", Path::new("/tmp/out"), PathBuf::from("/work")).unwrap();
        assert_eq!(ctx.destination(), Path::new("/tmp/out/app"));
    }

    #[test]
    fn test_context_rejects_empty_slug() {
        assert!(ProjectContext::with_base("!!!", Path::new("."), PathBuf::from("/w")).is_err());
    }
}
