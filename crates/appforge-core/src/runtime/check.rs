//! Toolchain detection for Node.js, Yarn, and npx

use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Oldest Node.js release the generated project's toolchain supports
const MIN_NODE_VERSION: &str = "18.0.0";

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if Yarn is available
pub fn check_yarn() -> RuntimeInfo {
    probe("Yarn", "yarn")
}

/// Check if npx is available (needed for the Storybook generator)
pub fn check_npx() -> RuntimeInfo {
    probe("npx", "npx")
}

/// Check the toolchain the run needs; missing tools fail with install hints
pub fn check_toolchain(needs_npx: bool) -> Result<Vec<RuntimeInfo>> {
    let mut results = Vec::new();
    let mut missing = Vec::new();

    let node = check_node();
    if node.available {
        results.push(node);
    } else {
        missing.push("Node.js (install from https://nodejs.org)");
    }

    let yarn = check_yarn();
    if yarn.available {
        results.push(yarn);
    } else {
        missing.push("Yarn (install from https://yarnpkg.com)");
    }

    if needs_npx {
        let npx = check_npx();
        if npx.available {
            results.push(npx);
        } else {
            missing.push("npx (ships with npm, https://nodejs.org)");
        }
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required tools:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(results)
}

/// Compare a detected Node.js version against the supported minimum.
/// Returns a warning message when the installation is older; unparseable
/// versions are skipped rather than warned about.
pub fn node_version_warning(detected: &str) -> Option<String> {
    let detected_ver = parse_version(detected).ok()?;
    let min_ver = Version::parse(MIN_NODE_VERSION).ok()?;

    if detected_ver < min_ver {
        Some(format!(
            "Node.js {} is older than the supported minimum {}.\n\
             Generated projects may not build; consider upgrading.",
            detected, MIN_NODE_VERSION
        ))
    } else {
        None
    }
}

/// Parse version strings as reported by the tools (`v18.17.0`, `1.22.19`)
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_strips_v_prefix() {
        assert_eq!(parse_version("v18.17.0").unwrap(), Version::new(18, 17, 0));
        assert_eq!(parse_version("1.22.19").unwrap(), Version::new(1, 22, 19));
    }

    #[test]
    fn test_old_node_version_warns() {
        let warning = node_version_warning("v16.20.2");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("18.0.0"));
    }

    #[test]
    fn test_supported_node_version_is_silent() {
        assert!(node_version_warning("v18.0.0").is_none());
        assert!(node_version_warning("v22.4.1").is_none());
    }

    #[test]
    fn test_unparseable_version_is_silent() {
        assert!(node_version_warning("not-a-version").is_none());
    }
}
