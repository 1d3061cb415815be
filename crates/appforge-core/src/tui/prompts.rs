//! Charm-style CLI prompts using cliclack

use crate::composer::{self, Selection};
use crate::context::ProjectContext;
use crate::features::{Feature, Workspace};
use crate::generator;
use crate::runtime::{check, CommandRunner, FailurePolicy, PackageManager};
use crate::templates::TemplateFetcher;
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Raw project name (slugified before use)
    pub name: String,

    /// Destination the project directory is created under
    pub dest: PathBuf,

    /// Expand to the full pre-defined feature sequence
    pub auto: bool,

    /// Individually toggled feature short-codes (e, s, b, p, m)
    pub options: String,

    /// Skip package-manager and generator command execution
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

impl Default for CreateArgs {
    fn default() -> Self {
        Self {
            name: "next-app".to_string(),
            dest: PathBuf::from("."),
            auto: false,
            options: String::new(),
            skip_install: false,
            yes: false,
        }
    }
}

/// Run the full create flow with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("Appforge")?;

    // Step 1: Selection and execution plan
    let selection = Selection::from_codes(&args.options, args.auto)?;
    let plan = composer::resolve(&selection)?;

    // Step 2: Toolchain check
    check_toolchain(&plan, args.skip_install)?;

    // Step 3: Project context and destination confirmation
    let ctx = ProjectContext::new(&args.name, &args.dest)?;
    confirm_destination(&ctx, &args)?;

    // Step 4: Assemble the workspace
    let fetcher = TemplateFetcher::from_env(crate::USER_AGENT)?.open_links(!args.yes);
    let runner = if args.skip_install {
        cliclack::log::info("Skipping package installation")?;
        CommandRunner::disabled(ctx.destination())
    } else {
        CommandRunner::new(ctx.destination(), FailurePolicy::Advisory)
    };
    let mut ws = Workspace::new(ctx, fetcher, PackageManager::new(runner));

    // Step 5: Base project generation (fatal on failure)
    cliclack::log::step(format!(
        "Generating Next.js project in {}",
        ws.ctx.destination().display()
    ))?;
    generator::generate_base(&ws).await?;

    // Step 6: Layer the selected features
    if !plan.is_empty() {
        let names: Vec<&str> = plan.iter().map(|f| f.display_name()).collect();
        cliclack::log::step(format!("Features: {}", names.join(", ")))?;
    }
    let report = composer::execute(&mut ws, &plan).await;

    // Step 7: Summary
    for name in report.installed.names() {
        cliclack::log::success(format!("Installed - {}", name))?;
    }
    for failure in &report.failures {
        cliclack::log::warning(format!(
            "{} did not complete: {}",
            failure.feature.display_name(),
            failure.error
        ))?;
    }

    print_next_steps(&ws)?;

    if !report.success() {
        anyhow::bail!("{} feature(s) did not complete", report.failures.len());
    }
    Ok(())
}

fn check_toolchain(plan: &[Feature], skip_install: bool) -> Result<()> {
    if skip_install {
        return Ok(());
    }

    let spinner = cliclack::spinner();
    spinner.start("Checking toolchain...");

    let needs_npx = plan.contains(&Feature::Storybook);
    match check::check_toolchain(needs_npx) {
        Ok(tools) => {
            let info: Vec<String> = tools
                .iter()
                .map(|t| {
                    format!("{} ({})", t.name, t.version.as_deref().unwrap_or("unknown"))
                })
                .collect();
            spinner.stop(format!("Detected: {}", info.join(", ")));

            // Old Node installations get an advisory, not a hard failure
            if let Some(node) = tools.iter().find(|t| t.name == "Node.js") {
                if let Some(version) = &node.version {
                    if let Some(warning) = check::node_version_warning(version) {
                        cliclack::log::warning(
                            warning.lines().next().unwrap_or(&warning),
                        )?;
                    }
                }
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing tools");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install the missing tools and try again.");
        }
    }
}

fn confirm_destination(ctx: &ProjectContext, args: &CreateArgs) -> Result<()> {
    let path = ctx.destination();
    if path.exists() && path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(path) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!(
                    "{} has {} existing items",
                    path.display(),
                    count
                ))?;

                let confirm = if args.yes {
                    true
                } else {
                    cliclack::confirm("Continue anyway?")
                        .initial_value(true)
                        .interact()?
                };

                if !confirm {
                    anyhow::bail!("Setup cancelled.");
                }
            }
        }
    }
    Ok(())
}

fn print_next_steps(ws: &Workspace) -> Result<()> {
    println!();
    println!("  Next steps");
    println!();

    let mut steps = Vec::new();
    if ws.ctx.destination() != ws.ctx.base_dir() {
        steps.push(format!("cd {}", ws.ctx.destination().display()));
    }
    if !ws.packages.runner().is_enabled() {
        steps.push("yarn install".to_string());
    }
    steps.push("yarn dev".to_string());

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;
    Ok(())
}
