//! Install the bundled skill into a workspace or personal directory.
//!
//! The command resolves the install target (workspace `.factory/skills/`
//! under `--path`, or the personal `~/.factory/skills/`), locates the
//! bundled template tree, and hands both to the scaffolder. Existing
//! files are never overwritten; `--force` only suppresses the pre-flight
//! note about an existing install.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::path::{Component, Path, PathBuf};

use deepagents_skill::paths::{self, SKILL_NAME};
use deepagents_skill::scaffold::{self, FileAction, InstallRequest, InstallResult};
use deepagents_skill::version;

const ASCII_ART: &str = r#"
  ██████╗ ███████╗███████╗██████╗      █████╗  ██████╗ ███████╗███╗   ██╗████████╗███████╗
  ██╔══██╗██╔════╝██╔════╝██╔══██╗    ██╔══██╗██╔════╝ ██╔════╝████╗  ██║╚══██╔══╝██╔════╝
  ██║  ██║█████╗  █████╗  ██████╔╝    ███████║██║  ███╗█████╗  ██╔██╗ ██║   ██║   ███████╗
  ██║  ██║██╔══╝  ██╔══╝  ██╔═══╝     ██╔══██║██║   ██║██╔══╝  ██║╚██╗██║   ██║   ╚════██║
  ██████╔╝███████╗███████╗██║         ██║  ██║╚██████╔╝███████╗██║ ╚████║   ██║   ███████║
  ╚═════╝ ╚══════╝╚══════╝╚═╝         ╚═╝  ╚═╝ ╚═════╝ ╚══════╝╚═╝  ╚═══╝   ╚═╝   ╚══════╝
                                   CLI Skill"#;

const DIVIDER: &str =
    "────────────────────────────────────────────────────────────────────────────────";
const DIVIDER_THIN: &str = "────────────────────────────────────────────────────────────";

/// Run the installer.
///
/// # Arguments
///
/// * `force` - Suppress the pre-flight existing-install note. Never
///   enables overwriting.
/// * `path` - Workspace root for workspace installs ("." = cwd). Ignored
///   with `--personal`.
/// * `personal` - Install under `~/.factory/skills/` instead of the
///   workspace.
///
/// # Errors
///
/// Returns an error if the bundled template tree cannot be found or any
/// directory creation / file copy fails. Files written before a failure
/// stay in place.
pub fn execute(force: bool, path: &str, personal: bool) -> Result<()> {
    let skill_dir = if personal {
        paths::personal::skill_dir(SKILL_NAME)
    } else {
        let root = resolve_workspace_root(path)?;
        paths::workspace::skill_dir(&root, SKILL_NAME)
    };

    let scope = if personal { "personal" } else { "workspace" };
    println!("\nDeep Agents CLI Skill Installer ({scope})\n");

    let templates_dir = paths::templates_root(SKILL_NAME)
        .ok_or_else(|| anyhow!("templates directory not found; the package may be corrupted"))?;

    if skill_dir.exists() && !force {
        println!("  .factory/skills/{SKILL_NAME} already exists");
        println!("  Scaffolding new files only (existing files will NOT be overwritten)\n");
    }

    let request = InstallRequest::new(&templates_dir, &skill_dir);
    let result = scaffold::install(&request)
        .with_context(|| format!("failed to install into {}", skill_dir.display()))?;

    print_outcomes(&result);
    print_success_screen(&result, &version::resolve(), &skill_dir);

    Ok(())
}

/// Absolutize the `--path` argument against the current directory.
///
/// The path is not required to exist; a bad value surfaces later as an
/// I/O error when the destination is created.
fn resolve_workspace_root(path: &str) -> Result<PathBuf> {
    let raw = PathBuf::from(path);
    let absolute = if raw.is_absolute() {
        raw
    } else {
        std::env::current_dir()
            .context("could not determine current directory")?
            .join(raw)
    };

    // Drop `.` components so "--path ." prints cleanly.
    Ok(absolute
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}

fn print_outcomes(result: &InstallResult) {
    let display_root = Path::new(".factory/skills").join(SKILL_NAME);

    for outcome in &result.outcomes {
        let shown = display_root.join(&outcome.relative_path);
        match outcome.action {
            FileAction::Created => {
                println!("  {} {}", "Created:".green(), shown.display());
            }
            FileAction::Skipped => {
                println!(
                    "  {} {} (already exists)",
                    "Skipped:".yellow(),
                    shown.display()
                );
            }
        }
    }
}

fn print_success_screen(result: &InstallResult, version: &str, skill_dir: &Path) {
    println!("\n{DIVIDER}\n");
    println!("{ASCII_ART}");
    println!("{}v{version}\n", " ".repeat(72));
    println!("{DIVIDER}");

    let status = if result.skipped > 0 {
        format!(
            "  Installed successfully       {} created  |  {} skipped (existing)",
            result.created, result.skipped
        )
    } else {
        format!(
            "  Installed successfully       {} files created",
            result.created
        )
    };
    println!("\n{}\n", status.green());
    println!("{DIVIDER_THIN}");

    println!("\n  INSTALLED TO\n");
    println!("  {}\n", skill_dir.display());
    println!("{DIVIDER_THIN}");

    println!("\n  WHAT THIS SKILL DOES\n");
    println!("  Gives your Factory.ai Droid comprehensive knowledge of the");
    println!("  Deep Agents CLI — commands, flags, providers, skills, memory,");
    println!("  sandboxes, streaming, SDK customization, and workflows.\n");
    println!("{DIVIDER_THIN}");

    println!("\n  USAGE\n");
    println!("  The Droid loads this skill automatically when relevant.");
    println!("  You can also invoke it directly: /{SKILL_NAME}\n");
    println!("{DIVIDER_THIN}");

    println!("\n  RESOURCES\n");
    println!("  NPM       https://npmjs.com/package/deepagents-cli-droid-skill");
    println!("  GitHub    https://github.com/Gitmaxd/deepagents-cli-droid-skill\n");
    println!("{DIVIDER}");
    println!();
}
