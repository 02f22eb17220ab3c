//! Single source of truth for the installer's filesystem layout.
//!
//! This module defines WHERE things live. It has no validation and no
//! business logic; the only I/O is the existence probing used to locate
//! the bundled template tree.
//!
//! # Install Targets
//!
//! ```text
//! workspace:  <path>/.factory/skills/<skill>/     (default: cwd)
//! personal:   ~/.factory/skills/<skill>/
//! ```
//!
//! # Bundle Layout
//!
//! ```text
//! <bundle root>/
//! └── templates/
//!     └── skills/
//!         └── deepagents-cli/   # the shipped skill tree
//! ```

use std::path::{Path, PathBuf};

/// Name of the skill this package ships.
///
/// The path helpers below take the skill name as a parameter so the
/// layout is reusable for other bundles; this constant is the one the
/// CLI injects.
pub const SKILL_NAME: &str = "deepagents-cli";

// =============================================================================
// Personal (~/.factory/)
// =============================================================================

/// User's factory home directory: `~/.factory/`
pub fn factory_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".factory")
}

/// Personal install paths (`~/.factory/skills/`)
pub mod personal {
    use super::*;

    /// Personal skills directory: `~/.factory/skills/`
    pub fn skills_dir() -> PathBuf {
        factory_home().join("skills")
    }

    /// Personal install target for a skill: `~/.factory/skills/{name}/`
    pub fn skill_dir(name: &str) -> PathBuf {
        skills_dir().join(name)
    }
}

// =============================================================================
// Workspace (<root>/.factory/)
// =============================================================================

/// Workspace install paths, relative to a workspace root.
pub mod workspace {
    use super::*;

    /// Workspace factory directory: `{root}/.factory/`
    pub fn factory_dir(root: &Path) -> PathBuf {
        root.join(".factory")
    }

    /// Workspace skills directory: `{root}/.factory/skills/`
    pub fn skills_dir(root: &Path) -> PathBuf {
        factory_dir(root).join("skills")
    }

    /// Workspace install target for a skill: `{root}/.factory/skills/{name}/`
    pub fn skill_dir(root: &Path, name: &str) -> PathBuf {
        skills_dir(root).join(name)
    }
}

// =============================================================================
// Bundled templates
// =============================================================================

/// Locate the bundled template tree for a skill.
///
/// Tries, in order:
/// 1. `CARGO_MANIFEST_DIR` for development runs via `cargo run`
/// 2. Ancestors of the executable, for installed layouts where the
///    binary sits next to (or below) the bundle root
///
/// Returns `None` when no candidate exists on disk; the caller decides
/// whether that is fatal.
pub fn templates_root(skill: &str) -> Option<PathBuf> {
    let relative = Path::new("templates").join("skills").join(skill);

    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let candidate = PathBuf::from(manifest_dir).join(&relative);
        if candidate.exists() {
            return Some(candidate);
        }
    }

    if let Ok(exe_path) = std::env::current_exe() {
        for ancestor in exe_path.ancestors().skip(1) {
            let candidate = ancestor.join(&relative);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }

    None
}
