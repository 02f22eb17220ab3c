//! Version resolution for the installer.
//!
//! The displayed version is read from the package manifest on disk so an
//! installed bundle reports the version it shipped with. A missing or
//! malformed manifest yields a placeholder rather than failing the
//! command; version lookup is display-only and must never abort an
//! install.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Compile-time crate version. Used for clap's `--version` flag, which
/// cannot wait for a runtime lookup.
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder reported when no readable manifest is found.
pub const FALLBACK_VERSION: &str = "0.0.0";

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Package,
}

#[derive(Debug, Deserialize)]
struct Package {
    version: String,
}

/// Resolve the display version from the nearest package manifest.
///
/// Searches `CARGO_MANIFEST_DIR` (development runs), then the ancestors
/// of the executable (installed layouts). Every failure mode (no
/// manifest, unreadable file, malformed TOML, missing version field)
/// collapses to [`FALLBACK_VERSION`].
pub fn resolve() -> String {
    manifest_path()
        .and_then(|path| read_manifest_version(&path))
        .unwrap_or_else(|| FALLBACK_VERSION.to_string())
}

fn manifest_path() -> Option<PathBuf> {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let candidate = PathBuf::from(manifest_dir).join("Cargo.toml");
        if candidate.exists() {
            return Some(candidate);
        }
    }

    if let Ok(exe_path) = std::env::current_exe() {
        for ancestor in exe_path.ancestors().skip(1) {
            let candidate = ancestor.join("Cargo.toml");
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }

    None
}

/// Extract `package.version` from a manifest file, or `None` if the file
/// is unreadable or not well-formed TOML.
fn read_manifest_version(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let manifest: Manifest = toml::from_str(&content).ok()?;
    Some(manifest.package.version)
}
