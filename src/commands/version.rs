//! Show the resolved package version.
//!
//! Reads the version from the package manifest at runtime (falling back
//! to a placeholder when the manifest is missing or malformed) so an
//! installed bundle reports what it actually shipped with.

use anyhow::Result;
use serde_json::json;

use deepagents_skill::version;

/// Print the resolved version, human-readable or as JSON.
pub fn execute(json_output: bool) -> Result<()> {
    let resolved = version::resolve();

    if json_output {
        let info = json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": resolved,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("deepagents-skill {resolved}");
    }

    Ok(())
}
