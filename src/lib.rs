pub mod paths;
pub mod scaffold;
pub mod version;

// Re-export commonly used types
pub use scaffold::{FileAction, FileOutcome, InstallRequest, InstallResult, ScaffoldError};
