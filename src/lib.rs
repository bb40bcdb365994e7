pub mod config;
pub mod filesystem;
pub mod patch;
pub mod paths;
pub mod process;
pub mod scaffold;
pub mod stubs;

// Re-export commonly used types
pub use patch::{Markers, PatchOutcome, PatchRequest, RegionError};
pub use scaffold::{Scaffold, ScaffoldOptions, ScaffoldStatus};
