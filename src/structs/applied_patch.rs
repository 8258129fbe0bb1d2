use std::path::PathBuf;

/// What `PatchApplier` changed on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedPatch {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub line_number: usize,
    pub previous_line: String,
    pub new_line: String,
}
