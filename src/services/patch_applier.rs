use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use crate::errors::apply_error::ApplyError;
use crate::helpers::repo_path::resolve_repo_file;
use crate::structs::applied_patch::AppliedPatch;
use crate::structs::patch_spec::PatchSpec;

/// Replaces exactly one line of one file inside the repository.
pub struct PatchApplier {
    repo_root: PathBuf,
    strict_match: bool,
}

impl PatchApplier {
    pub fn new(repo_root: impl Into<PathBuf>, strict_match: bool) -> Self {
        Self {
            repo_root: repo_root.into(),
            strict_match,
        }
    }

    /// Apply `spec`, leaving every other line byte-identical.
    ///
    /// The file is rewritten through a temporary sibling that replaces the
    /// original only once fully written, so a failure never leaves it
    /// half-written.
    pub fn apply(&self, spec: &PatchSpec) -> Result<AppliedPatch, ApplyError> {
        let target = resolve_repo_file(&self.repo_root, spec.file_path())?;

        let content = fs::read_to_string(&target.absolute).map_err(|source| ApplyError::Read {
            path: target.absolute.clone(),
            source,
        })?;

        let lines: Vec<&str> = content.split_inclusive('\n').collect();
        let line_number = spec.line_number();

        log::info!(
            "📁 Applying fix to {} (line {} of {})",
            target.relative.display(),
            line_number,
            lines.len()
        );

        if line_number > lines.len() {
            return Err(ApplyError::LineOutOfRange {
                path: target.relative,
                line_number,
                line_count: lines.len(),
            });
        }

        let index = line_number - 1;
        let previous_line = strip_terminator(lines[index]).to_string();

        if self.strict_match {
            Self::verify_current_code(spec, &target.relative, &previous_line)?;
        }

        let mut patched = String::with_capacity(content.len() + spec.fixed_code().len() + 1);
        for (i, line) in lines.iter().enumerate() {
            if i == index {
                patched.push_str(spec.fixed_code());
                patched.push('\n');
            } else {
                patched.push_str(line);
            }
        }

        Self::write_atomically(&target.absolute, patched.as_bytes())?;
        log::info!("✅ File {} successfully modified", target.relative.display());

        Ok(AppliedPatch {
            path: target.absolute,
            relative_path: target.relative,
            line_number,
            previous_line,
            new_line: spec.fixed_code().to_string(),
        })
    }

    fn verify_current_code(spec: &PatchSpec, path: &Path, actual_line: &str) -> Result<(), ApplyError> {
        let expected = spec.current_code().trim();
        if expected.is_empty() {
            log::warn!("⚠️ Model did not quote the current code; skipping line verification");
            return Ok(());
        }

        let actual = actual_line.trim();
        if actual != expected {
            return Err(ApplyError::Mismatch {
                path: path.to_path_buf(),
                line_number: spec.line_number(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }

        Ok(())
    }

    fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), ApplyError> {
        let write_error = |source: io::Error| ApplyError::Write {
            path: path.to_path_buf(),
            source,
        };

        let permissions = fs::metadata(path).map_err(write_error)?.permissions();
        if permissions.readonly() {
            return Err(write_error(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "file is read-only",
            )));
        }

        let directory = path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(directory).map_err(write_error)?;
        temp.write_all(contents).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;
        fs::set_permissions(temp.path(), permissions).map_err(write_error)?;
        temp.persist(path).map_err(|e| write_error(e.error))?;

        Ok(())
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
