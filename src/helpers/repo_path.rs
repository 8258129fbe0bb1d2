use std::path::{Path, PathBuf};
use crate::errors::apply_error::ApplyError;

/// A file known to exist inside the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    pub absolute: PathBuf,
    pub relative: PathBuf,
}

/// Resolve `candidate` (relative to `repo_root`, or absolute) to an existing
/// file inside the repository. Symlinks and `..` are resolved before the
/// containment check.
pub fn resolve_repo_file(repo_root: &Path, candidate: &str) -> Result<RepoPath, ApplyError> {
    if candidate.trim().is_empty() {
        return Err(ApplyError::OutsideRepository {
            path: candidate.to_string(),
            reason: "path is empty".to_string(),
        });
    }

    let root = repo_root.canonicalize().map_err(|source| ApplyError::Read {
        path: repo_root.to_path_buf(),
        source,
    })?;

    let candidate_path = Path::new(candidate);
    let joined = if candidate_path.is_absolute() {
        candidate_path.to_path_buf()
    } else {
        root.join(candidate_path)
    };

    if !joined.exists() {
        return Err(ApplyError::NotFound { path: joined });
    }

    let absolute = joined.canonicalize().map_err(|source| ApplyError::Read {
        path: joined.clone(),
        source,
    })?;

    let relative = absolute
        .strip_prefix(&root)
        .map(Path::to_path_buf)
        .map_err(|_| ApplyError::OutsideRepository {
            path: candidate.to_string(),
            reason: format!("resolves to {}", absolute.display()),
        })?;

    Ok(RepoPath { absolute, relative })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn repo_with_file() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/calc.py"), "x = 1\n").unwrap();
        dir
    }

    #[test]
    fn test_relative_path_resolves_inside_repo() {
        let repo = repo_with_file();
        let resolved = resolve_repo_file(repo.path(), "src/calc.py").unwrap();
        assert_eq!(resolved.relative, PathBuf::from("src/calc.py"));
        assert!(resolved.absolute.ends_with("src/calc.py"));
    }

    #[test]
    fn test_absolute_path_inside_repo_is_accepted() {
        let repo = repo_with_file();
        let absolute = repo.path().join("src/calc.py");
        let resolved = resolve_repo_file(repo.path(), absolute.to_str().unwrap()).unwrap();
        assert_eq!(resolved.relative, PathBuf::from("src/calc.py"));
    }

    #[test]
    fn test_parent_traversal_is_rejected() {
        let outer = TempDir::new().unwrap();
        let repo = outer.path().join("repo");
        fs::create_dir_all(&repo).unwrap();
        fs::write(outer.path().join("secret.txt"), "s\n").unwrap();

        let err = resolve_repo_file(&repo, "../secret.txt").unwrap_err();
        assert!(matches!(err, ApplyError::OutsideRepository { .. }));
    }

    #[test]
    fn test_missing_file_and_empty_path() {
        let repo = repo_with_file();
        assert!(matches!(
            resolve_repo_file(repo.path(), "src/nope.py"),
            Err(ApplyError::NotFound { .. })
        ));
        assert!(matches!(
            resolve_repo_file(repo.path(), "  "),
            Err(ApplyError::OutsideRepository { .. })
        ));
    }
}
