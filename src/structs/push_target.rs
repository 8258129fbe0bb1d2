use std::fmt;

/// Where `git push` sends the commit. Both parts unset means plain `git push`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushTarget {
    pub remote: Option<String>,
    pub branch: Option<String>,
}

impl PushTarget {
    pub fn new(remote: Option<String>, branch: Option<String>) -> Self {
        Self { remote, branch }
    }

    /// Arguments appended after `git push`.
    ///
    /// A branch without a remote is pushed to `origin`.
    pub fn push_args(&self) -> Vec<String> {
        match (&self.remote, &self.branch) {
            (None, None) => vec![],
            (Some(remote), None) => vec![remote.clone()],
            (remote, Some(branch)) => vec![
                remote.clone().unwrap_or_else(|| "origin".to_string()),
                branch.clone(),
            ],
        }
    }
}

impl fmt::Display for PushTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.push_args();
        if args.is_empty() {
            f.write_str("upstream")
        } else {
            f.write_str(&args.join(" "))
        }
    }
}
