use std::sync::Arc;
use crate::config::constants::COMMIT_MESSAGE_PREFIX;
use crate::enums::publish_step::PublishStep;
use crate::errors::publish_error::PublishError;
use crate::structs::applied_patch::AppliedPatch;
use crate::structs::committer_identity::CommitterIdentity;
use crate::structs::patch_spec::PatchSpec;
use crate::structs::publish_receipt::PublishReceipt;
use crate::structs::push_target::PushTarget;
use crate::traits::version_control::VersionControlClient;

/// Commits and pushes an applied fix.
pub struct Publisher {
    vcs: Arc<dyn VersionControlClient>,
    identity: CommitterIdentity,
    target: PushTarget,
}

impl Publisher {
    pub fn new(vcs: Arc<dyn VersionControlClient>, identity: CommitterIdentity, target: PushTarget) -> Self {
        Self { vcs, identity, target }
    }

    pub fn commit_message(spec: &PatchSpec) -> String {
        format!("{}{}", COMMIT_MESSAGE_PREFIX, spec.explanation())
    }

    /// Configure the bot identity, then stage, commit and push only the
    /// patched file. Stops at the first failing step; the working tree edit
    /// is never rolled back.
    ///
    /// The path staged is the one the applier wrote, relative to the
    /// canonical repository root, not the path the model named.
    pub async fn publish(&self, spec: &PatchSpec, applied: &AppliedPatch) -> Result<PublishReceipt, PublishError> {
        let commit_message = Self::commit_message(spec);
        let file_path = applied.relative_path.to_string_lossy();

        log::info!("👤 Committing as {} <{}>", self.identity.name, self.identity.email);
        self.vcs
            .set_config("user.email", &self.identity.email)
            .await
            .map_err(|e| PublishError::new(PublishStep::ConfigureEmail, e))?;
        self.vcs
            .set_config("user.name", &self.identity.name)
            .await
            .map_err(|e| PublishError::new(PublishStep::ConfigureName, e))?;

        self.vcs
            .stage(&file_path)
            .await
            .map_err(|e| PublishError::new(PublishStep::Stage, e))?;

        self.vcs
            .commit(&commit_message, &file_path)
            .await
            .map_err(|e| PublishError::new(PublishStep::Commit, e))?;
        log::info!("📝 Committed: {}", commit_message);

        log::info!("📤 Pushing to {}...", self.target);
        self.vcs
            .push(&self.target)
            .await
            .map_err(|e| PublishError::new(PublishStep::Push, e))?;

        Ok(PublishReceipt {
            file_path: file_path.into_owned(),
            commit_message,
            target: self.target.clone(),
        })
    }
}
