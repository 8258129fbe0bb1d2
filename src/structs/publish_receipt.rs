use crate::structs::push_target::PushTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub file_path: String,
    pub commit_message: String,
    pub target: PushTarget,
}
