use crate::prompts::remediation_prompt::REMEDIATION_USER_PROMPT;

pub fn generate_prompt(log_content: &str) -> String {
    REMEDIATION_USER_PROMPT.replacen("{log_content}", log_content, 1)
}
