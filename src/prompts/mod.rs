pub mod remediation_prompt;
