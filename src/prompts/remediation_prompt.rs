pub const REMEDIATION_SYSTEM_PROMPT: &str = "You are a helpful AI assistant that fixes test failures.";

/// Instructions wrapped around the failure log. `{log_content}` is replaced verbatim.
pub const REMEDIATION_USER_PROMPT: &str = r#"
Analyze this test failure log and suggest fixes:
{log_content}

Focus on:
1. Test assertion mismatches
2. Incorrect expected values
3. Simple syntax errors

Return the fix as a single JSON object and nothing else, with exactly these fields:
- file_path: path to the file needing changes, relative to the repository root
- line_number: 1-based line number of the issue
- current_code: the problematic code, exactly as it appears on that line
- fixed_code: the corrected code for that single line
- explanation: brief explanation of the fix
"#;
