use crate::structs::applied_patch::AppliedPatch;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub struct PatchLogger {}

impl PatchLogger {
    /// Red/green preview of the replaced line.
    pub fn render_diff(applied: &AppliedPatch) -> Vec<String> {
        let line_number = applied.line_number;
        vec![
            format!("📄 Diff preview for {}:", applied.relative_path.display()),
            RULE.to_string(),
            format!("@@ Line {} @@", line_number),
            format!("\x1b[31m- {:<4} | {}\x1b[0m", line_number, applied.previous_line),
            format!("\x1b[32m+ {:<4} | {}\x1b[0m", line_number, applied.new_line),
            RULE.to_string(),
        ]
    }

    pub fn print_diff_preview(applied: &AppliedPatch) {
        for line in Self::render_diff(applied) {
            log::info!("{}", line);
        }
    }
}
