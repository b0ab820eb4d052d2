//! Clean command report data structures.

use super::output::{Output, Report};

/// Report data from removing generated stubs.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Deleted stub files (or files that would be deleted in dry run).
    pub deleted: Vec<String>,
    /// Stubs that were already gone.
    pub missing: Vec<String>,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if self.deleted.is_empty() {
            out.preformatted("No generated stubs found.");
            return;
        }

        if self.dry_run {
            out.section("Would delete");
        } else {
            out.section("Deleted");
        }
        for path in &self.deleted {
            out.removed_item(path);
        }

        if !self.missing.is_empty() {
            out.newline();
            out.key_value("Already removed", &self.missing.len().to_string());
        }
    }
}
