//! Output Rendering
//!
//! Short human summaries of each command's outcome, written to stdout.

use std::fmt::Write as _;

use crate::application::{AccountOutcome, GroupReport, OuOutcome, PolicyReport};

/// Icons for output rendering
struct Icons {
    check: &'static str,
    skip: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            skip: "○",
            warn: "!",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            skip: "[ ]",
            warn: "[WARN]",
        }
    }
}

/// Text renderer for command results
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    pub fn organization(&self, id: &str) -> String {
        format!("{} organization {}\n", self.icons().check, id)
    }

    pub fn ou(&self, name: &str, outcome: &OuOutcome) -> String {
        let icons = self.icons();
        match outcome {
            OuOutcome::Created { id } => {
                format!("{} organizational unit {} created ({})\n", icons.check, name, id)
            }
            OuOutcome::Existing { id } => {
                format!("{} organizational unit {} already exists ({})\n", icons.skip, name, id)
            }
        }
    }

    pub fn account(&self, outcome: &AccountOutcome) -> String {
        let icons = self.icons();
        match outcome {
            AccountOutcome::Created { account, policies } => {
                let mut out = format!(
                    "{} account {} created ({})\n",
                    icons.check, account.alias, account.id
                );
                out.push_str(&self.policies(policies));
                out
            }
            AccountOutcome::CreatedButUnplaced {
                account,
                ou,
                reason,
            } => format!(
                "{} account {} created ({}) but left at the root, not moved to {}: {}\n",
                icons.warn, account.alias, account.id, ou, reason
            ),
            AccountOutcome::SkippedMissingOu { ou } => {
                format!("{} organizational unit {} not found, nothing created\n", icons.skip, ou)
            }
        }
    }

    pub fn policies(&self, report: &PolicyReport) -> String {
        let icons = self.icons();
        let mut out = String::new();
        for stack in &report.stacks {
            let _ = writeln!(
                out,
                "{} {} {} ({})",
                icons.check, stack.stack, stack.outcome, stack.alias
            );
        }
        if let Some(groups) = &report.groups {
            out.push_str(&self.groups(groups));
        }
        out
    }

    fn groups(&self, report: &GroupReport) -> String {
        let icons = self.icons();
        if report.merged_keys.is_empty() {
            return format!("{} {} refreshed, no exported keys\n", icons.skip, report.stack);
        }
        format!(
            "{} {} refreshed: {}\n",
            icons.check,
            report.stack,
            report.merged_keys.join(", ")
        )
    }
}
