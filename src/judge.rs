//! The contract every online judge implements.
//!
//! A judge knows three things about its site: how a problem id turns into a URL, how the local
//! files for that problem are named, and where the sample inputs sit in the problem page. Judges
//! carry no state, so each one is a unit struct used through `&'static dyn Judge`.

use crate::error::Result;

pub const DEFAULT_GITHUB_REPO: &str = "cp-solutions";

pub trait Judge: Send + Sync {
    /// Human readable name used in summaries.
    fn name(&self) -> &'static str;

    /// Repository the solutions of this judge are pushed to.
    fn github_repo(&self) -> &'static str {
        DEFAULT_GITHUB_REPO
    }

    /// Directory inside [`Judge::github_repo`] holding this judge's solutions.
    fn github_directory(&self) -> &'static str;

    /// Canonical problem URL. Judges without a mapping return a placeholder that is not a URL;
    /// fetching it simply yields no samples.
    fn link(&self, _problem_id: &str) -> String {
        "no source provided".to_string()
    }

    /// Returns `(directory, filename_stem)` for a problem. The stem has no extension.
    fn local_naming(&self, problem_id: &str, suffix: Option<&str>) -> (String, String) {
        (problem_id.to_string(), with_suffix(problem_id, suffix))
    }

    /// Sample inputs in page order.
    fn extract_samples(&self, _html: &str) -> Result<Vec<String>> {
        Ok(vec![])
    }

    /// Suffix of the `index`-th problem of a contest: `A`, `B`, ...
    fn contest_suffix(&self, index: usize) -> String {
        contest_letter(index)
    }
}

/// Fallback judge for problems from sites without dedicated support.
#[derive(Debug, Default, Clone, Copy)]
pub struct Generic;

impl Judge for Generic {
    fn name(&self) -> &'static str {
        "generic judge"
    }

    fn github_directory(&self) -> &'static str {
        "misc"
    }
}

pub(crate) fn with_suffix(stem: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => format!("{stem}_{suffix}"),
        None => stem.to_string(),
    }
}

pub(crate) fn contest_letter(index: usize) -> String {
    // past 'Z' this keeps counting through the ascii table
    char::from_u32('A' as u32 + index as u32)
        .unwrap_or('?')
        .to_string()
}
