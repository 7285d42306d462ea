use derive_builder::Builder;

use crate::error::{Error, Result};
use crate::judge::Judge;

/// A set of problems scaffolded together, keyed by suffix (`A`, `B`, ...).
///
/// Either `count` or `suffixes` must be set; explicit suffixes win when both are.
#[derive(Debug, Clone, Default, Builder)]
pub struct ContestBatch {
    /// Prepended to every suffix to form the problem id.
    #[builder(default, setter(into))]
    pub prefix: String,
    #[builder(default, setter(strip_option))]
    pub count: Option<usize>,
    #[builder(default, setter(strip_option))]
    pub suffixes: Option<Vec<String>>,
    /// Link overrides, one per suffix.
    #[builder(default, setter(strip_option))]
    pub links: Option<Vec<String>>,
}

impl ContestBatch {
    /// Pairs each suffix with its link override.
    pub fn entries(&self, judge: &dyn Judge) -> Result<Vec<(String, Option<String>)>> {
        let suffixes = match (&self.suffixes, self.count) {
            (Some(suffixes), _) => suffixes.clone(),
            (None, Some(count)) if count >= 1 => (0..count).map(|i| judge.contest_suffix(i)).collect(),
            (None, Some(_)) => {
                return Err(Error::InvalidBatch("count must be at least 1".to_string()))
            }
            (None, None) => {
                return Err(Error::InvalidBatch(
                    "either a problem count or explicit suffixes is required".to_string(),
                ))
            }
        };

        match &self.links {
            None => Ok(suffixes.into_iter().map(|s| (s, None)).collect()),
            Some(links) if links.len() == suffixes.len() => Ok(suffixes
                .into_iter()
                .zip(links.iter().cloned().map(Some))
                .collect()),
            Some(links) => Err(Error::InvalidBatch(format!(
                "{} links for {} problems",
                links.len(),
                suffixes.len()
            ))),
        }
    }

    pub fn problem_id(&self, suffix: &str) -> String {
        format!("{}{}", self.prefix, suffix)
    }
}
