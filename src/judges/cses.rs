use scraper::{Html, Selector};

use crate::error::Result;
use crate::judge::{with_suffix, Judge};

/// CSES problem set. Problem ids are task numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cses;

impl Judge for Cses {
    fn name(&self) -> &'static str {
        "CSES"
    }

    fn github_directory(&self) -> &'static str {
        "cses"
    }

    fn link(&self, problem_id: &str) -> String {
        format!("https://cses.fi/problemset/task/{}", problem_id)
    }

    fn local_naming(&self, problem_id: &str, suffix: Option<&str>) -> (String, String) {
        let stem = format!("cses_{}", problem_id);
        (stem.clone(), with_suffix(&stem, suffix))
    }

    fn extract_samples(&self, html: &str) -> Result<Vec<String>> {
        let document = Html::parse_document(html);

        // some pages repeat the anchor id (e.g. a linked example in the statement);
        // the heading is the one that starts the sample section
        let anchors = document
            .select(&Selector::parse("#example").unwrap())
            .count();
        let selector = if anchors > 1 {
            Selector::parse("h1#example ~ code").unwrap()
        } else {
            Selector::parse("#example ~ code").unwrap()
        };

        let samples = document
            .select(&selector)
            .next()
            .map(|node| node.text().collect::<String>())
            .into_iter()
            .collect();
        Ok(samples)
    }
}
