use scraper::{Html, Selector};

use crate::error::{Error, Result};
use crate::judge::{with_suffix, Judge};

const SAMPLE_INPUT_PREFIX: &str = "sample-input";

/// Baekjoon Online Judge. Problem ids are plain numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Boj;

impl Judge for Boj {
    fn name(&self) -> &'static str {
        "Baekjoon Online Judge"
    }

    fn github_directory(&self) -> &'static str {
        "boj"
    }

    fn link(&self, problem_id: &str) -> String {
        format!("https://www.acmicpc.net/problem/{}", problem_id)
    }

    fn local_naming(&self, problem_id: &str, suffix: Option<&str>) -> (String, String) {
        let stem = format!("boj_{}", problem_id);
        (stem.clone(), with_suffix(&stem, suffix))
    }

    fn extract_samples(&self, html: &str) -> Result<Vec<String>> {
        let document = Html::parse_document(html);
        let mut samples = vec![];
        for node in document.select(&Selector::parse("pre.sampledata").unwrap()) {
            let id = node
                .value()
                .attr("id")
                .ok_or_else(|| Error::markup(self.name(), "pre.sampledata without an id"))?;
            if id.starts_with(SAMPLE_INPUT_PREFIX) {
                samples.push(node.text().collect::<String>().replace("\r\n", "\n"));
            }
        }
        Ok(samples)
    }
}
