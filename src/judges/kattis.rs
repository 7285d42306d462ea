use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::judge::Judge;

const DEFAULT_SUBDOMAIN: &str = "open";
const ID_SEPARATOR: char = '_';
const CONTEST_ORIGIN: &str = "https://open.kattis.com";

/// Kattis. A problem id is `subdomain_code` (e.g. `open_hello`) or a bare code, which lives on
/// the `open` subdomain.
#[derive(Debug, Default, Clone, Copy)]
pub struct Kattis;

/// One row of a contest's problem list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestProblem {
    pub label: String,
    pub link: String,
}

impl Kattis {
    /// Splits an id into a lowercase `(subdomain, problem_code)`.
    ///
    /// Kattis hosts and problem codes are lowercase ascii, so any other id has no problem page
    /// and yields `None`.
    pub fn split_id(problem_id: &str) -> Option<(String, String)> {
        let (subdomain, code) = problem_id
            .trim()
            .split_once(ID_SEPARATOR)
            .unwrap_or((DEFAULT_SUBDOMAIN, problem_id.trim()));
        let subdomain = subdomain.to_ascii_lowercase();
        let code = code.to_ascii_lowercase();

        let valid_subdomain = !subdomain.is_empty()
            && !subdomain.starts_with('-')
            && !subdomain.ends_with('-')
            && subdomain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        let valid_code = !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric());
        (valid_subdomain && valid_code).then_some((subdomain, code))
    }

    /// Inverse of [`Judge::link`]: recovers `(subdomain, problem_code)` from a problem URL.
    pub fn parse_link(link: &str) -> Option<(String, String)> {
        let url = Url::parse(link).ok()?;
        let subdomain = url.host_str()?.strip_suffix(".kattis.com")?;
        let mut segments = url.path_segments()?;
        match (segments.next(), segments.next(), segments.next()) {
            (Some("problems"), Some(code), None) if !code.is_empty() => {
                Some((subdomain.to_string(), code.to_string()))
            }
            _ => None,
        }
    }

    pub fn contest_link(contest_id: &str) -> String {
        format!("{}/contests/{}/problems", CONTEST_ORIGIN, contest_id)
    }

    /// Reads the label and absolute problem link of every row in a contest's problem table.
    pub fn contest_problems(html: &str) -> Vec<ContestProblem> {
        let document = Html::parse_document(html);
        let cell = Selector::parse("td").unwrap();
        let anchor = Selector::parse("a[href]").unwrap();
        let Ok(origin) = Url::parse(CONTEST_ORIGIN) else {
            return vec![];
        };

        document
            .select(&Selector::parse("table tbody tr").unwrap())
            .filter_map(|row| {
                let label = row.select(&cell).next().map(|td| inner_text(&td))?;
                let label = label.trim();
                if label.is_empty() {
                    return None;
                }
                let href = row.select(&anchor).next()?.value().attr("href")?;
                let link = origin.join(href).ok()?;
                Some(ContestProblem {
                    label: label.to_string(),
                    link: link.to_string(),
                })
            })
            .collect()
    }
}

impl Judge for Kattis {
    fn name(&self) -> &'static str {
        "Kattis"
    }

    fn github_directory(&self) -> &'static str {
        "kattis"
    }

    fn link(&self, problem_id: &str) -> String {
        match Self::split_id(problem_id) {
            Some((subdomain, code)) => {
                format!("https://{}.kattis.com/problems/{}", subdomain, code)
            }
            None => format!("no kattis problem for id {:?}", problem_id),
        }
    }

    fn extract_samples(&self, html: &str) -> Result<Vec<String>> {
        let document = Html::parse_document(html);
        let header = Selector::parse("th").unwrap();
        let cell = Selector::parse("td").unwrap();

        let mut samples = vec![];
        for table in document.select(&Selector::parse("table.sample").unwrap()) {
            let title = table
                .select(&header)
                .next()
                .map(|th| inner_text(&th))
                .unwrap_or_default();
            if !title.trim_start().starts_with("Sample Input") {
                return Err(Error::markup(
                    self.name(),
                    format!("sample table titled {:?}", title.trim()),
                ));
            }

            let cells: Vec<_> = table.select(&cell).collect();
            if cells.len() != 2 {
                return Err(Error::markup(
                    self.name(),
                    format!("sample table with {} cells, expected 2", cells.len()),
                ));
            }
            samples.push(inner_text(&cells[0]));
        }
        Ok(samples)
    }
}

fn inner_text(node: &ElementRef<'_>) -> String {
    node.text().collect()
}
