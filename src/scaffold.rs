//! Creates the local directory for a problem: a source file from the language template, an
//! empty `in1`, and one `inN` per sample found on the problem page.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::contest::{ContestBatch, ContestBatchBuilder};
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::judge::Judge;
use crate::judges::Kattis;
use crate::prompt::Confirm;
use crate::template;

const INPUT_FILE_PREFIX: &str = "in";

#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    pub suffix: Option<String>,
    /// Overrides the judge's own link.
    pub link: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Written { source: PathBuf, samples: usize },
    /// The source file existed and the operator chose to keep it.
    Kept { source: PathBuf },
}

pub struct Scaffolder<F, C> {
    root: PathBuf,
    fetcher: F,
    confirm: C,
    default_language: String,
}

impl<F, C> Scaffolder<F, C>
where
    F: PageFetcher,
    C: Confirm,
{
    pub fn new(root: impl Into<PathBuf>, fetcher: F, confirm: C) -> Self {
        Self {
            root: root.into(),
            fetcher,
            confirm,
            default_language: template::DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    pub async fn scaffold(
        &self,
        judge: &dyn Judge,
        problem_id: &str,
        options: &ScaffoldOptions,
    ) -> Result<ScaffoldOutcome> {
        let language = options
            .language
            .as_deref()
            .unwrap_or(&self.default_language);
        let (directory, stem) = judge.local_naming(problem_id, options.suffix.as_deref());
        let filename = format!("{}.{}", stem, language);
        let link = match &options.link {
            Some(link) => link.clone(),
            None => judge.link(problem_id),
        };

        let directory = self.root.join(directory);
        fs::create_dir_all(&directory)?;

        let source = directory.join(&filename);
        if source.is_file() {
            let question = format!("File {} already exists. Overwrite?", source.display());
            if !self.confirm.confirm(&question) {
                println!("File {} not overwritten.", source.display());
                return Ok(ScaffoldOutcome::Kept { source });
            }
        }

        let body = match template::lookup(language) {
            Some(body) => body,
            None => {
                warn!(
                    "no template found for language \"{}\"; using empty template",
                    language
                );
                ""
            }
        };
        let now = chrono::Local::now().format("%x %X").to_string();
        fs::write(&source, template::render(body, &now, &filename, &link))?;

        let placeholder = input_file(&directory, 1);
        if !placeholder.is_file() {
            fs::File::create(&placeholder)?;
        }

        let samples = match self.fetcher.fetch(&link).await {
            Some(html) => judge.extract_samples(&html)?,
            None => {
                debug!("no page at {}; skipping samples", link);
                vec![]
            }
        };
        for (i, sample) in samples.iter().enumerate() {
            fs::write(input_file(&directory, i + 1), sample)?;
        }

        println!(
            "template for {} problem written to {}; {} input files downloaded",
            judge.name(),
            source.display(),
            samples.len()
        );
        Ok(ScaffoldOutcome::Written {
            source,
            samples: samples.len(),
        })
    }

    /// Scaffolds every problem of a contest batch in order.
    pub async fn scaffold_contest(
        &self,
        judge: &dyn Judge,
        batch: &ContestBatch,
        language: Option<&str>,
    ) -> Result<Vec<ScaffoldOutcome>> {
        let mut outcomes = vec![];
        for (suffix, link) in batch.entries(judge)? {
            let options = ScaffoldOptions {
                suffix: None,
                link,
                language: language.map(str::to_string),
            };
            outcomes.push(
                self.scaffold(judge, &batch.problem_id(&suffix), &options)
                    .await?,
            );
        }
        Ok(outcomes)
    }

    /// Scaffolds all problems listed on a Kattis contest page. Problem ids are
    /// `{contest}_{label}`; links point at the contest's own problem pages.
    pub async fn scaffold_kattis_contest(
        &self,
        contest_id: &str,
        language: Option<&str>,
    ) -> Result<Vec<ScaffoldOutcome>> {
        let listing = Kattis::contest_link(contest_id);
        let Some(html) = self.fetcher.fetch(&listing).await else {
            warn!("could not load problem list of contest {}", contest_id);
            return Ok(vec![]);
        };

        let problems = Kattis::contest_problems(&html);
        info!("contest {} has {} problems", contest_id, problems.len());
        if problems.is_empty() {
            return Ok(vec![]);
        }

        let (suffixes, links): (Vec<_>, Vec<_>) =
            problems.into_iter().map(|p| (p.label, p.link)).unzip();
        let batch = ContestBatchBuilder::default()
            .prefix(format!("{}_", contest_id))
            .suffixes(suffixes)
            .links(links)
            .build()
            .map_err(|e| Error::InvalidBatch(e.to_string()))?;
        self.scaffold_contest(&Kattis, &batch, language).await
    }
}

fn input_file(directory: &Path, index: usize) -> PathBuf {
    directory.join(format!("{}{}", INPUT_FILE_PREFIX, index))
}
