use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::contest::ContestBatch;
use crate::fetch::HttpFetcher;
use crate::github::GithubClient;
use crate::judges::JudgeKind;
use crate::prompt::{Confirm, FixedAnswer, TerminalConfirm};
use crate::scaffold::{ScaffoldOptions, Scaffolder};
use crate::trash::SystemTrash;
use crate::upload::Uploader;

#[derive(Debug, Parser)]
#[command(name = "cp-scaffold", version, about = "Scaffold and upload competitive programming solutions")]
pub struct Cli {
    /// Directory problem folders are created in
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the folder, source file and sample inputs for one problem
    New {
        #[arg(short, long, default_value_t = JudgeKind::Generic)]
        judge: JudgeKind,
        problem_id: String,
        /// Appended to the file name, e.g. a second attempt
        #[arg(short, long)]
        suffix: Option<String>,
        /// Use this link instead of the judge's own
        #[arg(long)]
        link: Option<String>,
        #[arg(short, long)]
        lang: Option<String>,
        /// Overwrite existing source files without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Scaffold a lettered set of problems
    Contest {
        #[arg(short, long, default_value_t = JudgeKind::Generic)]
        judge: JudgeKind,
        #[arg(short, long, default_value = "")]
        prefix: String,
        /// Number of problems, lettered A, B, ...
        #[arg(short, long, required_unless_present = "suffixes")]
        count: Option<usize>,
        /// Explicit suffixes, comma separated
        #[arg(long, value_delimiter = ',', conflicts_with = "count")]
        suffixes: Option<Vec<String>>,
        /// One link per problem, comma separated
        #[arg(long, value_delimiter = ',')]
        links: Option<Vec<String>>,
        #[arg(short, long)]
        lang: Option<String>,
        #[arg(short, long)]
        yes: bool,
    },
    /// Scaffold every problem of a Kattis contest
    KattisContest {
        contest_id: String,
        #[arg(short, long)]
        lang: Option<String>,
        #[arg(short, long)]
        yes: bool,
    },
    /// Push a solution to GitHub and move the local copy to the trash
    Upload {
        #[arg(short, long, default_value_t = JudgeKind::Generic)]
        judge: JudgeKind,
        file: PathBuf,
        /// File name to use in the repository
        #[arg(long)]
        remote_name: Option<String>,
        #[arg(long)]
        keep_local: bool,
    },
}

impl Cli {
    pub async fn run(self, config: &Config) -> Result<ExitCode> {
        match self.command {
            Command::New {
                judge,
                problem_id,
                suffix,
                link,
                lang,
                yes,
            } => {
                let options = ScaffoldOptions {
                    suffix,
                    link,
                    language: lang,
                };
                scaffolder(&self.root, config, yes)?
                    .scaffold(judge.judge(), &problem_id, &options)
                    .await
                    .with_context(|| format!("failed to scaffold {}", problem_id))?;
            }
            Command::Contest {
                judge,
                prefix,
                count,
                suffixes,
                links,
                lang,
                yes,
            } => {
                let batch = ContestBatch {
                    prefix,
                    count,
                    suffixes,
                    links,
                };
                scaffolder(&self.root, config, yes)?
                    .scaffold_contest(judge.judge(), &batch, lang.as_deref())
                    .await
                    .context("failed to scaffold contest")?;
            }
            Command::KattisContest {
                contest_id,
                lang,
                yes,
            } => {
                scaffolder(&self.root, config, yes)?
                    .scaffold_kattis_contest(&contest_id, lang.as_deref())
                    .await
                    .with_context(|| format!("failed to scaffold contest {}", contest_id))?;
            }
            Command::Upload {
                judge,
                file,
                remote_name,
                keep_local,
            } => {
                let client = GithubClient::new(config.github_auth()?)?;
                let uploaded = Uploader::new(client, SystemTrash)
                    .upload(judge.judge(), &file, remote_name.as_deref(), !keep_local)
                    .await
                    .with_context(|| format!("failed to upload {}", file.display()))?;
                if !uploaded {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

fn scaffolder(
    root: &Path,
    config: &Config,
    yes: bool,
) -> Result<Scaffolder<HttpFetcher, Box<dyn Confirm>>> {
    let confirm: Box<dyn Confirm> = if yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(TerminalConfirm)
    };
    Ok(Scaffolder::new(root, HttpFetcher::new()?, confirm)
        .with_default_language(config.default_language.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_should_parse_judge_and_options() {
        let cli = Cli::try_parse_from([
            "cp-scaffold", "new", "--judge", "boj", "1000", "--suffix", "brute", "--lang", "py",
        ])
        .unwrap();
        match cli.command {
            Command::New {
                judge,
                problem_id,
                suffix,
                lang,
                yes,
                ..
            } => {
                assert_eq!(judge, JudgeKind::Boj);
                assert_eq!(problem_id, "1000");
                assert_eq!(suffix.as_deref(), Some("brute"));
                assert_eq!(lang.as_deref(), Some("py"));
                assert!(!yes);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn contest_should_split_suffixes() {
        let cli = Cli::try_parse_from([
            "cp-scaffold", "contest", "--prefix", "abc300_", "--suffixes", "a,b,c",
        ])
        .unwrap();
        match cli.command {
            Command::Contest {
                suffixes, count, ..
            } => {
                assert_eq!(suffixes.unwrap(), ["a", "b", "c"]);
                assert!(count.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn contest_should_require_count_or_suffixes() {
        assert!(Cli::try_parse_from(["cp-scaffold", "contest", "--prefix", "x"]).is_err());
        assert!(Cli::try_parse_from(["cp-scaffold", "new", "--judge", "atcoder", "abc"]).is_err());
    }
}
