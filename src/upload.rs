//! Pushes a finished solution to the judge's directory in the solutions repository, then moves
//! the local copy to the trash.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::github::{GithubClient, PutContent};
use crate::judge::Judge;
use crate::template::source_extensions;
use crate::trash::Trash;

pub struct Uploader<T> {
    client: GithubClient,
    trash: T,
}

impl<T: Trash> Uploader<T> {
    pub fn new(client: GithubClient, trash: T) -> Self {
        Self { client, trash }
    }

    /// Uploads `file` as `{github_directory}/{remote_name or file name}`.
    ///
    /// Returns `Ok(false)` when the file does not exist or the API rejects the upload; local
    /// files are left alone in both cases.
    pub async fn upload(
        &self,
        judge: &dyn Judge,
        file: &Path,
        remote_name: Option<&str>,
        delete_local: bool,
    ) -> Result<bool> {
        let solution = match fs::read(file) {
            Ok(solution) => solution,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                error!("file {} not found", file.display());
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        let local_name = file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let name = remote_name.unwrap_or(&local_name);

        let directory = judge.github_directory();
        if directory.is_empty() {
            return Err(Error::Config(format!(
                "{} has no github directory",
                judge.name()
            )));
        }
        let remote_path = format!("{}/{}", directory, name);
        let repo = judge.github_repo();

        let sha = self.client.file_sha(repo, &remote_path).await?;
        let message = match sha {
            Some(_) => format!("Update existing solution {}", name),
            None => format!("Upload new solution {}", name),
        };
        let content = STANDARD.encode(&solution);

        let status = self
            .client
            .put_file(
                repo,
                &remote_path,
                &PutContent {
                    message: &message,
                    content: &content,
                    sha: sha.as_deref(),
                },
            )
            .await?;

        if !status.is_success() {
            println!(
                "local file {} not uploaded ({})",
                local_name,
                status.as_u16()
            );
            return Ok(false);
        }

        println!(
            "successfully pushed {} to GitHub repo {}, path {}",
            local_name, repo, remote_path
        );
        println!("message: {}", message);

        if delete_local {
            self.remove_local(file)?;
        }
        Ok(true)
    }

    /// Trashes the whole problem directory when `file` was its last solution, otherwise just
    /// the file.
    fn remove_local(&self, file: &Path) -> Result<()> {
        let directory = match file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => {
                self.trash.trash(file)?;
                println!("deleted locally: file {}", file.display());
                return Ok(());
            }
        };

        let extensions = source_extensions();
        let is_source = |path: &Path| {
            path.extension()
                .map(|ext| extensions.contains(&format!(".{}", ext.to_string_lossy())))
                .unwrap_or(false)
        };
        let mut source_files = 0;
        for entry in fs::read_dir(directory)? {
            if is_source(&entry?.path()) {
                source_files += 1;
            }
        }
        debug!("{} source files left in {}", source_files, directory.display());

        // the one remaining source file must be the uploaded one
        if source_files == 1 && is_source(file) {
            self.trash.trash(directory)?;
            println!("deleted locally: directory {}", directory.display());
        } else {
            self.trash.trash(file)?;
            println!("deleted locally: file {}", file.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use tempfile::TempDir;
    use wiremock::matchers::{any, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::GithubAuth;
    use crate::judges::Boj;

    #[derive(Default)]
    struct RecordingTrash {
        trashed: RefCell<Vec<PathBuf>>,
    }

    impl Trash for &RecordingTrash {
        fn trash(&self, path: &Path) -> Result<()> {
            self.trashed.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    fn uploader<'a>(
        server: &MockServer,
        trash: &'a RecordingTrash,
    ) -> Uploader<&'a RecordingTrash> {
        let client = GithubClient::new(GithubAuth {
            username: "alice".to_string(),
            token: "ghp_test".to_string(),
            api_url: server.uri(),
        })
        .unwrap();
        Uploader::new(client, trash)
    }

    fn problem_dir(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("boj_1000");
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
        (root, dir)
    }

    const CONTENTS_PATH: &str = "/repos/alice/cp-solutions/contents/boj/boj_1000.cpp";

    #[tokio::test]
    async fn missing_file_should_fail_without_requests() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
        let trash = RecordingTrash::default();

        let ok = uploader(&server, &trash)
            .upload(&Boj, Path::new("does/not/exist.cpp"), None, true)
            .await
            .unwrap();
        assert!(!ok);
        assert!(trash.trashed.borrow().is_empty());
    }

    #[tokio::test]
    async fn last_source_file_should_trash_directory() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CONTENTS_PATH))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(CONTENTS_PATH))
            .and(body_partial_json(serde_json::json!({
                "message": "Upload new solution boj_1000.cpp",
                "content": "aW50IG1haW4oKSB7fQ==",
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let (_root, dir) = problem_dir(&[("boj_1000.cpp", "int main() {}"), ("in1", "1 2\n")]);
        let trash = RecordingTrash::default();

        let ok = uploader(&server, &trash)
            .upload(&Boj, &dir.join("boj_1000.cpp"), None, true)
            .await
            .unwrap();
        assert!(ok);
        assert_eq!(*trash.trashed.borrow(), vec![dir]);
    }

    #[tokio::test]
    async fn non_source_upload_should_keep_sibling_solution() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/repos/alice/cp-solutions/contents/boj/notes.txt"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let (_root, dir) = problem_dir(&[
            ("boj_1000.cpp", "int main() {}"),
            ("notes.txt", "greedy fails on 3 1 2"),
        ]);
        let trash = RecordingTrash::default();

        let ok = uploader(&server, &trash)
            .upload(&Boj, &dir.join("notes.txt"), None, true)
            .await
            .unwrap();
        assert!(ok);
        assert_eq!(*trash.trashed.borrow(), vec![dir.join("notes.txt")]);
    }

    #[tokio::test]
    async fn other_source_files_should_keep_directory() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CONTENTS_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "sha": "abc123" })),
            )
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(CONTENTS_PATH))
            .and(body_partial_json(serde_json::json!({
                "message": "Update existing solution boj_1000.cpp",
                "sha": "abc123",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let (_root, dir) = problem_dir(&[
            ("boj_1000.cpp", "int main() {}"),
            ("boj_1000_brute.py", "print(3)"),
        ]);
        let trash = RecordingTrash::default();

        let ok = uploader(&server, &trash)
            .upload(&Boj, &dir.join("boj_1000.cpp"), None, true)
            .await
            .unwrap();
        assert!(ok);
        assert_eq!(*trash.trashed.borrow(), vec![dir.join("boj_1000.cpp")]);
    }

    #[tokio::test]
    async fn rejected_upload_should_keep_local_files() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(422))
            .mount(&server)
            .await;

        let (_root, dir) = problem_dir(&[("boj_1000.cpp", "int main() {}")]);
        let trash = RecordingTrash::default();

        let ok = uploader(&server, &trash)
            .upload(&Boj, &dir.join("boj_1000.cpp"), None, true)
            .await
            .unwrap();
        assert!(!ok);
        assert!(trash.trashed.borrow().is_empty());
        assert!(dir.join("boj_1000.cpp").is_file());
    }

    #[tokio::test]
    async fn remote_name_and_keep_local_should_be_honored() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/repos/alice/cp-solutions/contents/boj/1000.cpp"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let (_root, dir) = problem_dir(&[("boj_1000.cpp", "int main() {}")]);
        let trash = RecordingTrash::default();

        let ok = uploader(&server, &trash)
            .upload(&Boj, &dir.join("boj_1000.cpp"), Some("1000.cpp"), false)
            .await
            .unwrap();
        assert!(ok);
        assert!(trash.trashed.borrow().is_empty());
    }
}
