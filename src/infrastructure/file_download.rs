// Export downloads written to a local directory
use crate::application::collaborators::Downloader;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileDownloader {
    dir: PathBuf,
}

impl FileDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn target_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(sanitize_file_name(file_name))
    }
}

/// Dashboard names are free text; keep them inside the export directory.
fn sanitize_file_name(file_name: &str) -> String {
    let cleaned: String = file_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();

    if Path::new(&cleaned).file_stem().is_none() || cleaned.starts_with('.') {
        format!("_{cleaned}")
    } else {
        cleaned
    }
}

#[async_trait]
impl Downloader for FileDownloader {
    async fn download(&self, contents: &str, file_name: &str, mime: &str) -> std::io::Result<()> {
        let path = self.target_path(file_name);
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, contents).await?;

        tracing::info!("Wrote {} ({} bytes, {}) to {}", file_name, contents.len(), mime, path.display());
        Ok(())
    }
}
