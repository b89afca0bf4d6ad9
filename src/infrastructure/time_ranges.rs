// Per-dashboard time ranges kept between runs
use crate::application::collaborators::RetainRanges;
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub lower: String,
    #[serde(default)]
    pub upper: Option<String>,
}

/// JSON file mapping dashboard id to its last selected time range.
#[derive(Debug, Clone)]
pub struct TimeRangeFile {
    path: PathBuf,
}

impl TimeRangeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> anyhow::Result<BTreeMap<String, TimeRange>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse {}", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", self.path.display())),
        }
    }

    pub async fn save(&self, ranges: &BTreeMap<String, TimeRange>) -> anyhow::Result<()> {
        let text = serde_json::to_string_pretty(ranges)?;
        tokio::fs::write(&self.path, text)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    async fn prune(&self, ids: &[String]) -> anyhow::Result<usize> {
        let mut ranges = self.load().await?;
        let keep: HashSet<&str> = ids.iter().map(String::as_str).collect();

        let before = ranges.len();
        ranges.retain(|id, _| keep.contains(id.as_str()));
        let dropped = before - ranges.len();

        if dropped > 0 {
            self.save(&ranges).await?;
        }
        Ok(dropped)
    }
}

#[async_trait]
impl RetainRanges for TimeRangeFile {
    async fn retain(&self, ids: &[String]) {
        match self.prune(ids).await {
            Ok(dropped) => tracing::debug!("Dropped {} stale dashboard time ranges", dropped),
            Err(e) => tracing::warn!("Could not prune dashboard time ranges: {:#}", e),
        }
    }
}
