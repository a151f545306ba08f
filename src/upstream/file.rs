//! Local file schedule source

use async_trait::async_trait;
use std::path::PathBuf;

use super::ScheduleSource;
use crate::schedule::{ScheduleDocument, ScheduleError, ScheduleResult};

/// Reads the schedule document from disk on every fetch
pub struct FileScheduleSource {
    path: PathBuf,
}

impl FileScheduleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ScheduleSource for FileScheduleSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    async fn fetch(&self) -> ScheduleResult<ScheduleDocument> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ScheduleError::Transport(format!("{}: {}", self.path.display(), e)))?;

        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Week2": {{"dates": ["2025-06-09"], "slots": {{"9:00": [75]}}}}}}"#
        )
        .unwrap();

        let source = FileScheduleSource::new(file.path());
        let doc = source.fetch().await.unwrap();

        assert!(doc.week1.is_none());
        let (dates, slots) = doc.week2.as_ref().unwrap().parts().unwrap();
        assert_eq!(dates, ["2025-06-09"]);
        assert_eq!(slots.get("9:00"), Some(&[Some(75.0)][..]));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileScheduleSource::new(dir.path().join("absent.json"));

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, ScheduleError::Transport(_)));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html>not json</html>").unwrap();

        let err = FileScheduleSource::new(file.path()).fetch().await.unwrap_err();
        assert!(matches!(err, ScheduleError::Decode(_)));
    }
}
