use super::{ContentSource, Result, SourceError};
use crate::event::Event;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// `[[events]]` tables in a TOML data file
#[derive(Debug, Deserialize)]
struct EventFile {
    #[serde(default)]
    events: Vec<Event>,
}

/// Events read from a local `.json` or `.toml` data file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode file contents according to the file's extension
    pub fn parse(&self, contents: &str) -> Result<Vec<Event>> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(serde_json::from_str(contents)?),
            Some("toml") => Ok(toml::from_str::<EventFile>(contents)?.events),
            _ => Err(SourceError::UnsupportedFormat(
                self.path.display().to_string(),
            )),
        }
    }
}

#[async_trait]
impl ContentSource for FileSource {
    fn describe(&self) -> String {
        format!("data file {}", self.path.display())
    }

    async fn fetch_events(&self) -> Result<Vec<Event>> {
        debug!("Reading events from {:?}", self.path);
        let contents = fs::read_to_string(&self.path).await?;
        let events = self.parse(&contents)?;
        debug!("Decoded {} events from {:?}", events.len(), self.path);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCategory;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "title": "AI in Embedded Systems", "category": "seminar",
                 "date": "2025-12-15", "speaker": "Dr. Sarah Johnson, MIT"},
                {"id": 2, "title": "PCB Design Workshop", "type": "workshop", "date": "2025-12-20"}
            ]"#,
        )
        .unwrap();

        let events = FileSource::new(&path).fetch_events().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].category, EventCategory::Workshop);
        assert_eq!(events[0].speaker.as_deref(), Some("Dr. Sarah Johnson, MIT"));
    }

    #[tokio::test]
    async fn test_toml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.toml");
        std::fs::write(
            &path,
            r#"
[[events]]
id = "exam-schedule"
title = "Exam Schedule Released"
category = "announcement"
date = "2025-11-20"
time = "All Day"
location = "Online Portal"
"#,
        )
        .unwrap();

        let events = FileSource::new(&path).fetch_events().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id.to_string(), "exam-schedule");
        assert_eq!(events[0].time, "All Day");
    }

    #[test]
    fn test_toml_native_dates() {
        let source = FileSource::new("events.toml");
        let events = source
            .parse(
                r#"
[[events]]
id = 1
title = "AI in Embedded Systems"
category = "seminar"
date = 2025-12-15

[[events]]
id = 2
title = "PCB Design Workshop"
category = "workshop"
date = 2025-12-20T10:00:00

[[events]]
id = 3
title = "IEEE International Conference on Robotics"
category = "conference"
date = 2026-01-10T09:00:00+01:00
"#,
            )
            .unwrap();

        let dates: Vec<_> = events.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2025-12-15", "2025-12-20", "2026-01-10"]);
        assert_eq!(events[0].day(), NaiveDate::from_ymd_opt(2025, 12, 15));
    }

    #[test]
    fn test_json_null_columns() {
        let source = FileSource::new("events.json");
        let events = source
            .parse(
                r#"[{"id": 1, "title": "Exam Schedule Released", "category": "announcement",
                     "date": "2025-11-20", "time": null, "location": null, "description": null}]"#,
            )
            .unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].location.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.fetch_events().await, Err(SourceError::Io(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let source = FileSource::new("events.csv");
        assert!(matches!(
            source.parse("id,title"),
            Err(SourceError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_invalid_category_fails_decode() {
        let source = FileSource::new("events.json");
        let result = source.parse(r#"[{"id": 1, "title": "x", "category": "party", "date": "2025-01-01"}]"#);
        assert!(matches!(result, Err(SourceError::Json(_))));
    }
}
