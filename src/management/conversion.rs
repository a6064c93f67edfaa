use std::{io::Error, path::PathBuf};

use crate::types::ConversionReport;

#[derive(Debug)]
pub enum ConversionError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for ConversionError {
    fn from(err: Error) -> Self {
        ConversionError::IoError(err)
    }
}

/// Persisted history of conversion runs, newest last.
pub struct ConversionManager {
    reports: Option<Vec<ConversionReport>>,
}

impl ConversionManager {
    pub fn new(reports: Option<Vec<ConversionReport>>) -> Self {
        Self {
            reports: Some(reports.unwrap_or(Vec::new())),
        }
    }

    pub async fn load() -> Result<Self, ConversionError> {
        let path = Self::cache_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(ConversionError::IoError)?;
        let reports: Vec<ConversionReport> =
            serde_json::from_str(&content).map_err(ConversionError::SerdeError)?;
        Ok(Self {
            reports: Some(reports),
        })
    }

    pub async fn persist(&self) -> Result<(), ConversionError> {
        let path = Self::cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(ConversionError::IoError)?;
        }

        let json = serde_json::to_string_pretty(&self.reports.clone())
            .map_err(ConversionError::SerdeError)?;
        async_fs::write(Self::cache_path(), json)
            .await
            .map_err(ConversionError::IoError)
    }

    pub fn add_report(&mut self, report: ConversionReport) -> &mut Self {
        if let Some(reports) = &mut self.reports {
            reports.push(report);
        }
        self
    }

    pub fn find_by_playlist(&self, playlist_id: &str) -> Option<ConversionReport> {
        self.reports.as_ref().and_then(|reports| {
            reports
                .iter()
                .rev()
                .find(|report| report.playlist.id == playlist_id)
                .cloned()
        })
    }

    pub fn all(&self) -> Option<Vec<ConversionReport>> {
        self.reports.clone()
    }

    pub fn count(&self) -> usize {
        self.reports.as_ref().map_or(0, |reports| reports.len())
    }

    fn cache_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("plportcli/cache/conversions.json");
        path
    }
}
