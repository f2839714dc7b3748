// file: src/exporter/json.rs
// description: json export of search reports

use crate::error::{Result, SearchError};
use crate::models::SearchReport;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| SearchError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn to_json(report: &SearchReport, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        json.map_err(|e| SearchError::Serialization(e.to_string()))
    }

    /// Writes `{stem}-{request_id}.json` and returns its path.
    pub fn export_report(&self, report: &SearchReport, pretty: bool) -> Result<PathBuf> {
        let path = self.output_dir.join(Self::file_name(report));
        let json = Self::to_json(report, pretty)?;

        fs::write(&path, json).map_err(|source| SearchError::FileOperation {
            path: path.clone(),
            source,
        })?;

        info!(
            "Exported report for {} ({} keywords) to {}",
            report.document,
            report.results.len(),
            path.display()
        );
        Ok(path)
    }

    fn file_name(report: &SearchReport) -> String {
        let stem = Path::new(&report.document)
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("document");
        format!("{}-{}.json", stem, report.request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KeywordResult, MatchPolicy, SearchStats};
    use tempfile::TempDir;
    use uuid::Uuid;

    fn report() -> SearchReport {
        let mut cat = KeywordResult::absent("cat");
        cat.exists = true;
        cat.pages = vec![1];

        SearchReport {
            request_id: Uuid::new_v4(),
            document: "paper.pdf".to_string(),
            content_hash: "abc".to_string(),
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
            policy: MatchPolicy::PrefixCi,
            page_count: 2,
            results: vec![cat, KeywordResult::absent("dog")],
            stats: SearchStats::default(),
        }
    }

    #[test]
    fn test_export_report_writes_named_file() {
        let temp = TempDir::new().unwrap();
        let exporter = JsonExporter::new(temp.path().join("reports")).unwrap();
        let report = report();

        let path = exporter.export_report(&report, true).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("paper-{}.json", report.request_id)
        );

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["document"], "paper.pdf");
        assert_eq!(written["policy"], "prefix-ci");
        assert_eq!(written["results"][0]["pages"][0], 1);
        assert_eq!(written["results"][1]["exists"], false);
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let json = JsonExporter::to_json(&report(), false).unwrap();
        assert!(!json.contains('\n'));
    }
}
