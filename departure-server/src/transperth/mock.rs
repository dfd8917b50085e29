//! Mock departure source for development and tests.
//!
//! Loads one live-times JSON response per line from a directory and serves
//! it as if fetched from the provider. Files are named `{line}.json`, e.g.
//! `Armadale.json`.

use std::path::Path;

use crate::domain::RawDeparture;

use super::convert::convert_live_times;
use super::error::SourceError;
use super::types::LiveTimesResponse;

/// Fixture-backed departure source.
pub struct MockSource {
    /// Boards keyed by line name, in file-name order for determinism.
    boards: Vec<(String, LiveTimesResponse)>,
}

impl MockSource {
    /// Load `{line}.json` fixtures from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, SourceError> {
        let data_dir = data_dir.as_ref();
        let mut boards = Vec::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| SourceError::Mock {
            message: format!("failed to read {}: {}", data_dir.display(), e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| SourceError::Mock {
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let line = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| SourceError::Mock {
                    message: format!("invalid fixture filename: {}", path.display()),
                })?
                .to_string();

            let json = std::fs::read_to_string(&path).map_err(|e| SourceError::Mock {
                message: format!("failed to read {}: {}", path.display(), e),
            })?;

            let board: LiveTimesResponse =
                serde_json::from_str(&json).map_err(|e| SourceError::Mock {
                    message: format!("failed to parse {}: {}", path.display(), e),
                })?;

            boards.push((line, board));
        }

        if boards.is_empty() {
            return Err(SourceError::Mock {
                message: format!("no fixture files found in {}", data_dir.display()),
            });
        }

        boards.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(Self { boards })
    }

    /// Produce the records the live client would have fetched.
    pub fn fetch_departures(&self) -> Vec<RawDeparture> {
        let mut raws = Vec::new();
        for (line, board) in &self.boards {
            raws.extend(convert_live_times(board, line));
        }
        raws
    }
}
