//! Transcript data model and loading.
//!
//! The transcript supplier (captioning service, transcriber, or a previous run
//! of the cleaner) hands us a JSON array of segments; everything downstream of
//! this module treats those segments as immutable.

mod clean;

pub use clean::TranscriptCleaner;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single segment of a transcript with timestamp information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Segment ID assigned by the supplier (e.g. "c1", "c2", ...).
    pub id: String,
    /// Transcribed text content.
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

impl TranscriptSegment {
    /// Create a new transcript segment.
    pub fn new(id: String, text: String, start: f64, end: f64) -> Self {
        Self {
            id,
            text,
            start,
            end,
        }
    }

    /// Duration of this segment in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Load a transcript from a JSON file.
///
/// The file must contain a JSON array of segments with `id`, `text`, `start`
/// and `end` fields. Segments are assumed to be in chronological order.
pub fn load_transcript(path: &Path) -> Result<Vec<TranscriptSegment>> {
    let content = std::fs::read_to_string(path)?;
    let segments: Vec<TranscriptSegment> = serde_json::from_str(&content)?;
    Ok(segments)
}

/// Save a transcript to a JSON file.
pub fn save_transcript(path: &Path, segments: &[TranscriptSegment]) -> Result<()> {
    let content = serde_json::to_string_pretty(segments)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Format seconds as MM:SS or HH:MM:SS.
pub fn format_timestamp(seconds: f64) -> String {
    let total_seconds = seconds as u32;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(65.0), "01:05");
        assert_eq!(format_timestamp(3665.0), "01:01:05");
    }

    #[test]
    fn test_load_transcript_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.json");

        let segments = vec![
            TranscriptSegment::new("c1".to_string(), "Hello world".to_string(), 0.0, 4.2),
            TranscriptSegment::new("c2".to_string(), "Second part".to_string(), 4.2, 9.0),
        ];

        save_transcript(&path, &segments).unwrap();
        let loaded = load_transcript(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "c1");
        assert_eq!(loaded[1].text, "Second part");
        assert_eq!(loaded[1].start, 4.2);
        assert_eq!(loaded[1].end, 9.0);
    }

    #[test]
    fn test_load_transcript_missing_file() {
        let result = load_transcript(Path::new("/nonexistent/transcript.json"));
        assert!(result.is_err());
    }
}
