//! Transcript text cleaning.
//!
//! Caption tracks come with speaker tags, sound annotations and emoji that add
//! noise to the embedding space. The cleaner strips those out and normalizes
//! the text segment by segment, leaving ids and timestamps untouched.

use super::TranscriptSegment;
use crate::error::{Result, SpoleError};
use regex::Regex;

/// Regex-based transcript cleaner.
pub struct TranscriptCleaner {
    brackets: Regex,
    non_text: Regex,
    repeated_punct: Vec<(Regex, &'static str)>,
    whitespace: Regex,
}

impl TranscriptCleaner {
    /// Create a cleaner with its patterns compiled up front.
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| SpoleError::Config(format!("Bad clean pattern: {}", e)))
        };

        // The regex crate has no backreferences, so repeated punctuation is
        // collapsed with one pattern per character.
        let repeated_punct = vec![
            (compile(r"!{2,}")?, "!"),
            (compile(r"\?{2,}")?, "?"),
            (compile(r"\.{2,}")?, "."),
            (compile(r",{2,}")?, ","),
        ];

        Ok(Self {
            brackets: compile(r"\[.*?\]")?,
            non_text: compile(r"[^\w\s.,!?'-]")?,
            repeated_punct,
            whitespace: compile(r"\s+")?,
        })
    }

    /// Clean a single piece of text.
    ///
    /// Removes bracketed annotations (e.g. "[Music]"), strips emoji and other
    /// non-text characters, collapses repeated punctuation, lowercases, and
    /// normalizes whitespace.
    pub fn clean_text(&self, text: &str) -> String {
        let text = self.brackets.replace_all(text, "");
        let text = self.non_text.replace_all(&text, "");

        let mut text = text.into_owned();
        for (pattern, replacement) in &self.repeated_punct {
            text = pattern.replace_all(&text, *replacement).into_owned();
        }

        let text = text.to_lowercase();
        self.whitespace.replace_all(&text, " ").trim().to_string()
    }

    /// Clean every segment of a transcript, preserving ids and timestamps.
    pub fn clean_transcript(&self, segments: &[TranscriptSegment]) -> Vec<TranscriptSegment> {
        segments
            .iter()
            .map(|seg| TranscriptSegment {
                id: seg.id.clone(),
                text: self.clean_text(&seg.text),
                start: seg.start,
                end: seg.end,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> TranscriptCleaner {
        TranscriptCleaner::new().unwrap()
    }

    #[test]
    fn test_removes_bracketed_annotations() {
        assert_eq!(cleaner().clean_text("[Music] hello there"), "hello there");
        assert_eq!(cleaner().clean_text("so [applause] anyway"), "so anyway");
    }

    #[test]
    fn test_strips_emoji() {
        assert_eq!(cleaner().clean_text("great stuff \u{1f600}"), "great stuff");
    }

    #[test]
    fn test_collapses_repeated_punctuation() {
        assert_eq!(cleaner().clean_text("What?? No way!!!"), "what? no way!");
        assert_eq!(cleaner().clean_text("wait... what"), "wait. what");
    }

    #[test]
    fn test_lowercases_and_normalizes_whitespace() {
        assert_eq!(cleaner().clean_text("  Hello   WORLD  "), "hello world");
    }

    #[test]
    fn test_keeps_apostrophes_and_hyphens() {
        assert_eq!(
            cleaner().clean_text("it's a well-known fact"),
            "it's a well-known fact"
        );
    }

    #[test]
    fn test_clean_transcript_preserves_metadata() {
        let segments = vec![TranscriptSegment::new(
            "c1".to_string(),
            "[Laughter] HELLO".to_string(),
            1.5,
            3.0,
        )];

        let cleaned = cleaner().clean_transcript(&segments);

        assert_eq!(cleaned[0].id, "c1");
        assert_eq!(cleaned[0].text, "hello");
        assert_eq!(cleaned[0].start, 1.5);
        assert_eq!(cleaned[0].end, 3.0);
    }
}
