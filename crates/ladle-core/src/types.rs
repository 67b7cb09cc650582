use serde::{Deserialize, Serialize};

/// Video time, in seconds, past which caption entries are ignored.
/// Cooking videos front-load the actual recipe; everything after the
/// first four minutes is outro, taste-testing and channel promotion.
pub const INTRO_WINDOW_SECS: f64 = 240.0;

/// A single timed caption line from a video's caption track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionEntry {
    pub start: f64,
    pub text: String,
}

/// A fetched caption track: its language code plus every entry in
/// original order.
#[derive(Debug, Serialize, Deserialize)]
pub struct Transcript {
    pub language: String,
    pub entries: Vec<CaptionEntry>,
}

impl Transcript {
    /// Concatenate the entries that fall inside the intro window
    /// (start <= 240s, inclusive), preserving order.
    pub fn window_text(&self) -> String {
        self.entries
            .iter()
            .filter(|e| e.start <= INTRO_WINDOW_SECS)
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_english(&self) -> bool {
        self.language == "en"
    }
}

/// A saved recipe: the user-supplied name and its ordered instruction
/// steps.
#[derive(Debug, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub steps: Vec<String>,
}
