use thiserror::Error;

#[derive(Error, Debug)]
pub enum LadleError {
    #[error("invalid YouTube URL: {url}")]
    InvalidUrl { url: String },

    #[error("no transcript found for video {video_id} in any supported language")]
    NoTranscript { video_id: String },

    #[error("transcripts are disabled for video {video_id}")]
    TranscriptsDisabled { video_id: String },

    #[error("transcript fetch failed due to a structural parse issue: {reason}")]
    TranscriptParse { reason: String },

    #[error("completion request failed: {reason}")]
    CompletionFailed { reason: String },

    #[error("recipe name {name:?} contains no characters usable as a filename")]
    InvalidRecipeName { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, LadleError>;
