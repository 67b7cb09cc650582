use regex::Regex;
use serde::Deserialize;
use url::Url;

use crate::{
    error::{LadleError, Result},
    types::{CaptionEntry, Transcript},
};

/// Caption languages the pipeline understands, in priority order:
/// English first, then the Indian languages the cooking channels this
/// tool was built around publish in.
pub const PREFERRED_LANGUAGES: &[&str] = &[
    "en", "ta", "hi", "te", "ml", "kn", "mr", "gu", "bn", "pa", "ur",
];

const WATCH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Identifier of a YouTube video, as it appears in watch URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve a pasted YouTube URL to its video id.
///
/// Recognizes `youtu.be/<id>` and `youtube.com/watch?v=<id>` (with or
/// without `www.`); anything else fails with `InvalidUrl`.
pub fn parse_video_url(raw: &str) -> Result<VideoId> {
    let invalid = || LadleError::InvalidUrl {
        url: raw.to_string(),
    };

    let parsed = Url::parse(raw).map_err(|_| invalid())?;
    let host = parsed.host_str().ok_or_else(invalid)?;

    if host.eq_ignore_ascii_case("youtu.be") {
        let id = parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(invalid)?;
        return Ok(VideoId(id.to_string()));
    }

    if host.eq_ignore_ascii_case("youtube.com") || host.eq_ignore_ascii_case("www.youtube.com") {
        let id = parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(invalid)?;
        return Ok(VideoId(id));
    }

    Err(invalid())
}

// Shapes of the ytInitialPlayerResponse blob embedded in the watch
// page, reduced to the caption tracklist we actually read.

#[derive(Deserialize, Debug)]
struct PlayerResponse {
    captions: Option<Captions>,
}

#[derive(Deserialize, Debug)]
struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    tracklist: TracklistRenderer,
}

#[derive(Deserialize, Debug)]
struct TracklistRenderer {
    #[serde(rename = "captionTracks", default)]
    tracks: Vec<CaptionTrack>,
}

#[derive(Deserialize, Debug)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode")]
    language_code: String,
}

// json3 timedtext payload.

#[derive(Deserialize)]
struct TimedTextResponse {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Deserialize)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs")]
    start_ms: Option<u64>,
    segs: Option<Vec<TimedTextSeg>>,
}

#[derive(Deserialize)]
struct TimedTextSeg {
    utf8: String,
}

/// Fetches caption tracks by scraping the watch page's embedded player
/// response, the same data the on-page transcript panel reads.
pub struct CaptionSource {
    http: reqwest::Client,
}

impl CaptionSource {
    pub fn new() -> Result<Self> {
        // A browser user-agent; the watch page serves a consent stub
        // to unknown clients.
        let http = reqwest::Client::builder()
            .user_agent(WATCH_USER_AGENT)
            .build()?;
        Ok(Self { http })
    }

    /// Fetch the caption track for `video_id`, selected per
    /// [`PREFERRED_LANGUAGES`].
    pub async fn fetch_transcript(&self, video_id: &VideoId) -> Result<Transcript> {
        let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
        tracing::debug!(%video_id, "fetching watch page");
        let html = self.http.get(&watch_url).send().await?.text().await?;

        let player = extract_player_response(&html)?;
        let Some(captions) = player.captions else {
            return Err(LadleError::TranscriptsDisabled {
                video_id: video_id.to_string(),
            });
        };

        let tracks = captions.tracklist.tracks;
        let track =
            select_track(&tracks, PREFERRED_LANGUAGES).ok_or_else(|| LadleError::NoTranscript {
                video_id: video_id.to_string(),
            })?;

        tracing::debug!(language = %track.language_code, "selected caption track");
        let timedtext_url = format!("{}&fmt=json3", track.base_url);
        let payload = self.http.get(&timedtext_url).send().await?.text().await?;
        let entries = parse_timedtext(&payload)?;

        Ok(Transcript {
            language: track.language_code.clone(),
            entries,
        })
    }
}

fn extract_player_response(html: &str) -> Result<PlayerResponse> {
    let pattern = Regex::new(r"var ytInitialPlayerResponse\s*=\s*(\{.*?\});").map_err(|e| {
        LadleError::TranscriptParse {
            reason: e.to_string(),
        }
    })?;
    let json = pattern
        .captures(html)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| LadleError::TranscriptParse {
            reason: "ytInitialPlayerResponse not found in watch page".to_string(),
        })?
        .as_str();

    serde_json::from_str(json).map_err(|e| LadleError::TranscriptParse {
        reason: format!("player response: {e}"),
    })
}

/// Select a caption track: a first pass takes the first exact
/// language-code match in preference order, a second pass accepts
/// regional variants ("en-GB" counts for "en") in the same order.
fn select_track<'a>(tracks: &'a [CaptionTrack], preferred: &[&str]) -> Option<&'a CaptionTrack> {
    for lang in preferred {
        if let Some(track) = tracks.iter().find(|t| t.language_code == *lang) {
            return Some(track);
        }
    }
    for lang in preferred {
        if let Some(track) = tracks
            .iter()
            .find(|t| t.language_code.split('-').next() == Some(*lang))
        {
            return Some(track);
        }
    }
    None
}

fn parse_timedtext(payload: &str) -> Result<Vec<CaptionEntry>> {
    let response: TimedTextResponse =
        serde_json::from_str(payload).map_err(|e| LadleError::TranscriptParse {
            reason: format!("timedtext payload: {e}"),
        })?;

    let mut entries = Vec::new();
    for event in response.events {
        // Events without timing or text are style/window markers.
        let (Some(start_ms), Some(segs)) = (event.start_ms, event.segs) else {
            continue;
        };
        let raw: String = segs.into_iter().map(|s| s.utf8).collect();
        let text = html_escape::decode_html_entities(&raw).trim().to_string();
        if text.is_empty() {
            continue;
        }
        entries.push(CaptionEntry {
            start: start_ms as f64 / 1000.0,
            text,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(language_code: &str) -> CaptionTrack {
        CaptionTrack {
            base_url: format!("https://www.youtube.com/api/timedtext?lang={language_code}"),
            language_code: language_code.to_string(),
        }
    }

    #[test]
    fn resolves_short_link() {
        let id = parse_video_url("https://youtu.be/e04HY19AJfU").unwrap();
        assert_eq!(id.as_str(), "e04HY19AJfU");
    }

    #[test]
    fn resolves_watch_link_ignoring_other_params() {
        let id = parse_video_url("https://www.youtube.com/watch?v=e04HY19AJfU&t=1s&list=abc").unwrap();
        assert_eq!(id.as_str(), "e04HY19AJfU");
    }

    #[test]
    fn resolves_bare_host_watch_link() {
        let id = parse_video_url("https://youtube.com/watch?v=abc123").unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn rejects_unrecognized_host() {
        let err = parse_video_url("https://vimeo.com/12345").unwrap_err();
        assert!(matches!(err, LadleError::InvalidUrl { .. }));
    }

    #[test]
    fn rejects_watch_link_without_video_param() {
        let err = parse_video_url("https://www.youtube.com/watch?list=abc").unwrap_err();
        assert!(matches!(err, LadleError::InvalidUrl { .. }));
    }

    #[test]
    fn rejects_non_url_input() {
        assert!(parse_video_url("not a url").is_err());
    }

    #[test]
    fn exact_match_beats_listing_order() {
        let tracks = vec![track("hi"), track("ta")];
        let selected = select_track(&tracks, PREFERRED_LANGUAGES).unwrap();
        assert_eq!(selected.language_code, "ta");
    }

    #[test]
    fn regional_variant_fallback_honors_preference_order() {
        let tracks = vec![track("hi-Latn"), track("en-GB")];
        let selected = select_track(&tracks, PREFERRED_LANGUAGES).unwrap();
        assert_eq!(selected.language_code, "en-GB");
    }

    #[test]
    fn no_supported_track_selects_nothing() {
        let tracks = vec![track("fr"), track("de")];
        assert!(select_track(&tracks, PREFERRED_LANGUAGES).is_none());
    }

    #[test]
    fn parses_timedtext_events() {
        let payload = r#"{
            "events": [
                {"tStartMs": 0, "dDurationMs": 2000, "segs": [{"utf8": "heat the pan"}]},
                {"tStartMs": 2500, "segs": [{"utf8": "add "}, {"utf8": "oil"}]},
                {"tStartMs": 4000}
            ]
        }"#;
        let entries = parse_timedtext(payload).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "heat the pan");
        assert_eq!(entries[1].start, 2.5);
        assert_eq!(entries[1].text, "add oil");
    }

    #[test]
    fn decodes_html_entities_in_segments() {
        let payload = r#"{"events": [{"tStartMs": 0, "segs": [{"utf8": "don&#39;t burn it"}]}]}"#;
        let entries = parse_timedtext(payload).unwrap();
        assert_eq!(entries[0].text, "don't burn it");
    }

    #[test]
    fn malformed_timedtext_is_a_parse_error() {
        let err = parse_timedtext("<transcript/>").unwrap_err();
        assert!(matches!(err, LadleError::TranscriptParse { .. }));
    }

    #[test]
    fn missing_captions_section_reads_as_disabled() {
        let html = r#"<script>var ytInitialPlayerResponse = {"playabilityStatus": {}};</script>"#;
        let player = extract_player_response(html).unwrap();
        assert!(player.captions.is_none());
    }

    #[test]
    fn extracts_caption_tracks_from_watch_page() {
        let html = concat!(
            "<script>var ytInitialPlayerResponse = {\"captions\": ",
            "{\"playerCaptionsTracklistRenderer\": {\"captionTracks\": ",
            "[{\"baseUrl\": \"https://example.com/tt?lang=ta\", \"languageCode\": \"ta\"}]}}};",
            "</script>"
        );
        let player = extract_player_response(html).unwrap();
        let captions = player.captions.unwrap();
        assert_eq!(captions.tracklist.tracks.len(), 1);
        assert_eq!(captions.tracklist.tracks[0].language_code, "ta");
    }

    #[test]
    fn watch_page_without_player_response_is_a_parse_error() {
        let err = extract_player_response("<html></html>").unwrap_err();
        assert!(matches!(err, LadleError::TranscriptParse { .. }));
    }
}
