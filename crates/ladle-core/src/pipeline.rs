use crate::{
    completion::CompletionClient,
    error::Result,
    prompts,
    types::Transcript,
};

/// Translate the windowed transcript text to English if the track is
/// not already English. English input passes through untouched and no
/// model call is made.
pub async fn translate_to_english(
    client: &CompletionClient,
    transcript: &Transcript,
    text: &str,
) -> Result<String> {
    if transcript.is_english() {
        return Ok(text.to_string());
    }

    tracing::info!(language = %transcript.language, "translating transcript to English");
    client.complete(&prompts::translation_prompt(text)).await
}

/// Ask the model for step-by-step instructions and split its answer
/// into one trimmed step per non-blank line. Whatever the model emits
/// becomes the recipe.
pub async fn extract_instructions(
    client: &CompletionClient,
    english_text: &str,
    recipe_name: &str,
) -> Result<Vec<String>> {
    tracing::info!(recipe = recipe_name, "extracting cooking instructions");
    let response = client
        .complete(&prompts::extraction_prompt(english_text, recipe_name))
        .await?;
    Ok(parse_steps(&response))
}

fn parse_steps(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionConfig;
    use crate::types::CaptionEntry;

    fn make_transcript(language: &str, starts: &[f64]) -> Transcript {
        Transcript {
            language: language.to_string(),
            entries: starts
                .iter()
                .map(|&start| CaptionEntry {
                    start,
                    text: format!("entry at {start}"),
                })
                .collect(),
        }
    }

    // A client pointed at an unroutable address: any attempted call
    // errors, so a passing test proves the stage never reached the
    // network.
    fn unreachable_client() -> CompletionClient {
        CompletionClient::new(CompletionConfig {
            endpoint: "http://192.0.2.1:1".to_string(),
            model: "test-model".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn window_keeps_only_the_first_four_minutes() {
        let transcript = make_transcript("en", &[0.0, 120.0, 241.0, 300.0]);
        let text = transcript.window_text();
        assert!(text.contains("entry at 0"));
        assert!(text.contains("entry at 120"));
        assert!(!text.contains("entry at 241"));
        assert!(!text.contains("entry at 300"));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let transcript = make_transcript("en", &[240.0]);
        assert_eq!(transcript.window_text(), "entry at 240");
    }

    #[tokio::test]
    async fn english_transcript_skips_the_model() {
        let transcript = make_transcript("en", &[0.0]);
        let text = "Heat oil in a pan";
        let translated = translate_to_english(&unreachable_client(), &transcript, text)
            .await
            .unwrap();
        assert_eq!(translated, text);
    }

    #[test]
    fn steps_are_split_trimmed_and_non_blank() {
        let response = "  Chop onions  \n\n\tBoil water\n   \nServe hot\n";
        assert_eq!(
            parse_steps(response),
            vec!["Chop onions", "Boil water", "Serve hot"]
        );
    }

    #[test]
    fn empty_response_yields_no_steps() {
        assert!(parse_steps("\n  \n").is_empty());
    }
}
