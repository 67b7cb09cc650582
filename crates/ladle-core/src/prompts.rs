//! The two fixed prompt templates the pipeline submits to the model.

/// Prompt asking the model to translate a non-English cooking
/// transcript into neutral English, keeping only the cooking content.
pub fn translation_prompt(transcript_text: &str) -> String {
    format!(
        r#"You are a smart language translator assistant.

Your task is to translate a cooking video transcript into clear, simple English. The transcript may be in any language (e.g., Tamil, Hindi, Telugu, Malayalam).

Translate ONLY the cooking-related content. Exclude:
- Greetings, jokes, and personal introductions
- Brand mentions, promotional content, or background music descriptions
- Tips, comparisons, or commentary
- Repetitions or casual talk

The translation must be:
- Clear and accurate
- Focused only on the cooking actions, ingredients, and instructions
- In natural, neutral English
- Free of grammar or spelling errors

DO NOT add anything new. DO NOT summarize. Return the translated cooking process in the same order and structure as the original.

Transcript:
{transcript_text}"#
    )
}

/// Prompt asking the model for one imperative cooking step per line,
/// in chronological order, supplemented from its own knowledge of the
/// named dish where the transcript falls short.
pub fn extraction_prompt(english_text: &str, recipe_name: &str) -> String {
    format!(
        r#"You are a smart assistant designed to extract detailed, actionable cooking instructions from the transcript of a cooking video.

Extract only the essential cooking instructions, in the correct chronological order. Ignore small talk, greetings, brand names, commentary, tips, background narration, and repetition that is not part of the cooking itself.

Each instruction must:
- Begin with a verb (e.g., 'Chop', 'Boil', 'Add')
- Name the ingredient(s) or item(s) being used
- Mention any quantity or condition if stated (e.g., '2 cups', 'until golden brown')
- Be a single, clear sentence of at most 25 words

Your response must be nothing but the instruction list:
- One instruction per line
- No numbering, no quotes, no brackets, no bullet points
- No markdown, code formatting, or commentary outside the list

Example output:
Chop two onions finely
Heat oil in a pan
Add chopped onions and saute until golden brown
Add tomatoes and cook until soft

If multiple dishes are made, include all steps sequentially, and keep repeated but essential steps (stirring, boiling, resting). The dish being prepared is {recipe_name}; where the transcript is incomplete, fill in the missing steps from what you know of this dish.

Transcript:
{english_text}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_prompt_carries_the_transcript() {
        let prompt = translation_prompt("vengayam narukkavum");
        assert!(prompt.contains("vengayam narukkavum"));
        assert!(prompt.contains("DO NOT summarize"));
    }

    #[test]
    fn extraction_prompt_names_the_dish() {
        let prompt = extraction_prompt("chop the onions", "Tomato Rice");
        assert!(prompt.contains("Tomato Rice"));
        assert!(prompt.contains("chop the onions"));
        assert!(prompt.contains("One instruction per line"));
    }
}
