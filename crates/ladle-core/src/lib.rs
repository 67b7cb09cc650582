//! Ladle Core Library
//!
//! Core functionality for resolving YouTube cooking videos, fetching
//! their caption tracks, and turning them into saved step-by-step
//! recipes with the help of a local language model.

pub mod completion;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod prompts;
pub mod store;
pub mod types;
pub mod youtube;

// Re-export commonly used items at crate root
pub use completion::{CompletionClient, CompletionConfig};
pub use error::{LadleError, Result};
pub use format::display_name;
pub use pipeline::{extract_instructions, translate_to_english};
pub use store::{
    ListedRecipe, default_store_dir, list_recipes, load_recipe, sanitize_recipe_name, save_recipe,
};
pub use types::{CaptionEntry, INTRO_WINDOW_SECS, Recipe, Transcript};
pub use youtube::{CaptionSource, PREFERRED_LANGUAGES, VideoId, parse_video_url};
