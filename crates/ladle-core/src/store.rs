use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{
    error::{LadleError, Result},
    types::Recipe,
};

/// Default on-disk location for saved recipes.
pub fn default_store_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("ladle")
        .join("recipes")
}

/// Reduce a recipe name to the characters allowed in a filename stem:
/// alphanumerics, spaces, underscores and hyphens, with trailing
/// whitespace trimmed.
pub fn sanitize_recipe_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn recipe_path(store_dir: &Path, name: &str) -> Result<PathBuf> {
    let stem = sanitize_recipe_name(name);
    if stem.is_empty() {
        return Err(LadleError::InvalidRecipeName {
            name: name.to_string(),
        });
    }
    Ok(store_dir.join(format!("{stem}.json")))
}

/// Persist a recipe's step list as a pretty-printed JSON array under
/// its sanitized name. An existing file of the same name is replaced;
/// last write wins.
pub async fn save_recipe(store_dir: &Path, recipe: &Recipe) -> Result<PathBuf> {
    let path = recipe_path(store_dir, &recipe.name)?;
    fs::create_dir_all(store_dir).await?;
    let pretty_json = serde_json::to_string_pretty(&recipe.steps)?;
    fs::write(&path, &pretty_json).await?;
    tracing::debug!(path = %path.display(), steps = recipe.steps.len(), "saved recipe");
    Ok(path)
}

/// Load the step list of one saved recipe file.
pub async fn load_recipe(path: &Path) -> Result<Vec<String>> {
    let json_content = fs::read_to_string(path).await?;
    let steps: Vec<String> = serde_json::from_str(&json_content)?;
    Ok(steps)
}

/// One saved recipe as seen by the listing: the filename stem and
/// either its steps or the error that kept them from loading.
#[derive(Debug)]
pub struct ListedRecipe {
    pub name: String,
    pub steps: Result<Vec<String>>,
}

/// Enumerate every `.json` file in the store, sorted by name. A file
/// that fails to read or parse is reported on its own entry and never
/// aborts the rest of the listing.
pub async fn list_recipes(store_dir: &Path) -> Result<Vec<ListedRecipe>> {
    if !store_dir.exists() {
        return Ok(Vec::new());
    }

    let mut listed = Vec::new();
    let mut entries = fs::read_dir(store_dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }
        let Some(stem) = path.file_stem() else {
            continue;
        };
        listed.push(ListedRecipe {
            name: stem.to_string_lossy().into_owned(),
            steps: load_recipe(&path).await,
        });
    }
    listed.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(listed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_punctuation_but_keeps_spaces() {
        assert_eq!(
            sanitize_recipe_name("Spicy/Chicken*Curry!"),
            "SpicyChickenCurry"
        );
        assert_eq!(sanitize_recipe_name("Tomato Rice"), "Tomato Rice");
    }

    #[test]
    fn sanitize_keeps_underscores_and_hyphens() {
        assert_eq!(sanitize_recipe_name("dal_tadka-v2"), "dal_tadka-v2");
    }

    #[test]
    fn sanitize_trims_trailing_whitespace() {
        assert_eq!(sanitize_recipe_name("Rasam!! "), "Rasam");
    }

    #[test]
    fn sanitize_keeps_non_ascii_letters() {
        assert_eq!(sanitize_recipe_name("Köfte!"), "Köfte");
    }

    #[test]
    fn unusable_name_is_rejected() {
        let err = recipe_path(Path::new("/tmp"), "///").unwrap_err();
        assert!(matches!(err, LadleError::InvalidRecipeName { .. }));
    }

    #[test]
    fn recipe_path_appends_json_extension() {
        let path = recipe_path(Path::new("/data"), "Test Soup").unwrap();
        assert_eq!(path, Path::new("/data/Test Soup.json"));
    }
}
