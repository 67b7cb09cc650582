use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use ladle_core::{
    CaptionSource, CompletionClient, CompletionConfig, LadleError, Recipe, default_store_dir,
    display_name, extract_instructions, list_recipes, parse_video_url, save_recipe,
    translate_to_english,
};

#[derive(Parser)]
#[command(name = "ladle")]
#[command(about = "Extract clean step-by-step cooking instructions from YouTube recipe videos")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract the recipe from a cooking video and save it
    Extract {
        /// YouTube video URL
        url: String,

        /// Recipe name, used as the storage key
        name: String,

        /// Ollama-compatible endpoint serving the model
        #[arg(long, default_value = "http://localhost:11434")]
        endpoint: String,

        /// Model used for translation and extraction
        #[arg(short, long, default_value = "llama3.2:1b")]
        model: String,

        /// Directory recipes are saved to
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },

    /// List saved recipes with their steps
    List {
        /// Directory recipes are saved to
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Map pipeline failures onto the messages shown to the user; anything
/// without a dedicated message surfaces as an unexpected error.
fn user_message(err: &LadleError) -> String {
    match err {
        LadleError::InvalidUrl { .. } => "Invalid YouTube URL.".to_string(),
        LadleError::NoTranscript { .. } => {
            "No transcript found in a supported language.".to_string()
        }
        LadleError::TranscriptsDisabled { .. } => {
            "Transcripts are disabled for this video.".to_string()
        }
        LadleError::TranscriptParse { .. } => {
            "Transcript fetch failed due to a structural parse issue.".to_string()
        }
        other => format!("Unexpected error: {other}"),
    }
}

fn print_step_card(idx: usize, step: &str) {
    println!("  {}  {}", style(format!("Step {idx}")).cyan().bold(), step);
}

async fn run_extract(
    url: &str,
    name: &str,
    config: CompletionConfig,
    store_dir: PathBuf,
) -> ladle_core::Result<()> {
    let video_id = parse_video_url(url)?;

    let spinner = create_spinner("Fetching transcript...");
    let source = CaptionSource::new()?;
    let transcript = source.fetch_transcript(&video_id).await?;
    spinner.finish_with_message(format!(
        "{} Transcript fetched: {} entries, {}",
        style("✓").green().bold(),
        transcript.entries.len(),
        style(&transcript.language).yellow()
    ));

    let text = transcript.window_text();
    let client = CompletionClient::new(config)?;

    let english_text = if transcript.is_english() {
        text
    } else {
        let spinner = create_spinner(&format!("Translating from {}...", transcript.language));
        let translated = translate_to_english(&client, &transcript, &text).await?;
        spinner.finish_with_message(format!(
            "{} Translated to English",
            style("✓").green().bold()
        ));
        translated
    };

    let spinner = create_spinner(&format!(
        "Extracting cooking instructions with {}...",
        client.model()
    ));
    let steps = extract_instructions(&client, &english_text, name).await?;
    spinner.finish_with_message(format!(
        "{} Extracted {} steps",
        style("✓").green().bold(),
        steps.len()
    ));

    let recipe = Recipe {
        name: name.to_string(),
        steps,
    };
    let path = save_recipe(&store_dir, &recipe).await?;

    println!(
        "\n{} '{}' extracted and saved to {}\n",
        style("✓").green().bold(),
        recipe.name,
        style(path.display()).cyan()
    );
    for (idx, step) in recipe.steps.iter().enumerate() {
        print_step_card(idx + 1, step);
    }

    Ok(())
}

async fn run_list(store_dir: PathBuf) -> ladle_core::Result<()> {
    let recipes = list_recipes(&store_dir).await?;
    if recipes.is_empty() {
        println!("No saved recipes found.");
        return Ok(());
    }

    for listed in recipes {
        println!("\n{}", style(display_name(&listed.name)).bold());
        match listed.steps {
            Ok(steps) => {
                for (idx, step) in steps.iter().enumerate() {
                    print_step_card(idx + 1, step);
                }
            }
            Err(err) => {
                println!(
                    "  {} Error loading {}: {}",
                    style("⚠").yellow().bold(),
                    listed.name,
                    err
                );
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            url,
            name,
            endpoint,
            model,
            store_dir,
        } => {
            // Both inputs must be non-empty before the pipeline starts.
            if url.trim().is_empty() || name.trim().is_empty() {
                println!(
                    "{} Please enter both the video URL and the recipe name.",
                    style("⚠").yellow().bold()
                );
                return Ok(());
            }

            println!(
                "\n{}  {}\n",
                style("ladle").cyan().bold(),
                style("Recipe Extractor").dim()
            );

            let config = CompletionConfig { endpoint, model };
            let store_dir = store_dir.unwrap_or_else(default_store_dir);
            if let Err(err) = run_extract(&url, &name, config, store_dir).await {
                eprintln!("{} {}", style("✗").red().bold(), user_message(&err));
                std::process::exit(1);
            }
        }
        Command::List { store_dir } => {
            let store_dir = store_dir.unwrap_or_else(default_store_dir);
            if let Err(err) = run_list(store_dir).await {
                eprintln!("{} {}", style("✗").red().bold(), user_message(&err));
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
