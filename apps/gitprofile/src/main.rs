mod config;
mod enhancement;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod render;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::render::minimal::MinimalTemplate;
use crate::render::modern::ModernTemplate;
use crate::render::registry::TemplateRegistry;
use crate::render::style::RngPicker;

#[derive(Parser)]
#[command(
    name = "gitprofile",
    about = "Generate a GitHub profile README from your resume",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a profile README from a resume PDF
    Generate {
        /// Path to the resume PDF file
        resume_path: PathBuf,

        /// Output path for the generated README
        #[arg(short, long, default_value = "profile_readme.md")]
        output: PathBuf,

        /// Template style to use for the profile
        #[arg(short, long, default_value = "minimal")]
        template: String,

        /// Overwrite the output file if it already exists
        #[arg(short, long)]
        force: bool,

        /// Show detailed processing information
        #[arg(short, long)]
        verbose: bool,

        /// Seed for the randomized styling, for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List available profile templates
    Templates,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            resume_path,
            output,
            template,
            force,
            verbose,
            seed,
        } => generate(&resume_path, &output, &template, force, verbose, seed).await,
        Command::Templates => {
            let registry = TemplateRegistry::with_builtins();
            println!("Available templates:");
            for name in registry.names() {
                println!("  • {name}");
            }
            Ok(())
        }
    }
}

async fn generate(
    resume_path: &Path,
    output: &Path,
    template: &str,
    force: bool,
    verbose: bool,
    seed: Option<u64>,
) -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config, verbose);

    let registry = build_registry(&config);
    // Fail on a bad template name before doing any extraction work
    registry.resolve(template)?;

    if output.exists() && !force && !confirm_overwrite(output)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let progress = build_progress(verbose);

    progress.set_message("Extracting resume text");
    let resume_text = extraction::extract_text(resume_path)?;
    if verbose {
        info!("Resume text ({} characters):", resume_text.len());
        println!("{resume_text}");
    }

    let llm = GeminiClient::new(config.google_api_key.clone());

    progress.set_message("Structuring resume data");
    let mut profile = extraction::extract_profile(&llm, &resume_text).await?;
    if verbose {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    }

    progress.set_message("Enhancing profile content");
    match enhancement::enhance(&llm, &profile).await {
        Ok(enhanced) => profile.merge_enhancement(enhanced),
        // Enrichment is best-effort; proceed with the unenhanced profile
        Err(e) => warn!("LLM enhancement failed, continuing without enrichment: {e}"),
    }

    progress.set_message("Rendering profile");
    let mut picker = match seed {
        Some(seed) => RngPicker::seeded(seed),
        None => RngPicker::from_entropy(),
    };
    let markdown = render::render(&registry, &profile, template, &mut picker)?;

    progress.set_message("Saving");
    std::fs::write(output, &markdown)?;
    progress.finish_and_clear();

    info!("Generated GitHub profile at {}", output.display());
    println!(
        "✨ Successfully generated GitHub profile!\n📝 Output: {}\n🎨 Template: {}",
        output.display(),
        template
    );
    Ok(())
}

fn build_registry(config: &Config) -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    registry.register(Box::new(MinimalTemplate));
    registry.register(Box::new(match &config.github_username {
        Some(username) => ModernTemplate::with_username(username),
        None => ModernTemplate::default(),
    }));
    registry
}

fn build_progress(verbose: bool) -> ProgressBar {
    if verbose {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}").expect("valid progress template"),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!("{} already exists. Overwrite? [y/N] ", path.display());
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.rust_log.as_str()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), level))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
