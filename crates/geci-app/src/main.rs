use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use geci_config::Config;
use geci_core::annotate::LanguageAnnotator;
use geci_core::vocabulary::Vocabulary;
use geci_lang_mandarin::{HskVocabulary, MandarinAnnotator, MandarinLookup, SAMPLE_LYRICS};
use geci_lookup::{LookupService, OfflineLookup};
use geci_speech::SpeechEngine;
use geci_types::{AppEvent, TextSource};
use tokio::signal;

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod render;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use crate::controller::AppController;
use crate::state::AppState;

/// Annotate Chinese song lyrics with pinyin, HSK levels and translations
#[derive(Parser, Debug)]
#[command(name = "geci", version, about)]
struct Args {
    /// Lyrics file to annotate
    file: Option<PathBuf>,

    /// Annotate this text instead of a file or stdin
    #[arg(short, long)]
    text: Option<String>,

    /// Config profile name
    #[arg(short, long, default_value = "main")]
    profile: String,

    /// Create a profile cloned from main, then exit
    #[arg(long, value_name = "NAME")]
    new_profile: Option<String>,

    /// Watch the clipboard for Chinese text
    #[arg(short, long)]
    clipboard: bool,

    /// Annotate once and exit instead of staying interactive
    #[arg(long)]
    once: bool,

    /// With --once, print the annotation as JSON
    #[arg(long)]
    json: bool,

    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = profile::init_user_config() {
        tracing::warn!("Could not initialize user config: {}", e);
    }
    if let Some(name) = &args.new_profile {
        let path = profile::add_profile_from_default(name)?;
        println!("Created profile at {}", path.display());
        return Ok(());
    }
    let mut config = profile::load_user_profile(&args.profile).unwrap_or_else(|e| {
        tracing::warn!("Could not load profile '{}': {}", args.profile, e);
        Config::new()
    });
    if args.clipboard {
        config.watch_clipboard = true;
    }

    let (text, source) = read_input(&args)?;
    let annotator = build_annotator(&config);

    if args.once {
        return run_once(annotator.as_ref(), &config, &text, args.json).await;
    }

    let speech = config
        .speech
        .enabled
        .then(|| SpeechEngine::new(config.speech.command.clone(), config.speech.args.clone()));

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state.clone());
    let mut tasks = controller.spawn_tasks(annotator, speech);

    controller.send(AppEvent::TextInput { text, source }).await?;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Frames own stdout, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(args: &Args) -> anyhow::Result<(String, TextSource)> {
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        return Ok((text, TextSource::File));
    }
    if let Some(text) = &args.text {
        return Ok((text.clone(), TextSource::Manual));
    }
    if !atty::is(atty::Stream::Stdin) {
        let mut text = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut text)
            .context("could not read stdin")?;
        if !text.trim().is_empty() {
            return Ok((text, TextSource::Stdin));
        }
    }

    tracing::info!("No input given, showing sample lyrics");
    Ok((SAMPLE_LYRICS.to_string(), TextSource::Sample))
}

fn build_annotator(config: &Config) -> Arc<dyn LanguageAnnotator> {
    let tier_order = config.vocabulary.tier_order.clone();

    let vocabulary: Arc<dyn Vocabulary> = match &config.vocabulary.data_dir {
        Some(dir) => match HskVocabulary::load_dir(Path::new(dir), &tier_order) {
            Ok(vocabulary) => Arc::new(vocabulary),
            Err(e) => {
                tracing::warn!("Could not load vocabulary from {dir}: {e}, using embedded lists");
                Arc::new(HskVocabulary::load_embedded(&tier_order))
            }
        },
        None => Arc::new(HskVocabulary::load_embedded(&tier_order)),
    };
    tracing::info!("Vocabulary ready: {} characters", vocabulary.len());

    let lookup: Arc<dyn LookupService> = if config.lookup.enabled {
        Arc::new(MandarinLookup::new(
            config.lookup.api_url.clone(),
            config.lookup.source_lang.clone(),
            config.lookup.target_lang.clone(),
        ))
    } else {
        tracing::warn!("External lookup disabled, unknown characters stay unresolved");
        Arc::new(OfflineLookup)
    };

    Arc::new(MandarinAnnotator::new(vocabulary, lookup))
}

async fn run_once(
    annotator: &dyn LanguageAnnotator,
    config: &Config,
    text: &str,
    json: bool,
) -> anyhow::Result<()> {
    let annotation = annotator.annotate(text).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&annotation)?);
    } else {
        let colors = config.ui.colors && atty::is(atty::Stream::Stdout);
        print!(
            "{}",
            render::render_annotation(&annotation, &config.ui, colors, None)
        );
    }

    Ok(())
}
