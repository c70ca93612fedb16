//! Runtime settings for the debug client.
//!
//! Resolved once at startup from CLI flags / environment, an optional TOML file,
//! and the bundled defaults, in that order of precedence. The result is handed to
//! the Leptos app through context.

use crate::explorer::ExplorerConfig;
use crate::model::Itinerary;

/// Everything the pages need to render
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub explorer: ExplorerConfig,
    pub itinerary: Itinerary,
}

#[cfg(feature = "ssr")]
mod ssr {
    use super::*;
    use anyhow::{Context, Result};
    use clap::Parser;
    use serde::Deserialize;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "otp-debug-web", about = "Itinerary debug client with GraphiQL line links")]
    pub struct Args {
        /// TOML config file
        #[arg(long, env = "OTP_DEBUG_CONFIG")]
        pub config: Option<PathBuf>,

        /// GraphiQL base URL, including its own query string
        #[arg(long, env = "GRAPHIQL_URL")]
        pub graphiql_url: Option<String>,

        /// Itinerary JSON to display instead of the bundled sample
        #[arg(long, env = "ITINERARY_FILE")]
        pub itinerary: Option<PathBuf>,
    }

    // ── TOML shape ────────────────────────────────────────────────────────────

    #[derive(Debug, Default, Deserialize)]
    pub(super) struct FileConfig {
        #[serde(default)]
        explorer: ExplorerSection,
        #[serde(default)]
        itinerary: ItinerarySection,
    }

    #[derive(Debug, Default, Deserialize)]
    struct ExplorerSection {
        #[serde(default)]
        graphiql_url: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    struct ItinerarySection {
        #[serde(default)]
        path: Option<PathBuf>,
    }

    impl FileConfig {
        pub(super) fn load(path: &Path) -> Result<Self> {
            let content =
                std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
            Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
        }

        pub(super) fn parse(content: &str) -> Result<Self> {
            Ok(toml::from_str(content)?)
        }
    }

    fn load_itinerary(path: &Path) -> Result<Itinerary> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read itinerary: {}", path.display()))?;
        Itinerary::from_json(&content).with_context(|| format!("Failed to parse itinerary: {}", path.display()))
    }

    impl Settings {
        /// Merge CLI/env over the config file. A missing explorer URL is not an error.
        pub fn resolve(args: Args) -> Result<Self> {
            let file = match &args.config {
                Some(path) => FileConfig::load(path)?,
                None => FileConfig::default(),
            };
            Self::merge(args, file)
        }

        pub(super) fn merge(args: Args, file: FileConfig) -> Result<Self> {
            let graphiql_url = args
                .graphiql_url
                .or(file.explorer.graphiql_url)
                .filter(|url| !url.trim().is_empty());
            let explorer = ExplorerConfig { graphiql_url };

            if explorer.is_configured() {
                tracing::info!(url = explorer.base(), "GraphiQL links enabled");
            } else {
                tracing::warn!("No GraphiQL URL configured (set GRAPHIQL_URL); line links will not resolve");
            }

            let itinerary = match args.itinerary.or(file.itinerary.path) {
                Some(path) => {
                    let itinerary = load_itinerary(&path)?;
                    tracing::info!(path = %path.display(), legs = itinerary.legs.len(), "Loaded itinerary");
                    itinerary
                }
                None => {
                    let itinerary = Itinerary::sample().context("Failed to parse bundled sample itinerary")?;
                    tracing::info!(legs = itinerary.legs.len(), "Using bundled sample itinerary");
                    itinerary
                }
            };

            Ok(Self { explorer, itinerary })
        }
    }
}

#[cfg(feature = "ssr")]
pub use ssr::Args;
