use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use inquire::{Confirm, Select, Text};
use uv_core::{
    Config, Coordinates, LowUvPolicy, Postcode, ProviderId, SKIN_TYPES, SkinType, UvProvider,
    provider::{default_provider_from_config, provider_from_config},
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "uv", version, about = "UV index lookup and sun protection advice")]
pub struct Cli {
    /// Output machine-readable JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Use the bundled snapshot instead of the configured provider.
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Skin type selection, either a discrete type or a slider value.
#[derive(Debug, Clone, Args)]
pub struct SkinArgs {
    /// Skin type from 1 (always burns) to 6 (never burns).
    #[arg(long, allow_negative_numbers = true, conflicts_with = "skin_value")]
    pub skin_type: Option<i64>,

    /// Continuous skin value between 1.0 and 6.0.
    #[arg(long, allow_negative_numbers = true)]
    pub skin_value: Option<f64>,
}

impl SkinArgs {
    /// Explicit selection first, then the configured default.
    fn resolve(&self, config: &Config) -> anyhow::Result<Option<SkinType>> {
        match (self.skin_type, self.skin_value) {
            (Some(id), _) => Ok(Some(SkinType::new(id)?)),
            (None, Some(value)) => Ok(Some(SkinType::from_continuous(value)?)),
            (None, None) => config.default_skin_type(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Personalized sun protection advice for a UV index.
    Advise {
        /// UV index reading.
        #[arg(long, allow_negative_numbers = true)]
        uv: f64,

        #[command(flatten)]
        skin: SkinArgs,
    },

    /// List known cities.
    Cities,

    /// Search cities by name.
    Search {
        name: String,
    },

    /// Current UV index for every station.
    Readings,

    /// UV index for an Australian postcode.
    Postcode {
        postcode: String,

        #[command(flatten)]
        skin: SkinArgs,
    },

    /// UV index of the station nearest to a location.
    Nearest {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        #[command(flatten)]
        skin: SkinArgs,
    },

    /// Describe the six skin types.
    SkinTypes,

    /// Interactively edit the configuration file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        tracing::debug!(?config, "configuration loaded");
        let json = self.json;

        match self.command {
            Command::Advise { uv, skin } => {
                let skin = skin.resolve(&config)?.ok_or_else(|| {
                    anyhow!(
                        "No skin type given.\n\
                         Hint: pass --skin-type <1-6> or --skin-value <1.0-6.0>, \
                         or set a default with `uv configure`."
                    )
                })?;
                let rec = config.engine().compute(uv, skin)?;
                output::print_one(json, &rec, output::render_recommendation)?;
            }
            Command::SkinTypes => {
                output::print_out(json, &SKIN_TYPES, output::render_skin_type)?;
            }
            Command::Configure => configure(config)?,
            Command::Cities => {
                let provider = open_provider(&config, self.offline)?;
                let cities = provider.all_cities().await?;
                output::print_out(json, &cities, output::render_city)?;
            }
            Command::Search { name } => {
                let provider = open_provider(&config, self.offline)?;
                let cities = provider.search_cities(&name).await?;
                if cities.is_empty() && !json {
                    println!("No cities match '{name}'");
                } else {
                    output::print_out(json, &cities, output::render_city)?;
                }
            }
            Command::Readings => {
                let provider = open_provider(&config, self.offline)?;
                let readings = provider.all_readings().await?;
                output::print_out(json, &readings, output::render_reading)?;
            }
            Command::Postcode { postcode, skin } => {
                let postcode = Postcode::parse(&postcode)?;
                let skin = skin.resolve(&config)?;
                let provider = open_provider(&config, self.offline)?;

                let lookup = provider
                    .by_postcode(&postcode)
                    .await
                    .with_context(|| format!("Failed to get UV data for postcode {postcode}"))?;

                let report = output::Report::new(
                    Some(lookup.city),
                    lookup.uv_index,
                    lookup.message,
                    skin,
                    &config,
                )?;
                output::print_one(json, &report, output::render_report)?;
            }
            Command::Nearest { lat, lng, skin } => {
                let at = Coordinates::new(lat, lng)?;
                let skin = skin.resolve(&config)?;
                let provider = open_provider(&config, self.offline)?;

                let reading = provider.by_coordinates(at).await?;
                let report = output::Report::new(None, Some(reading), None, skin, &config)?;
                output::print_one(json, &report, output::render_report)?;
            }
        }

        Ok(())
    }
}

fn open_provider(config: &Config, offline: bool) -> anyhow::Result<Box<dyn UvProvider>> {
    if offline {
        provider_from_config(ProviderId::Mock, config)
    } else {
        default_provider_from_config(config)
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let providers: Vec<&str> = ProviderId::all().iter().map(|p| p.as_str()).collect();
    let current = config.provider_id().unwrap_or(ProviderId::Backend);
    let start = ProviderId::all().iter().position(|p| *p == current).unwrap_or(0);
    let chosen = Select::new("Data provider:", providers).with_starting_cursor(start).prompt()?;
    config.set_provider(ProviderId::try_from(chosen)?);

    let base_url = Text::new("Backend API base URL:")
        .with_default(config.api_base_url())
        .prompt()?;
    config.api_base_url = Some(base_url.trim().to_string());

    config.fallback_to_mock =
        Confirm::new("Fall back to bundled data when the API is unreachable?")
            .with_default(config.fallback_to_mock)
            .prompt()?;

    let policies = vec![LowUvPolicy::Baseline.as_str(), LowUvPolicy::Empty.as_str()];
    let start = usize::from(config.low_uv_policy == LowUvPolicy::Empty);
    let policy = Select::new("Advice below UV 3:", policies).with_starting_cursor(start).prompt()?;
    config.low_uv_policy = LowUvPolicy::try_from(policy)?;

    let mut skin_options = vec!["none".to_string()];
    skin_options.extend(SKIN_TYPES.iter().map(|s| format!("{} - {}", s.id, s.description)));
    let start = config
        .default_skin_type
        .filter(|id| (SkinType::MIN..=SkinType::MAX).contains(id))
        .map(usize::from)
        .unwrap_or(0);
    let skin = Select::new("Default skin type:", skin_options)
        .with_starting_cursor(start)
        .raw_prompt()?;
    config.default_skin_type = match skin.index {
        0 => None,
        i => Some(u8::try_from(i)?),
    };

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}
