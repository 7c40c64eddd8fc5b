//! `nearby` command: fetch cafés from the backend, rank and print them.

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use geo::Coord;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use vibe_core::{
    CafeQuery, CafeSource, DEFAULT_LIMIT, DEFAULT_LOCATION, DEFAULT_RADIUS_KM, RankingSession,
    fetch_or_empty,
};
use vibe_data::source::{HttpCafeSource, HttpCafeSourceConfig};

use crate::render::{ViewOptions, present};
use crate::{
    ARG_ADDRESS, ARG_BASE_URL, ARG_DETAIL, ARG_FORMAT, ARG_LAT, ARG_LIMIT, ARG_LNG, ARG_PREFER,
    ARG_PURPOSE, ARG_RADIUS_KM, ARG_TIMEOUT_SECS, CliError,
};

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "nearby",
    long_about = "Fetch enriched cafe records around a location from the \
                 Vibe Radar backend, keep those suiting the purpose and sort \
                 them by the most recently listed preference. Every option \
                 can also come from configuration files or environment \
                 variables.",
    about = "Rank cafes near a location"
)]
#[ortho_config(prefix = "VIBE_RADAR")]
pub(crate) struct NearbyArgs {
    /// Latitude of the search centre (defaults to downtown Toronto).
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the search centre (defaults to downtown Toronto).
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Address for the backend to geocode instead of the coordinates.
    #[arg(long = ARG_ADDRESS, value_name = "text")]
    #[serde(default)]
    pub(crate) address: Option<String>,
    /// Search radius in kilometres.
    #[arg(long = ARG_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
    /// Maximum number of cafés to fetch.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<u32>,
    /// Base URL of the backend (e.g. "http://localhost:8000").
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Purpose filter: all, study, social, group or date.
    #[arg(long = ARG_PURPOSE, value_name = "purpose")]
    #[serde(default)]
    pub(crate) purpose: Option<String>,
    /// Comma-separated preferences; the last one listed sorts the results.
    #[arg(long = ARG_PREFER, value_name = "list")]
    #[serde(default)]
    pub(crate) prefer: Option<String>,
    /// Output format: text or json.
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
    /// Show the profile panel for the café with this id.
    #[arg(long = ARG_DETAIL, value_name = "id")]
    #[serde(default)]
    pub(crate) detail: Option<String>,
}

impl NearbyArgs {
    pub(crate) fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    /// Validated search parameters.
    pub(crate) query: CafeQuery,
    /// Backend client settings.
    pub(crate) source: HttpCafeSourceConfig,
    /// Filter and output options.
    pub(crate) view: ViewOptions,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let location = Coord {
            x: args.lng.unwrap_or(DEFAULT_LOCATION.x),
            y: args.lat.unwrap_or(DEFAULT_LOCATION.y),
        };
        let mut query = CafeQuery::near(location)
            .with_radius_km(args.radius_km.unwrap_or(DEFAULT_RADIUS_KM))
            .with_limit(args.limit.unwrap_or(DEFAULT_LIMIT));
        if let Some(address) = args.address.filter(|a| !a.trim().is_empty()) {
            query = query.with_address(address);
        }
        query.validate()?;

        let mut source = HttpCafeSourceConfig::default();
        if let Some(base_url) = args.base_url {
            source.base_url = base_url;
        }
        if let Some(secs) = args.timeout_secs {
            source = source.with_timeout(Duration::from_secs(secs));
        }

        let view = ViewOptions::parse(
            args.purpose.as_deref(),
            args.prefer.as_deref(),
            args.format.as_deref(),
            args.detail.as_deref(),
        )?;

        Ok(Self {
            query,
            source,
            view,
        })
    }
}

/// Builds the café source for the current `nearby` invocation.
pub(crate) trait CafeSourceBuilder {
    fn build(&self, config: &HttpCafeSourceConfig) -> Result<Box<dyn CafeSource>, CliError>;
}

pub(crate) struct DefaultCafeSourceBuilder;

impl CafeSourceBuilder for DefaultCafeSourceBuilder {
    fn build(&self, config: &HttpCafeSourceConfig) -> Result<Box<dyn CafeSource>, CliError> {
        let source = HttpCafeSource::with_config(config.clone()).map_err(|source| {
            CliError::BuildCafeSource {
                base_url: config.base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(source))
    }
}

pub(crate) fn run_nearby(args: NearbyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_nearby_with(args, &DefaultCafeSourceBuilder, &mut stdout)
}

pub(crate) fn run_nearby_with(
    args: NearbyArgs,
    builder: &dyn CafeSourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let source = builder.build(&config.source)?;

    let mut session = RankingSession::new();
    config.view.apply(&mut session);
    let ticket = session.begin_query(config.query.clone());
    let records = fetch_or_empty(source.as_ref(), &config.query);
    info!("fetched {} cafes", records.len());
    session.complete_query(ticket, records);

    present(&mut session, &config.view, writer)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<NearbyConfig, CliError> {
    let merged = NearbyArgs::merge_from_layers(layers).map_err(CliError::from)?;
    NearbyConfig::try_from(merged)
}
