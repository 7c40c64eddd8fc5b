//! `rank` command: rank a saved `/cafes` response offline.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use vibe_core::RankingSession;
use vibe_data::read_cafes;

use crate::fs::require_existing_file;
use crate::render::{ViewOptions, present};
use crate::{
    ARG_DETAIL, ARG_FORMAT, ARG_PREFER, ARG_PURPOSE, ARG_RANK_INPUT, CliError, ENV_RANK_INPUT,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Rank cafe records stored in a JSON file that uses the \
                 backend's /cafes response format. Useful for trying filter \
                 combinations without a running backend.",
    about = "Rank cafes from a saved JSON snapshot"
)]
#[ortho_config(prefix = "VIBE_RADAR")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of café records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
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

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Snapshot to rank.
    pub(crate) input: Utf8PathBuf,
    /// Filter and output options.
    pub(crate) view: ViewOptions,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing_file(&self.input, ARG_RANK_INPUT)
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_RANK_INPUT,
            env: ENV_RANK_INPUT,
        })?;
        let view = ViewOptions::parse(
            args.purpose.as_deref(),
            args.prefer.as_deref(),
            args.format.as_deref(),
            args.detail.as_deref(),
        )?;
        Ok(Self { input, view })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let records = read_cafes(&config.input)?;

    let mut session = RankingSession::new();
    config.view.apply(&mut session);
    session.replace_records(records);
    present(&mut session, &config.view, writer)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
