//! Filter options shared by the subcommands and the text/JSON renderers.

use std::io::Write;
use std::str::FromStr;

use serde::Serialize;
use vibe_core::{
    CafeDetail, CafeId, CafeRecord, PreferenceSet, Purpose, RankingSession, highlights,
    preference_config,
};
use vibe_data::source::CafePayload;

use crate::{ARG_PREFER, ARG_PURPOSE, CliError};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Human-readable list and detail panel.
    #[default]
    Text,
    /// Machine-readable JSON document.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CliError::UnknownFormat {
                value: s.to_owned(),
            }),
        }
    }
}

/// Resolved filter and presentation options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ViewOptions {
    pub(crate) purpose: Purpose,
    pub(crate) preferences: PreferenceSet,
    pub(crate) format: OutputFormat,
    pub(crate) detail: Option<CafeId>,
}

impl ViewOptions {
    /// Parse the raw option strings merged from CLI, env and files.
    pub(crate) fn parse(
        purpose: Option<&str>,
        prefer: Option<&str>,
        format: Option<&str>,
        detail: Option<&str>,
    ) -> Result<Self, CliError> {
        let purpose = purpose
            .map(str::parse::<Purpose>)
            .transpose()
            .map_err(|source| CliError::InvalidVibeOption {
                field: ARG_PURPOSE,
                source,
            })?
            .unwrap_or_default();
        let preferences = prefer
            .map(str::parse::<PreferenceSet>)
            .transpose()
            .map_err(|source| CliError::InvalidVibeOption {
                field: ARG_PREFER,
                source,
            })?
            .unwrap_or_default();
        let format = format
            .map(str::parse::<OutputFormat>)
            .transpose()?
            .unwrap_or_default();
        let detail = detail.map(|id| id.parse::<CafeId>().unwrap_or_else(|never| match never {}));
        Ok(Self {
            purpose,
            preferences,
            format,
            detail,
        })
    }

    /// Push the filter state into `session`.
    pub(crate) fn apply(&self, session: &mut RankingSession) {
        session.set_purpose(self.purpose);
        session.set_preferences(self.preferences.clone());
    }
}

/// Rank the session's records and write them in the requested format.
pub(crate) fn present(
    session: &mut RankingSession,
    options: &ViewOptions,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let detail = options
        .detail
        .as_ref()
        .map(|id| {
            if session.select(id) {
                Ok(session.selected().map(CafeDetail::from_record))
            } else {
                Err(CliError::UnknownCafe { id: id.to_string() })
            }
        })
        .transpose()?
        .flatten();
    let total = session.records().len();
    let purpose = session.purpose();
    let preferences = session.preferences().clone();
    let ranked = session.ranked();

    match options.format {
        OutputFormat::Text => {
            write_text(writer, &ranked, total, purpose, &preferences, detail.as_ref())
                .map_err(CliError::WriteOutput)
        }
        OutputFormat::Json => write_json(writer, &ranked, purpose, &preferences, detail.as_ref()),
    }
}

fn heading(count: usize, total: usize, purpose: Purpose, preferences: &PreferenceSet) -> String {
    let order = preferences.primary().map_or_else(
        || "in source order".to_owned(),
        |primary| format!("sorted by {}", preference_config(primary).label),
    );
    format!(
        "{count} of {total} cafes for {}, {order}",
        purpose.label()
    )
}

fn card_line(position: usize, cafe: &CafeRecord) -> String {
    let mut line = format!("{position:>2}. {}", cafe.name);
    if let Some(distance) = cafe.distance_km {
        line.push_str(&format!("  {distance:.2} km"));
    }
    if let Some(rating) = cafe.rating {
        line.push_str(&format!("  rating {rating:.1}"));
    }
    let labels: Vec<&str> = cafe
        .vibes
        .as_ref()
        .map(|vibes| highlights(vibes).iter().map(|h| h.label).collect())
        .unwrap_or_default();
    if !labels.is_empty() {
        line.push_str(&format!("  [{}]", labels.join(", ")));
    }
    line
}

fn write_text(
    writer: &mut dyn Write,
    ranked: &[&CafeRecord],
    total: usize,
    purpose: Purpose,
    preferences: &PreferenceSet,
    detail: Option<&CafeDetail>,
) -> std::io::Result<()> {
    writeln!(writer, "{}", heading(ranked.len(), total, purpose, preferences))?;
    if ranked.is_empty() {
        writeln!(writer, "No cafes match.")?;
    }
    for (position, cafe) in (1..).zip(ranked) {
        writeln!(writer, "{}", card_line(position, cafe))?;
    }
    if let Some(detail) = detail {
        writeln!(writer)?;
        write_detail(writer, detail)?;
    }
    Ok(())
}

/// Write the profile panel for one café.
pub(crate) fn write_detail(writer: &mut dyn Write, detail: &CafeDetail) -> std::io::Result<()> {
    writeln!(writer, "{}", detail.name)?;
    if let Some(address) = &detail.address {
        writeln!(writer, "{address}")?;
    }
    let mut facts = Vec::new();
    if let Some(distance) = detail.distance_km {
        facts.push(format!("{distance:.2} km away"));
    }
    if let Some(rating) = detail.rating {
        facts.push(format!("rating {rating:.1}"));
    }
    if !facts.is_empty() {
        writeln!(writer, "{}", facts.join(", "))?;
    }
    if !detail.best_for.is_empty() {
        writeln!(writer, "Best for: {}", detail.best_for.join(", "))?;
    }
    if let Some(summary) = &detail.summary {
        writeln!(writer, "{summary}")?;
    }
    let badges: Vec<String> = detail
        .badges
        .iter()
        .map(|badge| format!("{}: {}", badge.label, badge.value))
        .collect();
    writeln!(writer, "{}", badges.join(" | "))?;
    writeln!(writer, "Time limit: {}", detail.time_limit)?;
    writeln!(writer, "Seating: {}", detail.seating_tip)?;
    writeln!(writer, "Crowd: {}", detail.crowd)?;
    writeln!(writer, "Map: {}", detail.maps_url)
}

#[derive(Debug, Serialize)]
struct RankedCafe {
    #[serde(flatten)]
    cafe: CafePayload,
    highlights: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct BadgeView<'a> {
    label: &'static str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct DetailView<'a> {
    name: &'a str,
    address: Option<&'a str>,
    distance_km: Option<f64>,
    rating: Option<f64>,
    best_for: &'a [String],
    summary: Option<&'a str>,
    badges: Vec<BadgeView<'a>>,
    time_limit: &'static str,
    seating_tip: &'a str,
    crowd: &'a str,
    maps_url: &'a str,
}

impl<'a> From<&'a CafeDetail> for DetailView<'a> {
    fn from(detail: &'a CafeDetail) -> Self {
        Self {
            name: &detail.name,
            address: detail.address.as_deref(),
            distance_km: detail.distance_km,
            rating: detail.rating,
            best_for: &detail.best_for,
            summary: detail.summary.as_deref(),
            badges: detail
                .badges
                .iter()
                .map(|badge| BadgeView {
                    label: badge.label,
                    value: &badge.value,
                })
                .collect(),
            time_limit: detail.time_limit,
            seating_tip: &detail.seating_tip,
            crowd: &detail.crowd,
            maps_url: &detail.maps_url,
        }
    }
}

#[derive(Debug, Serialize)]
struct RankedOutput<'a> {
    purpose: &'static str,
    preferences: Vec<&'static str>,
    cafes: Vec<RankedCafe>,
    detail: Option<DetailView<'a>>,
}

fn write_json(
    writer: &mut dyn Write,
    ranked: &[&CafeRecord],
    purpose: Purpose,
    preferences: &PreferenceSet,
    detail: Option<&CafeDetail>,
) -> Result<(), CliError> {
    let output = RankedOutput {
        purpose: purpose.as_str(),
        preferences: preferences.iter().map(|p| p.as_str()).collect(),
        cafes: ranked
            .iter()
            .map(|cafe| RankedCafe {
                cafe: CafePayload::from(*cafe),
                highlights: cafe
                    .vibes
                    .as_ref()
                    .map(|vibes| highlights(vibes).iter().map(|h| h.label).collect())
                    .unwrap_or_default(),
            })
            .collect(),
        detail: detail.map(DetailView::from),
    };
    let payload = serde_json::to_string_pretty(&output).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
