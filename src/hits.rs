//! Cross-platform hit aggregation

use serde::Serialize;

use crate::dataset::DataPoint;
use crate::utils::AnalysisError;

/// Platform hit-flag columns, in dataset order
pub const PLATFORM_HIT_COLUMNS: [&str; 9] = [
    "Spotify_Hit",
    "YouTube_Hit",
    "TikTok_Hit",
    "Apple Music_Hit",
    "SiriusXM_Hit",
    "Deezer_Hit",
    "Amazon_Hit",
    "Pandora_Hit",
    "Shazam_Hit",
];

/// Suffix marking a platform hit-flag column
pub const HIT_SUFFIX: &str = "_Hit";

/// A song is a cross-platform hit at this many platforms
pub const HIT_THRESHOLD: u32 = 5;

/// Derived hit fields for one song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HitSummary {
    pub hit_count: u32,
    pub is_hit_5_or_more: bool,
}

/// Count the platforms a song hit on and apply the threshold
pub fn aggregate_hits<I>(flags: I) -> HitSummary
where
    I: IntoIterator<Item = bool>,
{
    let hit_count = flags.into_iter().filter(|&hit| hit).count() as u32;
    HitSummary {
        hit_count,
        is_hit_5_or_more: hit_count >= HIT_THRESHOLD,
    }
}

/// Read the nine platform flags of a row and aggregate them
pub fn hit_summary(point: &DataPoint) -> Result<HitSummary, AnalysisError> {
    let flags = PLATFORM_HIT_COLUMNS
        .iter()
        .map(|column| point.flag(column))
        .collect::<Result<Vec<bool>, _>>()?;
    Ok(aggregate_hits(flags))
}

/// Platform name for a hit-flag column, e.g. `Apple Music_Hit` -> `Apple Music`
pub fn platform_name(column: &str) -> &str {
    column.strip_suffix(HIT_SUFFIX).unwrap_or(column)
}
