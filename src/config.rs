//! Declared feature lists and default file locations for each transform

use std::path::PathBuf;

/// Dataset every transform reads unless told otherwise
pub const DEFAULT_INPUT: &str = "final_df_cleaned.csv";

pub const PARALLEL_OUTPUT: &str = "parallel_coordinates_data.json";
pub const NORMALIZED_OUTPUT: &str = "processed_data.json";
pub const CORRELATION_OUTPUT: &str = "mfcc_platform_correlations.csv";

/// Features emitted, unnormalized, for the parallel-coordinates view
pub const PARALLEL_FEATURES: &[&str] = &[
    "danceability",
    "energy",
    "loudness",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "liveness",
    "valence",
    "tempo_x",
    "chroma_stft",
    "tempogram",
    "mfcc_1",
    "mfcc_2",
    "mfcc_3",
    "mfcc_4",
    "mfcc_5",
    "mfcc_6",
    "mfcc_7",
    "mfcc_8",
    "mfcc_9",
    "mfcc_10",
    "mfcc_11",
    "mfcc_12",
    "mfcc_13",
];

/// Track-level audio features
pub const AUDIO_FEATURES: &[&str] = &[
    "danceability",
    "energy",
    "key",
    "loudness",
    "mode",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "liveness",
    "valence",
    "tempo_x",
    "time_signature",
];

/// Spectral and statistical descriptors from signal analysis
pub const AUDIO_ANALYSIS_FEATURES: &[&str] = &[
    "spectral_centroid",
    "spectral_bandwidth",
    "spectral_rolloff",
    "zero_crossing_rate",
    "chroma_stft",
    "beat_strength",
    "harmonic_to_percussive_ratio",
    "speech_to_music_ratio",
];

pub const MFCC_FEATURES: &[&str] = &[
    "mfcc_1", "mfcc_2", "mfcc_3", "mfcc_4", "mfcc_5", "mfcc_6", "mfcc_7", "mfcc_8", "mfcc_9",
    "mfcc_10", "mfcc_11", "mfcc_12", "mfcc_13",
];

/// Input/output pair and feature list for one transform run
#[derive(Debug, Clone, PartialEq)]
pub struct TransformConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub features: Vec<String>,
}

impl TransformConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, features: &[&str]) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Unnormalized extraction over every row
    pub fn parallel() -> Self {
        Self::new(DEFAULT_INPUT, PARALLEL_OUTPUT, PARALLEL_FEATURES)
    }

    /// Normalized extraction over songs that hit on 5+ platforms
    pub fn normalized() -> Self {
        let features: Vec<&str> = AUDIO_FEATURES
            .iter()
            .chain(AUDIO_ANALYSIS_FEATURES)
            .copied()
            .collect();
        Self::new(DEFAULT_INPUT, NORMALIZED_OUTPUT, &features)
    }

    /// MFCC-vs-platform correlation
    pub fn correlation() -> Self {
        Self::new(DEFAULT_INPUT, CORRELATION_OUTPUT, MFCC_FEATURES)
    }

    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        if let Some(path) = input {
            self.input = path;
        }
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if let Some(path) = output {
            self.output = path;
        }
        self
    }
}
