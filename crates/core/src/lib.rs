//! Swingcoach Core Library
//!
//! Samples frames from a sports clip, asks a grounded Gemini model for a
//! technique review, and sorts the cited sources into videos, places and
//! coaches.

pub mod analyzer;
pub mod classifier;
pub mod coaches;
pub mod config;
pub mod error;
pub mod format;
pub mod gemini;
pub mod prompt;
pub mod provider;
pub mod sampler;
pub mod sport;
pub mod types;
pub mod video;

// Re-export commonly used items at crate root
pub use analyzer::Analyzer;
pub use classifier::{Category, classify, split_sections};
pub use coaches::{CoachDirectory, StaticCoachDirectory, compose_coaches};
pub use config::{AnalyzerConfig, ConfigError};
pub use error::{AnalysisError, Result, SampleError};
pub use format::format_report_readable;
pub use gemini::{CoachingModel, GeminiClient};
pub use provider::{Provider, ProviderConfig, ProviderError};
pub use sampler::{FrameSampler, capture_timestamps};
pub use sport::Sport;
pub use types::{
    AnalysisReport, ClassifiedResult, CoachProfile, Frame, FrameSequence, GroundingCitation,
    MapsCitation, ModelAnswer, VideoMetadata, WebCitation,
};
pub use video::{FfmpegVideo, VideoAsset};
