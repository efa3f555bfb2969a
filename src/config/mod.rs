//! Configuration module for Spole.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    ChunkingSettings, CleaningSettings, EmbeddingSettings, GeneralSettings, QuerySettings,
    Settings,
};
