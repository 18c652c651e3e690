//! Transcoding between parsed CDL documents and standard markup formats.

pub mod toml;
pub mod yaml;
