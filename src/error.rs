use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur when parsing a maze layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,

    #[error("layout row {row} has width {got}, expected {expected}")]
    Ragged {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("unrecognized layout character '{0}'")]
    UnknownTile(char),

    #[error("layout has no player spawn ('P')")]
    NoPlayerSpawn,

    #[error("layout has more than one player spawn")]
    MultiplePlayerSpawns,

    #[error("layout has no pellets")]
    NoPellets,
}
