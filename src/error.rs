use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("unknown palette name: {0:?}")]
    UnknownPalette(String),

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("invalid color string: {0:?}")]
    InvalidColor(String),

    #[error("font size must be finite and positive, got {0}")]
    InvalidFontSize(f32),

    #[error("failed to parse style config: {0}")]
    Config(#[from] toml::de::Error),
}
