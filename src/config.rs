use serde::Deserialize;

use crate::{Palette, PlotStyle, StyleError, DEFAULT_FONT_SIZE};

/// Palette as written in a config file: a built-in name or a list of hex colors.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PaletteSpec {
    Named(String),
    Colors(Vec<String>),
}

impl PaletteSpec {
    pub fn resolve(&self) -> Result<Palette, StyleError> {
        match self {
            PaletteSpec::Named(name) => Palette::named(name),
            PaletteSpec::Colors(colors) => {
                let colors: Vec<&str> = colors.iter().map(String::as_str).collect();
                Palette::from_hex("custom", &colors)
            }
        }
    }
}

/// Style overrides read from TOML. Missing fields keep the defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotStyleConfig {
    pub font_size: Option<f32>,
    pub palette: Option<PaletteSpec>,
    /// Cycle the palette to this many colors
    pub n_colors: Option<usize>,
}

impl PlotStyleConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(s)?)
    }

    pub fn resolve(&self) -> Result<PlotStyle, StyleError> {
        let mut palette = match &self.palette {
            Some(spec) => spec.resolve()?,
            None => Palette::muted(),
        };
        if let Some(n) = self.n_colors {
            palette = palette.with_n_colors(n)?;
        }

        PlotStyle::new(self.font_size.unwrap_or(DEFAULT_FONT_SIZE), palette)
    }
}
