use egui::{Color32, Context, FontFamily, FontId, Id, TextStyle};
use serde::{Deserialize, Serialize};

use crate::{Palette, StyleError};

const KEY: &str = "plot_defaults_style";

pub const DEFAULT_FONT_SIZE: f32 = 12.;

/// Relative size of [`TextStyle::Small`] text.
const SCALE_SMALL: f32 = 0.833;
/// Relative size of [`TextStyle::Heading`] text.
const SCALE_LARGE: f32 = 1.2;

/// Plot defaults passed explicitly to whatever renders the plot.
///
/// ```
/// use plot_defaults::{PlotStyle, Palette};
///
/// let style = PlotStyle::default();
/// assert_eq!(style.font_size(), 12.);
/// assert_eq!(style.palette(), &Palette::muted());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlotStyle")]
pub struct PlotStyle {
    font_size: f32,
    palette: Palette,
}

#[derive(Deserialize)]
struct RawPlotStyle {
    font_size: f32,
    palette: Palette,
}

impl TryFrom<RawPlotStyle> for PlotStyle {
    type Error = StyleError;

    fn try_from(raw: RawPlotStyle) -> Result<Self, Self::Error> {
        PlotStyle::new(raw.font_size, raw.palette)
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            palette: Palette::muted(),
        }
    }
}

impl PlotStyle {
    pub fn new(font_size: f32, palette: Palette) -> Result<Self, StyleError> {
        Ok(Self {
            font_size: validate_font_size(font_size)?,
            palette,
        })
    }

    pub fn with_font_size(mut self, font_size: f32) -> Result<Self, StyleError> {
        self.font_size = validate_font_size(font_size)?;
        Ok(self)
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Color of the categorical series at `idx`.
    pub fn series_color(&self, idx: usize) -> Color32 {
        self.palette.color(idx)
    }

    pub fn text_size(&self, text_style: &TextStyle) -> f32 {
        match text_style {
            TextStyle::Small => self.font_size * SCALE_SMALL,
            TextStyle::Heading => self.font_size * SCALE_LARGE,
            TextStyle::Body | TextStyle::Monospace | TextStyle::Button | TextStyle::Name(_) => {
                self.font_size
            }
        }
    }

    /// Font `apply_to` writes for `text_style` into `style`. Styles missing from `style`
    /// get egui's default family for that text style.
    pub fn font_id(&self, style: &egui::Style, text_style: &TextStyle) -> FontId {
        let family = match style.text_styles.get(text_style) {
            Some(font_id) => font_id.family.clone(),
            None if *text_style == TextStyle::Monospace => FontFamily::Monospace,
            None => FontFamily::Proportional,
        };
        FontId::new(self.text_size(text_style), family)
    }

    /// Rewrites the size of every text style, keeping its font family.
    pub fn apply_to(&self, style: &mut egui::Style) {
        style
            .text_styles
            .iter_mut()
            .for_each(|(text_style, font_id)| font_id.size = self.text_size(text_style));
    }

    /// Applies the style to the dark and the light theme of `ctx`.
    pub fn apply(&self, ctx: &Context) {
        log::debug!(
            "applying plot style: font size {}, palette {}",
            self.font_size,
            self.palette.name()
        );
        ctx.all_styles_mut(|style| self.apply_to(style));
    }

    /// Style persisted in the context memory, or the default when none was stored.
    pub fn load(ctx: &Context) -> Self {
        ctx.data_mut(|data| {
            data.get_persisted::<PlotStyle>(Id::new(KEY))
                .unwrap_or_default()
        })
    }

    pub fn store(self, ctx: &Context) {
        log::debug!("storing plot style with palette {}", self.palette.name());
        ctx.data_mut(|data| {
            data.insert_persisted(Id::new(KEY), self);
        });
    }
}

fn validate_font_size(font_size: f32) -> Result<f32, StyleError> {
    if font_size.is_finite() && font_size > 0. {
        Ok(font_size)
    } else {
        Err(StyleError::InvalidFontSize(font_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_validation() {
        assert!(PlotStyle::new(9.5, Palette::muted()).is_ok());

        for bad in [0., -1., f32::NAN, f32::INFINITY] {
            assert!(matches!(
                PlotStyle::default().with_font_size(bad),
                Err(StyleError::InvalidFontSize(_))
            ));
        }
    }

    #[test]
    fn test_text_sizes() {
        let style = PlotStyle::default().with_font_size(10.).unwrap();

        assert_eq!(style.text_size(&TextStyle::Body), 10.);
        assert_eq!(style.text_size(&TextStyle::Button), 10.);
        assert_eq!(style.text_size(&TextStyle::Name("axis".into())), 10.);
        assert!((style.text_size(&TextStyle::Small) - 8.33).abs() < 1e-4);
        assert!((style.text_size(&TextStyle::Heading) - 12.).abs() < 1e-4);

        let egui_style = egui::Style::default();
        assert_eq!(
            style.font_id(&egui_style, &TextStyle::Monospace),
            FontId::monospace(10.)
        );
        assert_eq!(
            style.font_id(&egui_style, &TextStyle::Name("missing".into())),
            FontId::proportional(10.)
        );
    }

    #[test]
    fn test_apply_to_keeps_families() {
        let mut egui_style = egui::Style::default();
        egui_style
            .text_styles
            .insert(TextStyle::Name("legend".into()), FontId::monospace(30.));

        PlotStyle::default().apply_to(&mut egui_style);

        let legend = &egui_style.text_styles[&TextStyle::Name("legend".into())];
        assert_eq!(legend.size, 12.);
        assert_eq!(legend.family, FontFamily::Monospace);
        assert_eq!(egui_style.text_styles[&TextStyle::Body].size, 12.);
    }

    #[test]
    fn test_font_id_matches_applied_font() {
        let mut egui_style = egui::Style::default();
        let legend = TextStyle::Name("legend".into());
        egui_style
            .text_styles
            .insert(legend.clone(), FontId::monospace(30.));

        let style = PlotStyle::default();
        let expected = style.font_id(&egui_style, &legend);
        style.apply_to(&mut egui_style);

        assert_eq!(expected, FontId::monospace(12.));
        assert_eq!(egui_style.text_styles[&legend], expected);
    }
}
