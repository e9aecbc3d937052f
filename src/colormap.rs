use egui::Color32;

use crate::Palette;

/// Discrete colormap: the unit interval split into one equal bin per color.
#[derive(Clone, Debug, PartialEq)]
pub struct ListedColormap {
    name: String,
    colors: Vec<Color32>,
}

impl ListedColormap {
    pub fn new(palette: &Palette) -> Self {
        Self {
            name: palette.name().to_owned(),
            colors: palette.colors().to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Maps `t` in `[0, 1]` to a color. Out of range values are clamped, `NaN` maps to the first color.
    pub fn sample(&self, t: f32) -> Color32 {
        if t.is_nan() {
            return self.colors[0];
        }

        let n = self.colors.len();
        let idx = (t.clamp(0., 1.) * n as f32) as usize;
        self.colors[idx.min(n - 1)]
    }
}
