use std::fmt::{self, Display};
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::{colormap::ListedColormap, StyleError};

/// Positions of the ten-color palette kept by the six-color variants.
const SIX_COLOR_INDICES: [usize; 6] = [0, 2, 3, 4, 8, 9];

const DEEP: [Color32; 10] = [
    Color32::from_rgb(76, 114, 176),  // #4C72B0
    Color32::from_rgb(221, 132, 82),  // #DD8452
    Color32::from_rgb(85, 168, 104),  // #55A868
    Color32::from_rgb(196, 78, 82),   // #C44E52
    Color32::from_rgb(129, 114, 179), // #8172B3
    Color32::from_rgb(147, 120, 96),  // #937860
    Color32::from_rgb(218, 139, 195), // #DA8BC3
    Color32::from_rgb(140, 140, 140), // #8C8C8C
    Color32::from_rgb(204, 185, 116), // #CCB974
    Color32::from_rgb(100, 181, 205), // #64B5CD
];

const MUTED: [Color32; 10] = [
    Color32::from_rgb(72, 120, 208),  // #4878D0
    Color32::from_rgb(238, 133, 74),  // #EE854A
    Color32::from_rgb(106, 204, 100), // #6ACC64
    Color32::from_rgb(214, 95, 95),   // #D65F5F
    Color32::from_rgb(149, 108, 180), // #956CB4
    Color32::from_rgb(140, 97, 60),   // #8C613C
    Color32::from_rgb(220, 126, 192), // #DC7EC0
    Color32::from_rgb(121, 121, 121), // #797979
    Color32::from_rgb(213, 187, 103), // #D5BB67
    Color32::from_rgb(130, 198, 226), // #82C6E2
];

const PASTEL: [Color32; 10] = [
    Color32::from_rgb(161, 201, 244), // #A1C9F4
    Color32::from_rgb(255, 180, 130), // #FFB482
    Color32::from_rgb(141, 229, 161), // #8DE5A1
    Color32::from_rgb(255, 159, 155), // #FF9F9B
    Color32::from_rgb(208, 187, 255), // #D0BBFF
    Color32::from_rgb(222, 187, 155), // #DEBB9B
    Color32::from_rgb(250, 176, 228), // #FAB0E4
    Color32::from_rgb(207, 207, 207), // #CFCFCF
    Color32::from_rgb(255, 254, 163), // #FFFEA3
    Color32::from_rgb(185, 242, 240), // #B9F2F0
];

const BRIGHT: [Color32; 10] = [
    Color32::from_rgb(2, 62, 255),    // #023EFF
    Color32::from_rgb(255, 124, 0),   // #FF7C00
    Color32::from_rgb(26, 201, 56),   // #1AC938
    Color32::from_rgb(232, 0, 11),    // #E8000B
    Color32::from_rgb(139, 43, 226),  // #8B2BE2
    Color32::from_rgb(159, 72, 0),    // #9F4800
    Color32::from_rgb(241, 76, 193),  // #F14CC1
    Color32::from_rgb(163, 163, 163), // #A3A3A3
    Color32::from_rgb(255, 196, 0),   // #FFC400
    Color32::from_rgb(0, 215, 255),   // #00D7FF
];

const DARK: [Color32; 10] = [
    Color32::from_rgb(0, 28, 127),   // #001C7F
    Color32::from_rgb(177, 64, 13),  // #B1400D
    Color32::from_rgb(18, 113, 28),  // #12711C
    Color32::from_rgb(140, 8, 0),    // #8C0800
    Color32::from_rgb(89, 30, 113),  // #591E71
    Color32::from_rgb(89, 47, 13),   // #592F0D
    Color32::from_rgb(162, 53, 130), // #A23582
    Color32::from_rgb(60, 60, 60),   // #3C3C3C
    Color32::from_rgb(184, 133, 10), // #B8850A
    Color32::from_rgb(0, 99, 116),   // #006374
];

const COLORBLIND: [Color32; 10] = [
    Color32::from_rgb(1, 115, 178),   // #0173B2
    Color32::from_rgb(222, 143, 5),   // #DE8F05
    Color32::from_rgb(2, 158, 115),   // #029E73
    Color32::from_rgb(213, 94, 0),    // #D55E00
    Color32::from_rgb(204, 120, 188), // #CC78BC
    Color32::from_rgb(202, 145, 97),  // #CA9161
    Color32::from_rgb(251, 175, 228), // #FBAFE4
    Color32::from_rgb(148, 148, 148), // #949494
    Color32::from_rgb(236, 225, 51),  // #ECE133
    Color32::from_rgb(86, 180, 233),  // #56B4E9
];

/// Built-in qualitative palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteName {
    Deep,
    Muted,
    Pastel,
    Bright,
    Dark,
    Colorblind,
    Deep6,
    Muted6,
    Pastel6,
    Bright6,
    Dark6,
    Colorblind6,
}

impl PaletteName {
    pub const ALL: [PaletteName; 12] = [
        PaletteName::Deep,
        PaletteName::Muted,
        PaletteName::Pastel,
        PaletteName::Bright,
        PaletteName::Dark,
        PaletteName::Colorblind,
        PaletteName::Deep6,
        PaletteName::Muted6,
        PaletteName::Pastel6,
        PaletteName::Bright6,
        PaletteName::Dark6,
        PaletteName::Colorblind6,
    ];

    /// Matches the lower-case palette name exactly.
    pub fn parse(name: &str) -> Result<Self, StyleError> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| StyleError::UnknownPalette(name.to_owned()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteName::Deep => "deep",
            PaletteName::Muted => "muted",
            PaletteName::Pastel => "pastel",
            PaletteName::Bright => "bright",
            PaletteName::Dark => "dark",
            PaletteName::Colorblind => "colorblind",
            PaletteName::Deep6 => "deep6",
            PaletteName::Muted6 => "muted6",
            PaletteName::Pastel6 => "pastel6",
            PaletteName::Bright6 => "bright6",
            PaletteName::Dark6 => "dark6",
            PaletteName::Colorblind6 => "colorblind6",
        }
    }

    pub fn colors(self) -> Vec<Color32> {
        let (base, six) = match self {
            PaletteName::Deep => (&DEEP, false),
            PaletteName::Muted => (&MUTED, false),
            PaletteName::Pastel => (&PASTEL, false),
            PaletteName::Bright => (&BRIGHT, false),
            PaletteName::Dark => (&DARK, false),
            PaletteName::Colorblind => (&COLORBLIND, false),
            PaletteName::Deep6 => (&DEEP, true),
            PaletteName::Muted6 => (&MUTED, true),
            PaletteName::Pastel6 => (&PASTEL, true),
            PaletteName::Bright6 => (&BRIGHT, true),
            PaletteName::Dark6 => (&DARK, true),
            PaletteName::Colorblind6 => (&COLORBLIND, true),
        };

        if six {
            SIX_COLOR_INDICES.iter().map(|&i| base[i]).collect()
        } else {
            base.to_vec()
        }
    }
}

impl Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteName {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Ordered sequence of colors assigned to categorical series. Never empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPalette")]
pub struct Palette {
    name: String,
    colors: Vec<Color32>,
}

#[derive(Deserialize)]
struct RawPalette {
    name: String,
    colors: Vec<Color32>,
}

impl TryFrom<RawPalette> for Palette {
    type Error = StyleError;

    fn try_from(raw: RawPalette) -> Result<Self, Self::Error> {
        Palette::from_colors(raw.name, raw.colors)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::muted()
    }
}

impl From<PaletteName> for Palette {
    fn from(name: PaletteName) -> Self {
        log::trace!("resolved palette {name}");
        Self {
            name: name.as_str().to_owned(),
            colors: name.colors(),
        }
    }
}

impl Palette {
    pub fn muted() -> Self {
        Self::from(PaletteName::Muted)
    }

    pub fn named(name: &str) -> Result<Self, StyleError> {
        PaletteName::parse(name).map(Self::from)
    }

    pub fn from_colors(name: impl Into<String>, colors: Vec<Color32>) -> Result<Self, StyleError> {
        if colors.is_empty() {
            return Err(StyleError::EmptyPalette);
        }

        Ok(Self {
            name: name.into(),
            colors,
        })
    }

    /// Builds a palette from `#RRGGBB` or `#RRGGBBAA` strings. Short forms are rejected.
    pub fn from_hex(name: impl Into<String>, hex: &[&str]) -> Result<Self, StyleError> {
        let colors = hex
            .iter()
            .map(|&s| parse_hex(s))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_colors(name, colors)
    }

    /// Repeats the palette cyclically until it holds exactly `n` colors.
    pub fn with_n_colors(&self, n: usize) -> Result<Self, StyleError> {
        let colors = self.colors.iter().cycle().take(n).copied().collect();
        Self::from_colors(self.name.clone(), colors)
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

    /// Color for the series at `idx`, wrapping around the palette.
    pub fn color(&self, idx: usize) -> Color32 {
        self.colors[idx % self.colors.len()]
    }

    pub fn as_cmap(&self) -> ListedColormap {
        ListedColormap::new(self)
    }
}

fn parse_hex(s: &str) -> Result<Color32, StyleError> {
    if !matches!(s.len(), 7 | 9) {
        return Err(StyleError::InvalidColor(s.to_owned()));
    }
    Color32::from_hex(s).map_err(|_| StyleError::InvalidColor(s.to_owned()))
}
