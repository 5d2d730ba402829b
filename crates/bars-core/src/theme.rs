// File: crates/bars-core/src/theme.rs
// Summary: Light/Dark theming for bar colors.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Surface behind the whole chart.
    pub background: Color,
    /// Unfilled part of each bar.
    pub input_background: Color,
    /// Default bar fill when no color function is set.
    pub primary: Color,
    /// Label text.
    pub foreground: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            input_background: Color::from_argb(255, 40, 40, 45),
            primary: Color::from_argb(255, 64, 160, 255),
            foreground: Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            input_background: Color::from_argb(255, 230, 230, 235),
            primary: Color::from_argb(255, 32, 120, 200),
            foreground: Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            input_background: Color::from_argb(255, 0x07, 0x36, 0x42), // base02
            primary: Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
            foreground: Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            input_background: Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            primary: Color::from_argb(255, 0x26, 0x8b, 0xd2),
            foreground: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            input_background: Color::from_argb(255, 0x22, 0x22, 0x22),
            primary: Color::from_argb(255, 0x00, 0xaa, 0xff),
            foreground: Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
