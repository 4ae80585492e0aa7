use ratatui::style::Color;

/// Page palette (dark, blue accent)
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foregrounds
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,

    // Accents
    pub accent: Color,
    pub secondary: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,

    // Globe shading, far to near
    pub globe_far: Color,
    pub globe_mid: Color,
    pub globe_near: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x0d, 0x11, 0x17),
            bg1: Color::Rgb(0x16, 0x1b, 0x22),
            bg2: Color::Rgb(0x21, 0x26, 0x2d),
            fg0: Color::Rgb(0xe6, 0xed, 0xf3),
            fg1: Color::Rgb(0xb1, 0xba, 0xc4),
            muted: Color::Rgb(0x6e, 0x76, 0x81),
            accent: Color::Rgb(0x58, 0xa6, 0xff),
            secondary: Color::Rgb(0xbc, 0x8c, 0xff),
            green: Color::Rgb(0x27, 0xca, 0x3f),
            yellow: Color::Rgb(0xff, 0xbd, 0x2e),
            red: Color::Rgb(0xff, 0x5f, 0x56),
            globe_far: Color::Rgb(0x1f, 0x3a, 0x5f),
            globe_mid: Color::Rgb(0x38, 0x6f, 0xb0),
            globe_near: Color::Rgb(0x79, 0xc0, 0xff),
        }
    }
}

impl Theme {
    /// Globe point color for a depth in `[0, 1]`
    pub fn globe_shade(&self, depth: f64) -> Color {
        if depth > 0.75 {
            self.globe_near
        } else if depth > 0.45 {
            self.globe_mid
        } else {
            self.globe_far
        }
    }
}
