// Simple color struct, created from an unsigned 32 representing RRGGBBAA
// or from hue/saturation/lightness, and written out as a CSS fill style

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Hue in degrees, saturation and lightness in [0, 1]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
        let hue = hue.rem_euclid(360.0);
        let saturation = saturation.max(0.0).min(1.0);
        let lightness = lightness.max(0.0).min(1.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = lightness - chroma / 2.0;
        let to_byte = |channel: f64| ((channel + m) * 255.0).round() as u8;

        Color {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
            a: 0xff,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a as f64 / 255.0
        )
    }
}
