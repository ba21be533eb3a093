use serde::{Deserialize, Deserializer, Serialize, de};

/// An opaque RGB color with integer channels.
///
/// Theme colors are resolved into this type once per document; the drawing
/// layer converts it into the unit range the PDF operators expect.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Channels scaled to `0.0..=1.0` for the `rg`/`RG` operators.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Mixes the color towards white. `amount` is clamped to `0.0..=1.0`.
    pub fn lighten(self, amount: f32) -> Self {
        let t = amount.clamp(0.0, 1.0);
        let mix = |c: u8| (c as f32 + (255.0 - c as f32) * t).round() as u8;
        Self::rgb(mix(self.r), mix(self.g), mix(self.b))
    }

    /// Mixes the color towards black. `amount` is clamped to `0.0..=1.0`.
    pub fn darken(self, amount: f32) -> Self {
        let t = 1.0 - amount.clamp(0.0, 1.0);
        let mix = |c: u8| (c as f32 * t).round() as u8;
        Self::rgb(mix(self.r), mix(self.g), mix(self.b))
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;

        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color { r, g, b })
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color { r, g, b })
            }
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_long_and_short() {
        assert_eq!(Color::parse_hex("#10b981"), Ok(Color::rgb(16, 185, 129)));
        assert_eq!(Color::parse_hex("#fff"), Ok(Color::WHITE));
        assert!(Color::parse_hex("10b981").is_err());
        assert!(Color::parse_hex("#12345").is_err());
    }

    #[test]
    fn test_lighten_and_darken_stay_in_range() {
        let c = Color::rgb(16, 185, 129);
        assert_eq!(c.lighten(1.0), Color::WHITE);
        assert_eq!(c.darken(1.0), Color::BLACK);
        assert_eq!(c.lighten(0.0), c);
        assert_eq!(c.lighten(7.0), Color::WHITE);
    }

    #[test]
    fn test_deserialize_map_form() {
        let c: Color = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
        assert_eq!(c, Color::rgb(1, 2, 3));
    }
}
