use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visual settings for the detection overlay.
///
/// The defaults give a 70% black dim over the photo with a dashed yellow
/// box around every face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Opacity of the black backdrop fill (0.0 = no dim, 1.0 = solid black).
    pub dim_opacity: f32,
    /// Stroke color, either a named color or `#rgb` / `#rrggbb` hex.
    pub stroke_color: String,
    /// Stroke width in surface pixels.
    pub stroke_width: f32,
    /// Alternating dash/gap lengths in surface pixels. Empty means solid.
    pub dash_pattern: Vec<f32>,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            dim_opacity: 0.7,
            stroke_color: "yellow".to_string(),
            stroke_width: 3.0,
            dash_pattern: vec![5.0, 3.0],
        }
    }
}

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("dim opacity must be between 0.0 and 1.0, got {0}")]
    InvalidOpacity(f32),

    #[error("stroke width must be > 0, got {0}")]
    InvalidStrokeWidth(f32),

    #[error("unknown stroke color: {0}")]
    UnknownColor(String),

    #[error("dash pattern needs an even number of entries, got {0}")]
    OddDashPattern(usize),

    #[error("dash pattern entries must be finite, non-negative, and not all zero")]
    InvalidDashPattern,
}

/// Named colors accepted in `stroke_color`, matching the common CSS names.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("orange", [255, 165, 0]),
];

/// Parse a color name or hex string into RGB bytes.
pub fn parse_color(value: &str) -> Option<[u8; 3]> {
    let value = value.trim().to_ascii_lowercase();

    for (name, rgb) in NAMED_COLORS {
        if value == *name {
            return Some(*rgb);
        }
    }

    let hex = value.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 16 + v;
            }
            Some(rgb)
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some([r, g, b])
        }
        _ => None,
    }
}

impl OverlayStyle {
    /// Check that every field can actually be rendered.
    ///
    /// Called when a style arrives from configuration; programmatically
    /// constructed styles may skip this and fall back to defaults at draw
    /// time instead.
    pub fn validate(&self) -> Result<(), StyleError> {
        if !self.dim_opacity.is_finite() || !(0.0..=1.0).contains(&self.dim_opacity) {
            return Err(StyleError::InvalidOpacity(self.dim_opacity));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(StyleError::InvalidStrokeWidth(self.stroke_width));
        }
        if parse_color(&self.stroke_color).is_none() {
            return Err(StyleError::UnknownColor(self.stroke_color.clone()));
        }
        if !self.dash_pattern.is_empty() {
            if self.dash_pattern.len() % 2 != 0 {
                return Err(StyleError::OddDashPattern(self.dash_pattern.len()));
            }
            let mut sum = 0.0f32;
            for &len in &self.dash_pattern {
                if !len.is_finite() || len < 0.0 {
                    return Err(StyleError::InvalidDashPattern);
                }
                sum += len;
            }
            if sum <= 0.0 {
                return Err(StyleError::InvalidDashPattern);
            }
        }
        Ok(())
    }

    /// Stroke color as RGB bytes, falling back to yellow if the configured
    /// value does not parse.
    pub fn stroke_rgb(&self) -> [u8; 3] {
        parse_color(&self.stroke_color).unwrap_or([255, 255, 0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = OverlayStyle::default();
        assert_eq!(style.dim_opacity, 0.7);
        assert_eq!(style.stroke_color, "yellow");
        assert_eq!(style.stroke_width, 3.0);
        assert_eq!(style.dash_pattern, vec![5.0, 3.0]);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("yellow"), Some([255, 255, 0]));
        assert_eq!(parse_color(" Red "), Some([255, 0, 0]));
        assert_eq!(parse_color("lime"), Some([0, 255, 0]));
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#ffff00"), Some([255, 255, 0]));
        assert_eq!(parse_color("#ff0"), Some([255, 255, 0]));
        assert_eq!(parse_color("#1a2b3c"), Some([26, 43, 60]));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#gggggg"), None);
        assert_eq!(parse_color("123456"), None);
        assert_eq!(parse_color("#€abc"), None);
    }

    fn style_with(f: impl FnOnce(&mut OverlayStyle)) -> OverlayStyle {
        let mut style = OverlayStyle::default();
        f(&mut style);
        style
    }

    #[test]
    fn test_validate_rejects_bad_opacity() {
        let style = style_with(|s| s.dim_opacity = 1.5);
        assert!(matches!(
            style.validate(),
            Err(StyleError::InvalidOpacity(_))
        ));

        let style = style_with(|s| s.dim_opacity = f32::NAN);
        assert!(matches!(
            style.validate(),
            Err(StyleError::InvalidOpacity(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_stroke() {
        let style = style_with(|s| s.stroke_width = 0.0);
        assert!(matches!(
            style.validate(),
            Err(StyleError::InvalidStrokeWidth(_))
        ));

        let style = style_with(|s| s.stroke_color = "plaid".to_string());
        assert!(matches!(style.validate(), Err(StyleError::UnknownColor(_))));
    }

    #[test]
    fn test_validate_dash_pattern() {
        let style = style_with(|s| s.dash_pattern = vec![]);
        assert!(style.validate().is_ok()); // solid stroke

        let style = style_with(|s| s.dash_pattern = vec![5.0]);
        assert!(matches!(
            style.validate(),
            Err(StyleError::OddDashPattern(1))
        ));

        let style = style_with(|s| s.dash_pattern = vec![0.0, 0.0]);
        assert!(matches!(
            style.validate(),
            Err(StyleError::InvalidDashPattern)
        ));

        let style = style_with(|s| s.dash_pattern = vec![-1.0, 3.0]);
        assert!(matches!(
            style.validate(),
            Err(StyleError::InvalidDashPattern)
        ));
    }

    #[test]
    fn test_stroke_rgb_fallback() {
        assert_eq!(OverlayStyle::default().stroke_rgb(), [255, 255, 0]);

        let style = style_with(|s| s.stroke_color = "#0000ff".to_string());
        assert_eq!(style.stroke_rgb(), [0, 0, 255]);

        let style = style_with(|s| s.stroke_color = "nonsense".to_string());
        assert_eq!(style.stroke_rgb(), [255, 255, 0]);
    }
}
