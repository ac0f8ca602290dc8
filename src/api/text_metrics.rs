use serde::{Deserialize, Serialize};

/// Font selection used for tick labels and unit captions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
}

impl FontSpec {
    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("sans", 10.0)
    }
}

/// Measured extents of a rendered string, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBounds {
    pub width: f64,
    pub height: f64,
    pub descent: f64,
}

impl TextBounds {
    #[must_use]
    pub const fn new(width: f64, height: f64, descent: f64) -> Self {
        Self {
            width,
            height,
            descent,
        }
    }
}

/// Glyph-metrics collaborator.
///
/// Margin computation and label placement only ever ask this trait how large
/// a string is, so hosts can plug in real font shaping.
pub trait TextMeasurer {
    /// `rotated` measures text drawn bottom-to-top, i.e. width and height
    /// trade places.
    fn measure(&self, text: &str, font: &FontSpec, rotated: bool) -> TextBounds;
}

/// Deterministic measurer based on average glyph advances.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl EstimatedTextMeasurer {
    #[must_use]
    pub fn estimate_width(text: &str, font_size_px: f64) -> f64 {
        let font_size_px = if font_size_px.is_finite() && font_size_px > 0.0 {
            font_size_px
        } else {
            10.0
        };
        let em_units: f64 = text
            .chars()
            .map(|ch| match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            })
            .sum();
        em_units * font_size_px
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec, rotated: bool) -> TextBounds {
        let width = Self::estimate_width(text, font.size_px);
        let height = font.size_px * 1.2;
        let descent = font.size_px * 0.2;
        if rotated {
            TextBounds::new(height, width, descent)
        } else {
            TextBounds::new(width, height, descent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn digits_are_wider_than_separators() {
        let digits = EstimatedTextMeasurer::estimate_width("00", 10.0);
        let separators = EstimatedTextMeasurer::estimate_width("..", 10.0);
        assert_relative_eq!(digits, 12.4, epsilon = 1e-9);
        assert_relative_eq!(separators, 6.8, epsilon = 1e-9);
    }

    #[test]
    fn rotation_swaps_extents() {
        let font = FontSpec::default();
        let flat = EstimatedTextMeasurer.measure("1.0", &font, false);
        let rotated = EstimatedTextMeasurer.measure("1.0", &font, true);
        assert_relative_eq!(flat.width, rotated.height);
        assert_relative_eq!(flat.height, rotated.width);
    }
}
