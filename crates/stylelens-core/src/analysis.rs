use serde::{Deserialize, Serialize};

/// Structured judgment returned by the analysis service for one submitted
/// image. Never mutated after receipt; the session replaces or clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Style rating on a 0-10 scale.
    pub rating: f64,
    pub color_analysis: ColorAnalysis,
    pub skin_tone_analysis: SkinToneAnalysis,
    /// Human-readable improvement suggestions, in service order.
    pub suggestions: Vec<String>,
    /// Colors the service proposes trying instead, in service order.
    pub alternative_colors: Vec<String>,
    /// Compatibility palettes for the detected skin tone. Older service
    /// builds omit this field.
    #[serde(default)]
    pub color_compatibility: Option<ColorCompatibility>,
}

impl AnalysisResult {
    /// Rating as a fraction of the 0-10 scale, clamped for display bars.
    pub fn rating_fraction(&self) -> f32 {
        (self.rating / 10.0).clamp(0.0, 1.0) as f32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAnalysis {
    /// Most common outfit colors, ordered by prominence (up to five).
    pub primary_colors: Vec<String>,
    pub dominant_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinToneAnalysis {
    /// Label such as "Light" or "Medium"; treated as an opaque string.
    pub tone: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCompatibility {
    pub complementary_colors: Vec<String>,
    pub avoid_colors: Vec<String>,
}

/// Parse a `#rrggbb` color string into RGB components.
///
/// The service emits lowercase hex but uppercase is accepted. Returns `None`
/// for anything else so callers can fall back to a neutral swatch instead of
/// failing the whole render.
pub fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}
