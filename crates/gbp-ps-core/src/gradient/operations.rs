use crate::gradient::errors::GradientError;
use crate::gradient::types::Color;

/// Parse a gradient payload: a JSON array of colour strings, in phase order.
pub fn parse_gradient_payload(payload: &str) -> Result<Vec<Color>, GradientError> {
    let raw: Vec<String> =
        serde_json::from_str(payload).map_err(|e| GradientError::InvalidPayload {
            message: e.to_string(),
        })?;

    parse_colors(&raw)
}

/// Parse a list of colour strings, failing on the first invalid entry.
pub fn parse_colors(raw: &[String]) -> Result<Vec<Color>, GradientError> {
    raw.iter().map(|color| color.parse()).collect()
}

/// Linear RGB interpolation of `count` colours from `start` to `end` inclusive.
pub fn gradient_colors(start: Color, end: Color, count: usize) -> Vec<Color> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let steps = (count - 1) as f64;
            (0..count)
                .map(|i| {
                    let t = i as f64 / steps;
                    Color::rgb(
                        lerp(start.r, end.r, t),
                        lerp(start.g, end.g, t),
                        lerp(start.b, end.b, t),
                    )
                })
                .collect()
        }
    }
}

fn lerp(from: u8, to: u8, t: f64) -> u8 {
    let value = from as f64 + (to as f64 - from as f64) * t;
    value.round().clamp(0.0, 255.0) as u8
}
