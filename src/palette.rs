//! Cosmetic colors for hosts that render the snake
//!
//! The head is a fixed bright green; body segments ramp hue and lightness
//! by their index so the chain reads as a gradient. Purely presentational,
//! no gameplay effect.

/// Food marker color
pub const FOOD_RGB: (u8, u8, u8) = (255, 0, 0);
/// Head segment color
pub const HEAD_RGB: (u8, u8, u8) = (0, 255, 0);

/// HSL for a body segment; index 1 is the segment right behind the head.
/// Hue drifts from green toward blue and the lightness fades toward black
/// down the tail.
pub fn body_hsl(index: usize) -> (f32, f32, f32) {
    let i = index as f32;
    (120.0 + i * 5.0, 100.0, (50.0 - i * 2.0).max(0.0))
}

/// RGB for a body segment, for hosts with 24-bit color
pub fn body_rgb(index: usize) -> (u8, u8, u8) {
    let (h, s, l) = body_hsl(index);
    hsl_to_rgb(h, s, l)
}

/// Standard HSL to RGB conversion. Hue in degrees, saturation and
/// lightness in percent.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    let channel = |v: f32| ((v + m) * 255.0).round() as u8;
    (channel(r1), channel(g1), channel(b1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), (0, 0, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 100.0), (255, 255, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
    }

    #[test]
    fn test_body_ramp_fades_down_the_tail() {
        let (h1, _, l1) = body_hsl(1);
        let (h9, _, l9) = body_hsl(9);
        assert!(h9 > h1);
        assert!(l9 < l1);

        // Very long tails bottom out at black rather than going negative
        let (_, _, l) = body_hsl(100);
        assert_eq!(l, 0.0);
    }
}
