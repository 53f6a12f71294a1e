//! Color values for knob tinting and title colors
//!
//! Hosts express accent colors in hue/saturation/brightness terms, so the
//! constructor mirrors that and converts to RGBA8.

/// An RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque white, used as the title-color fallback on hosts without tint support
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Create a color from hue/saturation/brightness/alpha components.
    ///
    /// All components are in `0.0..=1.0`; hue values outside that range wrap
    /// around the color wheel. Out-of-range saturation, brightness, and alpha
    /// are clamped.
    pub fn from_hsba(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        let s = saturation.clamp(0.0, 1.0);
        let v = brightness.clamp(0.0, 1.0);

        if s <= f32::EPSILON {
            let gray = channel(v);
            return Self {
                r: gray,
                g: gray,
                b: gray,
                a: channel(alpha),
            };
        }

        let h = hue.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "sector is floor(h * 6) with h in 0..1, so it fits in u8"
        )]
        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: channel(alpha),
        }
    }
}

/// Convert a unit-interval channel value to an 8-bit channel
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=1 before scaling, so the product fits in u8"
)]
fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
