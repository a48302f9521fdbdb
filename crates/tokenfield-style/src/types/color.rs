//! Colors, corner radii and box shadows.

/// An RGBA color with premultiplied alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    ///
    /// Note: This expects premultiplied alpha. Use [`from_rgba`](Self::from_rgba)
    /// for non-premultiplied input.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from non-premultiplied RGBA components.
    #[inline]
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r * a,
            g: g * a,
            b: b * a,
            a,
        }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from hue (degrees), saturation and lightness (0.0-1.0)
    /// and non-premultiplied alpha.
    pub fn from_hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 360.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let channel = |n: f32| {
            let k = (n + h * 12.0) % 12.0;
            let a = s * l.min(1.0 - l);
            l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        Self::from_rgba(channel(0.0), channel(8.0), channel(4.0), alpha.clamp(0.0, 1.0))
    }

    /// Create a color from a hex string: `#rgb`, `#rgba`, `#rrggbb` or
    /// `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let expanded: String;
        let hex = match hex.len() {
            3 | 4 => {
                expanded = hex.chars().flat_map(|c| [c, c]).collect();
                expanded.as_str()
            }
            6 | 8 => hex,
            _ => return None,
        };

        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        let a = if hex.len() == 8 { channel(6)? } else { 255 };

        Some(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        if self.a == 0.0 {
            return Self::new(0.0, 0.0, 0.0, alpha);
        }
        // Unpremultiply, then repremultiply with new alpha
        let factor = alpha / self.a;
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: alpha,
        }
    }

    /// Linear interpolation between two colors.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Convert to a hex string, omitting alpha when opaque.
    pub fn to_hex(self) -> String {
        let unpremultiply = |c: f32| {
            if self.a == 0.0 { 0.0 } else { c / self.a }
        };
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;

        let r = byte(unpremultiply(self.r));
        let g = byte(unpremultiply(self.g));
        let b = byte(unpremultiply(self.b));
        let a = byte(self.a);

        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::from_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);
}

/// Corner radii for rounded rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Create corner radii with the same value for all corners.
    #[inline]
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Zero radii (sharp corners).
    pub const ZERO: Self = Self::uniform(0.0);

    /// Check if all radii are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }
}

/// A CSS box shadow.
///
/// # Example
///
/// ```
/// use tokenfield_style::prelude::{BoxShadow, Color};
///
/// // Focus glow: no offset, 5px blur, no spread
/// let glow = BoxShadow::new(Color::from_rgba(0.0, 0.5, 1.0, 0.5)).with_blur(5.0);
/// assert_eq!(glow.spread_radius, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    /// Shadow color (with alpha for transparency).
    pub color: Color,
    /// Horizontal offset in pixels. Positive moves shadow right.
    pub offset_x: f32,
    /// Vertical offset in pixels. Positive moves shadow down.
    pub offset_y: f32,
    /// Blur radius in pixels.
    pub blur_radius: f32,
    /// Spread radius in pixels.
    pub spread_radius: f32,
    /// Whether this is an inset (inner) shadow.
    pub inset: bool,
}

impl BoxShadow {
    /// Create a new box shadow with the given color.
    ///
    /// Default values: no offset, no blur, no spread, outer shadow.
    #[inline]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            offset_x: 0.0,
            offset_y: 0.0,
            blur_radius: 0.0,
            spread_radius: 0.0,
            inset: false,
        }
    }

    /// Set the shadow offset.
    #[inline]
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Set the blur radius.
    #[inline]
    pub fn with_blur(mut self, radius: f32) -> Self {
        self.blur_radius = radius.max(0.0);
        self
    }

    /// Set the spread radius.
    #[inline]
    pub fn with_spread(mut self, radius: f32) -> Self {
        self.spread_radius = radius;
        self
    }

    /// Make this an inset (inner) shadow.
    #[inline]
    pub fn inset(mut self) -> Self {
        self.inset = true;
        self
    }

    /// The same shadow with a fully transparent color and no extent.
    ///
    /// This is the interpolation partner for `box-shadow: none`.
    pub fn transparent_of(&self) -> Self {
        Self {
            color: Color::TRANSPARENT,
            offset_x: 0.0,
            offset_y: 0.0,
            blur_radius: 0.0,
            spread_radius: 0.0,
            inset: self.inset,
        }
    }

    /// Interpolate every numeric component.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            color: self.color.lerp(other.color, t),
            offset_x: mix(self.offset_x, other.offset_x),
            offset_y: mix(self.offset_y, other.offset_y),
            blur_radius: mix(self.blur_radius, other.blur_radius),
            spread_radius: mix(self.spread_radius, other.spread_radius),
            inset: other.inset,
        }
    }
}
