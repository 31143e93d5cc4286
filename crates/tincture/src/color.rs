use crate::hsluv::{hsluv_to_rgb, rgb_to_hsluv};
use crate::hsv::{hsv_to_rgb, normalize_hue, rgb_to_hsv};

/// RGBA color with channels nominally in [0, 1]
///
/// Channels are not clamped on construction, so a color may briefly leave
/// [0, 1] (e.g. after [`Color::lighten`]). The packed forms clamp before
/// quantizing.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Color from 8-bit channels (0-255), each divided by 255
    #[inline]
    pub const fn int_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn int_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::int_rgba(r, g, b, 255)
    }

    /// Gray with every color channel set to `lightness`
    pub const fn lightness_alpha(lightness: f32, a: f32) -> Self {
        Self::rgba(lightness, lightness, lightness, a)
    }

    pub const fn lightness(lightness: f32) -> Self {
        Self::lightness_alpha(lightness, 1.0)
    }

    /// Hue in degrees, saturation and value in [0, 1]
    pub fn hsva(h: f32, s: f32, v: f32, a: f32) -> Self {
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Self::rgba(r, g, b, a)
    }

    pub fn hsv(h: f32, s: f32, v: f32) -> Self {
        Self::hsva(h, s, v, 1.0)
    }

    /// Hue in degrees, saturation and lightness in [0, 100]
    pub fn hsluva(h: f64, s: f64, l: f64, a: f32) -> Self {
        let (r, g, b) = hsluv_to_rgb(h, s, l);
        Self::rgba(r, g, b, a)
    }

    pub fn hsluv(h: f64, s: f64, l: f64) -> Self {
        Self::hsluva(h, s, l, 1.0)
    }

    /// with alpha builder method
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// HSV hue in degrees, alpha is ignored
    pub fn hue(&self) -> f32 {
        rgb_to_hsv(self.r, self.g, self.b).0
    }

    pub fn to_hsv(&self) -> (f32, f32, f32) {
        rgb_to_hsv(self.r, self.g, self.b)
    }

    pub fn to_hsluv(&self) -> (f64, f64, f64) {
        rgb_to_hsluv(self.r, self.g, self.b)
    }

    /// Copy with every channel clamped to [0, 1]
    pub fn clamped(self) -> Self {
        Self::rgba(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Linearly interpolate all four channels towards `other`
    ///
    /// `t` is clamped to [0, 1].
    pub fn mix(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Shift hue, saturation and value in HSV space
    ///
    /// Hue wraps around 360 degrees, saturation and value are clamped to [0, 1].
    pub fn shift(self, dh: f32, ds: f32, dv: f32) -> Self {
        let (h, s, v) = self.to_hsv();

        Self::hsva(
            normalize_hue(h + dh),
            (s + ds).clamp(0.0, 1.0),
            (v + dv).clamp(0.0, 1.0),
            self.a,
        )
    }

    /// Darken for negative `amount`, [`Color::lighten`] otherwise
    pub fn shade(self, amount: f32) -> Self {
        if amount < 0.0 {
            return self.darken(-amount);
        }

        self.lighten(amount)
    }

    /// Darken for negative `amount`, [`Color::lighten2`] otherwise
    pub fn shade2(self, amount: f32) -> Self {
        if amount < 0.0 {
            return self.darken(-amount);
        }

        self.lighten2(amount)
    }

    /// Perceptual counterpart of [`Color::shade`] working on HSLuv lightness
    pub fn shade_hsluv(self, amount: f32) -> Self {
        if amount < 0.0 {
            return self.darken_hsluv(-amount);
        }

        self.lighten_hsluv(amount)
    }

    /// Divide the color channels by `max(1, 1 + amount)`
    ///
    /// Negative amounts leave the color unchanged. Alpha is untouched.
    pub fn darken(self, amount: f32) -> Self {
        let scale = (1.0 + amount).max(1.0);
        Self::rgba(self.r / scale, self.g / scale, self.b / scale, self.a)
    }

    /// Multiply the color channels by `max(1, 1 + amount)`
    ///
    /// The result is not clamped and may exceed 1.
    pub fn lighten(self, amount: f32) -> Self {
        let scale = (1.0 + amount).max(1.0);
        Self::rgba(self.r * scale, self.g * scale, self.b * scale, self.a)
    }

    /// Softer lighten: a multiplicative lift plus an additive one, capped at 1
    pub fn lighten2(self, amount: f32) -> Self {
        let amount = amount * 0.5;
        let scale = 1.0 + 0.5 * amount;

        Self::rgba(
            (self.r * scale + amount).min(1.0),
            (self.g * scale + amount).min(1.0),
            (self.b * scale + amount).min(1.0),
            self.a,
        )
    }

    /// Scale HSLuv lightness by `min(0, 1 - amount)`
    ///
    /// Any non-negative `amount` collapses lightness to zero or below, so the
    /// result is black. This is very likely meant to be `max(0, 1 - amount)`;
    /// kept as is until the intended curve is confirmed.
    pub fn darken_hsluv(self, amount: f32) -> Self {
        let scale = (1.0 - amount).min(0.0) as f64;
        let (h, s, l) = self.to_hsluv();

        Self::hsluva(h, s, l * scale, self.a)
    }

    /// Pull HSLuv lightness towards 100 proportionally to `amount`
    pub fn lighten_hsluv(self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsluv();

        Self::hsluva(h, s, 100.0 - (100.0 - l) * (1.0 - amount) as f64, self.a)
    }

    /// Pack into a 32-bit word laid out as `A<<24 | B<<16 | G<<8 | R`
    ///
    /// Channels are clamped to [0, 1] and rounded to 8 bits.
    pub fn pack_int(&self) -> u32 {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;

        let (r, g, b, a) = (
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        );

        a << 24 | b << 16 | g << 8 | r
    }

    /// The packed word's bits reinterpreted as an `f32`
    ///
    /// Receivers must reinterpret the bits, not read the value numerically.
    pub fn pack_float(&self) -> f32 {
        f32::from_bits(self.pack_int())
    }

    pub fn to_vec4(&self) -> glam::Vec4 {
        glam::Vec4::new(self.r, self.g, self.b, self.a)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for glam::Vec4 {
    fn from(color: Color) -> Self {
        color.to_vec4()
    }
}

impl From<glam::Vec4> for Color {
    fn from(v: glam::Vec4) -> Self {
        Self::rgba(v.x, v.y, v.z, v.w)
    }
}
