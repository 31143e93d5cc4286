//! HSLuv conversions.
//!
//! HSLuv is a cylindrical form of CIELUV where saturation is expressed as a
//! percentage of the most chroma the sRGB gamut can hold at a given hue and
//! lightness. Hue is in degrees `[0, 360)`, saturation and lightness are in
//! `[0, 100]`.
//!
//! The pipeline is `sRGB <-> linear RGB <-> XYZ <-> LUV <-> LCh <-> HSLuv`,
//! computed in `f64` and using the D65 reference white.

use std::f64::consts::PI;

/// Linear RGB from XYZ (sRGB primaries, D65)
const M: [[f64; 3]; 3] = [
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
];

/// XYZ from linear RGB (sRGB primaries, D65)
const M_INV: [[f64; 3]; 3] = [
    [0.41239079926595, 0.35758433938387, 0.18048078840183],
    [0.21263900587151, 0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966],
];

/// u' and v' chromaticity of the D65 white point
const REF_U: f64 = 0.19783000664283;
const REF_V: f64 = 0.46831999493879;

/// CIE constants, (29/3)^3 and (6/29)^3
const KAPPA: f64 = 903.2962962;
const EPSILON: f64 = 0.0088564516;

/// Lightness thresholds that snap to pure black / white
const L_MIN: f64 = 1e-8;
const L_MAX: f64 = 99.9999999;

/// A line `y = slope * x + intercept` in the (u, v) chroma plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    /// Distance from the origin along the ray at `theta` (radians) to this line
    ///
    /// Negative when the ray points away from the line.
    fn ray_length(&self, theta: f64) -> f64 {
        self.intercept / (theta.sin() - self.slope * theta.cos())
    }
}

/// Convert sRGB channels in `[0, 1]` to `(hue, saturation, lightness)`
pub fn rgb_to_hsluv(r: f32, g: f32, b: f32) -> (f64, f64, f64) {
    let xyz = rgb_to_xyz([r as f64, g as f64, b as f64]);
    let (l, u, v) = xyz_to_luv(xyz);
    let (l, c, h) = luv_to_lch(l, u, v);
    lch_to_hsluv(l, c, h)
}

/// Convert `(hue, saturation, lightness)` to sRGB channels clamped to `[0, 1]`
pub fn hsluv_to_rgb(h: f64, s: f64, l: f64) -> (f32, f32, f32) {
    let (l, c, h) = hsluv_to_lch(h, s, l);
    let (l, u, v) = lch_to_luv(l, c, h);
    let [r, g, b] = xyz_to_rgb(luv_to_xyz(l, u, v));

    (
        r.clamp(0.0, 1.0) as f32,
        g.clamp(0.0, 1.0) as f32,
        b.clamp(0.0, 1.0) as f32,
    )
}

/// The six sRGB gamut boundary lines in the chroma plane at lightness `l`
///
/// Each RGB channel contributes two lines, one where it reaches 0 and one
/// where it reaches 1.
pub fn bounds(l: f64) -> [Line; 6] {
    let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut lines = [Line {
        slope: 0.0,
        intercept: 0.0,
    }; 6];

    for (channel, [m1, m2, m3]) in M.iter().copied().enumerate() {
        for (edge, t) in [0.0, 1.0].into_iter().enumerate() {
            let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
            let top2 = (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1) * l * sub2
                - 769_860.0 * t * l;
            let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * t;

            lines[channel * 2 + edge] = Line {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }

    lines
}

/// Maximum chroma representable in sRGB at lightness `l` and hue `h` (degrees)
///
/// This is the shortest distance along the hue ray to any gamut boundary.
pub fn max_chroma_for_lh(l: f64, h: f64) -> f64 {
    let theta = h / 360.0 * 2.0 * PI;

    bounds(l)
        .iter()
        .map(|line| line.ray_length(theta))
        .filter(|length| *length >= 0.0)
        .fold(f64::MAX, f64::min)
}

fn hsluv_to_lch(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if l > L_MAX {
        return (100.0, 0.0, h);
    }
    if l < L_MIN {
        return (0.0, 0.0, h);
    }

    let c = max_chroma_for_lh(l, h) / 100.0 * s;
    (l, c, h)
}

fn lch_to_hsluv(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    if l > L_MAX {
        return (h, 0.0, 100.0);
    }
    if l < L_MIN {
        return (h, 0.0, 0.0);
    }

    let s = c / max_chroma_for_lh(l, h) * 100.0;
    (h, s, l)
}

fn luv_to_lch(l: f64, u: f64, v: f64) -> (f64, f64, f64) {
    let c = (u * u + v * v).sqrt();

    // Hue is meaningless for grays
    let h = if c < L_MIN {
        0.0
    } else {
        let h = v.atan2(u).to_degrees();
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    };

    (l, c, h)
}

fn lch_to_luv(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let theta = h.to_radians();
    (l, theta.cos() * c, theta.sin() * c)
}

fn xyz_to_luv([x, y, z]: [f64; 3]) -> (f64, f64, f64) {
    let l = y_to_l(y);
    let divider = x + 15.0 * y + 3.0 * z;
    if l == 0.0 || divider == 0.0 {
        return (0.0, 0.0, 0.0);
    }

    let var_u = 4.0 * x / divider;
    let var_v = 9.0 * y / divider;

    (l, 13.0 * l * (var_u - REF_U), 13.0 * l * (var_v - REF_V))
}

fn luv_to_xyz(l: f64, u: f64, v: f64) -> [f64; 3] {
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;

    let y = l_to_y(l);
    let x = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);

    [x, y, z]
}

/// CIE lightness from relative luminance (reference white Y = 1)
fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y * KAPPA
    } else {
        116.0 * y.cbrt() - 16.0
    }
}

fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        l / KAPPA
    } else {
        ((l + 16.0) / 116.0).powi(3)
    }
}

fn rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let linear = rgb.map(srgb_to_linear);
    M_INV.map(|row| dot(row, linear))
}

fn xyz_to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    M.map(|row| linear_to_srgb(dot(row, xyz)))
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// sRGB transfer function, encoded to linear
fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// sRGB transfer function, linear to encoded
fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_rgb_close(a: (f32, f32, f32), b: (f32, f32, f32)) {
        const EPS: f32 = 1e-4;
        assert!(
            (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS && (a.2 - b.2).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_known_values() {
        // Reference values from the HSLuv snapshot for #ff0000 and #0000ff
        let (h, s, l) = rgb_to_hsluv(1.0, 0.0, 0.0);
        assert!((h - 12.177).abs() < 1e-2, "h = {h}");
        assert!((s - 100.0).abs() < 1e-2, "s = {s}");
        assert!((l - 53.237).abs() < 1e-2, "l = {l}");

        let (h, s, l) = rgb_to_hsluv(0.0, 0.0, 1.0);
        assert!((h - 265.874).abs() < 1e-2, "h = {h}");
        assert!((s - 100.0).abs() < 1e-2, "s = {s}");
        assert!((l - 32.301).abs() < 1e-2, "l = {l}");
    }

    #[test]
    fn test_black_and_white() {
        assert_eq!(rgb_to_hsluv(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));

        let (_, s, l) = rgb_to_hsluv(1.0, 1.0, 1.0);
        assert!(s.abs() < 1e-6);
        assert!((l - 100.0).abs() < 1e-6);

        assert_eq!(hsluv_to_rgb(123.0, 80.0, 0.0), (0.0, 0.0, 0.0));
        assert_eq!(hsluv_to_rgb(123.0, 80.0, -5.0), (0.0, 0.0, 0.0));
        assert_rgb_close(hsluv_to_rgb(123.0, 80.0, 100.0), (1.0, 1.0, 1.0));
        assert_rgb_close(hsluv_to_rgb(123.0, 80.0, 140.0), (1.0, 1.0, 1.0));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        for h in [0.0, 90.0, 200.0, 359.0] {
            let (r, g, b) = hsluv_to_rgb(h, 0.0, 50.0);
            assert!((r - g).abs() < 1e-5 && (g - b).abs() < 1e-5);
        }
    }

    #[test]
    fn test_gray_has_no_saturation() {
        for v in [0.05_f32, 0.25, 0.5, 0.75, 0.95] {
            let (_, s, _) = rgb_to_hsluv(v, v, v);
            assert!(s.abs() < 1e-4, "gray {v} has saturation {s}");
        }
    }

    #[test]
    fn test_max_chroma_is_positive_and_bounded() {
        for l in [1.0, 25.0, 50.0, 75.0, 99.0] {
            for h in (0..360).step_by(15) {
                let c = max_chroma_for_lh(l, h as f64);
                assert!(c > 0.0 && c < 200.0, "l = {l}, h = {h}, c = {c}");
            }
        }
    }

    #[test]
    fn test_full_saturation_touches_gamut() {
        // At s = 100 at least one channel sits on the gamut boundary
        let (r, g, b) = hsluv_to_rgb(200.0, 100.0, 60.0);
        let touches = [r, g, b]
            .iter()
            .any(|c| c.abs() < 1e-4 || (c - 1.0).abs() < 1e-4);
        assert!(touches, "({r}, {g}, {b})");
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x15_1a);
        for _ in 0..10_000 {
            let rgb = (rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>());
            let (h, s, l) = rgb_to_hsluv(rgb.0, rgb.1, rgb.2);

            assert!((0.0..360.0).contains(&h));
            assert!((-1e-6..=100.0 + 1e-6).contains(&s), "s = {s}");
            assert!((0.0..=100.0 + 1e-6).contains(&l), "l = {l}");

            assert_rgb_close(hsluv_to_rgb(h, s, l), rgb);
        }
    }
}
