//! HSV (hue, saturation, value) conversions.
//!
//! Hue is in degrees `[0, 360)`, saturation and value are in `[0, 1]`.

/// Convert RGB channels to `(hue, saturation, value)`
///
/// Achromatic input (r == g == b) reports a hue of 0.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let saturation = if max == 0.0 { 0.0 } else { chroma / max };

    let hue = if chroma == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / chroma)
    } else if max == g {
        60.0 * ((b - r) / chroma + 2.0)
    } else {
        60.0 * ((r - g) / chroma + 4.0)
    };

    (normalize_hue(hue), saturation, max)
}

/// Convert `(hue, saturation, value)` back to RGB channels
///
/// Hue outside `[0, 360)` wraps around.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let chroma = v * s;
    let offset = v - chroma;

    let h = h / 60.0;
    let sector = h.floor();
    let f = h - sector;

    let rising = chroma * f;
    let falling = chroma * (1.0 - f);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (chroma, rising, 0.0),
        1 => (falling, chroma, 0.0),
        2 => (0.0, chroma, rising),
        3 => (0.0, falling, chroma),
        4 => (rising, 0.0, chroma),
        _ => (chroma, 0.0, falling),
    };

    (r + offset, g + offset, b + offset)
}

/// Wrap a hue in degrees into `[0, 360)`
pub fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 {
        // tiny negatives round up to exactly 360
        let wrapped = h + 360.0;
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    } else {
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPS: f32 = 1e-4;

    fn assert_close(a: (f32, f32, f32), b: (f32, f32, f32)) {
        assert!(
            (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS && (a.2 - b.2).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_primaries() {
        assert_close(rgb_to_hsv(1.0, 0.0, 0.0), (0.0, 1.0, 1.0));
        assert_close(rgb_to_hsv(0.0, 1.0, 0.0), (120.0, 1.0, 1.0));
        assert_close(rgb_to_hsv(0.0, 0.0, 1.0), (240.0, 1.0, 1.0));
        assert_close(rgb_to_hsv(1.0, 0.0, 1.0), (300.0, 1.0, 1.0));
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        let (h, s, v) = rgb_to_hsv(0.3, 0.3, 0.3);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_eq!(v, 0.3);

        assert_eq!(rgb_to_hsv(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hue_sector_boundaries() {
        assert_close(hsv_to_rgb(60.0, 1.0, 1.0), (1.0, 1.0, 0.0));
        assert_close(hsv_to_rgb(180.0, 1.0, 1.0), (0.0, 1.0, 1.0));
        assert_close(hsv_to_rgb(360.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_close(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0));
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-0.0), 0.0);
        assert!(normalize_hue(-1e-9) < 360.0);
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let rgb = (rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>());
            let (h, s, v) = rgb_to_hsv(rgb.0, rgb.1, rgb.2);

            assert!((0.0..360.0).contains(&h));
            assert!((0.0..=1.0).contains(&s));
            assert!((0.0..=1.0).contains(&v));

            assert_close(hsv_to_rgb(h, s, v), rgb);
        }
    }
}
