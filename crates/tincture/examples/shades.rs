//! Prints the three shade families side by side for a few base colors.
//!
//! Run with `RUST_LOG=debug` to also see the HSLuv coordinates of each base color.

use tincture::Color;
use tincture_settings::GraphicsSettings;

const STEPS: [f32; 5] = [-0.5, -0.25, 0.0, 0.25, 0.5];

fn main() {
    env_logger::init();

    let settings = GraphicsSettings::default();
    log::info!(
        "target {}x{} (aspect {:.3}, msaa {}x)",
        settings.width(),
        settings.height(),
        settings.aspect_ratio(),
        settings.msaa
    );

    let bases = [
        ("coral", Color::int_rgb(255, 127, 80)),
        ("teal", Color::int_rgb(0, 128, 128)),
        ("slate", Color::hsluv(250.0, 30.0, 45.0)),
        ("gray", Color::lightness(0.5)),
    ];

    for (name, base) in bases {
        let (h, s, l) = base.to_hsluv();
        log::debug!("{name}: hsluv ({h:.1}, {s:.1}, {l:.1}), hsv hue {:.1}", base.hue());

        println!("{name}");
        for (label, shade) in [
            ("shade", Color::shade as fn(Color, f32) -> Color),
            ("shade2", Color::shade2),
            ("shade_hsluv", Color::shade_hsluv),
        ] {
            let row: Vec<String> = STEPS
                .iter()
                .map(|&amount| format!("{:08x}", shade(base, amount).pack_int()))
                .collect();
            println!("  {label:<12} {}", row.join(" "));
        }

        let rotated: Vec<String> = (0..6)
            .map(|i| format!("{:08x}", base.shift(60.0 * i as f32, 0.0, 0.0).pack_int()))
            .collect();
        println!("  {:<12} {}", "hue wheel", rotated.join(" "));
    }
}
