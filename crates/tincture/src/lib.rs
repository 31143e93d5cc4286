//! # tincture
//!
//! Immutable RGBA color values and the color-space math behind them.
//!
//! This crate has no knowledge of any graphics API. A renderer consumes the
//! packed forms ([`Color::pack_int`], [`Color::pack_float`]) or the raw
//! channels ([`Color::to_array`], [`Color::to_vec4`]).
//!
//! ## Core Types
//!
//! - [`Color`] - Four `f32` channels with value semantics; every transform
//!   returns a new color
//!
//! ## Color Spaces
//!
//! - [`hsv`] - Hue/saturation/value, used by [`Color::shift`] and [`Color::hue`]
//! - [`hsluv`] - Perceptually uniform hue/saturation/lightness built on CIELUV,
//!   used by [`Color::lighten_hsluv`] and [`Color::darken_hsluv`]
//!
//! ## Features
//!
//! - `bytemuck` - derive `Pod`/`Zeroable` for [`Color`] so color slices can be
//!   uploaded directly

mod color;
pub mod hsluv;
pub mod hsv;

pub use color::*;
