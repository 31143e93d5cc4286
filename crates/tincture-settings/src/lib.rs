//! Display configuration for a renderer that consumes tincture colors.
//!
//! [`GraphicsSettings`] is a plain value: build it once at startup and pass it
//! by reference to whatever needs it.

/// Resolution and presentation settings
///
/// Two resolutions are kept, one for fullscreen and one for windowed mode.
/// The accessors report whichever one `fullscreen` selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphicsSettings {
    /// Fullscreen width in pixels
    pub width: i64,
    /// Fullscreen height in pixels
    pub height: i64,
    /// Windowed width in pixels
    pub window_width: i64,
    /// Windowed height in pixels
    pub window_height: i64,
    pub fullscreen: bool,
    pub vsync: bool,
    /// Frame rate limit
    pub fps_cap: i64,
    /// Multisample anti-aliasing sample count
    pub msaa: i32,
}

impl GraphicsSettings {
    /// Default settings: 1920x1080 fullscreen, 1280x720 window, windowed,
    /// no vsync, 1000 fps cap, 16x MSAA
    pub const fn new() -> Self {
        Self {
            width: 1920,
            height: 1080,
            window_width: 1280,
            window_height: 720,
            fullscreen: false,
            vsync: false,
            fps_cap: 1000,
            msaa: 16,
        }
    }

    /// Set the fullscreen resolution
    pub const fn with_resolution(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the windowed resolution
    pub const fn with_window_size(mut self, width: i64, height: i64) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub const fn with_fullscreen(mut self, enabled: bool) -> Self {
        self.fullscreen = enabled;
        self
    }

    pub const fn with_vsync(mut self, enabled: bool) -> Self {
        self.vsync = enabled;
        self
    }

    pub const fn with_fps_cap(mut self, fps_cap: i64) -> Self {
        self.fps_cap = fps_cap;
        self
    }

    pub const fn with_msaa(mut self, samples: i32) -> Self {
        self.msaa = samples;
        self
    }

    /// Active `(width, height)`
    pub const fn size(&self) -> (i64, i64) {
        if self.fullscreen {
            (self.width, self.height)
        } else {
            (self.window_width, self.window_height)
        }
    }

    pub fn size_f(&self) -> (f64, f64) {
        let (width, height) = self.size();
        (width as f64, height as f64)
    }

    pub const fn width(&self) -> i64 {
        self.size().0
    }

    pub fn width_f(&self) -> f64 {
        self.width() as f64
    }

    pub const fn height(&self) -> i64 {
        self.size().1
    }

    pub fn height_f(&self) -> f64 {
        self.height() as f64
    }

    /// Active width divided by active height
    ///
    /// Returns 0.0 when the active height is zero.
    pub fn aspect_ratio(&self) -> f64 {
        let (width, height) = self.size_f();
        if height == 0.0 {
            log::warn!(
                "aspect ratio requested with zero height (fullscreen: {})",
                self.fullscreen
            );
            return 0.0;
        }

        width / height
    }
}

impl Default for GraphicsSettings {
    fn default() -> Self {
        log::debug!("using default graphics settings");
        Self::new()
    }
}
