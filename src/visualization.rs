//! Figure layout and rasterization of the loader trace

pub mod canvas;

pub use canvas::PlotCanvas;

/// RGBA colour, 8 bits per channel
pub type Rgba = [u8; 4];

pub const WHITE: Rgba = [0xFF, 0xFF, 0xFF, 0xFF];

/// `#DC143C`
pub const CRIMSON: Rgba = [0xDC, 0x14, 0x3C, 0xFF];

/// Placement of the axes box as fractions of the figure, measured from the
/// bottom-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxesMargins {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for AxesMargins {
    fn default() -> Self {
        Self {
            left: 0.125,
            right: 0.9,
            bottom: 0.11,
            top: 0.88,
        }
    }
}

impl AxesMargins {
    /// Axes box filling the whole figure
    pub fn full() -> Self {
        Self {
            left: 0.0,
            right: 1.0,
            bottom: 0.0,
            top: 1.0,
        }
    }
}

/// Everything that decides how a frame looks
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub margins: AxesMargins,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// Pixels per inch, used to convert the line width from points
    pub dpi: f64,
    /// Line width in points (1/72 inch)
    pub line_width: f64,
    pub line_color: Rgba,
    pub background: Rgba,
}

impl Default for PlotStyle {
    /// 12 x 2.5 inch figure at 100 dpi, thick crimson line on white, axes hidden
    fn default() -> Self {
        Self {
            width: 1200,
            height: 250,
            margins: AxesMargins::default(),
            x_range: (0.0, 10.0),
            y_range: (-0.3, 0.5),
            dpi: 100.0,
            line_width: 2.5,
            line_color: CRIMSON,
            background: WHITE,
        }
    }
}

impl PlotStyle {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_margins(mut self, margins: AxesMargins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = (min, max);
        self
    }

    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = (min, max);
        self
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Line width converted to whole device pixels, at least one
    pub fn line_width_px(&self) -> u32 {
        (self.line_width * self.dpi / 72.0).round().max(1.0) as u32
    }

    /// Axes box insets in pixels: (left, right, top, bottom)
    pub fn axes_insets_px(&self) -> (u32, u32, u32, u32) {
        let width = self.width as f64;
        let height = self.height as f64;
        let inset = |fraction: f64, extent: f64| (fraction * extent).round().max(0.0) as u32;
        (
            inset(self.margins.left, width),
            inset(1.0 - self.margins.right, width),
            inset(1.0 - self.margins.top, height),
            inset(self.margins.bottom, height),
        )
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.width > 0 && self.height > 0,
            "Canvas size must be non-zero, got {}x{}",
            self.width,
            self.height
        );
        anyhow::ensure!(
            self.x_range.0 < self.x_range.1,
            "Empty x range {:?}",
            self.x_range
        );
        anyhow::ensure!(
            self.y_range.0 < self.y_range.1,
            "Empty y range {:?}",
            self.y_range
        );
        anyhow::ensure!(
            self.margins.left < self.margins.right && self.margins.bottom < self.margins.top,
            "Axes margins leave no drawing area: {:?}",
            self.margins
        );
        anyhow::ensure!(
            self.line_width > 0.0 && self.dpi > 0.0,
            "Line width and dpi must be positive, got {} pt at {} dpi",
            self.line_width,
            self.dpi
        );
        Ok(())
    }
}
