use super::{PlotStyle, Rgba};
use crate::gen::CurveSlice;
use anyhow::anyhow;
use plotters::prelude::{BitMapBackend, ChartBuilder, Color, IntoDrawingArea, LineSeries, RGBColor};

fn rgb(colour: Rgba) -> RGBColor {
    RGBColor(colour[0], colour[1], colour[2])
}

/// Draws one frame of the trace into a fixed figure.
///
/// The axes box is placed with chart margins and no mesh or labels are drawn,
/// so only the line itself is visible.
pub struct PlotCanvas {
    style: PlotStyle,
    buffer: Vec<u8>,
}

impl PlotCanvas {
    pub fn new(style: PlotStyle) -> Self {
        Self {
            buffer: vec![0; style.width as usize * style.height as usize * 3],
            style,
        }
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    pub fn width(&self) -> u32 {
        self.style.width
    }

    pub fn height(&self) -> u32 {
        self.style.height
    }

    /// Rasterize `curve` and return the frame as row-major RGB8
    pub fn render_rgb(&mut self, curve: CurveSlice<'_>) -> anyhow::Result<&[u8]> {
        let style = self.style;
        let (left, right, top, bottom) = style.axes_insets_px();

        {
            let root = BitMapBackend::with_buffer(&mut self.buffer, (style.width, style.height))
                .into_drawing_area();
            root.fill(&rgb(style.background))
                .map_err(|e| anyhow!("backend error: {e}"))?;

            let mut chart = ChartBuilder::on(&root)
                .margin_left(left)
                .margin_right(right)
                .margin_top(top)
                .margin_bottom(bottom)
                .build_cartesian_2d(
                    style.x_range.0..style.x_range.1,
                    style.y_range.0..style.y_range.1,
                )
                .map_err(|e| anyhow!("chart build error: {e}"))?;

            // a lone point has no segment to stroke
            if curve.len() > 1 {
                chart
                    .draw_series(LineSeries::new(
                        curve.points(),
                        rgb(style.line_color).stroke_width(style.line_width_px()),
                    ))
                    .map_err(|e| anyhow!("series error: {e}"))?;
            }

            root.present()
                .map_err(|e| anyhow!("present error: {e}"))?;
        }

        Ok(&self.buffer)
    }

    /// Rasterize `curve` and return the frame as row-major RGBA8
    pub fn render(&mut self, curve: CurveSlice<'_>) -> anyhow::Result<Vec<u8>> {
        let rgb = self.render_rgb(curve)?;
        let mut rgba = Vec::with_capacity(rgb.len() / 3 * 4);
        for pixel in rgb.chunks_exact(3) {
            rgba.extend_from_slice(pixel);
            rgba.push(0xFF);
        }
        Ok(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen::Curve;
    use crate::visualization::{AxesMargins, CRIMSON, WHITE};

    fn small_style() -> PlotStyle {
        PlotStyle::default()
            .with_size(100, 20)
            .with_margins(AxesMargins::full())
            .with_x_range(0.0, 10.0)
            .with_y_range(0.0, 1.0)
    }

    fn pixel(pixels: &[u8], width: u32, x: u32, y: u32) -> Rgba {
        let i = ((y * width + x) * 4) as usize;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    }

    #[test]
    fn empty_curve_is_background() {
        let mut canvas = PlotCanvas::new(small_style());
        let pixels = canvas.render(Curve::from_parts(vec![], vec![]).as_slice()).unwrap();
        assert_eq!(pixels.len(), 100 * 20 * 4);
        assert!(pixels.chunks(4).all(|p| p == WHITE));

        let single = Curve::from_parts(vec![5.0], vec![0.5]);
        let pixels = canvas.render(single.as_slice()).unwrap();
        assert!(pixels.chunks(4).all(|p| p == WHITE));
    }

    #[test]
    fn horizontal_line_hits_the_middle_rows() {
        let mut canvas = PlotCanvas::new(small_style());
        let curve = Curve::from_parts(vec![0.0, 10.0], vec![0.5, 0.5]);
        let pixels = canvas.render(curve.as_slice()).unwrap();

        assert!((7..=12).any(|y| pixel(&pixels, 100, 50, y) == CRIMSON));
        assert_eq!(pixel(&pixels, 100, 50, 0), WHITE);
        assert_eq!(pixel(&pixels, 100, 50, 19), WHITE);
    }

    #[test]
    fn shorter_curve_redraws_from_scratch() {
        let curve = Curve::from_parts(vec![0.0, 5.0, 10.0], vec![0.1, 0.9, 0.1]);
        let mut canvas = PlotCanvas::new(small_style());
        let full = canvas.render(curve.as_slice()).unwrap();
        assert!(full.chunks(4).any(|p| p == CRIMSON));

        let restarted = canvas.render(curve.prefix(0)).unwrap();
        assert!(restarted.chunks(4).all(|p| p == WHITE));
    }

    #[test]
    fn rendering_is_deterministic() {
        let curve = Curve::from_parts(vec![0.0, 2.5, 5.0, 10.0], vec![0.2, 0.8, 0.3, 0.6]);
        let first = PlotCanvas::new(small_style()).render(curve.as_slice()).unwrap();
        let second = PlotCanvas::new(small_style()).render(curve.as_slice()).unwrap();
        assert_eq!(first, second);
    }
}
