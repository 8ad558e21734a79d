use std::f64::consts::PI;

/// Shape of one segment of the cardiac cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Isoelectric line, contributes nothing
    Flat,
    /// One sine period stretched over `width` phase units, scaled by `peak`.
    /// A negative peak inverts the wave.
    Sine { peak: f64, width: f64 },
}

impl Shape {
    pub const fn sine(peak: f64, width: f64) -> Self {
        Shape::Sine { peak, width }
    }

    /// Evaluate the shape at `local_phase`, measured from the start of its segment
    pub fn evaluate(&self, local_phase: f64) -> f64 {
        match *self {
            Shape::Flat => 0.0,
            Shape::Sine { peak, width } => peak * (2.0 * PI * local_phase / width).sin(),
        }
    }

    /// Signed peak of the shape (0.0 for flat segments)
    pub fn peak(&self) -> f64 {
        match *self {
            Shape::Flat => 0.0,
            Shape::Sine { peak, .. } => peak,
        }
    }
}
