/// Evenly spaced time samples over a closed interval
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    samples: Vec<f64>,
}

impl TimeAxis {
    /// `count` samples from `start` to `end`, both ends included.
    ///
    /// The last sample is exactly `end`; a single sample sits at `start`.
    pub fn linspace(start: f64, end: f64, count: usize) -> Self {
        let samples = match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                let mut samples: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
                samples[count - 1] = end;
                samples
            }
        };

        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn start(&self) -> Option<f64> {
        self.samples.first().copied()
    }

    pub fn end(&self) -> Option<f64> {
        self.samples.last().copied()
    }
}
