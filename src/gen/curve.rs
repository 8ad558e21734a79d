/// Sampled waveform: times and their amplitudes, index for index
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    times: Vec<f64>,
    amplitudes: Vec<f64>,
}

/// Borrowed view of the first points of a [`Curve`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSlice<'a> {
    pub times: &'a [f64],
    pub amplitudes: &'a [f64],
}

impl Curve {
    /// Pair up times and amplitudes.
    ///
    /// Both sequences are cut to the shorter length so the pairing always holds.
    pub fn from_parts(mut times: Vec<f64>, mut amplitudes: Vec<f64>) -> Self {
        let len = times.len().min(amplitudes.len());
        times.truncate(len);
        amplitudes.truncate(len);
        Self { times, amplitudes }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    /// The first `len` points, clamped to the curve length
    pub fn prefix(&self, len: usize) -> CurveSlice<'_> {
        let len = len.min(self.len());
        CurveSlice {
            times: &self.times[..len],
            amplitudes: &self.amplitudes[..len],
        }
    }

    pub fn as_slice(&self) -> CurveSlice<'_> {
        self.prefix(self.len())
    }
}

impl<'a> CurveSlice<'a> {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn points(self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.times
            .iter()
            .copied()
            .zip(self.amplitudes.iter().copied())
    }
}
