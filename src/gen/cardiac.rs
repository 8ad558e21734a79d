//! Stylised ECG trace built from a fixed table of cycle segments
//!
//! One heartbeat is split into half-open phase intervals over `[0, 1)`. Each
//! interval carries its own shape, so the P, Q, R, S and T waves can be tuned
//! independently. Values are hand-picked for the look of the loader and are
//! not a physiological model.

use super::curve::Curve;
use super::time_axis::TimeAxis;
use super::waveform::Shape;

/// Default time per heartbeat, longer than one second to space the beats out
pub const DEFAULT_CYCLE_LENGTH: f64 = 1.5;

/// Vertical offset applied after classification to centre the trace
pub const DEFAULT_BASELINE_OFFSET: f64 = 0.1;

/// A named half-open interval `[start, end)` of the cycle phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub name: &'static str,
    pub start: f64,
    pub end: f64,
    pub shape: Shape,
}

impl Segment {
    pub const fn new(name: &'static str, start: f64, end: f64, shape: Shape) -> Self {
        Self {
            name,
            start,
            end,
            shape,
        }
    }

    pub fn contains(&self, phase: f64) -> bool {
        self.start <= phase && phase < self.end
    }

    /// Shape value at an absolute cycle phase
    pub fn evaluate(&self, phase: f64) -> f64 {
        self.shape.evaluate(phase - self.start)
    }
}

/// Reduced R and S peaks, a wide inverted T wave and a long flat tail between beats
pub const STANDARD_SEGMENTS: [Segment; 8] = [
    Segment::new("P wave", 0.0, 0.1, Shape::sine(0.08, 0.1)),
    Segment::new("PR segment", 0.1, 0.133, Shape::Flat),
    Segment::new("Q wave", 0.133, 0.15, Shape::sine(-0.03, 0.017)),
    Segment::new("R wave", 0.15, 0.183, Shape::sine(0.35, 0.033)),
    Segment::new("S wave", 0.183, 0.2, Shape::sine(-0.05, 0.017)),
    Segment::new("ST segment", 0.2, 0.267, Shape::Flat),
    Segment::new("T wave", 0.267, 0.467, Shape::sine(-0.12, 0.2)),
    Segment::new("Baseline", 0.467, 1.0, Shape::Flat),
];

/// Ordered segment table, looked up first-match
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSchedule {
    segments: Vec<Segment>,
}

impl PhaseSchedule {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_SEGMENTS.to_vec())
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// First segment containing `phase`, if any
    pub fn classify(&self, phase: f64) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.contains(phase))
    }

    /// Segment lookup by name
    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.name == name)
    }

    /// Amplitude before the baseline offset; phases no segment claims are flat
    pub fn amplitude_at_phase(&self, phase: f64) -> f64 {
        self.classify(phase)
            .map(|segment| segment.evaluate(phase))
            .unwrap_or(0.0)
    }

    /// Check that the segments tile `[0, 1)` in order, with no gaps or overlaps
    pub fn validate(&self) -> anyhow::Result<()> {
        let (first, last) = match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => anyhow::bail!("phase schedule is empty"),
        };

        anyhow::ensure!(
            first.start == 0.0,
            "'{}' starts at {} instead of 0.0",
            first.name,
            first.start
        );
        anyhow::ensure!(
            last.end == 1.0,
            "'{}' ends at {} instead of 1.0",
            last.name,
            last.end
        );

        for segment in &self.segments {
            anyhow::ensure!(
                segment.start < segment.end,
                "'{}' has an empty interval [{}, {})",
                segment.name,
                segment.start,
                segment.end
            );
        }

        for pair in self.segments.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            anyhow::ensure!(
                current.end == next.start,
                "'{}' ends at {} but '{}' starts at {}",
                current.name,
                current.end,
                next.name,
                next.start
            );
        }

        Ok(())
    }
}

impl Default for PhaseSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// Periodic ECG waveform: time in, amplitude out
#[derive(Debug, Clone, PartialEq)]
pub struct CardiacWaveform {
    cycle_length: f64,
    offset: f64,
    schedule: PhaseSchedule,
}

impl CardiacWaveform {
    pub fn new(cycle_length: f64, offset: f64, schedule: PhaseSchedule) -> Self {
        Self {
            cycle_length,
            offset,
            schedule,
        }
    }

    /// The loader trace: 1.5 s beats, standard schedule, +0.1 offset
    pub fn standard() -> Self {
        Self::new(
            DEFAULT_CYCLE_LENGTH,
            DEFAULT_BASELINE_OFFSET,
            PhaseSchedule::standard(),
        )
    }

    pub fn cycle_length(&self) -> f64 {
        self.cycle_length
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn schedule(&self) -> &PhaseSchedule {
        &self.schedule
    }

    /// Normalised position of `time` within its cycle.
    ///
    /// Floored modulo, so negative times wrap the same way as positive ones.
    pub fn phase(&self, time: f64) -> f64 {
        time.rem_euclid(self.cycle_length) / self.cycle_length
    }

    /// Amplitude at `time`, offset included
    pub fn sample(&self, time: f64) -> f64 {
        self.schedule.amplitude_at_phase(self.phase(time)) + self.offset
    }

    /// Evaluate every time sample independently
    pub fn amplitudes(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&time| self.sample(time)).collect()
    }

    /// Pair an axis with its amplitudes
    pub fn generate(&self, axis: &TimeAxis) -> Curve {
        let amplitudes = self.amplitudes(axis.samples());
        Curve::from_parts(axis.samples().to_vec(), amplitudes)
    }
}

impl Default for CardiacWaveform {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_schedule_partitions_the_cycle() {
        PhaseSchedule::standard()
            .validate()
            .expect("standard schedule should tile [0, 1)");
    }

    #[test]
    fn validate_rejects_gaps_and_overlaps() {
        let gap = PhaseSchedule::new(vec![
            Segment::new("a", 0.0, 0.4, Shape::Flat),
            Segment::new("b", 0.5, 1.0, Shape::Flat),
        ]);
        assert!(gap.validate().is_err());

        let overlap = PhaseSchedule::new(vec![
            Segment::new("a", 0.0, 0.6, Shape::Flat),
            Segment::new("b", 0.5, 1.0, Shape::Flat),
        ]);
        assert!(overlap.validate().is_err());

        let short = PhaseSchedule::new(vec![Segment::new("a", 0.0, 0.9, Shape::Flat)]);
        assert!(short.validate().is_err());

        assert!(PhaseSchedule::new(Vec::new()).validate().is_err());
    }

    #[test]
    fn classify_uses_half_open_intervals() {
        let schedule = PhaseSchedule::standard();
        assert_eq!(schedule.classify(0.0).map(|s| s.name), Some("P wave"));
        assert_eq!(schedule.classify(0.1).map(|s| s.name), Some("PR segment"));
        assert_eq!(schedule.classify(0.15).map(|s| s.name), Some("R wave"));
        assert_eq!(schedule.classify(0.466).map(|s| s.name), Some("T wave"));
        assert_eq!(schedule.classify(0.467).map(|s| s.name), Some("Baseline"));
        assert!(schedule.classify(1.0).is_none());
    }

    #[test]
    fn unclaimed_phase_is_flat() {
        let schedule = PhaseSchedule::standard();
        assert_eq!(schedule.amplitude_at_phase(1.0), 0.0);
        assert_eq!(schedule.amplitude_at_phase(-0.5), 0.0);
    }

    #[test]
    fn negative_time_wraps_forward() {
        let waveform = CardiacWaveform::standard();
        let phase = waveform.phase(-0.375);
        assert!((phase - 0.75).abs() < 1e-12);
        assert_eq!(waveform.sample(-0.375), DEFAULT_BASELINE_OFFSET);
    }
}
