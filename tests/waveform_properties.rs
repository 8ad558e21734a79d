// Integration tests for the cardiac waveform generator

use cardiogram::animation::generate_curve;
use cardiogram::gen::{CardiacWaveform, PhaseSchedule, TimeAxis, STANDARD_SEGMENTS};
use cardiogram::LoaderConfig;

const CYCLE: f64 = 1.5;
const OFFSET: f64 = 0.1;

#[test]
fn test_waveform_is_periodic() {
    let waveform = CardiacWaveform::standard();

    for i in 0..2000 {
        let t = -5.0 + i as f64 * 0.0071;
        let here = waveform.sample(t);
        let next_cycle = waveform.sample(t + CYCLE);
        assert!(
            (here - next_cycle).abs() < 1e-9,
            "waveform({}) = {} but waveform({}) = {}",
            t,
            here,
            t + CYCLE,
            next_cycle
        );
    }
}

#[test]
fn test_baseline_region_is_flat() {
    let waveform = CardiacWaveform::standard();

    for cycle in -3..7 {
        for step in 0..=45 {
            let phase = 0.5 + step as f64 * 0.01;
            let t = (cycle as f64 + phase) * CYCLE;
            assert_eq!(
                waveform.sample(t),
                OFFSET,
                "baseline at t = {} (phase {}) should sit at the offset",
                t,
                phase
            );
        }
    }
}

#[test]
fn test_every_segment_starts_at_zero() {
    let schedule = PhaseSchedule::standard();

    for segment in STANDARD_SEGMENTS.iter() {
        assert_eq!(
            schedule.amplitude_at_phase(segment.start),
            0.0,
            "{} should start at zero",
            segment.name
        );
    }

    let r_wave = schedule.classify(0.15).expect("phase 0.15 is claimed");
    assert_eq!(r_wave.name, "R wave");
}

#[test]
fn test_r_wave_peak() {
    let schedule = PhaseSchedule::standard();

    let quarter = 0.15 + 0.033 / 4.0;
    assert!((schedule.amplitude_at_phase(quarter) - 0.35).abs() < 1e-9);

    let (argmax, max) = scan(&schedule, 0.15, 0.183);
    assert!((max - 0.35).abs() < 1e-6, "R wave max was {}", max);
    assert!((argmax - quarter).abs() < 1e-4, "R wave peaked at {}", argmax);
}

#[test]
fn test_t_wave_trough() {
    let schedule = PhaseSchedule::standard();

    let quarter = 0.267 + 0.2 / 4.0;
    assert!((schedule.amplitude_at_phase(quarter) + 0.12).abs() < 1e-9);

    let (argmin, min) = scan_min(&schedule, 0.267, 0.467);
    assert!((min + 0.12).abs() < 1e-6, "T wave min was {}", min);
    assert!((argmin - quarter).abs() < 1e-3, "T wave bottomed at {}", argmin);
}

#[test]
fn test_peak_through_time_domain() {
    let waveform = CardiacWaveform::standard();
    let t = 3.0 * CYCLE + (0.15 + 0.033 / 4.0) * CYCLE;
    assert!((waveform.sample(t) - OFFSET - 0.35).abs() < 1e-6);
}

#[test]
fn test_curve_pairs_every_sample() {
    let config = LoaderConfig::default();
    let curve = generate_curve(&config);

    assert_eq!(curve.len(), 1500);
    assert_eq!(curve.times().len(), curve.amplitudes().len());
    assert_eq!(curve.times()[0], 0.0);
    assert_eq!(curve.times()[1499], 10.0);

    let waveform = CardiacWaveform::standard();
    for (t, y) in curve.as_slice().points() {
        assert_eq!(waveform.sample(t), y);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let config = LoaderConfig::default();
    assert_eq!(generate_curve(&config), generate_curve(&config));

    let axis = TimeAxis::linspace(0.0, 10.0, 1500);
    let first = CardiacWaveform::standard().amplitudes(axis.samples());
    let second = CardiacWaveform::standard().amplitudes(axis.samples());
    assert_eq!(first, second);
}

#[test]
fn test_amplitudes_stay_inside_plot_range() {
    let curve = generate_curve(&LoaderConfig::default());
    for &y in curve.amplitudes() {
        assert!(y > -0.3 && y < 0.5, "amplitude {} leaves the plot", y);
    }
}

fn scan(schedule: &PhaseSchedule, start: f64, end: f64) -> (f64, f64) {
    sweep(start, end)
        .map(|phase| (phase, schedule.amplitude_at_phase(phase)))
        .fold((start, f64::MIN), |best, p| if p.1 > best.1 { p } else { best })
}

fn scan_min(schedule: &PhaseSchedule, start: f64, end: f64) -> (f64, f64) {
    sweep(start, end)
        .map(|phase| (phase, schedule.amplitude_at_phase(phase)))
        .fold((start, f64::MAX), |best, p| if p.1 < best.1 { p } else { best })
}

fn sweep(start: f64, end: f64) -> impl Iterator<Item = f64> {
    const STEPS: usize = 100_000;
    (0..STEPS).map(move |i| start + (end - start) * i as f64 / STEPS as f64)
}
