/* Generates the ECG loader animation for the website.
Slow crimson trace with reduced R and S peaks, a longer inverted T wave and
extra space between heartbeats, saved as a looping GIF.
*/

#[cfg(feature = "gif")]
fn main() -> anyhow::Result<()> {
    use cardiogram::gen::PhaseSchedule;
    use cardiogram::utils::init_logger;
    use cardiogram::LoaderConfig;

    init_logger();

    let config = LoaderConfig::default();

    println!("Generating ECG loader animation...");
    let summary = cardiogram::animation::export(&config)?;

    let schedule = PhaseSchedule::standard();
    let peak = |name: &str| {
        schedule
            .segment(name)
            .map(|segment| segment.shape.peak().abs())
            .unwrap_or(0.0)
    };

    println!(
        "✓ ECG loader animation saved as '{}'",
        summary.path.display()
    );
    println!("Duration: {:.1}s | FPS: {}", summary.duration_secs, summary.fps);
    println!("Features:");
    println!(
        "  - Reduced R peak ({}) and S peak ({})",
        peak("R wave"),
        peak("S wave")
    );
    println!("  - Longer T wave duration (200ms)");
    println!("  - Negative T wave position");
    println!("  - Increased spacing between heartbeats");

    Ok(())
}

#[cfg(not(feature = "gif"))]
fn main() {
    println!("This binary is only available with the 'gif' feature enabled.");
}
