//! Segmenting a noisy electrogram-like signal
//!
//! Run with `RUST_LOG=wrangle_segments=debug` to see the engine's spans.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing_subscriber::EnvFilter;
use wrangle_segments::{max_segment_count, segment, segment_batch};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Signal Segmentation Example ===\n");

    // A slow oscillation with one sharp deflection, sampled as ADC counts
    let mut rng = StdRng::seed_from_u64(7);
    let noise = Normal::new(0.0, 2.0)?;
    let samples: Vec<i16> = (0..500)
        .map(|i| {
            let t = i as f64;
            let baseline = 40.0 * (t / 80.0).sin();
            let deflection = if (240..250).contains(&i) { -30.0 * (t - 240.0) } else { 0.0 };
            (baseline + deflection + noise.sample(&mut rng)).round() as i16
        })
        .collect();

    let result = segment(&samples)?;

    println!("1. Segment table");
    println!("  Samples: {}", result.sample_count());
    println!(
        "  Segments: {} (at most {})",
        result.count(),
        max_segment_count(samples.len())
    );
    println!(
        "  Falling: {}, rising: {}",
        result.negative_starts().len(),
        result.positive_starts().len()
    );

    println!("\n2. Steepest runs");
    if let Some(steepest) = result.steepest_negative() {
        println!(
            "  Falling: segment {} starting at sample {}, slope {:.2}",
            steepest.segment, steepest.start_index, steepest.slope
        );
    }
    if let Some(steepest) = result.steepest_positive() {
        println!(
            "  Rising: segment {} starting at sample {}, slope {:.2}",
            steepest.segment, steepest.start_index, steepest.slope
        );
    }

    println!("\n3. Largest amplitudes");
    let mut by_amplitude: Vec<_> = result.segments().to_vec();
    by_amplitude.sort_by(|a, b| b.amplitude.abs().total_cmp(&a.amplitude.abs()));
    for s in by_amplitude.iter().take(3) {
        println!("    {}", s);
    }

    println!("\n4. Several channels at once");
    let channels: Vec<Vec<i16>> = (1..=4)
        .map(|c| samples.iter().map(|&x| x.saturating_mul(c)).collect())
        .collect();
    for (c, channel) in segment_batch(&channels).into_iter().enumerate() {
        let channel = channel?;
        println!("  Channel {}: {} segments", c + 1, channel.count());
    }

    Ok(())
}
