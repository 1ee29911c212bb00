//! Incremental Zero-Crossing Examples
//!
//! This example feeds data to the incremental adapters:
//! - Streaming: chunks of a long series, crossings reported per chunk
//! - Online: one point at a time, with early settling in FIRST mode
//!
//! Both produce the same crossings as a batch scan of the whole series.

#[cfg(feature = "std")]
use zerocross::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), ZeroCrossError> {
    println!("{}", "=".repeat(80));
    println!("Zero Crossings - Incremental Examples");
    println!("{}", "=".repeat(80));
    println!();

    let x: Vec<f64> = (0..1000).map(|i| i as f64 * 0.01).collect();
    let y: Vec<f64> = x.iter().map(|&v| (2.0 * v).sin() * (-0.1 * v).exp()).collect();

    example_1_streaming(&x, &y)?;
    example_2_online(&x, &y)?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Streaming
/// Processes the series in chunks of 128 samples
fn example_1_streaming(x: &[f64], y: &[f64]) -> Result<(), ZeroCrossError> {
    println!("Example 1: Streaming");
    println!("{}", "-".repeat(80));

    let mut stream = ZeroCrossing::new().adapter(Streaming).build()?;
    for (cx, cy) in x.chunks(128).zip(y.chunks(128)) {
        let found = stream.process_chunk(cx, cy)?;
        if !found.is_empty() {
            let xs: Vec<String> = found.iter().map(|c| format!("{:.4}", c.x)).collect();
            println!(
                "chunk {:>2}: {}",
                stream.chunks_processed(),
                xs.join(", ")
            );
        }
    }

    let batch = ZeroCrossing::new().adapter(Batch).build()?.find(x, y)?;
    println!(
        "total: {} crossing(s), matches batch: {}",
        stream.finalize().len(),
        stream.finalize() == batch.crossings
    );
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Online
/// Stops caring about new points once the first crossing is known
fn example_2_online(x: &[f64], y: &[f64]) -> Result<(), ZeroCrossError> {
    println!("Example 2: Online (FIRST)");
    println!("{}", "-".repeat(80));

    let mut online = ZeroCrossing::new().mode(First).adapter(Online).build()?;
    for (&xi, &yi) in x.iter().zip(y) {
        if let Some(c) = online.add_point(xi, yi)? {
            println!(
                "first crossing at x = {:.4} after {} sample(s)",
                c.x,
                online.samples_seen()
            );
        }
        if online.is_settled() {
            break;
        }
    }
    // Expected: first crossing near pi / 2
    println!();
    Ok(())
}
