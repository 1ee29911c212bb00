//! Batch Zero-Crossing Examples
//!
//! This example walks through the common batch scenarios:
//! - Locating every crossing of a sampled curve
//! - Picking only the first or last crossing
//! - Exact zeros at sample points
//! - Close-up views restricted to an x-range
//! - Sorting scrambled samples before the scan
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use zerocross::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), ZeroCrossError> {
    println!("{}", "=".repeat(80));
    println!("Zero Crossings - Batch Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_all_crossings()?;
    example_2_first_and_last()?;
    example_3_exact_zeros()?;
    example_4_close_up()?;
    example_5_sorting()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: All Crossings
/// Scans a sampled sine curve over two periods
fn example_1_all_crossings() -> Result<(), ZeroCrossError> {
    println!("Example 1: All Crossings");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..=40).map(|i| 0.3 + i as f64 * 0.3).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();

    let finder = ZeroCrossing::new().adapter(Batch).build()?;
    let report = finder.find(&x, &y)?;
    println!("{}", report);

    // Crossings land near pi, 2*pi and 3*pi
    for c in report.crossings.iter() {
        println!("  x = {:.4} (segment {})", c.x, c.segment);
    }
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: First and Last
/// A difference curve that rises above zero and later falls back
fn example_2_first_and_last() -> Result<(), ZeroCrossError> {
    println!("Example 2: First and Last Crossing");
    println!("{}", "-".repeat(80));

    let x = [0.0, 0.05, 0.10, 0.15, 0.20];
    let y = [-0.02, 0.01, 0.004, 0.001, -0.002];

    for mode in [First, Last] {
        let finder = ZeroCrossing::new().mode(mode).adapter(Batch).build()?;
        let report = finder.find(&x, &y)?;
        println!("{:>5}: {:?}", mode.to_string(), report.xs());
    }
    // Expected:
    //  First: [0.0333...]
    //   Last: [0.1666...]
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Exact Zeros
/// A sampled zero is reported at its own x
fn example_3_exact_zeros() -> Result<(), ZeroCrossError> {
    println!("Example 3: Exact Zeros");
    println!("{}", "-".repeat(80));

    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [-1.0, 0.0, 1.0, 0.0];

    let finder = ZeroCrossing::new().adapter(Batch).build()?;
    for c in finder.find(&x, &y)?.crossings.iter() {
        println!("  x = {} ({:?})", c.x, c.kind);
    }
    // Expected: x = 1 (Exact); the zero at the final sample is not reported
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Close-up
/// Restricts the scan to a narrow window around one crossing
fn example_4_close_up() -> Result<(), ZeroCrossError> {
    println!("Example 4: Close-up View");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..=50).map(|i| i as f64 * 0.004).collect();
    let y: Vec<f64> = x.iter().map(|&v| (v - 0.0925) * (v - 0.1466)).collect();

    let full = ZeroCrossing::new().adapter(Batch).build()?.find(&x, &y)?;
    let close = ZeroCrossing::new()
        .x_range(0.08, 0.10)
        .adapter(Batch)
        .build()?
        .find(&x, &y)?;

    println!("full range: {:?}", full.xs());
    println!("close-up:   {:?}", close.xs());
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Sorting
/// Samples collected out of order are sorted before the scan
fn example_5_sorting() -> Result<(), ZeroCrossError> {
    println!("Example 5: Unsorted Input");
    println!("{}", "-".repeat(80));

    let x = [3.0, 0.0, 2.0, 1.0];
    let y = [2.0, -2.0, -2.0, 2.0];

    let strict = ZeroCrossing::new().adapter(Batch).build()?;
    match strict.find(&x, &y) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("without sorting: {}", e),
    }

    let sorting = ZeroCrossing::new().sort_input().adapter(Batch).build()?;
    println!("with sorting:    {:?}", sorting.find(&x, &y)?.xs());
    // Expected: [0.5, 1.5, 2.5]
    println!();
    Ok(())
}
