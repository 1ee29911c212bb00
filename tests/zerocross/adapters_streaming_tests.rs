//! Tests for the streaming adapter.
//!
//! These tests verify:
//! - Crossings spanning chunk boundaries
//! - Equivalence with a batch scan for any chunking
//! - Ordering checks within and across chunks
//!
//! ## Test Organization
//!
//! 1. **Chunking** - boundaries, equivalence
//! 2. **Modes** - First, Last
//! 3. **Validation** - ordering, unsupported features
//! 4. **State** - counters, reset

use zerocross::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn wave() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..100).map(|i| i as f64 * 0.1).collect();
    let y: Vec<f64> = x.iter().map(|&v| (2.0 * v).cos()).collect();
    (x, y)
}

// ============================================================================
// Chunking Tests
// ============================================================================

/// Test a crossing between two chunks is found.
#[test]
fn test_streaming_boundary_crossing() {
    let mut stream = ZeroCrossing::new().adapter(Streaming).build().unwrap();

    let first = stream.process_chunk(&[0.0, 1.0], &[-1.0, -0.5]).unwrap();
    let second = stream.process_chunk(&[2.0, 3.0], &[0.5, 1.0]).unwrap();

    assert!(first.is_empty());
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].x, 1.5);
    assert_eq!(second[0].segment, 1);
    assert_eq!(stream.finalize().xs(), vec![1.5]);
}

/// Test every chunk size matches the batch result.
#[test]
fn test_streaming_matches_batch() {
    let (x, y) = wave();
    let batch = ZeroCrossing::new().adapter(Batch).build().unwrap();
    let expected = batch.find(&x, &y).unwrap().crossings;

    for size in [1, 2, 3, 7, 50, 100] {
        let mut stream = ZeroCrossing::new().adapter(Streaming).build().unwrap();
        for (cx, cy) in x.chunks(size).zip(y.chunks(size)) {
            stream.process_chunk(cx, cy).unwrap();
        }
        assert_eq!(stream.finalize(), expected, "chunk size {size}");
    }
}

/// Test an exact zero at the end of a chunk is resolved by the next chunk.
#[test]
fn test_streaming_zero_at_chunk_end() {
    let mut stream = ZeroCrossing::new().adapter(Streaming).build().unwrap();

    assert!(stream.process_chunk(&[0.0, 1.0], &[1.0, 0.0]).unwrap().is_empty());
    let next = stream.process_chunk(&[2.0], &[-1.0]).unwrap();

    assert_eq!(next.len(), 1);
    assert!(next[0].is_exact());
    assert_eq!(next[0].x, 1.0);
}

/// Test empty chunks are accepted.
#[test]
fn test_streaming_empty_chunk() {
    let mut stream = ZeroCrossing::<f64>::new().adapter(Streaming).build().unwrap();
    assert!(stream.process_chunk(&[], &[]).unwrap().is_empty());
    assert_eq!(stream.chunks_processed(), 1);
    assert!(stream.finalize().is_empty());
}

// ============================================================================
// Mode Tests
// ============================================================================

/// Test FIRST and LAST over chunks.
#[test]
fn test_streaming_modes() {
    let (x, y) = wave();
    let all = ZeroCrossing::new().adapter(Batch).build().unwrap().find(&x, &y).unwrap();

    let mut first = ZeroCrossing::new().mode(First).adapter(Streaming).build().unwrap();
    let mut last = ZeroCrossing::new().mode(Last).adapter(Streaming).build().unwrap();
    for (cx, cy) in x.chunks(9).zip(y.chunks(9)) {
        first.process_chunk(cx, cy).unwrap();
        last.process_chunk(cx, cy).unwrap();
    }

    assert_eq!(first.finalize().first(), all.crossings.first());
    assert_eq!(last.finalize().first(), all.crossings.last());
}

/// Test x_range applies across chunks.
#[test]
fn test_streaming_x_range() {
    let (x, y) = wave();
    let batch = ZeroCrossing::new().x_range(2.0, 6.0).adapter(Batch).build().unwrap();
    let expected = batch.find(&x, &y).unwrap().crossings;

    let mut stream = ZeroCrossing::new().x_range(2.0, 6.0).adapter(Streaming).build().unwrap();
    for (cx, cy) in x.chunks(11).zip(y.chunks(11)) {
        stream.process_chunk(cx, cy).unwrap();
    }

    assert!(!expected.is_empty());
    assert_eq!(stream.finalize(), expected);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test a chunk that goes back in x is rejected and leaves state unchanged.
#[test]
fn test_streaming_rejects_backwards_chunk() {
    let mut stream = ZeroCrossing::new().adapter(Streaming).build().unwrap();
    stream.process_chunk(&[0.0, 1.0], &[1.0, 1.0]).unwrap();

    let err = stream.process_chunk(&[0.5, 2.0], &[-1.0, -1.0]).unwrap_err();
    assert!(matches!(err, ZeroCrossError::UnsortedInput { index: 2, .. }));
    assert_eq!(stream.samples_seen(), 2);
    assert_eq!(stream.chunks_processed(), 1);

    // The stream continues from its previous state
    let next = stream.process_chunk(&[2.0], &[-1.0]).unwrap();
    assert_eq!(next[0].x, 1.5);
}

/// Test an unsorted chunk is rejected.
#[test]
fn test_streaming_rejects_unsorted_chunk() {
    let mut stream = ZeroCrossing::new().adapter(Streaming).build().unwrap();
    assert!(matches!(
        stream.process_chunk(&[1.0, 0.0], &[1.0, -1.0]),
        Err(ZeroCrossError::UnsortedInput { .. })
    ));
    assert_eq!(stream.samples_seen(), 0);
}

/// Test sort_input is not supported.
#[test]
fn test_streaming_sort_input_unsupported() {
    let res = ZeroCrossing::<f64>::new().sort_input().adapter(Streaming).build();
    assert!(matches!(
        res,
        Err(ZeroCrossError::UnsupportedFeature {
            adapter: "Streaming",
            feature: "sort_input"
        })
    ));
}

// ============================================================================
// State Tests
// ============================================================================

/// Test counters and reset.
#[test]
fn test_streaming_reset() {
    let mut stream = ZeroCrossing::new().adapter(Streaming).build().unwrap();
    stream.process_chunk(&[5.0, 6.0], &[-1.0, 1.0]).unwrap();
    assert_eq!(stream.samples_seen(), 2);

    stream.reset();

    assert_eq!(stream.samples_seen(), 0);
    assert_eq!(stream.chunks_processed(), 0);
    assert!(stream.finalize().is_empty());
    assert!(stream.process_chunk(&[0.0, 1.0], &[1.0, -1.0]).is_ok());
}
