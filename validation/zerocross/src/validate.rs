use fastZerocross::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationCase {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    expected: Expected,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    #[serde(default)]
    mode: CrossingMode,
    #[serde(default)]
    x_range: Option<XRange<f64>>,
    #[serde(default)]
    sort_input: bool,
}

#[derive(Debug, Deserialize, Serialize)]
struct Expected {
    #[serde(default)]
    crossings: Vec<ExpectedCrossing>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct ExpectedCrossing {
    x: f64,
    kind: CrossingKind,
}

#[derive(Debug, Serialize)]
struct CaseOutcome {
    name: String,
    notes: String,
    passed: bool,
    detail: String,
    report: Option<CrossingReport<f64>>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    let input_dir = manifest.join("../cases");
    let output_dir = manifest.join("../output/zerocross");

    if !input_dir.exists() {
        eprintln!("Case directory {:?} does not exist.", input_dir);
        return Ok(());
    }

    fs::create_dir_all(&output_dir)?;

    let mut paths: Vec<PathBuf> = fs::read_dir(&input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut failures = 0;
    for path in &paths {
        let outcome = process_file(path)?;
        println!(
            "[{}] {}{}",
            if outcome.passed { "PASS" } else { "FAIL" },
            outcome.name,
            if outcome.passed {
                String::new()
            } else {
                format!(": {}", outcome.detail)
            }
        );
        if !outcome.passed {
            println!("       {}", outcome.notes);
            failures += 1;
        }

        let out_path = output_dir.join(format!("{}.json", outcome.name));
        fs::write(out_path, serde_json::to_string_pretty(&outcome)?)?;
    }

    println!();
    println!("{} case(s), {} failure(s)", paths.len(), failures);

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn process_file(path: &Path) -> Result<CaseOutcome, Box<dyn Error>> {
    let file = fs::File::open(path)?;
    let case: ValidationCase = serde_json::from_reader(file)?;

    let mut builder = ZeroCrossing::<f64>::new().mode(case.params.mode);
    if let Some(range) = case.params.x_range {
        builder = builder.x_range(range.min, range.max);
    }
    if case.params.sort_input {
        builder = builder.sort_input();
    }

    let found = builder
        .adapter(Batch)
        .build()
        .and_then(|finder| finder.find(&case.input.x, &case.input.y));

    let (passed, detail, report) = match (found, &case.expected.error) {
        (Ok(report), None) => {
            let detail = compare(&report, &case.expected.crossings);
            (detail.is_none(), detail.unwrap_or_default(), Some(report))
        }
        (Ok(report), Some(err)) => (
            false,
            format!("expected error containing {err:?}, got {:?}", report.xs()),
            Some(report),
        ),
        (Err(e), Some(err)) => {
            let message = e.to_string();
            (message.contains(err.as_str()), message, None)
        }
        (Err(e), None) => (false, e.to_string(), None),
    };

    Ok(CaseOutcome {
        name: case.name,
        notes: case.notes,
        passed,
        detail,
        report,
    })
}

// Returns a description of the first mismatch, if any.
fn compare(report: &CrossingReport<f64>, expected: &[ExpectedCrossing]) -> Option<String> {
    let found = report.crossings.as_slice();
    if found.len() != expected.len() {
        return Some(format!(
            "expected {} crossing(s), found {:?}",
            expected.len(),
            report.xs()
        ));
    }

    for (i, (c, e)) in found.iter().zip(expected).enumerate() {
        if (c.x - e.x).abs() > TOLERANCE * e.x.abs().max(1.0) {
            return Some(format!("crossing {i}: expected x={}, found x={}", e.x, c.x));
        }
        if c.kind != e.kind {
            return Some(format!(
                "crossing {i}: expected {:?}, found {:?}",
                e.kind, c.kind
            ));
        }
    }

    None
}
