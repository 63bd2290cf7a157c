//! Gate a few synthetic captures and print their outcomes.
//!
//! Set `HISTO_GATE_LOG=debug` to also see the per-verdict trace:
//!
//! ```text
//! HISTO_GATE_LOG=debug cargo run -p histo-gate --example classify_synthetic
//! ```

use histo_gate::{
    capture_stats, classify_capture_detailed, init_from_env, DiagnosticsParams, GateParams,
};

fn gaussian(center: f64, sigma: f64, amplitude: f64) -> Vec<u32> {
    (0..1024)
        .map(|i| {
            let d = i as f64 - center;
            (amplitude * (-d * d / (2.0 * sigma * sigma)).exp()).round() as u32
        })
        .collect()
}

fn main() {
    let _ = init_from_env("HISTO_GATE_LOG");

    let params = GateParams::default();
    let diag = DiagnosticsParams::default();

    let focused = gaussian(512.0, 80.0, 10_000.0);

    let mut double_peak = gaussian(442.0, 50.0, 10_000.0);
    for (c, extra) in double_peak.iter_mut().zip(gaussian(582.0, 50.0, 10_000.0)) {
        *c += extra;
    }

    let dim = gaussian(50.0, 15.0, 8_000.0);

    for (name, counts) in [
        ("focused", &focused),
        ("double peak", &double_peak),
        ("dim", &dim),
    ] {
        match classify_capture_detailed(counts, true, &params) {
            Ok(report) => {
                let stats = capture_stats(counts, &diag);
                println!(
                    "{name:>12}: {} (mean {:.1}, std dev {:.1})",
                    report.outcome, stats.mean, stats.std_dev
                );
                if let Some(verdict) = report.verdict {
                    for reason in &verdict.reasons {
                        println!("{:>12}  - {reason}", "");
                    }
                }
            }
            Err(err) => eprintln!("{name}: {err}"),
        }
    }
}
