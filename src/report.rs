// src/report.rs
//! Text rendering of amplitudes and measurement histograms
//!
//! The library renders to `String` so binaries can print and tests can
//! assert on the output.

use std::fmt::Write;

use ndarray::Array1;
use num_complex::Complex64;

use crate::simulators::Counts;

/// One line per joint-state index with its amplitude
pub fn amplitude_table(amplitudes: &Array1<Complex64>) -> String {
    let mut out = String::new();

    for (index, amp) in amplitudes.iter().enumerate() {
        // Infallible for String
        let _ = writeln!(out, "index {} - {:.6}{:+.6}i", index, amp.re, amp.im);
    }

    out
}

/// ASCII bar chart of measured bit-string frequencies
///
/// Bars are scaled so the most frequent outcome spans `width` characters.
pub fn histogram(counts: &Counts, width: usize) -> String {
    let mut entries: Vec<(&str, usize)> = counts.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let max = entries.iter().map(|&(_, count)| count).max().unwrap_or(0);
    let mut out = String::new();

    for (bits, count) in entries {
        let bar_len = if max == 0 {
            0
        } else {
            (count * width + max - 1) / max
        };
        let _ = writeln!(out, "{} | {:<width$} {}", bits, "#".repeat(bar_len), count);
    }

    out
}
