//! # lexmd-curve
//!
//! **Tier 1 (Rank-Frequency Curve)**
//!
//! A queryable, rank-ordered view over a frequency spectrum: frequencies
//! sorted descending with ranks `1..=V`, cumulative sums, the h-point and
//! the arc length of the rank-frequency polyline.
//!
//! ## What belongs here
//! * Deterministic rank assignment (ties keep first-occurrence order)
//! * Cumulative-frequency queries
//! * The h-point crossing solver
//! * Curve-length queries
//!
//! ## What does NOT belong here
//! * Counting tokens (use `lexmd-spectrum`)
//! * Indicator formulas (use `lexmd-indicators`)

use lexmd_math::{checked_ratio, linear_crossing, unit_step_arc_length};
use lexmd_spectrum::{Spectrum, TypeCount};
use tracing::debug;

/// One point of the curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedType {
    pub rank: usize,
    pub token: String,
    pub frequency: usize,
}

/// The h-point: where the rank-frequency curve meets `rank = frequency`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HPoint {
    pub value: f64,
    /// True when some rank `r` has frequency exactly `r`.
    pub exact: bool,
    /// Last rank on or above the diagonal.
    pub lower_rank: usize,
    /// First rank below the diagonal; `V + 1` when the curve is closed
    /// with the virtual point `(V + 1, 0)`. Equal to `lower_rank` when exact.
    pub upper_rank: usize,
}

impl HPoint {
    /// Integer part of the h-point.
    pub fn floor(&self) -> usize {
        self.value.floor() as usize
    }
}

/// Rank-frequency curve of one document.
///
/// Invariants: frequencies are non-increasing in rank, they sum to the
/// document's token count, and there is one point per type.
#[derive(Debug, Clone)]
pub struct RankFrequencyCurve {
    ranked: Vec<RankedType>,
    frequencies: Vec<usize>,
    cumulative: Vec<usize>,
    spectrum_signature: String,
}

impl RankFrequencyCurve {
    pub fn from_spectrum(spectrum: &Spectrum) -> Self {
        let mut order: Vec<&TypeCount> = spectrum.types().iter().collect();
        order.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });

        let ranked: Vec<RankedType> = order
            .iter()
            .enumerate()
            .map(|(i, t)| RankedType {
                rank: i + 1,
                token: t.token.clone(),
                frequency: t.count,
            })
            .collect();
        let frequencies: Vec<usize> = ranked.iter().map(|r| r.frequency).collect();
        let cumulative: Vec<usize> = frequencies
            .iter()
            .scan(0usize, |acc, f| {
                *acc += f;
                Some(*acc)
            })
            .collect();

        debug!(
            types = frequencies.len(),
            top = frequencies.first().copied().unwrap_or(0),
            "ranked frequency spectrum"
        );

        Self {
            ranked,
            frequencies,
            cumulative,
            spectrum_signature: spectrum.signature().to_string(),
        }
    }

    /// V: number of points.
    pub fn type_count(&self) -> usize {
        self.frequencies.len()
    }

    /// N: sum of all frequencies.
    pub fn token_count(&self) -> usize {
        self.cumulative.last().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn ranked(&self) -> &[RankedType] {
        &self.ranked
    }

    /// Frequencies in rank order.
    pub fn frequencies(&self) -> &[usize] {
        &self.frequencies
    }

    /// Frequency at a 1-based rank.
    pub fn frequency(&self, rank: usize) -> Option<usize> {
        rank.checked_sub(1)
            .and_then(|i| self.frequencies.get(i).copied())
    }

    /// f1: frequency of the most frequent type.
    pub fn top_frequency(&self) -> Option<usize> {
        self.frequencies.first().copied()
    }

    /// Sum of frequencies for ranks `1..=rank`; ranks past `V` saturate at N.
    pub fn cumulative_frequency(&self, rank: usize) -> usize {
        let upto = rank.min(self.cumulative.len());
        if upto == 0 {
            0
        } else {
            self.cumulative[upto - 1]
        }
    }

    /// Cumulative relative frequency F(rank); `None` for an empty curve.
    pub fn relative_cumulative(&self, rank: usize) -> Option<f64> {
        checked_ratio(
            self.cumulative_frequency(rank) as f64,
            self.token_count() as f64,
        )
    }

    /// The h-point, or `None` when the curve is empty.
    ///
    /// Exact when some rank `r` has frequency `r`. Otherwise the crossing of
    /// the segment between the last rank above the diagonal `(r1, f1)` and
    /// the next point `(r1 + 1, f2)` with `y = x` is interpolated linearly.
    /// When every rank lies above the diagonal the curve is closed with the
    /// virtual point `(V + 1, 0)`.
    pub fn h_point(&self) -> Option<HPoint> {
        let v = self.frequencies.len();
        if v == 0 {
            return None;
        }

        // f(r) - r strictly decreases, so an exact crossing is unique.
        if let Some(i) = self
            .frequencies
            .iter()
            .enumerate()
            .position(|(i, &f)| f == i + 1)
        {
            let rank = i + 1;
            return Some(HPoint {
                value: rank as f64,
                exact: true,
                lower_rank: rank,
                upper_rank: rank,
            });
        }

        let r1 = self
            .frequencies
            .iter()
            .enumerate()
            .take_while(|&(i, &f)| f > i + 1)
            .count();
        let f1 = self.frequency(r1)?;
        let (r2, f2) = if r1 < v {
            (r1 + 1, self.frequencies[r1])
        } else {
            (v + 1, 0)
        };

        let value = linear_crossing((r1 as f64, f1 as f64), (r2 as f64, f2 as f64))?;
        Some(HPoint {
            value,
            exact: false,
            lower_rank: r1,
            upper_rank: r2,
        })
    }

    /// Arc length of the whole polyline; 0 when `V <= 1`.
    pub fn curve_length(&self) -> f64 {
        unit_step_arc_length(&self.frequencies)
    }

    /// Arc length from rank 1 to `rank` (clamped to `V`).
    pub fn curve_length_to(&self, rank: usize) -> f64 {
        let upto = rank.min(self.frequencies.len());
        unit_step_arc_length(&self.frequencies[..upto])
    }

    /// Signature of the spectrum this curve was built from.
    pub fn spectrum_signature(&self) -> &str {
        &self.spectrum_signature
    }

    /// True when this curve was built from `spectrum`.
    pub fn is_derived_from(&self, spectrum: &Spectrum) -> bool {
        self.spectrum_signature == spectrum.signature()
            && self.token_count() == spectrum.token_count()
            && self.type_count() == spectrum.type_count()
    }
}
