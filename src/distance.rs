use clap::ValueEnum;
use derive_more::Display;

use crate::color_ops::{Color, LabColor};

/// How to measure the difference between two colors
///
/// Distances produced by different metrics live on unrelated scales, so a
/// ranking is always computed with exactly one of them.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DistanceMetric {
    /// Euclidean distance in CIE L*a*b* (ΔE 1976)
    #[default]
    #[display("lab")]
    Lab,
    /// Red-mean weighted Euclidean distance in sRGB
    #[display("redmean")]
    Redmean,
}

impl DistanceMetric {
    pub fn distance(self, a: Color, b: Color) -> f64 {
        match self {
            DistanceMetric::Lab => delta_e(&a.to_lab(), &b.to_lab()),
            DistanceMetric::Redmean => redmean(a, b),
        }
    }

    /// Label used in front of distances in reports
    pub fn label(self) -> &'static str {
        match self {
            DistanceMetric::Lab => "ΔE",
            DistanceMetric::Redmean => "Distance",
        }
    }
}

/// CIE 1976 ΔE: straight-line distance between two Lab colors
pub fn delta_e(a: &LabColor, b: &LabColor) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Weighted RGB distance, weighting red and blue by the mean red of both colors
pub fn redmean(a: Color, b: Color) -> f64 {
    let r_mean = (f64::from(a.red()) + f64::from(b.red())) / 2.0;
    let dr = f64::from(a.red()) - f64::from(b.red());
    let dg = f64::from(a.green()) - f64::from(b.green());
    let db = f64::from(a.blue()) - f64::from(b.blue());
    ((2.0 + r_mean / 256.0) * dr * dr + 4.0 * dg * dg + (2.0 + (255.0 - r_mean) / 256.0) * db * db)
        .sqrt()
}
