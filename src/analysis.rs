//! Side-by-side comparison of named brand colors with the closest steps of several scales

use core::fmt;

use crate::color_ops::Color;
use crate::distance::DistanceMetric;
use crate::library::{ColorLibrary, ColorScale, Mode, ScaleLookup};
use crate::matcher::{MatchResult, find_closest_overall};

const RULE_WIDTH: usize = 70;

/// A brand color to analyze, and the mode it is used in
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTarget {
    pub name: String,
    pub color: Color,
    pub mode: Mode,
}

impl NamedTarget {
    pub fn new(name: &str, color: Color, mode: Mode) -> Self {
        Self {
            name: name.to_owned(),
            color,
            mode,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub targets: Vec<NamedTarget>,
    pub scales: Vec<String>,
    /// Matches listed per scale
    pub top_n: usize,
    pub metric: DistanceMetric,
}

impl Default for AnalysisConfig {
    /// The bibliography palette against the blue-ish Radix scales
    fn default() -> Self {
        Self {
            targets: vec![
                NamedTarget::new("biblio", Color::new(0x3A, 0x6D, 0x90), Mode::Light),
                NamedTarget::new("biblio-strong", Color::new(0x2A, 0x52, 0x70), Mode::Light),
                NamedTarget::new("biblio-tint", Color::new(0xE3, 0xED, 0xF4), Mode::Light),
                NamedTarget::new("biblio-light", Color::new(0xD0, 0xE0, 0xEC), Mode::Light),
                NamedTarget::new("biblio-dark", Color::new(0x5A, 0x9F, 0xD4), Mode::Dark),
                NamedTarget::new("biblio-strong-dark", Color::new(0x7F, 0xBA, 0xE8), Mode::Dark),
            ],
            scales: ["blue", "cyan", "sky"].into_iter().map(String::from).collect(),
            top_n: 3,
            metric: DistanceMetric::Redmean,
        }
    }
}

impl AnalysisConfig {
    /// Analyze one ad-hoc color in both modes
    pub fn single(color: Color, scales: Vec<String>, top_n: usize, metric: DistanceMetric) -> Self {
        Self {
            targets: vec![
                NamedTarget::new("target", color, Mode::Light),
                NamedTarget::new("target", color, Mode::Dark),
            ],
            scales,
            top_n,
            metric,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub metric: DistanceMetric,
    pub targets: Vec<TargetAnalysis>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetAnalysis {
    pub target: NamedTarget,
    pub scales: Vec<ScaleMatches>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleMatches {
    pub scale: String,
    /// Variant that was searched, light when the library has no dark one
    pub mode: Mode,
    pub matches: Vec<MatchResult>,
}

pub fn analyze(config: &AnalysisConfig, library: &ColorLibrary) -> Analysis {
    let targets = config
        .targets
        .iter()
        .map(|target| TargetAnalysis {
            target: target.clone(),
            scales: config
                .scales
                .iter()
                .filter_map(|name| pick_variant(library, name, target.mode))
                .map(|(scale, mode)| ScaleMatches {
                    scale: scale.name().to_owned(),
                    mode,
                    matches: find_closest_overall(target.color, scale, config.top_n, config.metric),
                })
                .collect(),
        })
        .collect();
    Analysis {
        metric: config.metric,
        targets,
    }
}

/// The scale variant for `mode`, or the light one when a dark variant is missing
fn pick_variant<'a>(
    library: &'a ColorLibrary,
    name: &str,
    mode: Mode,
) -> Option<(&'a ColorScale, Mode)> {
    match (library.get_scale(name, mode), mode) {
        (ScaleLookup::Found(scale), _) => Some((scale, mode)),
        (ScaleLookup::NotFound, Mode::Dark) => {
            tracing::debug!(scale = name, "no dark variant, using light");
            library
                .get_scale(name, Mode::Light)
                .found()
                .map(|scale| (scale, Mode::Light))
        }
        (ScaleLookup::NotFound, Mode::Light) => {
            tracing::debug!(scale = name, "scale not in library, skipping");
            None
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "─".repeat(RULE_WIDTH);
        writeln!(f, "{heavy}")?;
        writeln!(f, "PALETTE ANALYSIS ({} distance)", self.metric)?;
        writeln!(f, "{heavy}")?;
        for analysis in &self.targets {
            let target = &analysis.target;
            let color = target.color;
            writeln!(f)?;
            writeln!(f, "{light}")?;
            writeln!(f, "TARGET: {} ({})", target.name, target.mode)?;
            writeln!(f, "  Hex: {color}")?;
            writeln!(
                f,
                "  RGB: rgb({}, {}, {})",
                color.red(),
                color.green(),
                color.blue()
            )?;
            writeln!(f, "  HSL: {}", color.to_hsl())?;
            for scale in &analysis.scales {
                writeln!(f)?;
                writeln!(f, "  Closest in {} ({}):", scale.scale, scale.mode)?;
                for (rank, found) in scale.matches.iter().enumerate() {
                    writeln!(
                        f,
                        "    {}. {}-{}: {}",
                        rank + 1,
                        found.scale,
                        found.step,
                        found.color
                    )?;
                    writeln!(f, "       HSL: {}", found.color.to_hsl())?;
                    writeln!(f, "       {}: {:.2}", self.metric.label(), found.distance)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_targets_fall_back_to_light_variant() {
        let mut library = ColorLibrary::new();
        library.insert(
            Mode::Light,
            ColorScale::from_hex("slate", &["#FCFCFD", "#1C2024"]).unwrap(),
        );
        let config = AnalysisConfig::single(
            Color::new(0x20, 0x20, 0x20),
            vec!["slate".to_owned(), "teal".to_owned()],
            5,
            DistanceMetric::Lab,
        );
        let analysis = analyze(&config, &library);
        assert_eq!(analysis.targets.len(), 2);
        for target in &analysis.targets {
            assert_eq!(target.scales.len(), 1);
            let slate = &target.scales[0];
            assert_eq!(slate.mode, Mode::Light);
            assert_eq!(slate.matches.len(), 2);
            assert_eq!(slate.matches[0].step, 2);
        }
    }

    #[test]
    fn biblio_palette_against_radix() {
        let library = ColorLibrary::radix().unwrap();
        let analysis = analyze(&AnalysisConfig::default(), &library);
        assert_eq!(analysis.metric, DistanceMetric::Redmean);
        assert_eq!(analysis.targets.len(), 6);
        let tint = &analysis.targets[2];
        assert_eq!(tint.target.name, "biblio-tint");
        let blue = &tint.scales[0];
        assert_eq!(blue.scale, "blue");
        assert_eq!(blue.matches.len(), 3);
        assert_eq!(blue.matches[0].step, 3);

        let dark = &analysis.targets[4];
        assert!(dark.scales.iter().all(|scale| scale.mode == Mode::Dark));
    }

    #[test]
    fn display_lists_ranked_matches() {
        let library = ColorLibrary::radix().unwrap();
        let config = AnalysisConfig {
            targets: vec![NamedTarget::new("biblio", Color::new(0x3A, 0x6D, 0x90), Mode::Light)],
            scales: vec!["blue".to_owned()],
            top_n: 1,
            metric: DistanceMetric::Lab,
        };
        let text = analyze(&config, &library).to_string();
        assert!(text.contains("TARGET: biblio (light)"));
        assert!(text.contains("  RGB: rgb(58, 109, 144)"));
        assert!(text.contains("  Closest in blue (light):"));
        assert!(text.contains("    1. blue-"));
        assert!(text.contains("       ΔE: "));
    }
}
