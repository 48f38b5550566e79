pub use self::error::{Error, MalformedReason, Result};

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use wild::ArgsOs;

use analysis::AnalysisConfig;
use color_ops::Color;
use distance::DistanceMetric;
use library::ColorLibrary;
use report::{ReportConfig, ReportRunner};

pub mod analysis;
mod arg_validators;
pub mod color_ops;
pub mod distance;
mod error;
pub mod library;
mod logging;
pub mod matcher;
pub mod report;

/// Which analysis to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AnalysisKind {
    /// Best scale step per design role, light and dark mode
    Roles,
    /// Closest steps per scale for each named brand color
    Palette,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Analysis to run
    #[arg(short('a'), long, value_enum, default_value_t = AnalysisKind::Roles)]
    analysis: AnalysisKind,
    /// Matches listed per role or scale [default: 5 for roles, 3 for palette]
    #[arg(short('n'), long, value_parser = arg_validators::validate_top_n)]
    top: Option<usize>,
    /// Compare a single color (any CSS color) against the candidate scales
    #[arg(short('t'), long, value_parser = arg_validators::validate_target_color)]
    target: Option<Color>,
    /// Distance metric for palette analysis [default: redmean, lab with --target]
    #[arg(short('m'), long, value_enum)]
    metric: Option<DistanceMetric>,
    /// Verbose messages, repeat for more
    #[arg(short('v'), long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn run(args: ArgsOs) -> Result<()> {
    let args = Args::parse_from(args);
    logging::init(logging::LogConfig::from_verbosity(args.verbose))?;

    let library = ColorLibrary::radix()?;
    tracing::info!(scales = library.len(), "loaded color library");

    let output = render(&args, &library);
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Run the analysis the arguments ask for; `--target` wins over `--analysis`
fn render(args: &Args, library: &ColorLibrary) -> String {
    let report_config = ReportConfig::default();
    match (args.target, args.analysis) {
        (Some(color), _) => {
            let config = AnalysisConfig::single(
                color,
                report_config.candidate_scales,
                args.top.unwrap_or(3),
                args.metric.unwrap_or(DistanceMetric::Lab),
            );
            analysis::analyze(&config, library).to_string()
        }
        (None, AnalysisKind::Palette) => {
            let defaults = AnalysisConfig::default();
            let config = AnalysisConfig {
                top_n: args.top.unwrap_or(defaults.top_n),
                metric: args.metric.unwrap_or(defaults.metric),
                ..defaults
            };
            analysis::analyze(&config, library).to_string()
        }
        (None, AnalysisKind::Roles) => {
            if args.metric.is_some_and(|metric| metric != DistanceMetric::Lab) {
                tracing::warn!("role report always ranks by Lab ΔE, ignoring --metric");
            }
            let config = ReportConfig {
                top_n: args.top.unwrap_or(report_config.top_n),
                ..report_config
            };
            ReportRunner::new(config, library).run().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_args(argv: &[&str]) -> String {
        let argv = std::iter::once("swatch-match").chain(argv.iter().copied());
        let args = Args::try_parse_from(argv).unwrap();
        render(&args, &ColorLibrary::radix().unwrap())
    }

    fn role_report(top_n: usize) -> String {
        let library = ColorLibrary::radix().unwrap();
        let config = ReportConfig {
            top_n,
            ..ReportConfig::default()
        };
        ReportRunner::new(config, &library).run().to_string()
    }

    /// Number of ranked entries under each "Closest in" heading
    fn ranks_per_scale(text: &str) -> Vec<usize> {
        text.split("  Closest in ")
            .skip(1)
            .map(|block| {
                block
                    .lines()
                    .filter(|line| {
                        line.starts_with("    ")
                            && line.trim_start().starts_with(|c: char| c.is_ascii_digit())
                    })
                    .count()
            })
            .collect()
    }

    #[test]
    fn defaults_to_role_report_with_five_matches() {
        assert_eq!(render_args(&[]), role_report(5));
    }

    #[test]
    fn top_applies_to_role_report() {
        assert_eq!(render_args(&["-n", "2"]), role_report(2));
    }

    #[test]
    fn role_report_ignores_metric() {
        assert_eq!(render_args(&["-m", "redmean"]), role_report(5));
    }

    #[test]
    fn palette_defaults_to_redmean_and_three_matches() {
        let text = render_args(&["-a", "palette"]);
        assert!(text.contains("PALETTE ANALYSIS (redmean distance)"));
        assert!(text.contains("TARGET: biblio-strong-dark (dark)"));
        let ranks = ranks_per_scale(&text);
        assert_eq!(ranks.len(), 6 * 3);
        assert!(ranks.iter().all(|&n| n == 3));
    }

    #[test]
    fn palette_honours_metric_and_top() {
        let text = render_args(&["-a", "palette", "-m", "lab", "-n", "1"]);
        assert!(text.contains("PALETTE ANALYSIS (lab distance)"));
        assert!(ranks_per_scale(&text).iter().all(|&n| n == 1));
    }

    #[test]
    fn target_defaults_to_lab_and_three_matches() {
        let text = render_args(&["-t", "#3A6D90"]);
        assert!(text.contains("PALETTE ANALYSIS (lab distance)"));
        assert!(text.contains("TARGET: target (light)"));
        assert!(text.contains("TARGET: target (dark)"));
        let ranks = ranks_per_scale(&text);
        assert_eq!(ranks.len(), 2 * 5);
        assert!(ranks.iter().all(|&n| n == 3));
    }

    #[test]
    fn target_takes_priority_over_analysis() {
        let text = render_args(&["-a", "roles", "-t", "rgb(58, 109, 144)", "-n", "2"]);
        assert!(!text.contains("LIGHT MODE"));
        assert!(text.contains("  Hex: #3A6D90"));
        assert!(ranks_per_scale(&text).iter().all(|&n| n == 2));
    }

    #[test]
    fn zero_top_is_rejected() {
        assert!(Args::try_parse_from(["swatch-match", "-n", "0"]).is_err());
    }
}
