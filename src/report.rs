use derive_more::Display;
use itertools::Itertools;

use crate::color_ops::Color;
use crate::library::{ColorLibrary, Mode};
use crate::matcher::{MatchResult, PaletteMatcher, Role, RoleSteps};

pub use self::targets::{ResolvedTargets, RoleTargets, TargetSpec};

mod format;
mod targets;

/// Everything a report run depends on
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Roles in report order
    pub roles: Vec<Role>,
    pub role_steps: RoleSteps,
    /// Scales queried for every role, in tie-break order
    pub candidate_scales: Vec<String>,
    pub light_targets: RoleTargets,
    pub dark_targets: RoleTargets,
    /// Matches kept per role
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            roles: Role::ALL.to_vec(),
            role_steps: RoleSteps::default(),
            candidate_scales: ["sky", "blue", "cyan", "indigo", "slate"]
                .into_iter()
                .map(String::from)
                .collect(),
            light_targets: RoleTargets::citable_light(),
            dark_targets: RoleTargets::citable_dark(),
            top_n: 5,
        }
    }
}

impl ReportConfig {
    pub fn targets(&self, mode: Mode) -> &RoleTargets {
        match mode {
            Mode::Light => &self.light_targets,
            Mode::Dark => &self.dark_targets,
        }
    }
}

/// Progress of a report run
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    #[display("idle")]
    Idle,
    #[display("computing {_0} targets")]
    ComputingTargets(Mode),
    #[display("matching {_0} roles")]
    MatchingRoles(Mode),
    #[display("done")]
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub modes: Vec<ModeReport>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModeReport {
    pub mode: Mode,
    pub targets: ResolvedTargets,
    pub roles: Vec<RoleReport>,
    /// Scales by ascending summed ΔE
    pub totals: Vec<ScaleTotal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleReport {
    pub role: Role,
    pub target: Color,
    /// The role had no target of its own and borrowed the primary one
    pub fallback: bool,
    /// Best step per scale, closest first
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTotal {
    pub scale: String,
    pub total: f64,
}

/// Matches every role of the palette against the candidate scales, light mode then dark mode
pub struct ReportRunner<'a> {
    config: ReportConfig,
    library: &'a ColorLibrary,
    stage: Stage,
}

impl<'a> ReportRunner<'a> {
    pub fn new(config: ReportConfig, library: &'a ColorLibrary) -> Self {
        Self {
            config,
            library,
            stage: Stage::Idle,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn run(&mut self) -> Report {
        let modes = [Mode::Light, Mode::Dark]
            .into_iter()
            .map(|mode| self.run_mode(mode))
            .collect();
        self.advance(Stage::Done);
        Report { modes }
    }

    fn advance(&mut self, stage: Stage) {
        tracing::debug!(from = %self.stage, to = %stage, "report stage");
        self.stage = stage;
    }

    fn run_mode(&mut self, mode: Mode) -> ModeReport {
        let _span = tracing::info_span!("report", %mode).entered();

        self.advance(Stage::ComputingTargets(mode));
        let targets = self.config.targets(mode).resolve();

        self.advance(Stage::MatchingRoles(mode));
        let matcher = PaletteMatcher::new(self.library, &self.config.role_steps);
        let mut roles = Vec::with_capacity(self.config.roles.len());
        let mut totals: Vec<ScaleTotal> = Vec::new();
        for &role in &self.config.roles {
            let Some((target, fallback)) = targets.for_role(role) else {
                tracing::warn!(%role, "no target for role and no primary target, skipping");
                continue;
            };
            if fallback {
                tracing::info!(%role, %target, "role has no target, using primary");
            }
            let matches = self.match_role(&matcher, mode, role, target);
            for found in &matches {
                if matcher.role_steps().allows(role, found.step) {
                    add_to_total(&mut totals, &found.scale, found.distance);
                }
            }
            roles.push(RoleReport {
                role,
                target,
                fallback,
                matches,
            });
        }
        totals.sort_by(|a, b| a.total.total_cmp(&b.total));
        tracing::info!(
            roles = roles.len(),
            best = totals.first().map(|t| t.scale.as_str()),
            "mode finished"
        );

        ModeReport {
            mode,
            targets,
            roles,
            totals,
        }
    }

    fn match_role(
        &self,
        matcher: &PaletteMatcher<'_>,
        mode: Mode,
        role: Role,
        target: Color,
    ) -> Vec<MatchResult> {
        self.config
            .candidate_scales
            .iter()
            .filter_map(|scale| matcher.find_closest_for_role(scale, mode, role, target))
            .inspect(|found| {
                tracing::debug!(
                    %role,
                    scale = found.scale.as_str(),
                    step = found.step,
                    distance = found.distance,
                    "closest step"
                );
            })
            .sorted_by(|a, b| a.distance.total_cmp(&b.distance))
            .take(self.config.top_n)
            .collect()
    }
}

/// Add to a scale's running total, keeping first-seen order for scales
fn add_to_total(totals: &mut Vec<ScaleTotal>, scale: &str, distance: f64) {
    match totals.iter_mut().find(|total| total.scale == scale) {
        Some(total) => total.total += distance,
        None => totals.push(ScaleTotal {
            scale: scale.to_owned(),
            total: distance,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::ColorScale;

    fn synthetic_library() -> ColorLibrary {
        let mut library = ColorLibrary::new();
        let ramp = |name: &str, base: u8| {
            ColorScale::new(
                name,
                (1..=12u8).map(|step| {
                    let v = base.saturating_add(step * 10);
                    (step, Color::new(v, v, v))
                }),
            )
        };
        library.insert(Mode::Light, ramp("low", 0));
        library.insert(Mode::Light, ramp("high", 100));
        library.insert(Mode::Dark, ramp("low", 0));
        library
    }

    fn synthetic_config() -> ReportConfig {
        ReportConfig {
            roles: vec![Role::Primary, Role::Text],
            role_steps: RoleSteps::empty()
                .with(Role::Primary, &[1, 2])
                .with(Role::Text, &[12]),
            candidate_scales: vec!["high".to_owned(), "low".to_owned(), "missing".to_owned()],
            light_targets: RoleTargets::new().solid(Role::Primary, Color::new(20, 20, 20)),
            dark_targets: RoleTargets::new().solid(Role::Primary, Color::new(20, 20, 20)),
            top_n: 5,
        }
    }

    #[test]
    fn runs_both_modes_in_order() {
        let library = synthetic_library();
        let mut runner = ReportRunner::new(synthetic_config(), &library);
        assert_eq!(runner.stage(), Stage::Idle);
        let report = runner.run();
        assert_eq!(runner.stage(), Stage::Done);
        let modes: Vec<_> = report.modes.iter().map(|m| m.mode).collect();
        assert_eq!(modes, vec![Mode::Light, Mode::Dark]);
    }

    #[test]
    fn roles_are_sorted_and_skip_missing_scales() {
        let library = synthetic_library();
        let report = ReportRunner::new(synthetic_config(), &library).run();
        let light = &report.modes[0];
        let primary = &light.roles[0];
        assert_eq!(primary.role, Role::Primary);
        assert!(!primary.fallback);
        let found: Vec<_> = primary.matches.iter().map(|m| (m.scale.as_str(), m.step)).collect();
        assert_eq!(found, vec![("low", 2), ("high", 1)]);
        assert!(primary.matches[0].distance < primary.matches[1].distance);

        // dark mode only has the low scale
        let dark = &report.modes[1];
        assert_eq!(dark.roles[0].matches.len(), 1);
        assert_eq!(dark.totals.len(), 1);
    }

    #[test]
    fn text_role_borrows_primary_target() {
        let library = synthetic_library();
        let report = ReportRunner::new(synthetic_config(), &library).run();
        let text = &report.modes[0].roles[1];
        assert_eq!(text.role, Role::Text);
        assert!(text.fallback);
        assert_eq!(text.target, Color::new(20, 20, 20));
        assert!(text.matches.iter().all(|m| m.step == 12));
    }

    #[test]
    fn totals_sum_allowed_matches() {
        let library = synthetic_library();
        let report = ReportRunner::new(synthetic_config(), &library).run();
        let light = &report.modes[0];
        for total in &light.totals {
            let expected: f64 = light
                .roles
                .iter()
                .flat_map(|role| role.matches.iter())
                .filter(|m| m.scale == total.scale)
                .map(|m| m.distance)
                .sum();
            assert!((total.total - expected).abs() < 1e-9);
        }
        let order: Vec<_> = light.totals.iter().map(|t| t.scale.as_str()).collect();
        assert_eq!(order, vec!["low", "high"]);
    }

    #[test]
    fn top_n_limits_matches() {
        let library = synthetic_library();
        let config = ReportConfig {
            top_n: 1,
            ..synthetic_config()
        };
        let report = ReportRunner::new(config, &library).run();
        let light = &report.modes[0];
        assert!(light.roles.iter().all(|role| role.matches.len() == 1));
        // only the printed matches count towards totals
        assert_eq!(light.totals.len(), 1);
        assert_eq!(light.totals[0].scale, "low");
    }

    #[test]
    fn role_without_any_target_is_skipped() {
        let library = synthetic_library();
        let config = ReportConfig {
            light_targets: RoleTargets::new(),
            ..synthetic_config()
        };
        let report = ReportRunner::new(config, &library).run();
        assert!(report.modes[0].roles.is_empty());
        assert!(report.modes[0].totals.is_empty());
        assert_eq!(report.modes[1].roles.len(), 2);
    }
}
