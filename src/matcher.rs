use std::collections::BTreeMap;

use derive_more::Display;
use itertools::Itertools;

use crate::color_ops::Color;
use crate::distance::{DistanceMetric, delta_e};
use crate::library::{ColorLibrary, ColorScale, Mode, ScaleLookup};

/// Semantic usage of a color in the design system
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    #[display("primary")]
    Primary,
    #[display("secondary")]
    Secondary,
    #[display("tint")]
    Tint,
    #[display("light")]
    Light,
    #[display("text")]
    Text,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Primary,
        Role::Secondary,
        Role::Tint,
        Role::Light,
        Role::Text,
    ];
}

/// Scale steps that may stand in for each role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSteps(BTreeMap<Role, Vec<u8>>);

impl RoleSteps {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, role: Role, steps: &[u8]) -> Self {
        self.0.insert(role, steps.to_vec());
        self
    }

    /// Allowed steps in search order, empty if the role is not configured
    pub fn allowed(&self, role: Role) -> &[u8] {
        self.0.get(&role).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn allows(&self, role: Role, step: u8) -> bool {
        self.allowed(role).contains(&step)
    }
}

impl Default for RoleSteps {
    /// Solid accents on steps 9-10, tints on 3-5, text on 11-12
    fn default() -> Self {
        Self::empty()
            .with(Role::Primary, &[9, 10])
            .with(Role::Secondary, &[9, 10])
            .with(Role::Tint, &[3, 4])
            .with(Role::Light, &[4, 5])
            .with(Role::Text, &[11, 12])
    }
}

/// A scale step and how far it is from the color it was matched against
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub scale: String,
    pub step: u8,
    pub color: Color,
    pub distance: f64,
}

/// Searches library scales for the steps closest to a target color
pub struct PaletteMatcher<'a> {
    library: &'a ColorLibrary,
    role_steps: &'a RoleSteps,
}

impl<'a> PaletteMatcher<'a> {
    pub fn new(library: &'a ColorLibrary, role_steps: &'a RoleSteps) -> Self {
        Self {
            library,
            role_steps,
        }
    }

    pub fn role_steps(&self) -> &RoleSteps {
        self.role_steps
    }

    /// Find the closest step among those allowed for `role`, by Lab ΔE
    ///
    /// Returns `None` when the scale has no variant for `mode` or none of the
    /// allowed steps exist. On equal distance the earlier allowed step wins.
    pub fn find_closest_for_role(
        &self,
        scale_name: &str,
        mode: Mode,
        role: Role,
        target: Color,
    ) -> Option<MatchResult> {
        let ScaleLookup::Found(scale) = self.library.get_scale(scale_name, mode) else {
            tracing::debug!(scale = scale_name, %mode, "scale not in library, skipping");
            return None;
        };
        let target_lab = target.to_lab();
        let mut best: Option<MatchResult> = None;
        for &step in self.role_steps.allowed(role) {
            let Some(color) = scale.step(step) else {
                tracing::trace!(scale = scale_name, step, "step missing from scale");
                continue;
            };
            let distance = delta_e(&target_lab, &color.to_lab());
            if best.as_ref().is_none_or(|best| distance < best.distance) {
                best = Some(MatchResult {
                    scale: scale.name().to_owned(),
                    step,
                    color,
                    distance,
                });
            }
        }
        best
    }
}

/// Rank every step of `scale` by distance to `target`, closest first, keeping `top_n`
///
/// Steps at equal distance keep ascending step order.
pub fn find_closest_overall(
    target: Color,
    scale: &ColorScale,
    top_n: usize,
    metric: DistanceMetric,
) -> Vec<MatchResult> {
    scale
        .steps()
        .map(|(step, color)| MatchResult {
            scale: scale.name().to_owned(),
            step,
            color,
            distance: metric.distance(target, color),
        })
        .sorted_by(|a, b| a.distance.total_cmp(&b.distance))
        .take(top_n)
        .collect()
}
