use std::collections::BTreeMap;

use crate::color_ops::Color;
use crate::matcher::Role;

const BLACK: Color = Color::new(0x00, 0x00, 0x00);

/// Dark-mode accent the translucent tints are derived from
const DARK_ACCENT: Color = Color::new(90, 159, 212);

/// How the target color of a role is obtained
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetSpec {
    Solid(Color),
    /// A translucent accent rendered over an opaque background
    Overlay {
        background: Color,
        accent: Color,
        alpha: f64,
    },
}

impl TargetSpec {
    pub fn resolve(self) -> Color {
        match self {
            TargetSpec::Solid(color) => color,
            TargetSpec::Overlay {
                background,
                accent,
                alpha,
            } => accent.composite_over(background, alpha),
        }
    }
}

/// Target colors per role for one mode, before compositing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleTargets(BTreeMap<Role, TargetSpec>);

impl RoleTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, role: Role, spec: TargetSpec) -> Self {
        self.0.insert(role, spec);
        self
    }

    pub fn solid(self, role: Role, color: Color) -> Self {
        self.with(role, TargetSpec::Solid(color))
    }

    pub fn resolve(&self) -> ResolvedTargets {
        ResolvedTargets(
            self.0
                .iter()
                .map(|(&role, &spec)| (role, spec.resolve()))
                .collect(),
        )
    }

    /// Light mode "Balanced" palette
    pub fn citable_light() -> Self {
        Self::new()
            .solid(Role::Primary, Color::new(0x3A, 0x6D, 0x90))
            .solid(Role::Secondary, Color::new(0x2A, 0x52, 0x70))
            .solid(Role::Tint, Color::new(0xE3, 0xED, 0xF4))
            .solid(Role::Light, Color::new(0xD0, 0xE0, 0xEC))
    }

    /// Dark mode palette, tints are the accent at 15% and 25% over black
    pub fn citable_dark() -> Self {
        let overlay = |alpha| TargetSpec::Overlay {
            background: BLACK,
            accent: DARK_ACCENT,
            alpha,
        };
        Self::new()
            .solid(Role::Primary, Color::new(0x5A, 0x9F, 0xD4))
            .solid(Role::Secondary, Color::new(0x7F, 0xBA, 0xE8))
            .with(Role::Tint, overlay(0.15))
            .with(Role::Light, overlay(0.25))
    }
}

/// Concrete target colors per role for one mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTargets(BTreeMap<Role, Color>);

impl ResolvedTargets {
    pub fn get(&self, role: Role) -> Option<Color> {
        self.0.get(&role).copied()
    }

    /// Target for `role`, or the primary target when the role has none
    ///
    /// The flag is true when the primary target was substituted.
    pub fn for_role(&self, role: Role) -> Option<(Color, bool)> {
        match self.get(role) {
            Some(color) => Some((color, false)),
            None => self.get(Role::Primary).map(|color| (color, true)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        self.0.iter().map(|(&role, &color)| (role, color))
    }
}
