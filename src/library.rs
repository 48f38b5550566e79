use std::collections::{BTreeMap, HashMap};

use derive_more::Display;

use crate::Result;
use crate::color_ops::Color;

mod radix;

/// Light or dark rendering of a palette
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

/// One hue ramp of a design system: step index (normally 1..=12) to color
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    name: String,
    steps: BTreeMap<u8, Color>,
}

impl ColorScale {
    pub fn new(name: &str, steps: impl IntoIterator<Item = (u8, Color)>) -> Self {
        Self {
            name: name.to_owned(),
            steps: steps.into_iter().collect(),
        }
    }

    /// Build a scale from hex literals numbered from step 1
    pub fn from_hex(name: &str, hexes: &[&str]) -> Result<Self> {
        let mut steps = BTreeMap::new();
        for (step, hex) in (1u8..).zip(hexes) {
            steps.insert(step, Color::from_hex(hex)?);
        }
        Ok(Self {
            name: name.to_owned(),
            steps,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn step(&self, step: u8) -> Option<Color> {
        self.steps.get(&step).copied()
    }

    /// All steps in ascending step order
    pub fn steps(&self) -> impl Iterator<Item = (u8, Color)> + '_ {
        self.steps.iter().map(|(&step, &color)| (step, color))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Result of looking up a scale by name and mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleLookup<'a> {
    Found(&'a ColorScale),
    NotFound,
}

impl<'a> ScaleLookup<'a> {
    pub fn found(self) -> Option<&'a ColorScale> {
        match self {
            ScaleLookup::Found(scale) => Some(scale),
            ScaleLookup::NotFound => None,
        }
    }
}

/// Snapshot of a color library, keyed by mode then scale name
#[derive(Debug, Clone, Default)]
pub struct ColorLibrary {
    scales: HashMap<Mode, HashMap<String, ColorScale>>,
}

impl ColorLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Radix color snapshot
    pub fn radix() -> Result<Self> {
        radix::load()
    }

    /// Add or replace the variant of a scale for the given mode
    pub fn insert(&mut self, mode: Mode, scale: ColorScale) {
        self.scales
            .entry(mode)
            .or_default()
            .insert(scale.name.clone(), scale);
    }

    pub fn get_scale(&self, name: &str, mode: Mode) -> ScaleLookup<'_> {
        match self.scales.get(&mode).and_then(|scales| scales.get(name)) {
            Some(scale) => ScaleLookup::Found(scale),
            None => ScaleLookup::NotFound,
        }
    }

    /// Number of scale variants across both modes
    pub fn len(&self) -> usize {
        self.scales.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
