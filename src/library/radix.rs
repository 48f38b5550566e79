//! Snapshot of the Radix color scales the Citable palette is matched against

use super::{ColorLibrary, ColorScale, Mode};
use crate::Result;

const SKY: [&str; 12] = [
    "#f9feff", "#f1fafd", "#e1f6fd", "#d1f0fa", "#bee7f5", "#a9daed", "#8dcae3", "#60b3d7",
    "#7ce2fe", "#74daf8", "#00749e", "#1d3e56",
];
const SKY_DARK: [&str; 12] = [
    "#0d141f", "#111a27", "#112840", "#113555", "#154467", "#1b537b", "#1f6692", "#197cae",
    "#7ce2fe", "#a8eeff", "#75c7f0", "#c2f3ff",
];

const BLUE: [&str; 12] = [
    "#fbfdff", "#f4faff", "#e6f4fe", "#d5efff", "#c2e5ff", "#acd8fc", "#8ec8f6", "#5eb1ef",
    "#0090ff", "#0588f0", "#0d74ce", "#113264",
];
const BLUE_DARK: [&str; 12] = [
    "#0d1520", "#111927", "#0d2847", "#003362", "#004074", "#104d87", "#205d9e", "#2870bd",
    "#0090ff", "#3b9eff", "#70b8ff", "#c2e6ff",
];

const CYAN: [&str; 12] = [
    "#fafdfe", "#f2fafb", "#def7f9", "#caf1f6", "#b5e9f0", "#9ddde7", "#7dcedc", "#3db9cf",
    "#00a2c7", "#0797b9", "#107d98", "#0d3c48",
];
const CYAN_DARK: [&str; 12] = [
    "#0b161a", "#101b20", "#082c36", "#003848", "#004558", "#045468", "#12677e", "#11809c",
    "#00a2c7", "#23afd0", "#4ccce6", "#b6ecf7",
];

const INDIGO: [&str; 12] = [
    "#fdfdfe", "#f7f9ff", "#edf2fe", "#e1e9ff", "#d2deff", "#c1d0ff", "#abbdf9", "#8da4ef",
    "#3e63dd", "#3358d4", "#3a5bc7", "#1f2d5c",
];
const INDIGO_DARK: [&str; 12] = [
    "#11131f", "#141726", "#182449", "#1d2e62", "#253974", "#304384", "#3a4f97", "#435db1",
    "#3e63dd", "#5472e4", "#9eb1ff", "#d6e1ff",
];

const SLATE: [&str; 12] = [
    "#fcfcfd", "#f9f9fb", "#f0f0f3", "#e8e8ec", "#e0e1e6", "#d9d9e0", "#cdced6", "#b9bbc6",
    "#8b8d98", "#80838d", "#60646c", "#1c2024",
];
const SLATE_DARK: [&str; 12] = [
    "#111113", "#18191b", "#212225", "#272a2d", "#2e3135", "#363a3f", "#43484e", "#5a6169",
    "#696e77", "#777b84", "#b0b4ba", "#edeef0",
];

const SCALES: [(&str, &[&str; 12], &[&str; 12]); 5] = [
    ("sky", &SKY, &SKY_DARK),
    ("blue", &BLUE, &BLUE_DARK),
    ("cyan", &CYAN, &CYAN_DARK),
    ("indigo", &INDIGO, &INDIGO_DARK),
    ("slate", &SLATE, &SLATE_DARK),
];

pub(super) fn load() -> Result<ColorLibrary> {
    let mut library = ColorLibrary::new();
    for (name, light, dark) in SCALES {
        library.insert(Mode::Light, ColorScale::from_hex(name, light)?);
        library.insert(Mode::Dark, ColorScale::from_hex(name, dark)?);
    }
    Ok(library)
}
