use core::fmt;

use itertools::Itertools;

use super::{ModeReport, Report, RoleReport};

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, mode) in self.modes.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{mode}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ModeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} MODE", self.mode.to_string().to_uppercase())?;
        writeln!(
            f,
            "Targets: {}",
            self.targets
                .iter()
                .map(|(role, color)| format!("{role} {color}"))
                .join(", ")
        )?;
        for role in &self.roles {
            writeln!(f)?;
            write!(f, "{role}")?;
        }
        writeln!(f)?;
        writeln!(f, "Best overall scales (lower total ΔE is better):")?;
        for total in &self.totals {
            writeln!(f, "  {}  total ΔE={:.2}", total.scale, total.total)?;
        }
        Ok(())
    }
}

impl fmt::Display for RoleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = if self.fallback { ", from primary" } else { "" };
        writeln!(f, "Role: {}  (target {}{origin})", self.role, self.target)?;
        if self.matches.is_empty() {
            writeln!(f, "  no matching scales")?;
        }
        for found in &self.matches {
            writeln!(
                f,
                "  {}-{}  {}  ΔE={:.2}",
                found.scale, found.step, found.color, found.distance
            )?;
        }
        Ok(())
    }
}
