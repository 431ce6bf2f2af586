//! Plain-text state reports.

use std::fmt;

use swarm_core::state::{SwarmSnapshot, UnitView};

/// Multi-line report: a header with the frame and formation, then one block
/// per unit with position, load and battery life.
pub struct StateReport<'a>(pub &'a SwarmSnapshot);

impl fmt::Display for StateReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        match snapshot.frame {
            Some(frame) => write!(f, "== frame {frame}")?,
            None => write!(f, "== initial")?,
        }
        match snapshot.formation {
            Some(kind) => write!(f, " | formation: {kind}")?,
            None => write!(f, " | formation: none")?,
        }
        writeln!(
            f,
            " | alive: {}/{} ==",
            snapshot.alive_count(),
            snapshot.units.len()
        )?;

        for unit in &snapshot.units {
            write_unit(f, unit)?;
        }
        Ok(())
    }
}

/// Render a snapshot as a `StateReport` string.
pub fn format_state(snapshot: &SwarmSnapshot) -> String {
    StateReport(snapshot).to_string()
}

fn write_unit(f: &mut fmt::Formatter<'_>, unit: &UnitView) -> fmt::Result {
    let p = unit.position;
    let status = if unit.destroyed { " [destroyed]" } else { "" };
    writeln!(f, "Unit {}{status}:", unit.id)?;
    writeln!(f, "  position: [{:.3}, {:.3}, {:.3}]", p.x, p.y, p.z)?;
    writeln!(f, "  load: {}", unit.load)?;
    writeln!(f, "  battery life: {}", unit.battery_life)
}
