use std::io::{self, Write};

use fulkerson::solver::Step;
use fulkerson::{FlowNetwork, MaxFlow, Solver};
use itertools::Itertools;

/// Value, then one flow per arc in input order, then the 1-based source side of the minimum cut.
pub fn write_report(out: &mut impl Write, solution: &MaxFlow) -> io::Result<()> {
    writeln!(out, "{}", solution.value)?;
    for flow in &solution.arc_flows {
        writeln!(out, "{}", flow)?;
    }
    writeln!(out, "{}", solution.min_cut.vertices().map(|v| v.index() + 1).join(" "))
}

fn write_residuals(out: &mut impl Write, network: &FlowNetwork) -> io::Result<()> {
    for (.., arc) in network.arcs() {
        writeln!(out, "{} {}", arc.forward_residual(), arc.backward_residual())?;
    }
    Ok(())
}

/// Run `solver` to completion, printing every round.
///
/// Each round lists `forward backward` residual capacities per arc. A round that augments then prints
/// `0 bottleneck length` and the signed 1-based arc numbers along the path; the last round prints
/// `1 reachable` with the size of the source side.
pub fn write_trace(out: &mut impl Write, solver: &mut Solver<'_>) -> anyhow::Result<()> {
    loop {
        write_residuals(out, solver.network())?;

        match solver.step()? {
            Step::Augmented(augmentation) => {
                writeln!(out, "0 {} {}", augmentation.bottleneck, augmentation.path.len())?;
                writeln!(out, "{}", augmentation.path.arcs().iter().map(|arc| arc.signed_number()).join(" "))?;
            }
            Step::Done(cut) => {
                writeln!(out, "1 {}", cut.len())?;
                return Ok(());
            }
        }
    }
}
