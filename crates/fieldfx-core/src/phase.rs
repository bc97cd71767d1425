//! Phase state machine shared by all variants.
//!
//! A variant is a [`PhaseTable`]: for each phase it uses, a [`PhaseRule`]
//! holding plain function pointers for entry, per-frame update, drawing and
//! the transition predicate. The engine drives whichever table it was built
//! with.

use crate::draw::DrawList;
use crate::scene::{Frame, Scene};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// A single disc breathing before it bursts.
    Pulse,
    /// Bodies circling the centre.
    Orbit,
    /// Orbiters spiral into a growing central disc.
    Merge,
    /// Dots fly from the centre to their targets.
    Burst,
    /// Free, pointer-reactive simulation. Terminal.
    Reactive,
}

impl Phase {
    pub const ALL: [Phase; 5] = [Phase::Pulse, Phase::Orbit, Phase::Merge, Phase::Burst, Phase::Reactive];

    /// Position in the one-directional ordering; transitions only ever
    /// increase it.
    pub fn ordinal(self) -> usize {
        match self {
            Phase::Pulse => 0,
            Phase::Orbit => 1,
            Phase::Merge => 2,
            Phase::Burst => 3,
            Phase::Reactive => 4,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Reactive
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Pulse => "pulse",
            Phase::Orbit => "orbit",
            Phase::Merge => "merge",
            Phase::Burst => "burst",
            Phase::Reactive => "reactive",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy)]
pub struct PhaseRule {
    /// Runs once when the phase becomes active; may replace the particle
    /// batch.
    pub enter: fn(&mut Scene),
    pub update: fn(&mut Scene, &Frame),
    pub draw: fn(&Scene, &Frame, &mut DrawList),
    /// Evaluated once per frame after update and draw.
    pub next: fn(&Scene) -> Option<Phase>,
}

impl PhaseRule {
    pub fn noop_enter(_: &mut Scene) {}

    pub fn terminal(_: &Scene) -> Option<Phase> {
        None
    }
}

impl std::fmt::Debug for PhaseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhaseRule").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct PhaseTable {
    initial: Phase,
    rules: [Option<PhaseRule>; 5],
}

impl PhaseTable {
    pub fn new(initial: Phase) -> Self {
        Self {
            initial,
            rules: [None; 5],
        }
    }

    pub fn with(mut self, phase: Phase, rule: PhaseRule) -> Self {
        self.rules[phase.ordinal()] = Some(rule);
        self
    }

    pub fn initial(&self) -> Phase {
        self.initial
    }

    pub fn rule(&self, phase: Phase) -> Option<&PhaseRule> {
        self.rules[phase.ordinal()].as_ref()
    }

    pub fn phases(&self) -> impl Iterator<Item = Phase> + '_ {
        Phase::ALL.into_iter().filter(|p| self.rules[p.ordinal()].is_some())
    }
}
