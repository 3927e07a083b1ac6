//! Wording strategies for turn-by-turn instructions.
//!
//! The step synthesizer assembles its instruction text from short phrase
//! fragments. The fragments come from an [`InstructionStyle`], so callers
//! (and tests) can swap the default randomized wording for a deterministic
//! one.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Compass direction phrases, clockwise from north.
const COMPASS: [&str; 8] = [
    "north",
    "northeast",
    "east",
    "southeast",
    "south",
    "southwest",
    "west",
    "northwest",
];

const ROADS: [&str; 4] = [
    "along the main road",
    "along the service road",
    "along the footpath",
    "along the side street",
];

const MANEUVERS: [&str; 4] = [
    "continue straight",
    "turn left",
    "turn right",
    "make a U-turn",
];

/// Supplies the phrase fragments a step instruction is assembled from.
///
/// The wording is cosmetic and not part of the routing contract;
/// implementations are free to be random or deterministic.
pub trait InstructionStyle {
    /// A compass direction phrase, e.g. "northeast".
    fn compass(&mut self) -> &'static str;

    /// A road description phrase, e.g. "along the main road".
    fn road(&mut self) -> &'static str;

    /// A maneuver phrase, e.g. "turn left".
    fn maneuver(&mut self) -> &'static str;
}

/// Default style: picks uniformly from fixed phrase tables.
pub struct RandomStyle {
    rng: SmallRng,
}

impl RandomStyle {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// A reproducible style, for diagnostics.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionStyle for RandomStyle {
    fn compass(&mut self) -> &'static str {
        COMPASS[self.rng.gen_range(0..COMPASS.len())]
    }

    fn road(&mut self) -> &'static str {
        ROADS[self.rng.gen_range(0..ROADS.len())]
    }

    fn maneuver(&mut self) -> &'static str {
        MANEUVERS[self.rng.gen_range(0..MANEUVERS.len())]
    }
}
