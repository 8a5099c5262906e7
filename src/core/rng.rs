//! RNG module - target cell selection
//!
//! A simple seeded LCG keeps target selection deterministic under test.
//! Target picking uses rejection sampling: redraw while the draw matches
//! the previously shown cell, so the same cell never lights up twice in a
//! row. The exclusion is waived for single-cell grids, where it would be
//! unsatisfiable.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Pick the next target cell in `[0, total_cells)`.
///
/// `previous` is excluded from the draw when the grid has more than one
/// cell. With exactly one cell the lone cell is returned, repeats allowed.
pub fn pick_target(rng: &mut SimpleRng, previous: Option<u32>, total_cells: u32) -> u32 {
    debug_assert!(total_cells > 0);
    if total_cells <= 1 {
        return 0;
    }

    let Some(prev) = previous else {
        return rng.next_range(total_cells);
    };

    loop {
        let cell = rng.next_range(total_cells);
        if cell != prev {
            return cell;
        }
    }
}
