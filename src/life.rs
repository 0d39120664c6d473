pub(crate) mod grid;

use log::debug;

pub use grid::{Grid, GridError};

/// Generate a pseudorandom seed for the randomizer.
pub fn generate_seed() -> Result<(u64, u64), getrandom::Error> {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    getrandom(&mut seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}

/// Birth and survival thresholds. The default is Conway's B3/S23.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub survive_min: usize,
    pub survive_max: usize,
    pub birth: usize,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            survive_min: 2,
            survive_max: 3,
            birth: 3,
        }
    }
}

impl Rule {
    pub fn next_state(&self, alive: bool, neighbors: usize) -> bool {
        if alive {
            (self.survive_min..=self.survive_max).contains(&neighbors)
        } else {
            neighbors == self.birth
        }
    }
}

/// The automaton: the live grid plus a scratch grid of the same size.
pub struct Life {
    cells: Grid,
    scratch: Grid,
    rule: Rule,
    generation: u64,
}

impl Life {
    pub fn new(width: usize, height: usize, rule: Rule) -> Result<Self, GridError> {
        let cells = Grid::new(width, height)?;
        Ok(Self {
            scratch: cells.clone(),
            cells,
            rule,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.cells
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances one generation. Every cell is evaluated against the grid as it
    /// was before the step.
    pub fn step(&mut self) {
        let width = self.cells.width();
        for (i, next) in self.scratch.cells_mut().iter_mut().enumerate() {
            let (x, y) = (i % width, i / width);
            let alive = self.cells.cells()[i];
            *next = self.rule.next_state(alive, self.cells.live_neighbors(x, y));
        }
        // Write into scratch, since we're still reading from `cells`
        std::mem::swap(&mut self.scratch, &mut self.cells);
        self.generation += 1;
        debug!(
            "generation {} has {} live cells",
            self.generation,
            self.cells.population()
        );
    }

    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        let alive = self.cells.toggle(x, y)?;
        debug!("cell ({x}, {y}) is now {}", if alive { "alive" } else { "dead" });
        Ok(alive)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
    }

    pub fn randomize(&mut self) -> Result<(), getrandom::Error> {
        self.randomize_with_seed(generate_seed()?);
        Ok(())
    }

    /// Fills roughly one cell in ten, deterministically for a given seed.
    pub fn randomize_with_seed(&mut self, seed: (u64, u64)) {
        let mut rng: randomize::PCG32 = seed.into();
        for cell in self.cells.cells_mut() {
            *cell = randomize::f32_half_open_right(rng.next_u32()) > 0.9;
        }
        self.generation = 0;
        debug!("randomized grid has {} live cells", self.cells.population());
    }
}
