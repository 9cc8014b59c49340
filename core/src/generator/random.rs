use super::*;

/// Scatters mines uniformly at random, keeping the start cell (and, depending
/// on the exclusion, its row and column) clear.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
    start: Coord2,
    exclusion: StartExclusion,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64, start: Coord2, exclusion: StartExclusion) -> Self {
        Self {
            seed,
            start,
            exclusion,
        }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, options: GameOptions) -> MineLayout {
        use rand::prelude::*;

        let size = options.size();
        let mut layout = MineLayout::empty(size);

        let available = self.exclusion.available_cells(size);
        let mines = if options.mines > available {
            log::warn!(
                "Not enough room for mines, requested {} but only {} cells are allowed",
                options.mines,
                available
            );
            available
        } else {
            options.mines
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        while layout.mine_count() < mines {
            let coords = (rng.random_range(0..size.0), rng.random_range(0..size.1));
            if self.exclusion.excludes(self.start, coords) {
                continue;
            }
            layout.place_mine(coords);
        }

        log::debug!(
            "Placed {} mines avoiding {:?} ({:?})",
            layout.mine_count(),
            self.start,
            self.exclusion
        );
        layout
    }
}
