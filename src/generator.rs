use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::data::Location;
use crate::grid::Grid;
use crate::instance::Instance;

fn random_location<R: Rng>(rng: &mut R, config: &Config) -> Location {
    Location::new(
        rng.gen_range(0..config.width()) as i32,
        rng.gen_range(0..config.height()) as i32,
    )
}

impl Instance {
    /// Uniformly random trucks, package origins and destinations.
    /// Overlaps are allowed, a package can even start at its destination.
    pub fn random<R: Rng>(config: Config, rng: &mut R) -> Self {
        let trucks = (0..config.trucks())
            .map(|_| random_location(rng, &config))
            .collect();

        let mut packages = Vec::with_capacity(config.packages());
        let mut destinations = Vec::with_capacity(config.packages());
        for _ in 0..config.packages() {
            packages.push(random_location(rng, &config));
            destinations.push(random_location(rng, &config));
        }

        let grid = Grid::new(config.width(), config.height());
        let instance = Instance::from_parts(config, grid, trucks, packages, destinations);
        debug!("Generated instance:\n{}", instance);
        instance
    }

    /// Same seed, same instance (for a given build of `rand`).
    pub fn with_seed(config: Config, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Instance::random(config, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_bounds() {
        let config = Config::new(4, 3, 3, 5).unwrap();
        for seed in 0..20 {
            let instance = Instance::with_seed(config, seed);
            let state = instance.initial_state();
            assert_eq!(state.truck_positions().len(), 3);
            assert_eq!(state.package_positions().len(), 5);
            assert_eq!(instance.destinations().len(), 5);

            let all = state
                .truck_positions()
                .iter()
                .chain(state.package_positions())
                .chain(instance.destinations());
            for &pos in all {
                assert!(instance.grid().contains(pos));
            }
            assert!((0..5).all(|p| !state.placement().is_held(p)));
        }
    }

    #[test]
    fn seed_reproduces_instance() {
        let config = Config::new(5, 5, 2, 3).unwrap();
        let a = Instance::with_seed(config, 514_514);
        let b = Instance::with_seed(config, 514_514);
        assert_eq!(a.initial_state(), b.initial_state());
        assert_eq!(a.destinations(), b.destinations());
    }

    #[test]
    fn single_cell() {
        let config = Config::new(1, 1, 2, 2).unwrap();
        let instance = Instance::with_seed(config, 1);
        // everything is on the only cell so the instance starts solved
        assert!(instance.initial_state().is_goal(instance.destinations()));
    }
}
