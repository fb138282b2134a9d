use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::config::{Config, ConfigErr};
use crate::data::Location;
use crate::grid::Grid;
use crate::state::{Placement, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Truck,
    Package,
    Destination,
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Entity::Truck => write!(f, "truck"),
            Entity::Package => write!(f, "package"),
            Entity::Destination => write!(f, "destination"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceErr {
    Config(ConfigErr),
    Count {
        entity: Entity,
        expected: usize,
        found: usize,
    },
    OutOfBounds {
        entity: Entity,
        index: usize,
        location: Location,
    },
}

impl Display for InstanceErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            InstanceErr::Config(ref err) => write!(f, "{}", err),
            InstanceErr::Count {
                entity,
                expected,
                found,
            } => write!(f, "Expected {} {} locations, found {}", expected, entity, found),
            InstanceErr::OutOfBounds {
                entity,
                index,
                location,
            } => write!(f, "The {} {} at {} is outside the grid", entity, index, location),
        }
    }
}

impl Error for InstanceErr {}

impl From<ConfigErr> for InstanceErr {
    fn from(err: ConfigErr) -> Self {
        InstanceErr::Config(err)
    }
}

/// The grid, the destinations and the initial state.
/// Nothing here changes during the search.
#[derive(Debug, Clone)]
pub struct Instance {
    pub(crate) config: Config,
    pub(crate) grid: Grid,
    pub(crate) destinations: Vec<Location>,
    pub(crate) initial: State,
}

impl Instance {
    pub fn new(
        config: Config,
        trucks: Vec<Location>,
        packages: Vec<Location>,
        destinations: Vec<Location>,
    ) -> Result<Self, InstanceErr> {
        let grid = Grid::new(config.width(), config.height());

        let groups = [
            (Entity::Truck, &trucks, config.trucks()),
            (Entity::Package, &packages, config.packages()),
            (Entity::Destination, &destinations, config.packages()),
        ];
        for &(entity, locations, expected) in &groups {
            if locations.len() != expected {
                return Err(InstanceErr::Count {
                    entity,
                    expected,
                    found: locations.len(),
                });
            }
            if let Some((index, &location)) = locations
                .iter()
                .enumerate()
                .find(|&(_, &loc)| !grid.contains(loc))
            {
                return Err(InstanceErr::OutOfBounds {
                    entity,
                    index,
                    location,
                });
            }
        }

        Ok(Self::from_parts(config, grid, trucks, packages, destinations))
    }

    /// Callers guarantee the locations are valid for the config.
    pub(crate) fn from_parts(
        config: Config,
        grid: Grid,
        trucks: Vec<Location>,
        packages: Vec<Location>,
        destinations: Vec<Location>,
    ) -> Self {
        let initial = State::initial(Placement::new(trucks, packages));
        Instance {
            config,
            grid,
            destinations,
            initial,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn destinations(&self) -> &[Location] {
        &self.destinations
    }

    pub fn initial_state(&self) -> &State {
        &self.initial
    }
}

impl Display for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid: {}x{}", self.grid.width(), self.grid.height())?;
        for (i, pos) in self.initial.truck_positions().iter().enumerate() {
            writeln!(f, "Truck {} Position     : {}", i, pos)?;
        }
        for (i, pos) in self.initial.package_positions().iter().enumerate() {
            writeln!(f, "Package {} Position   : {}", i, pos)?;
            writeln!(f, "Package {} Destination: {}", i, self.destinations[i])?;
        }
        Ok(())
    }
}
