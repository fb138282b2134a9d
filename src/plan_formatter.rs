use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{format, Cell, Row, Table};

use crate::config::Format;
use crate::data::Location;
use crate::instance::Instance;
use crate::plan::Plan;

pub struct PlanFormatter<'a> {
    instance: &'a Instance,
    plan: &'a Plan,
    format: Format,
}

impl<'a> PlanFormatter<'a> {
    pub fn new(instance: &'a Instance, plan: &'a Plan, format: Format) -> Self {
        Self {
            instance,
            plan,
            format,
        }
    }

    fn write_paths(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cost: {}", self.plan.cost())?;
        writeln!(f, "Moves: {}", self.plan.moves())?;
        writeln!(f)?;
        for truck in 0..self.instance.config.trucks() {
            writeln!(f, "Truck {} Path  : {}", truck, join(&self.plan.truck_path(truck)))?;
        }
        writeln!(f)?;
        for package in 0..self.instance.config.packages() {
            writeln!(f, "Package {} Path: {}", package, join(&self.plan.package_path(package)))?;
        }
        Ok(())
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        let mut titles = vec![Cell::new("Round")];
        for truck in 0..self.instance.config.trucks() {
            titles.push(Cell::new(&format!("Truck {}", truck)));
        }
        for package in 0..self.instance.config.packages() {
            titles.push(Cell::new(&format!("Package {}", package)));
        }
        titles.push(Cell::new("Actions"));
        table.set_titles(Row::new(titles));

        let rounds = self.plan.rounds();
        for (i, state) in self.plan.states().iter().enumerate() {
            let placement = state.placement();
            let mut cells = vec![Cell::new(&i.to_string())];
            for pos in placement.truck_positions() {
                cells.push(Cell::new(&pos.to_string()));
            }
            for (package, pos) in placement.package_positions().iter().enumerate() {
                // * marks a package on a truck
                let held = if placement.is_held(package) { "*" } else { "" };
                cells.push(Cell::new(&format!("{}{}", pos, held)));
            }
            // the round that led to this state
            let actions = if i == 0 {
                String::new()
            } else {
                rounds[i - 1].to_string()
            };
            cells.push(Cell::new(&actions));
            table.add_row(Row::new(cells));
        }
        table
    }
}

fn join(locations: &[Location]) -> String {
    locations
        .iter()
        .map(|loc| loc.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Display for PlanFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Paths => self.write_paths(f),
            Format::Table => {
                writeln!(f, "Cost: {}", self.plan.cost())?;
                writeln!(f, "Moves: {}", self.plan.moves())?;
                writeln!(f)?;
                write!(f, "{}", self.table())
            }
        }
    }
}

impl Debug for PlanFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Plan {
    pub fn format<'a>(&'a self, instance: &'a Instance, format: Format) -> PlanFormatter<'a> {
        PlanFormatter::new(instance, self, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::Config;
    use crate::Solve;

    fn loc(x: i32, y: i32) -> Location {
        Location::new(x, y)
    }

    fn two_cells() -> (Instance, Plan) {
        let config = Config::new(2, 1, 1, 1).unwrap();
        let instance = Instance::new(config, vec![loc(0, 0)], vec![loc(1, 0)], vec![loc(0, 0)]).unwrap();
        let plan = instance.solve(None, false).unwrap().plan.unwrap();
        (instance, plan)
    }

    #[test]
    fn formatting_paths() {
        let (instance, plan) = two_cells();
        let expected = r"
Cost: 4
Moves: 4

Truck 0 Path  : (0,0), (1,0), (1,0), (0,0), (0,0)

Package 0 Path: (1,0), (1,0), (1,0), (0,0), (0,0)
"
        .trim_start();
        assert_eq!(plan.format(&instance, Format::Paths).to_string(), expected);
        assert_eq!(format!("{:?}", PlanFormatter::new(&instance, &plan, Format::Paths)), expected);
    }

    #[test]
    fn formatting_table() {
        let (instance, plan) = two_cells();
        let out = plan.format(&instance, Format::Table).to_string();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Cost: 4");
        assert!(lines.iter().any(|l| l.contains("Round") && l.contains("Package 0")));
        assert!(lines.iter().any(|l| l.contains("T0 pick up P0")));
        // held after the pickup
        assert!(lines.iter().any(|l| l.contains("(1,0)*")));
        assert!(lines.iter().any(|l| l.contains("T0 drop off P0")));
    }
}
