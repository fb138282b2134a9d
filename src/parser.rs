use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::{Config, ConfigErr};
use crate::data::Location;
use crate::instance::{Instance, InstanceErr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    UnknownKeyword(usize, String),
    ArgCount(usize, usize),
    Number(usize, String),
    NoGrid,
    MultipleGrids(usize),
    Config(ConfigErr),
    Instance(InstanceErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::UnknownKeyword(line, ref word) => {
                write!(f, "Unknown keyword `{}` on line {}", word, line)
            }
            ParserErr::ArgCount(line, expected) => {
                write!(f, "Expected {} numbers on line {}", expected, line)
            }
            ParserErr::Number(line, ref word) => {
                write!(f, "Invalid number `{}` on line {}", word, line)
            }
            ParserErr::NoGrid => write!(f, "No grid line"),
            ParserErr::MultipleGrids(line) => write!(f, "Second grid line on line {}", line),
            ParserErr::Config(ref err) => write!(f, "{}", err),
            ParserErr::Instance(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<ConfigErr> for ParserErr {
    fn from(err: ConfigErr) -> Self {
        ParserErr::Config(err)
    }
}

impl From<InstanceErr> for ParserErr {
    fn from(err: InstanceErr) -> Self {
        ParserErr::Instance(err)
    }
}

impl FromStr for Instance {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Format:
/// ```text
/// # comment
/// grid <width> <height>
/// truck <x> <y>
/// package <x> <y> <dest x> <dest y>
/// ```
pub(crate) fn parse(text: &str) -> Result<Instance, ParserErr> {
    let mut grid = None;
    let mut trucks = Vec::new();
    let mut packages = Vec::new();
    let mut destinations = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_num = i + 1;
        let line = match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        };

        let mut words = line.split_whitespace();
        let keyword = match words.next() {
            Some(keyword) => keyword,
            None => continue,
        };
        let args = words.collect::<Vec<_>>();

        match keyword {
            "grid" => {
                let nums = parse_numbers(line_num, &args, 2)?;
                if grid.is_some() {
                    return Err(ParserErr::MultipleGrids(line_num));
                }
                grid = Some((nums[0] as usize, nums[1] as usize));
            }
            "truck" => {
                let nums = parse_numbers(line_num, &args, 2)?;
                trucks.push(Location::new(nums[0], nums[1]));
            }
            "package" => {
                let nums = parse_numbers(line_num, &args, 4)?;
                packages.push(Location::new(nums[0], nums[1]));
                destinations.push(Location::new(nums[2], nums[3]));
            }
            _ => return Err(ParserErr::UnknownKeyword(line_num, keyword.to_string())),
        }
    }

    let (width, height) = grid.ok_or(ParserErr::NoGrid)?;
    let config = Config::new(width, height, trucks.len(), packages.len())?;
    Ok(Instance::new(config, trucks, packages, destinations)?)
}

/// Non-negative, anything else is a typo or outside the grid anyway.
fn parse_numbers(line_num: usize, args: &[&str], expected: usize) -> Result<Vec<i32>, ParserErr> {
    if args.len() != expected {
        return Err(ParserErr::ArgCount(line_num, expected));
    }
    args.iter()
        .map(|word| match word.parse::<u16>() {
            Ok(num) => Ok(i32::from(num)),
            Err(_) => Err(ParserErr::Number(line_num, word.to_string())),
        })
        .collect()
}
