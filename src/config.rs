use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::data::MAX_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Paths,
    Table,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Format::Paths => write!(f, "paths"),
            Format::Table => write!(f, "table"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErr {
    ZeroWidth,
    ZeroHeight,
    NoTrucks,
    NoPackages,
    TooLarge,
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigErr::ZeroWidth => write!(f, "Grid width must be positive"),
            ConfigErr::ZeroHeight => write!(f, "Grid height must be positive"),
            ConfigErr::NoTrucks => write!(f, "At least one truck is required"),
            ConfigErr::NoPackages => write!(f, "At least one package is required"),
            ConfigErr::TooLarge => write!(f, "Grid larger than {} cells per side", MAX_SIZE),
        }
    }
}

impl Error for ConfigErr {}

/// World parameters of one problem instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    width: usize,
    height: usize,
    trucks: usize,
    packages: usize,
}

impl Config {
    pub fn new(width: usize, height: usize, trucks: usize, packages: usize) -> Result<Self, ConfigErr> {
        if width == 0 {
            return Err(ConfigErr::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigErr::ZeroHeight);
        }
        if width > MAX_SIZE || height > MAX_SIZE {
            return Err(ConfigErr::TooLarge);
        }
        if trucks == 0 {
            return Err(ConfigErr::NoTrucks);
        }
        if packages == 0 {
            return Err(ConfigErr::NoPackages);
        }
        Ok(Config {
            width,
            height,
            trucks,
            packages,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn trucks(&self) -> usize {
        self.trucks
    }

    pub fn packages(&self) -> usize {
        self.packages
    }
}
