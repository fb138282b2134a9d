use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use log::debug;

use crate::instance::Instance;
use crate::LoadInstance;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl LoadInstance for str {
    fn load_instance(&self) -> Result<Instance, Box<dyn Error>> {
        debug!("Loading instance {}", self);
        let text = read_file(self)?;
        let instance: Instance = text.parse()?;
        Ok(instance)
    }
}
