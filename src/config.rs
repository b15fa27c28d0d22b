use std::path::PathBuf;

use crate::persistence::DEFAULT_FILE_NAME;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub inventory_path: PathBuf,
}

impl Config {
    /// Build the configuration from the command line arguments, program name
    /// excluded. The first argument, when given, names the inventory file.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let inventory_path = args
            .into_iter()
            .next()
            .map_or_else(|| PathBuf::from(DEFAULT_FILE_NAME), PathBuf::from);
        Self { inventory_path }
    }
}
