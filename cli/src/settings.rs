use std::fs;
use std::path::Path;

use anyhow::Context;
use prizegrid_core::{CellCount, Coord, RoundConfig};
use serde::Deserialize;

/// Command line values that win over the config file.
#[derive(clap::Args, Debug, Default, Clone, PartialEq)]
pub(crate) struct Overrides {
    /// Rows in the grid [default: 3]
    #[arg(long)]
    pub rows: Option<Coord>,

    /// Columns in the grid [default: 5]
    #[arg(long)]
    pub columns: Option<Coord>,

    /// Prizes hidden in every round [default: 3]
    #[arg(long)]
    pub prizes: Option<CellCount>,

    /// Reveals allowed per round [default: 6]
    #[arg(long)]
    pub tries: Option<CellCount>,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    rows: Option<Coord>,
    columns: Option<Coord>,
    prizes: Option<CellCount>,
    max_tries: Option<CellCount>,
}

/// Defaults, then the config file, then the command line.
pub(crate) fn load(path: Option<&Path>, overrides: &Overrides) -> anyhow::Result<RoundConfig> {
    let file = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read config file {}", path.display()))?;
            parse(&text).with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => ConfigFile::default(),
    };

    let config = merge(file, overrides);
    config
        .validate()
        .context("Settings do not describe a playable round")
}

fn parse(text: &str) -> Result<ConfigFile, toml::de::Error> {
    toml::from_str(text)
}

fn merge(file: ConfigFile, overrides: &Overrides) -> RoundConfig {
    let defaults = RoundConfig::default();
    RoundConfig {
        rows: overrides.rows.or(file.rows).unwrap_or(defaults.rows),
        columns: overrides.columns.or(file.columns).unwrap_or(defaults.columns),
        prizes: overrides.prizes.or(file.prizes).unwrap_or(defaults.prizes),
        max_tries: overrides
            .tries
            .or(file.max_tries)
            .unwrap_or(defaults.max_tries),
    }
}
