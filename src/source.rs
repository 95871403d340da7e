// src/source.rs
//
// "Obtain raw text for table X." The rest of the app never cares how
// the bytes arrive — local directory or remote host, one fetch per
// table per view activation, no retry here.

use std::{error::Error, fs, path::PathBuf};

use crate::config::consts::DEFAULT_DATA_DIR;
use crate::net;

/// The five logical tables behind the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    Coaches,
    Profiles,
    Reviews,
    About,
    Plans,
}

impl Table {
    pub const ALL: [Table; 5] = [
        Table::Coaches,
        Table::Profiles,
        Table::Reviews,
        Table::About,
        Table::Plans,
    ];

    // File names match the upstream data set verbatim.
    pub fn file_name(self) -> &'static str {
        match self {
            Table::Coaches => "coaches.csv",
            Table::Profiles => "coachesProfile.csv",
            Table::Reviews => "reviews.csv",
            Table::About => "about_me.csv",
            Table::Plans => "plans.csv",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Dir(PathBuf),
    Remote,
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Dir(PathBuf::from(DEFAULT_DATA_DIR))
    }
}

impl DataSource {
    pub fn fetch(&self, table: Table) -> Result<String, Box<dyn Error>> {
        match self {
            DataSource::Dir(dir) => {
                let path = dir.join(table.file_name());
                fs::read_to_string(&path)
                    .map_err(|e| format!("Read {}: {e}", path.display()).into())
            }
            DataSource::Remote => net::http_get(table.file_name()),
        }
    }
}
