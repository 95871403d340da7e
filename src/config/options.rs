// src/config/options.rs

use std::path::PathBuf;

use super::consts::DEFAULT_DATA_DIR;
use crate::source::DataSource;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Where table text comes from: a local directory, or the remote host.
    pub data_dir: PathBuf,
    pub remote: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            remote: false,
        }
    }
}

impl AppOptions {
    pub fn source(&self) -> DataSource {
        if self.remote {
            DataSource::Remote
        } else {
            DataSource::Dir(self.data_dir.clone())
        }
    }
}
