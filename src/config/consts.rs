// src/config/consts.rs

// Net config (remote data source)
pub const HOST: &str = "coachscout.app";
pub const PREFIX: &str = "/data/";

// Local data source
pub const DEFAULT_DATA_DIR: &str = "data";

// Session log
pub const LOG_FILE: &str = ".scout/debug.log";

// GUI defaults
pub const WINDOW_W: f32 = 1000.0;
pub const WINDOW_H: f32 = 680.0;
