pub mod config_files;
pub mod seed_data;

pub use config_files::*;
pub use seed_data::*;
