//! Platform paths for configuration files.

pub mod xdg_root;
