//! Library side of the `cerkas` command line viewer.

pub mod logging;
pub mod output;
pub mod settings;
