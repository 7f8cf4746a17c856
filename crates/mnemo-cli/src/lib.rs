//! CLI library components for mnemo.

pub mod logging;
pub mod run;
