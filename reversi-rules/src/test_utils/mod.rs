//! Utilities used for testing and benchmarking.

mod perft;
pub use perft::run_perft;

mod script;
pub use script::{play_script, ScriptError};
