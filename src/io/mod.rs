mod script;

pub use script::{ScriptReport, parse_script, run_script};
