pub mod generator;
pub mod output;
pub mod script;
pub mod sql;

pub use generator::{case, generate, GeneratorConfig, FIT_WIDTHS, SEED_ROWS, SWEEP_MAX, SWEEP_MIN};
pub use output::{ScriptTarget, WriteError};
pub use script::{Directive, Line, Script, Substitution};
pub use sql::{SessionValue, Statement};
