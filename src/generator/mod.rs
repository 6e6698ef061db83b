//! Generation of the change-column test script.
//!
//! The generated file creates a working table with one fixed-width
//! BINARY column, then attempts to rename and resize that column to
//! every width in the sweep range. The engine under test only accepts
//! the resize at the case's fit width; every other attempt must fail
//! with `ER_UNSUPPORTED_EXTENSION`. At the fit width the script also
//! round-trips the data through a reference table on a baseline engine
//! and diffs the two tables, so the one accepted change is verified to
//! preserve contents.

use tracing::debug;

use crate::script::{Directive, Script, Substitution};
use crate::sql::{SessionValue, Statement};

/// Fit widths covered by the full script. Sweeping every width as a
/// fit width takes too long under mysqltest, so this is a
/// representative subset.
pub const FIT_WIDTHS: &[u8] = &[
    1, 2, 3, 4, 5, 6, 7, 8, 16, 31, 32, 63, 64, 127, 128, 254, 255,
];

/// Rows inserted into the working table before the sweep.
pub const SEED_ROWS: &[&str] = &["hi", "there", "people"];

/// Inclusive bounds of the widths attempted against the working table.
pub const SWEEP_MIN: u8 = 2;
pub const SWEEP_MAX: u8 = 255;

const WORKING_TABLE: &str = "t";
const REFERENCE_TABLE: &str = "ti";
const COLUMN: &str = "a";
const RENAMED_COLUMN: &str = "b";
const SCHEMA: &str = "test";
const DIFF_TABLES_INCLUDE: &str = "include/diff_tables.inc";

/// Configuration for script generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Storage engine under test.
    pub engine: String,
    /// Baseline engine backing the reference table.
    pub baseline_engine: String,
    /// Width the working table's column is created with. The same
    /// width for every case, regardless of the fit width, so low fit
    /// widths shrink the column rather than grow it.
    pub initial_width: u8,
    /// Fit widths the full script generates a case for.
    pub fit_widths: Vec<u8>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            engine: "TokuDB".to_string(),
            baseline_engine: "myisam".to_string(),
            initial_width: 100,
            fit_widths: FIT_WIDTHS.to_vec(),
        }
    }
}

/// Generate the complete test script: preamble, then one case per fit
/// width, in list order.
pub fn generate(config: &GeneratorConfig) -> Script {
    let mut script = Script::new();
    push_preamble(&mut script, config);
    for &n in &config.fit_widths {
        push_case(&mut script, config, n);
    }
    debug!(
        cases = config.fit_widths.len(),
        lines = script.len(),
        "generated full script"
    );
    script
}

/// Generate the block for a single fit width, without the preamble.
pub fn case(config: &GeneratorConfig, n: u8) -> Script {
    let mut script = Script::new();
    push_case(&mut script, config, n);
    script
}

fn push_preamble(script: &mut Script, config: &GeneratorConfig) {
    script.comment(format!(
        "this test is generated by {}",
        env!("CARGO_PKG_NAME")
    ));
    script.comment("test binary expansion + rename is hot");
    script.directive(Directive::DisableWarnings);
    script.statement(Statement::DropTable {
        tables: vec![WORKING_TABLE.to_string(), REFERENCE_TABLE.to_string()],
        if_exists: true,
    });
    script.directive(Directive::EnableWarnings);
    script.statement(Statement::SetSession {
        variable: "DEFAULT_STORAGE_ENGINE".to_string(),
        value: SessionValue::Str(config.engine.clone()),
    });
    // Slow alter would let every width change through as a full table
    // rebuild; the sweep only means something on the hot path.
    script.statement(Statement::SetSession {
        variable: format!("{}_DISABLE_SLOW_ALTER", config.engine.to_uppercase()),
        value: SessionValue::Int(1),
    });
}

fn push_case(script: &mut Script, config: &GeneratorConfig, n: u8) {
    let start = script.len();

    script.statement(Statement::CreateBinaryTable {
        table: WORKING_TABLE.to_string(),
        column: COLUMN.to_string(),
        width: config.initial_width,
    });
    for value in SEED_ROWS {
        script.statement(Statement::InsertValue {
            table: WORKING_TABLE.to_string(),
            value: (*value).to_string(),
        });
    }

    for i in SWEEP_MIN..=SWEEP_MAX {
        if i == n {
            push_reference_setup(script, config, i);
        } else {
            // The server names itself in the error text; normalize it
            // so the recorded result is stable across distributions.
            script.directive(Directive::ReplaceRegex(vec![
                Substitution::new("MariaDB", "XYZ"),
                Substitution::new("MySQL", "XYZ"),
            ]));
            script.directive(Directive::ExpectError(
                "ER_UNSUPPORTED_EXTENSION".to_string(),
            ));
        }

        script.statement(Statement::ChangeColumn {
            table: WORKING_TABLE.to_string(),
            old: COLUMN.to_string(),
            new: RENAMED_COLUMN.to_string(),
            width: i,
        });

        if i == n {
            push_reference_check(script, i);
        }
    }

    script.statement(Statement::DropTable {
        tables: vec![WORKING_TABLE.to_string()],
        if_exists: false,
    });

    debug!(n, lines = script.len() - start, "generated case");
}

/// Reference table setup at the fit width: clone the working table's
/// schema onto the baseline engine, copy its rows, and mirror the
/// rename-away-and-back the working table is about to perform.
fn push_reference_setup(script: &mut Script, config: &GeneratorConfig, width: u8) {
    script.statement(Statement::CreateLike {
        table: REFERENCE_TABLE.to_string(),
        source: WORKING_TABLE.to_string(),
    });
    script.statement(Statement::AlterEngine {
        table: REFERENCE_TABLE.to_string(),
        engine: config.baseline_engine.clone(),
    });
    script.statement(Statement::InsertSelect {
        table: REFERENCE_TABLE.to_string(),
        source: WORKING_TABLE.to_string(),
    });
    script.statement(Statement::ChangeColumn {
        table: REFERENCE_TABLE.to_string(),
        old: COLUMN.to_string(),
        new: RENAMED_COLUMN.to_string(),
        width,
    });
    script.statement(Statement::ChangeColumn {
        table: REFERENCE_TABLE.to_string(),
        old: RENAMED_COLUMN.to_string(),
        new: COLUMN.to_string(),
        width,
    });
}

/// After the one accepted width change: restore the original column
/// name, diff the working table against the reference table, and drop
/// the reference table.
fn push_reference_check(script: &mut Script, width: u8) {
    script.statement(Statement::ChangeColumn {
        table: WORKING_TABLE.to_string(),
        old: RENAMED_COLUMN.to_string(),
        new: COLUMN.to_string(),
        width,
    });
    script.directive(Directive::Let {
        var: "diff_tables".to_string(),
        value: format!("{SCHEMA}.{WORKING_TABLE}, {SCHEMA}.{REFERENCE_TABLE}"),
    });
    script.directive(Directive::Source(DIFF_TABLES_INCLUDE.to_string()));
    script.statement(Statement::DropTable {
        tables: vec![REFERENCE_TABLE.to_string()],
        if_exists: false,
    });
}
