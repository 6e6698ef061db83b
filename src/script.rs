//! The generated mysqltest script: an ordered sequence of lines.
//!
//! A script mixes three kinds of lines: SQL statements executed by the
//! server, harness directives interpreted by mysqltest, and comments.
//! Lines render one per row, in insertion order, with no other
//! formatting.

use std::fmt::{Display, Write as _};
use std::io;

use crate::sql::Statement;

/// A single regex substitution inside a `--replace_regex` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub pattern: String,
    pub replacement: String,
}

impl Substitution {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

impl Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}/", self.pattern, self.replacement)
    }
}

/// A line consumed by the mysqltest harness rather than the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `--disable_warnings`
    DisableWarnings,
    /// `--enable_warnings`
    EnableWarnings,
    /// `--replace_regex /from/to/ ...`, rewrites the next statement's
    /// recorded output
    ReplaceRegex(Vec<Substitution>),
    /// `--error <code>`, declares that the next statement must fail
    /// with the named error
    ExpectError(String),
    /// `let $var=value;`
    Let { var: String, value: String },
    /// `source <path>;`, includes another harness script
    Source(String),
}

impl Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Directive::DisableWarnings => f.write_str("--disable_warnings"),
            Directive::EnableWarnings => f.write_str("--enable_warnings"),
            Directive::ReplaceRegex(substitutions) => {
                f.write_str("--replace_regex")?;
                for substitution in substitutions {
                    write!(f, " {substitution}")?;
                }
                Ok(())
            }
            Directive::ExpectError(code) => write!(f, "--error {code}"),
            Directive::Let { var, value } => write!(f, "let ${var}={value};"),
            Directive::Source(path) => write!(f, "source {path};"),
        }
    }
}

/// One emitted line of the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `# ...`, for whoever reads the generated file
    Comment(String),
    /// SQL statement, semicolon-terminated
    Statement(Statement),
    Directive(Directive),
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Comment(text) => write!(f, "# {text}"),
            Line::Statement(statement) => write!(f, "{statement};"),
            Line::Directive(directive) => write!(f, "{directive}"),
        }
    }
}

/// An ordered mysqltest script under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    lines: Vec<Line>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn comment(&mut self, text: impl Into<String>) {
        self.push(Line::Comment(text.into()));
    }

    pub fn statement(&mut self, statement: Statement) {
        self.push(Line::Statement(statement));
    }

    pub fn directive(&mut self, directive: Directive) {
        self.push(Line::Directive(directive));
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the whole script, one row per line, newline-terminated.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for line in &self.lines {
            writeln!(output, "{line}").unwrap();
        }
        output
    }

    /// Stream the script to a writer, same text as [`Script::render`].
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_regex_directive() {
        let directive = Directive::ReplaceRegex(vec![
            Substitution::new("MariaDB", "XYZ"),
            Substitution::new("MySQL", "XYZ"),
        ]);
        assert_eq!(
            directive.to_string(),
            "--replace_regex /MariaDB/XYZ/ /MySQL/XYZ/"
        );
    }

    #[test]
    fn test_expect_error_directive() {
        let directive = Directive::ExpectError("ER_UNSUPPORTED_EXTENSION".to_string());
        assert_eq!(directive.to_string(), "--error ER_UNSUPPORTED_EXTENSION");
    }

    #[test]
    fn test_let_directive() {
        let directive = Directive::Let {
            var: "diff_tables".to_string(),
            value: "test.t, test.ti".to_string(),
        };
        assert_eq!(directive.to_string(), "let $diff_tables=test.t, test.ti;");
    }

    #[test]
    fn test_source_directive() {
        let directive = Directive::Source("include/diff_tables.inc".to_string());
        assert_eq!(directive.to_string(), "source include/diff_tables.inc;");
    }

    #[test]
    fn test_statement_line_gets_semicolon() {
        let line = Line::Statement(Statement::DropTable {
            tables: vec!["t".to_string()],
            if_exists: false,
        });
        assert_eq!(line.to_string(), "DROP TABLE t;");
    }

    #[test]
    fn test_comment_line() {
        let line = Line::Comment("test binary expansion + rename is hot".to_string());
        assert_eq!(line.to_string(), "# test binary expansion + rename is hot");
    }

    #[test]
    fn test_render_one_row_per_line() {
        let mut script = Script::new();
        script.comment("header");
        script.directive(Directive::DisableWarnings);
        script.statement(Statement::DropTable {
            tables: vec!["t".to_string()],
            if_exists: true,
        });

        assert_eq!(
            script.render(),
            "# header\n--disable_warnings\nDROP TABLE IF EXISTS t;\n"
        );
        assert_eq!(script.len(), 3);
    }

    #[test]
    fn test_write_to_matches_render() {
        let mut script = Script::new();
        script.comment("header");
        script.directive(Directive::EnableWarnings);

        let mut buffer = Vec::new();
        script.write_to(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), script.render());
    }
}
