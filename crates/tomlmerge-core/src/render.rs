//! Renders a [`Table`] as TOML text.
//!
//! Layout:
//!
//! - **Plain keys first**: `key = value` lines for every non-table value, in
//!   insertion order, then a blank line, then sub-sections
//! - **Sections**: nested tables as `[a.b]`, non-empty arrays made only of
//!   tables as repeated `[[a.b]]`
//! - **Inline values**: other arrays as `[ 1, 2 ]`, tables inside them as
//!   `{ k = v }`
//! - **Keys**: bare when they match `[A-Za-z0-9_-]+`, quoted otherwise
//! - **Numbers**: see [`RenderOptions::numbers_as_float`]
//!
//! The result is trimmed, so an empty table renders as `""`.
//!
//! # Example
//! ```
//! use tomlmerge_core::{parse, render, RenderOptions};
//! let doc = parse("ratio = 1.0\n[server]\nports = [80, 443]").unwrap();
//! let text = render(doc.as_table().unwrap(), &RenderOptions::default()).unwrap();
//! assert_eq!(text, "ratio = 1\n\n[server]\nports = [ 80, 443 ]");
//! ```

use crate::error::{MergeError, Result};
use crate::types::{Table, Value};
use crate::MergeOptions;

/// Integral floats below this magnitude (2^63, exclusive) convert to `i64`
/// without saturating, so they print as plain digits.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Options for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// When true, every number uses float syntax and integral values get a
    /// trailing `.0`, whether they were parsed as integers or floats.
    /// When false, every integral number renders as a bare integer, so a
    /// value declared as `1.0` comes out as `1`.
    pub numbers_as_float: bool,
    /// Maximum nesting of tables, arrays and inline tables.
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            numbers_as_float: false,
            max_depth: 1000,
        }
    }
}

impl From<&MergeOptions> for RenderOptions {
    fn from(options: &MergeOptions) -> Self {
        Self {
            numbers_as_float: options.numbers_as_float,
            ..Self::default()
        }
    }
}

/// Render a table as a TOML document.
pub fn render(table: &Table, options: &RenderOptions) -> Result<String> {
    Renderer { options }.table(table, "", options.max_depth)
}

struct Renderer<'a> {
    options: &'a RenderOptions,
}

impl Renderer<'_> {
    /// Emit a table body: plain `key = value` lines, then its sections.
    /// `prefix` is the already-formatted dotted path of this table.
    fn table(&self, table: &Table, prefix: &str, depth: usize) -> Result<String> {
        self.check_depth(depth)?;
        let mut preamble = String::new();
        let mut sections = String::new();

        for (key, value) in table {
            let key = format_key(key)?;
            match value {
                Value::Table(child) => {
                    let path = join_path(prefix, &key);
                    sections.push_str(&format!("[{path}]\n"));
                    sections.push_str(&self.table(child, &path, depth - 1)?);
                    sections.push_str("\n\n");
                }
                Value::Array(items) => match tables_in(items) {
                    Some(children) => {
                        let path = join_path(prefix, &key);
                        self.array_of_tables(&children, &path, depth - 1, &mut sections)?;
                    }
                    None => self.key_value(&key, value, depth, &mut preamble)?,
                },
                _ => self.key_value(&key, value, depth, &mut preamble)?,
            }
        }

        Ok(format!("{preamble}\n{sections}").trim().to_string())
    }

    /// Emit `[[path]]` followed by the table body, once per element.
    fn array_of_tables(
        &self,
        tables: &[&Table],
        path: &str,
        depth: usize,
        out: &mut String,
    ) -> Result<()> {
        self.check_depth(depth)?;
        for table in tables {
            out.push_str(&format!("[[{path}]]\n"));
            out.push_str(&self.table(table, path, depth)?);
            out.push_str("\n\n");
        }
        Ok(())
    }

    fn key_value(&self, key: &str, value: &Value, depth: usize, out: &mut String) -> Result<()> {
        out.push_str(key);
        out.push_str(" = ");
        self.value(value, depth, out)?;
        out.push('\n');
        Ok(())
    }

    /// Emit a value in inline position.
    fn value(&self, value: &Value, depth: usize, out: &mut String) -> Result<()> {
        self.check_depth(depth)?;
        match value {
            Value::String(s) => out.push_str(&format_string(s)?),
            Value::Integer(i) => out.push_str(&format_integer(*i, self.options.numbers_as_float)),
            Value::Float(f) => out.push_str(&format_float(*f, self.options.numbers_as_float)),
            Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Datetime(dt) => out.push_str(&dt.to_string()),
            Value::Array(items) if items.is_empty() => out.push_str("[]"),
            Value::Array(items) => {
                out.push_str("[ ");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.value(item, depth - 1, out)?;
                }
                out.push_str(" ]");
            }
            Value::Table(table) if table.is_empty() => out.push_str("{}"),
            Value::Table(table) => {
                out.push_str("{ ");
                for (i, (key, item)) in table.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&format_key(key)?);
                    out.push_str(" = ");
                    self.value(item, depth - 1, out)?;
                }
                out.push_str(" }");
            }
        }
        Ok(())
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth == 0 {
            return Err(MergeError::DepthExceeded {
                max_depth: self.options.max_depth,
            });
        }
        Ok(())
    }
}

/// The elements of `items` as tables, if there is at least one and all are.
fn tables_in(items: &[Value]) -> Option<Vec<&Table>> {
    if items.is_empty() {
        return None;
    }
    items.iter().map(Value::as_table).collect()
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn format_integer(i: i64, as_float: bool) -> String {
    if as_float {
        format!("{i}.0")
    } else {
        i.to_string()
    }
}

/// Format a float:
/// - `nan`, `inf`, `-inf` for non-finite values
/// - integral values below 2^63 as `1` (or `1.0` when `as_float`)
/// - everything else in shortest round-trip form (`0.5`, `1e-7`, `1e19`)
fn format_float(f: f64, as_float: bool) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if f.fract() == 0.0 && f.abs() < I64_BOUND {
        return if as_float {
            format!("{f:.1}")
        } else {
            (f as i64).to_string()
        };
    }
    format!("{f:?}")
}

/// Basic string with JSON-compatible escapes, plus DEL as `\u007f`.
fn format_string(s: &str) -> Result<String> {
    let quoted = serde_json::to_string(s).map_err(|e| MergeError::Render(e.to_string()))?;
    Ok(quoted.replace('\u{7f}', "\\u007f"))
}

fn format_key(key: &str) -> Result<String> {
    if is_bare_key(key) {
        Ok(key.to_string())
    } else {
        format_string(key)
    }
}

/// Test if a key can be emitted bare: `^[A-Za-z0-9_-]+$`
fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
