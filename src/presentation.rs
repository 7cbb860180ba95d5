// src/presentation.rs
use std::io::Write;

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use langcount_domain::{FileStats, analytics::Summary};
use langcount_shared_kernel::Result;

/// Rendering chosen with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
    Yaml,
}

const COLUMNS: [&str; 7] = ["Lang", "Files", "Skipped", "Lines", "Code", "Comments", "Blanks"];
const TOTAL_LABEL: &str = "TOTAL";

/// Writes `summary` to `out` in the requested format.
///
/// # Errors
///
/// Fails when serialization or the write itself fails.
pub fn render<W: Write>(summary: &Summary, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(summary, out),
        OutputFormat::Csv => write_csv(summary, out),
        OutputFormat::Json => write_json(summary, out),
        OutputFormat::Yaml => write_yaml(summary, out),
    }
}

/// One language name per line, ascending.
///
/// # Errors
///
/// Fails when the write fails.
pub fn write_language_list<W: Write>(names: &[&str], out: &mut W) -> Result<()> {
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn counts(stats: &FileStats) -> [usize; 6] {
    [stats.files, stats.skipped, stats.lines, stats.code, stats.comments, stats.blanks]
}

fn table_row(label: &str, stats: &FileStats) -> Vec<Cell> {
    std::iter::once(Cell::new(label))
        .chain(counts(stats).into_iter().map(|n| Cell::new(n).set_alignment(CellAlignment::Right)))
        .collect()
}

fn write_table<W: Write>(summary: &Summary, out: &mut W) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(COLUMNS);

    for (language, stats) in &summary.languages {
        table.add_row(table_row(language.as_str(), stats));
    }
    table.add_row(table_row(TOTAL_LABEL, &summary.totals));

    writeln!(out, "{table}")?;
    if let Some(language) = &summary.most_used_language {
        writeln!(out, "Most used language: {language}")?;
    }
    Ok(())
}

fn write_csv<W: Write>(summary: &Summary, out: &mut W) -> Result<()> {
    writeln!(out, "language,files,skipped,lines,code,comments,blanks")?;
    let rows = summary
        .languages
        .iter()
        .map(|(language, stats)| (language.as_str(), stats))
        .chain(std::iter::once((TOTAL_LABEL, &summary.totals)));
    for (label, stats) in rows {
        let fields = counts(stats).map(|n| n.to_string()).join(",");
        writeln!(out, "{},{fields}", csv_field(label))?;
    }
    Ok(())
}

/// Quotes a field containing a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn write_json<W: Write>(summary: &Summary, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}

fn write_yaml<W: Write>(summary: &Summary, out: &mut W) -> Result<()> {
    let yaml = serde_yaml::to_string(summary)?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}
