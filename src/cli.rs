// SPDX-License-Identifier: MIT
//
// Subcommands of the chromacode binary. Each one reads a document, runs the
// engine over it and prints (or writes) the result. All report text is built
// by plain functions returning `String` so it can be tested without I/O.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::{info, warn};

use chroma_palette::{ColorDetails, ExportFormat, details, render};
use chroma_scan::{ColorOccurrence, ScanStats, display_name, filter, scan, truncate_value};

/// Path that means "read standard input".
const STDIN: &str = "-";

#[derive(Subcommand)]
pub enum Commands {
    /// List every color in a stylesheet
    Scan {
        /// Input file (`-` for stdin)
        #[arg(default_value = STDIN)]
        file: PathBuf,

        /// Print occurrences as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Keep only occurrences whose name, value or type contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Show conversions, shades and harmonies for each color
    Inspect {
        /// Input file (`-` for stdin)
        #[arg(default_value = STDIN)]
        file: PathBuf,

        /// Only colors found on this line
        #[arg(short, long)]
        line: Option<usize>,
    },

    /// Render all colors as a css, scss, json, tailwind or array template
    Export {
        /// Input file (`-` for stdin)
        #[arg(default_value = STDIN)]
        file: PathBuf,

        /// Template to render
        #[arg(short, long)]
        format: ExportFormat,

        /// Write here instead of stdout (a directory gets `colors.<ext>`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Self::Scan { file, json, filter: query } => {
                let found = scan(&read_input(&file)?);
                let shown = filter(&found, query.as_deref().unwrap_or_default());
                if json {
                    println!("{}", serde_json::to_string_pretty(&shown)?);
                } else {
                    print!("{}", format_table(&shown));
                    println!("{}", format_stats(&ScanStats::from_occurrences(&found)));
                }
            }
            Self::Inspect { file, line } => {
                let found = scan(&read_input(&file)?);
                let selected: Vec<_> = found.iter().filter(|o| line.is_none_or(|l| o.line == l)).collect();
                if selected.is_empty() {
                    warn!(?line, "no colors to inspect");
                }
                for occ in selected {
                    print!("{}", format_details(occ, &details(occ)));
                }
            }
            Self::Export { file, format, output } => {
                let found = scan(&read_input(&file)?);
                if found.is_empty() {
                    warn!("no colors to export");
                }
                let rendered = render(&found, format);
                match output {
                    Some(path) => {
                        let path = resolve_output(&path, format);
                        fs::write(&path, &rendered)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        info!(path = %path.display(), colors = found.len(), "export written");
                    }
                    None => println!("{rendered}"),
                }
            }
        }
        Ok(())
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// A directory receives the suggested file name; anything else is used as is.
fn resolve_output(path: &Path, format: ExportFormat) -> PathBuf {
    if path.is_dir() {
        path.join(format.file_name())
    } else {
        path.to_path_buf()
    }
}

// ─── Report text ────────────────────────────────────────────────────────────

fn format_table(occurrences: &[&ColorOccurrence]) -> String {
    let name_width = occurrences
        .iter()
        .map(|o| display_name(&o.name).chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for occ in occurrences {
        out.push_str(&format!(
            "L{:<5} {:<11} {:<name_width$}  {}\n",
            occ.line,
            occ.kind,
            display_name(&occ.name),
            truncate_value(&occ.value),
        ));
    }
    out
}

fn format_stats(stats: &ScanStats) -> String {
    format!(
        "{} colors: {} solid, {} gradient, {} transparent",
        stats.total, stats.solid, stats.gradient, stats.transparent
    )
}

fn format_details(occ: &ColorOccurrence, details: &ColorDetails) -> String {
    let mut out = String::new();
    out.push_str(&format!("L{} {} ({})\n", occ.line, display_name(&occ.name), occ.kind));
    for format in &details.formats {
        out.push_str(&format!("  {:<9}{}\n", format.label, format.value));
    }
    if !details.shades.is_empty() {
        out.push_str("  Shades\n");
        for shade in &details.shades {
            out.push_str(&format!("    {shade}\n"));
        }
    }
    if !details.harmonies.is_empty() {
        out.push_str("  Harmonies\n");
        for harmony in &details.harmonies {
            out.push_str(&format!("    {:<14}{}\n", harmony.label, harmony.value));
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_rows() {
        let found = scan("--brand: #ff2c2c;\nbg: linear-gradient(red, blue)");
        let rows: Vec<_> = found.iter().collect();
        assert_eq!(
            format_table(&rows),
            "L1     solid       brand  #ff2c2c\n\
             L2     gradient    bg     linear-gradient(red, blue)\n"
        );
    }

    #[test]
    fn stats_line() {
        let stats = ScanStats { total: 3, solid: 1, gradient: 1, transparent: 1 };
        assert_eq!(format_stats(&stats), "3 colors: 1 solid, 1 gradient, 1 transparent");
    }

    #[test]
    fn details_block() {
        let found = scan("$accent: rgba(255, 44, 44, 0.5)");
        let text = format_details(&found[0], &details(&found[0]));
        assert!(text.starts_with("L1 accent (transparent)\n"));
        assert!(text.contains("  HEX8     #ff2c2c80\n"));
        assert!(text.contains("    hsl(0, 100%, 5%)\n"));
        assert!(text.contains("    Complementary hsl(180, 100%, 59%)\n"));
    }

    #[test]
    fn output_directory_gets_suggested_name() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_output(dir.path(), ExportFormat::Tailwind),
            dir.path().join("colors.js")
        );
        let file = dir.path().join("palette.scss");
        assert_eq!(resolve_output(&file, ExportFormat::Scss), file);
    }

    #[test]
    fn reads_files_and_reports_missing_ones() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.css");
        fs::write(&path, "a: red").unwrap();
        assert_eq!(read_input(&path).unwrap(), "a: red");
        let err = read_input(&dir.path().join("missing.css")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
