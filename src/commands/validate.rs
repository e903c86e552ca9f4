//! Implementation of the `mako validate` command.

use std::path::{Path, PathBuf};

use crate::{
    commands::ColorChoice,
    error::{Error, Result},
    palette,
};

/// Running totals across the batch.
#[derive(Debug, Default)]
struct Totals {
    /// Files that validated cleanly (warnings allowed).
    valid: usize,
    /// Error count summed over all files.
    errors: usize,
    /// Warning count summed over all files.
    warnings: usize,
}

/// Execute the validate command.
pub async fn run(color: ColorChoice, pattern: &str, strict: bool) -> Result<()> {
    let use_color = color.enabled();
    let files = expand_pattern(pattern)?;

    let mut totals = Totals::default();
    for path in &files {
        check_file(path, &mut totals, use_color).await;
    }

    println!();
    println!(
        "{}",
        palette::fmt_heading(&summary_line(files.len(), &totals), use_color)
    );

    if totals.errors > 0 || (strict && totals.warnings > 0) {
        return Err(Error::ValidationFailed {
            errors: totals.errors,
            warnings: totals.warnings,
        });
    }
    Ok(())
}

/// Expand a glob pattern into a sorted list of files.
///
/// Directories are excluded. Matching nothing is an error so the caller
/// never reports a clean run over zero files.
fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|error| Error::BadPattern {
        pattern: pattern.to_string(),
        source: error,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(Error::NoFilesMatched {
            pattern: pattern.to_string(),
        });
    }
    Ok(files)
}

/// Validate one file and print its verdict lines.
///
/// Read and parse failures count as one error each and never halt the batch.
async fn check_file(path: &Path, totals: &mut Totals, use_color: bool) {
    let outcome = match tokio::fs::read_to_string(path).await {
        Ok(contents) => mako_spec::parse(&contents).map_err(|error| error.to_string()),
        Err(error) => Err(error.to_string()),
    };
    let document = match outcome {
        Ok(document) => document,
        Err(message) => {
            totals.errors += 1;
            println!("{} {}", palette::fmt_fail("✗", use_color), path.display());
            println!(
                "  {} Parse error: {message}",
                palette::fmt_fail("→", use_color)
            );
            return;
        }
    };

    let report = mako_spec::validate(&document);
    totals.warnings += report.warnings.len();
    if report.valid {
        totals.valid += 1;
        if report.warnings.is_empty() {
            println!("{} {}", palette::fmt_pass("✓", use_color), path.display());
        } else {
            println!(
                "{} {}",
                palette::fmt_warning("⚠", use_color),
                path.display()
            );
            for warning in &report.warnings {
                println!("  {} {warning}", palette::fmt_warning("→", use_color));
            }
        }
    } else {
        totals.errors += report.errors.len();
        println!("{} {}", palette::fmt_fail("✗", use_color), path.display());
        for error in &report.errors {
            println!("  {} {error}", palette::fmt_fail("→", use_color));
        }
        for warning in &report.warnings {
            println!("  {} {warning}", palette::fmt_warning("→", use_color));
        }
    }
}

/// Build the one-line batch summary.
fn summary_line(total: usize, totals: &Totals) -> String {
    let mut line = format!(
        "{} {}: {} valid",
        total,
        pluralize("file", total),
        totals.valid
    );
    if totals.errors > 0 {
        line.push_str(&format!(
            ", {} {}",
            totals.errors,
            pluralize("error", totals.errors)
        ));
    }
    if totals.warnings > 0 {
        line.push_str(&format!(
            ", {} {}",
            totals.warnings,
            pluralize("warning", totals.warnings)
        ));
    }
    line
}

/// Append an "s" for counts other than one.
fn pluralize(noun: &str, count: usize) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{Totals, expand_pattern, summary_line};

    #[test]
    fn summarizes_counts_with_pluralization() {
        let totals = Totals {
            valid: 2,
            errors: 1,
            warnings: 0,
        };
        assert_eq!(summary_line(3, &totals), "3 files: 2 valid, 1 error");
    }

    #[test]
    fn omits_zero_error_and_warning_counts() {
        let totals = Totals {
            valid: 1,
            errors: 0,
            warnings: 0,
        };
        assert_eq!(summary_line(1, &totals), "1 file: 1 valid");
    }

    #[test]
    fn counts_warnings_in_summary() {
        let totals = Totals {
            valid: 3,
            errors: 0,
            warnings: 2,
        };
        assert_eq!(summary_line(3, &totals), "3 files: 3 valid, 2 warnings");
    }

    #[test]
    fn expands_only_matching_files() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("a.mako.md"), "x").expect("write");
        fs::write(dir.path().join("b.mako.md"), "x").expect("write");
        fs::write(dir.path().join("notes.txt"), "x").expect("write");

        let pattern = format!("{}/*.mako.md", dir.path().display());
        let files = expand_pattern(&pattern).expect("matches");
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn rejects_empty_matches() {
        let dir = tempdir().expect("tempdir");
        let pattern = format!("{}/*.mako.md", dir.path().display());
        assert!(expand_pattern(&pattern).is_err());
    }

    #[test]
    fn skips_directories() {
        let dir = tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("dir.mako.md")).expect("mkdir");
        fs::write(dir.path().join("real.mako.md"), "x").expect("write");

        let pattern = format!("{}/*.mako.md", dir.path().display());
        let files = expand_pattern(&pattern).expect("matches");
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.mako.md"));
    }
}
