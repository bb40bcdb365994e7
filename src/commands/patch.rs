use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use spaify::patch::{
    self, Markers, PatchOutcome, PatchRequest, DEFAULT_ENTRY_TOKEN, DEFAULT_SEPARATOR,
};

#[derive(Args, Debug)]
pub struct PatchCommand {
    /// File to patch in place
    file: PathBuf,

    /// Region start marker (repeat to narrow into nested regions)
    #[arg(long = "start", required = true, value_parser = NonEmptyStringValueParser::new())]
    starts: Vec<String>,

    /// Region end marker, one per --start
    #[arg(long = "end", required = true, value_parser = NonEmptyStringValueParser::new())]
    ends: Vec<String>,

    /// Entry to insert if absent
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    entry: String,

    /// Item separator
    #[arg(long, default_value = DEFAULT_SEPARATOR, value_parser = NonEmptyStringValueParser::new())]
    separator: String,

    /// Token every entry starts with (used to detect indentation)
    #[arg(long, default_value = DEFAULT_ENTRY_TOKEN, value_parser = NonEmptyStringValueParser::new())]
    token: String,

    /// Print the patched document instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Output the outcome as JSON
    #[arg(short, long)]
    json: bool,
}

impl PatchCommand {
    fn request(&self) -> Result<PatchRequest> {
        if self.starts.len() != self.ends.len() {
            anyhow::bail!(
                "Every --start needs a matching --end ({} starts, {} ends)",
                self.starts.len(),
                self.ends.len()
            );
        }

        let path = self
            .starts
            .iter()
            .zip(&self.ends)
            .map(|(start, end)| Markers::new(start.as_str(), end.as_str()))
            .collect();

        Ok(PatchRequest::from_path(self.entry.as_str(), path)
            .context("At least one --start/--end pair is required")?
            .separator(self.separator.as_str())
            .token(self.token.as_str()))
    }
}

/// Returns the exit code: 0 when patched or already present, 2 when skipped
pub fn run(cmd: PatchCommand) -> Result<i32> {
    let request = cmd.request()?;
    let document = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file.display()))?;

    let outcome = patch::patch(&document, &request);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&outcome_json(&cmd, &outcome))?);
    }

    let exit_code = match &outcome {
        PatchOutcome::Skipped(_) => 2,
        _ => 0,
    };

    match outcome {
        PatchOutcome::Patched(updated) => {
            if cmd.dry_run {
                if !cmd.json {
                    print!("{updated}");
                }
            } else {
                fs::write(&cmd.file, updated)
                    .with_context(|| format!("Failed to write {}", cmd.file.display()))?;
                if !cmd.json {
                    println!(
                        "{} Added {} to {}",
                        "✓".green().bold(),
                        cmd.entry,
                        cmd.file.display()
                    );
                }
            }
        }
        PatchOutcome::AlreadyPresent => {
            if !cmd.json {
                println!("{} {} already present", "✓".green().bold(), cmd.entry);
            }
        }
        PatchOutcome::Skipped(reason) => {
            if !cmd.json {
                eprintln!(
                    "{} Left {} unchanged: {reason}",
                    "⚠️ ".yellow().bold(),
                    cmd.file.display()
                );
            }
        }
    }

    Ok(exit_code)
}

fn outcome_json(cmd: &PatchCommand, outcome: &PatchOutcome) -> serde_json::Value {
    let (status, reason) = match outcome {
        PatchOutcome::Patched(_) => ("patched", None),
        PatchOutcome::AlreadyPresent => ("already_present", None),
        PatchOutcome::Skipped(reason) => ("skipped", Some(reason.to_string())),
    };

    serde_json::json!({
        "file": cmd.file.display().to_string(),
        "entry": cmd.entry,
        "status": status,
        "reason": reason,
        "written": outcome.is_patched() && !cmd.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        patch: PatchCommand,
    }

    fn parse(args: &[&str]) -> PatchCommand {
        TestCli::parse_from(std::iter::once("spaify").chain(args.iter().copied())).patch
    }

    #[test]
    fn test_nested_markers_build_region_path() {
        let cmd = parse(&[
            "app/Http/Kernel.php",
            "--start",
            "$middlewareGroups = [",
            "--end",
            "];",
            "--start",
            "'web' => [",
            "--end",
            "],",
            "--entry",
            "\\App\\Http\\Middleware\\HandleInertiaRequests::class",
        ]);

        let request = cmd.request().unwrap();
        assert_eq!(
            request.path(),
            &[
                Markers::new("$middlewareGroups = [", "];"),
                Markers::new("'web' => [", "],"),
            ]
        );
    }

    #[test]
    fn test_unbalanced_markers_rejected() {
        let cmd = parse(&[
            "f.txt", "--start", "a", "--start", "b", "--end", "c", "--entry", "x",
        ]);
        assert!(cmd.request().is_err());
    }

    #[test]
    fn test_empty_values_rejected() {
        let base = ["spaify", "f.txt", "--start", "a", "--end", "b"];
        for extra in [
            ["--entry", ""],
            ["--separator", ""],
            ["--token", ""],
        ] {
            let mut args: Vec<&str> = base.to_vec();
            if extra[0] != "--entry" {
                args.extend(["--entry", "x"]);
            }
            args.extend(extra);
            assert!(TestCli::try_parse_from(args).is_err(), "{extra:?} accepted");
        }
    }

    #[test]
    fn test_run_patches_file_in_place() -> Result<()> {
        let temp = tempfile::TempDir::new()?;
        let file = temp.path().join("list.txt");
        fs::write(&file, "items = [\n    \\A,\n];\n")?;
        let file_arg = file.to_str().unwrap();

        let cmd = parse(&[file_arg, "--start", "items = [", "--end", "];", "--entry", "\\B"]);
        assert_eq!(run(cmd)?, 0);
        assert_eq!(fs::read_to_string(&file)?, "items = [\n    \\A,\n    \\B,\n];\n");

        let cmd = parse(&[file_arg, "--start", "nope", "--end", "];", "--entry", "\\C"]);
        assert_eq!(run(cmd)?, 2);
        Ok(())
    }

    #[test]
    fn test_dry_run_leaves_file_alone() -> Result<()> {
        let temp = tempfile::TempDir::new()?;
        let file = temp.path().join("list.txt");
        fs::write(&file, "items = [\n    \\A,\n];\n")?;
        let file_arg = file.to_str().unwrap();

        let cmd = parse(&[
            file_arg, "--start", "items = [", "--end", "];", "--entry", "\\B", "--dry-run",
        ]);
        assert_eq!(run(cmd)?, 0);
        assert_eq!(fs::read_to_string(&file)?, "items = [\n    \\A,\n];\n");
        Ok(())
    }
}
