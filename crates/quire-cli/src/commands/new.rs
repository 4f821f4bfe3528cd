//! Implementation of the `quire new` command.
//!
//! Responsibility: resolve the base directory, call the core scaffold
//! service, and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use quire_adapters::{LocalFilesystem, dissertation};
use quire_core::{
    application::ScaffoldService,
    domain::{EntryOutcome, ScaffoldReport},
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `quire new` command.
///
/// 1. Resolve the base directory (argument, env, config, default)
/// 2. Load the built-in dissertation table
/// 3. Preview (`--dry-run`) or run the scaffold
/// 4. Print per-entry outcomes, the summary and next steps
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let base = resolve_base_dir(args.base_dir.as_deref(), &config)?;
    let table = dissertation().map_err(|e| CliError::Core(e.into()))?;
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    info!(base = %base.display(), entries = table.len(), "Scaffold started");

    let report = if args.dry_run {
        service.preview(&base, &table)?
    } else {
        service.run(&base, &table)?
    };

    info!(
        created = report.created(),
        skipped = report.skipped(),
        failed = report.failed(),
        "Scaffold finished"
    );

    if output.is_json() {
        return output.json(&report);
    }

    if report.dry_run {
        output.header(&format!("Dry run: nothing written to {}", base.display()))?;
    }
    print_outcomes(&report, &output)?;

    output.print("")?;
    output.print(&report.to_string())?;

    if report.failed() > 0 {
        output.warning("Some files could not be written. Fix the errors above and run again.")?;
    }

    if !report.dry_run && !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        for step in next_steps(&base) {
            output.print(&format!("  {step}"))?;
        }
    }

    Ok(())
}

/// Pick the base directory: explicit argument (or `QUIRE_BASE_DIR`, which
/// clap folds into it) first, then `defaults.base_dir` from config.
pub fn resolve_base_dir(arg: Option<&Path>, config: &AppConfig) -> CliResult<PathBuf> {
    let base = arg.unwrap_or(&config.defaults.base_dir);
    if base.as_os_str().is_empty() {
        return Err(CliError::InvalidInput {
            message: "base directory cannot be empty".into(),
        });
    }
    Ok(base.to_path_buf())
}

fn print_outcomes(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    for entry in &report.entries {
        let path = report.base.join(entry.path.as_path());
        let path = path.display();
        match (&entry.outcome, report.dry_run) {
            (EntryOutcome::Created, false) => output.success(&format!("Created {path}"))?,
            (EntryOutcome::Created, true) => output.info(&format!("Would create {path}"))?,
            (EntryOutcome::Skipped, _) => output.info(&format!("Skipped (exists): {path}"))?,
            (EntryOutcome::Failed { reason }, _) => {
                output.error(&format!("Failed: {path}: {reason}"))?
            }
        }
    }
    Ok(())
}

fn next_steps(base: &Path) -> Vec<String> {
    vec![
        "Replace tise-itb.cls with the official TISE-ITB class file".into(),
        "Fill in _quarto.yml and _extensions/tise-itb-dissertation/tise-itb-frontmatter.tex"
            .into(),
        format!("cd {} && quarto render", base.display()),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_wins_over_config() {
        let cfg = AppConfig::default();
        let base = resolve_base_dir(Some(Path::new("thesis")), &cfg).unwrap();
        assert_eq!(base, PathBuf::from("thesis"));
    }

    #[test]
    fn config_default_used_without_argument() {
        let mut cfg = AppConfig::default();
        cfg.defaults.base_dir = PathBuf::from("from-config");
        assert_eq!(
            resolve_base_dir(None, &cfg).unwrap(),
            PathBuf::from("from-config")
        );
    }

    #[test]
    fn built_in_default_when_nothing_configured() {
        let base = resolve_base_dir(None, &AppConfig::default()).unwrap();
        assert_eq!(base, PathBuf::from("tise-itb-dissertation-quarto"));
    }

    #[test]
    fn empty_base_dir_is_invalid_input() {
        let mut cfg = AppConfig::default();
        cfg.defaults.base_dir = PathBuf::new();
        assert!(matches!(
            resolve_base_dir(None, &cfg),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn next_steps_point_at_base() {
        let steps = next_steps(Path::new("my-thesis"));
        assert!(steps.iter().any(|s| s.contains("tise-itb.cls")));
        assert!(steps.iter().any(|s| s == "cd my-thesis && quarto render"));
    }
}
