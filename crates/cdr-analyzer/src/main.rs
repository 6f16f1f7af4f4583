mod bootstrap;

use anyhow::{Context, Result};
use cdr_core::settings::Settings;
use cdr_report::ReportFormat;
use cdr_runtime::AnalysisSession;

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("CDR Analyzer v{} starting", env!("CARGO_PKG_VERSION"));
    let paths = display_paths(&settings.paths);
    tracing::info!("Paths: {}, Format: {}", paths, settings.format);

    let format: ReportFormat = settings.format.parse()?;
    let mut session = AnalysisSession::new();

    if let Some(number) = settings.self_number.as_deref() {
        session.set_self_number(number);
    }

    match settings.paths.as_slice() {
        [root] if !root.is_file() => {
            session.parse_tree(root);
        }
        list => {
            session.load_files(list);
        }
    }

    if session.records().is_empty() {
        tracing::warn!("No call records found under {}", paths);
    }

    let document = session.render(format)?;

    match &settings.output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("writing report to {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => println!("{}", document),
    }

    Ok(())
}

fn display_paths(paths: &[std::path::PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
