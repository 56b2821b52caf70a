//! `docsjs check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsjs_config::{CliSettings, Config};
use docsjs_routes::StaticPath;
use docsjs_server::{create_site, load_routes};
use docsjs_site::{DocsError, Site};
use rayon::prelude::*;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docsjs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long, env = "DOCSJS_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// A routed document that cannot be served.
#[derive(Debug)]
struct CheckFailure {
    /// Page path (`/docs/{name}/{slug}`).
    path: String,
    error: DocsError,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let routes = load_routes(config.docs_resolved.routes_file.as_deref())?;

        let content_dir = &config.docs_resolved.content_dir;
        if !content_dir.is_dir() {
            return Err(CliError::Validation(format!(
                "Content directory not found: {}",
                content_dir.display()
            )));
        }
        output.info(&format!("Checking documents in {}", content_dir.display()));

        let paths = routes.static_paths();
        let site = create_site(content_dir.clone(), false);
        let failures = check_documents(&site, &paths);
        tracing::info!(checked = paths.len(), failed = failures.len(), "Check finished");

        for failure in &failures {
            tracing::warn!(path = %failure.path, error = %failure.error, "Document check failed");
            let label = if matches!(failure.error, DocsError::NotFound(_)) {
                "missing"
            } else {
                "failed"
            };
            output.warning(&format!("{label}: {} ({})", failure.path, failure.error));
        }

        if failures.is_empty() {
            output.success(&format!("All {} documents compiled", paths.len()));
            Ok(())
        } else {
            Err(CliError::Check(failures.len()))
        }
    }
}

/// Resolve every path in parallel; failures keep route order.
fn check_documents(site: &Site, paths: &[StaticPath]) -> Vec<CheckFailure> {
    paths
        .par_iter()
        .filter_map(|path| {
            let slug = path.slug.join("/");
            site.resolve(&path.name, &slug)
                .err()
                .map(|error| CheckFailure {
                    path: format!("/docs/{}/{slug}", path.name),
                    error,
                })
        })
        .collect()
}
