//! `docsjs serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsjs_config::{CliSettings, Config};
use docsjs_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover docsjs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long, env = "DOCSJS_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable caching (default: enabled).
    #[arg(long)]
    cache: Option<bool>,

    /// Disable caching.
    #[arg(long, conflicts_with = "cache")]
    no_cache: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            cache_enabled: self.resolve_cache_enabled(),
            host: self.host,
            port: self.port,
            content_dir: self.content_dir,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if !config.docs_resolved.content_dir.is_dir() {
            return Err(CliError::Validation(format!(
                "Content directory not found: {}",
                config.docs_resolved.content_dir.display()
            )));
        }

        output.highlight(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Content directory: {}",
            config.docs_resolved.content_dir.display()
        ));
        match &config.docs_resolved.routes_file {
            Some(path) => output.info(&format!("Routes: {}", path.display())),
            None => output.info("Routes: built-in"),
        }
        if config.docs_resolved.cache_enabled {
            output.info("Cache: enabled");
        } else {
            output.info("Cache: disabled");
        }

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }

    /// Resolve `cache_enabled` from --cache/--no-cache flags.
    fn resolve_cache_enabled(&self) -> Option<bool> {
        self.no_cache.then_some(false).or(self.cache)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ServeArgs,
    }

    fn parse(args: &[&str]) -> ServeArgs {
        TestCli::parse_from(std::iter::once("docsjs").chain(args.iter().copied())).args
    }

    #[test]
    fn test_cache_flags() {
        assert_eq!(parse(&[]).resolve_cache_enabled(), None);
        assert_eq!(parse(&["--no-cache"]).resolve_cache_enabled(), Some(false));
        assert_eq!(parse(&["--cache", "true"]).resolve_cache_enabled(), Some(true));
    }

    #[test]
    fn test_cache_flags_conflict() {
        let result = TestCli::try_parse_from(["docsjs", "--cache", "true", "--no-cache"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let args = parse(&["--port", "3000", "--host", "0.0.0.0", "-v"]);

        assert_eq!(args.port, Some(3000));
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert!(args.verbose);
    }
}
