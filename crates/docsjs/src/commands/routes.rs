//! `docsjs routes` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsjs_config::Config;
use docsjs_routes::RouteTable;
use docsjs_server::load_routes;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Path to configuration file (default: auto-discover docsjs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only list pages of this collection.
    #[arg(long)]
    collection: Option<String>,
}

impl RoutesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let routes = load_routes(config.docs_resolved.routes_file.as_deref())?;

        let lines = page_lines(&routes, self.collection.as_deref())?;
        for line in &lines {
            output.result(line);
        }
        output.info(&format!("{} page(s)", lines.len()));
        Ok(())
    }
}

/// One `href<TAB>title` line per page, hrefs absolute.
fn page_lines(routes: &RouteTable, collection: Option<&str>) -> Result<Vec<String>, CliError> {
    if let Some(name) = collection
        && !routes.has_collection(name)
    {
        return Err(CliError::Validation(format!("Unknown collection: {name}")));
    }

    // A name may head several top-level nodes; `collection_pages` covers them all
    let mut names: Vec<&str> = Vec::new();
    for name in routes
        .collections()
        .iter()
        .filter_map(|node| node.name.as_deref())
        .filter(|name| collection.is_none_or(|c| c == *name))
    {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    let mut lines = Vec::new();
    for name in names {
        lines.extend(
            routes
                .collection_pages(name)
                .map(|page| format!("/docs/{name}{}\t{}", page.href, page.title)),
        );
    }
    Ok(lines)
}
