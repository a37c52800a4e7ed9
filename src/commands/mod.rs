//! CLI subcommand handlers.
//!
//! Each handler builds an [`XWikiReader`] from the parsed connection options,
//! runs one read operation, and renders the result. Failures are printed and
//! turned into process exit codes here, never in the library.

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::xwiki::XWikiReader;

pub mod check;
pub mod completions;
pub mod groups;
pub mod pages;
pub mod version;

/// Build the reader for the server named on the command line.
pub(crate) fn connect(cli: &Cli) -> Result<XWikiReader> {
  let config = cli.connection.to_config();
  XWikiReader::connect(&config, cli.connection.basic_auth()).context("Unable to construct XWiki client")
}
