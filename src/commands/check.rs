//! `check` subcommand: confirm the configured wiki is hosted by the server.

use std::process;

use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::commands::connect;
use crate::commands::pages::report_failure;

/// Exit code when the server answers but does not host the wiki.
const WIKI_MISSING_EXIT_CODE: i32 = 2;

pub(crate) async fn handle_check_command(cli: &Cli, colors: &ColorScheme) {
  let wiki = &cli.connection.wiki;
  println!(
    "{} {} {}",
    colors.progress("→"),
    colors.info("Looking for wiki"),
    colors.emphasis(wiki)
  );

  let reader = match connect(cli) {
    Ok(reader) => reader,
    Err(error) => report_failure("Failed to connect", &error, colors),
  };
  println!("  {}: {}", colors.emphasis("Entry point"), colors.link(reader.paths().entrypoint()));

  match reader.check_target_wiki().await {
    Ok(true) => println!("{} {}", colors.success("✓"), colors.success("Wiki found")),
    Ok(false) => {
      eprintln!(
        "{} {}",
        colors.error("✗"),
        colors.error(format!("The targeted wiki '{wiki}' does not exist"))
      );
      process::exit(WIKI_MISSING_EXIT_CODE);
    }
    Err(error) => report_failure("Failed to query the wiki list", &error.into(), colors),
  }
}
