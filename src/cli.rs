//! Command-line interface definitions for xwiki-reader.
//!
//! This module defines the CLI structure using clap derives, turns the parsed
//! connection options into an [`XWikiConfig`], and dispatches subcommands.

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use url::Url;

use crate::color::ColorScheme;
use crate::commands::check::handle_check_command;
use crate::commands::completions::handle_completions_command;
use crate::commands::groups::{handle_groups_command, handle_members_command, handle_user_command};
use crate::commands::pages::{handle_page_command, handle_pages_command, handle_properties_command};
use crate::commands::version::handle_version_command;
use crate::xwiki::{BasicAuth, XWikiConfig};

/// xwiki-reader - Read pages, attachments, and objects from an XWiki server
#[derive(Debug, Parser)]
#[command(
  name = "xwiki-reader",
  version,
  about = "Read pages, attachments, and objects from an XWiki server",
  long_about = "A read-only command-line client for the XWiki REST API.\n\
                Follows relation links to assemble pages with their attachments, objects, and properties.",
  styles = get_clap_styles()
)]
pub struct Cli {
  /// Subcommand to execute
  #[command(subcommand)]
  pub command: Command,

  /// Connection options
  #[command(flatten)]
  pub connection: ConnectionOptions,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,
}

/// Read operations and introspection
#[derive(Debug, Subcommand)]
pub enum Command {
  /// List every page of a space with its attachments and objects
  Pages {
    /// Dotted space path, e.g. `Blog.News`
    #[arg(value_name = "SPACE")]
    space: String,

    /// Print the pages as JSON
    #[arg(long)]
    json: bool,
  },

  /// Show a single page
  Page {
    /// Dotted space path, e.g. `Blog.News`
    #[arg(value_name = "SPACE")]
    space: String,

    /// Page name
    #[arg(value_name = "NAME")]
    name: String,

    /// Also resolve the properties of the page's first object
    #[arg(long)]
    properties: bool,

    /// Print the page as JSON
    #[arg(long)]
    json: bool,
  },

  /// Print the properties of a page's first object
  Properties {
    /// Dotted space path, e.g. `Blog.News`
    #[arg(value_name = "SPACE")]
    space: String,

    /// Page name
    #[arg(value_name = "NAME")]
    name: String,
  },

  /// List the groups of the wiki
  Groups,

  /// List the members of a group
  Members {
    /// Group page name, e.g. `XWikiAdminGroup`
    #[arg(value_name = "GROUP")]
    group: String,
  },

  /// Show a user page
  User {
    /// User name without the `XWiki.` prefix
    #[arg(value_name = "NAME")]
    name: String,

    /// Also print the user profile properties
    #[arg(long)]
    properties: bool,
  },

  /// Verify that the configured wiki exists on the server
  Check,

  /// Display version and build information
  Version {
    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Show only version number
    #[arg(long)]
    short: bool,
  },

  /// Generate shell completion scripts
  Completions {
    /// Target shell for completions
    #[arg(value_enum)]
    shell: clap_complete::Shell,
  },
}

impl Command {
  /// Whether the command talks to the XWiki server.
  pub fn needs_server(&self) -> bool {
    !matches!(self, Self::Version { .. } | Self::Completions { .. })
  }
}

/// Normalize a URL by adding https:// if no scheme is present
fn normalize_url(url: &str) -> Result<String, String> {
  let trimmed = url.trim();

  let parsed = match Url::parse(trimmed) {
    Ok(parsed) if parsed.has_host() => parsed,
    _ => Url::parse(&format!("https://{trimmed}")).map_err(|e| format!("Invalid URL: {e}"))?,
  };

  Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Connection options
#[derive(Debug, Parser)]
pub struct ConnectionOptions {
  /// XWiki server base URL
  #[arg(long, env = "XWIKI_URL", value_name = "URL", value_parser = normalize_url)]
  pub url: Option<String>,

  /// REST entry point path below the base URL
  #[arg(long, env = "XWIKI_API_ENTRYPOINT", default_value = "/rest", value_name = "PATH")]
  pub api_entrypoint: String,

  /// Wiki every space path is resolved against
  #[arg(long, env = "XWIKI_WIKI", default_value = "xwiki", value_name = "NAME")]
  pub wiki: String,

  /// Rewrite http:// to https:// on every request and returned attachment URL
  #[arg(long, env = "XWIKI_HTTPS_ONLY")]
  pub https_only: bool,

  /// Representation requested through the `media` query parameter
  #[arg(long, env = "XWIKI_MEDIA", default_value = "json", value_name = "MEDIA")]
  pub media: String,

  /// Class of the user profile object
  #[arg(long, env = "XWIKI_USERS_CLASS", default_value = "XWiki.XWikiUsers", value_name = "CLASS")]
  pub users_class: String,

  /// User name for HTTP Basic authentication
  #[arg(long, env = "XWIKI_USER", value_name = "USER", requires = "password")]
  pub user: Option<String>,

  /// Password for HTTP Basic authentication
  #[arg(long, env = "XWIKI_PASSWORD", value_name = "PASSWORD", hide_env_values = true)]
  pub password: Option<String>,

  /// Request timeout in seconds
  #[arg(long, default_value = "30", value_name = "SECONDS")]
  pub timeout: u64,
}

impl ConnectionOptions {
  /// Build the reader configuration; the base URL must already be validated.
  pub fn to_config(&self) -> XWikiConfig {
    XWikiConfig {
      base_url: self.url.clone().unwrap_or_default(),
      api_entrypoint: self.api_entrypoint.clone(),
      wiki: self.wiki.clone(),
      https_only: self.https_only,
      media: self.media.clone(),
      users_class: self.users_class.clone(),
      timeout_secs: self.timeout,
    }
  }

  /// Basic-auth credentials when both user and password are set.
  pub fn basic_auth(&self) -> Option<BasicAuth> {
    match (&self.user, &self.password) {
      (Some(username), Some(password)) => Some(BasicAuth {
        username: username.clone(),
        password: password.clone(),
      }),
      _ => None,
    }
  }
}

/// Behavior options
#[derive(Debug, Parser)]
pub struct BehaviorOptions {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Colorize output
  #[arg(long, value_enum, default_value = "auto", value_name = "WHEN")]
  pub color: ColorOption,
}

/// Color output options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorOption {
  Auto,
  Always,
  Never,
}

impl Cli {
  /// Validate CLI arguments
  ///
  /// Returns an error if the CLI configuration is invalid.
  pub fn validate(&self) -> Result<(), String> {
    if self.command.needs_server() && self.connection.url.is_none() {
      return Err("--url (or XWIKI_URL) is required to reach the XWiki server".to_string());
    }

    if self.connection.timeout == 0 {
      return Err("--timeout must be at least 1 second".to_string());
    }

    if self.connection.media.trim().is_empty() {
      return Err("--media must not be empty".to_string());
    }

    if self.connection.wiki.trim().is_empty() {
      return Err("--wiki must not be empty".to_string());
    }

    Ok(())
  }
}

/// Parse CLI arguments, initialize shared services, and dispatch to the chosen
/// command.
pub async fn run() {
  let cli = Cli::parse();

  init_tracing(&cli.behavior);

  let colors = ColorScheme::new(cli.behavior.color);

  if let Err(e) = cli.validate() {
    eprintln!("{} {}", colors.error("Error:"), e);
    process::exit(4); // Invalid arguments exit code
  }

  match &cli.command {
    Command::Pages { space, json } => handle_pages_command(space, *json, &cli, &colors).await,
    Command::Page {
      space,
      name,
      properties,
      json,
    } => handle_page_command(space, name, *properties, *json, &cli, &colors).await,
    Command::Properties { space, name } => handle_properties_command(space, name, &cli, &colors).await,
    Command::Groups => handle_groups_command(&cli, &colors).await,
    Command::Members { group } => handle_members_command(group, &cli, &colors).await,
    Command::User { name, properties } => handle_user_command(name, *properties, &cli, &colors).await,
    Command::Check => handle_check_command(&cli, &colors).await,
    Command::Version { json, short } => handle_version_command(*json, *short, &colors),
    Command::Completions { shell } => handle_completions_command(*shell),
  }
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Get custom styles for clap help output
fn get_clap_styles() -> clap::builder::Styles {
  use clap::builder::styling::{AnsiColor, Effects};

  clap::builder::Styles::styled()
    .header(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::BrightCyan.on_default())
    .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
    .valid(AnsiColor::BrightGreen.on_default())
    .invalid(AnsiColor::BrightRed.on_default())
}
