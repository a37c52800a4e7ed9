//! Version/metadata reporting.
//!
//! Implements `xwiki-reader version`, printing either a colored summary or a
//! JSON document describing the build.

use serde_json::json;

use crate::color::ColorScheme;

/// Render version and build metadata in JSON or human-readable form.
///
/// # Arguments
/// * `json` - When `true`, emit a JSON document instead of colored text.
/// * `short` - When `true`, print only the semantic version string.
/// * `colors` - Shared color palette for styled terminal output.
pub(crate) fn handle_version_command(json: bool, short: bool, colors: &ColorScheme) {
  let version = env!("CARGO_PKG_VERSION");

  if short {
    println!("{version}");
    return;
  }

  let git_hash = option_env!("GIT_HASH").unwrap_or("unknown");
  let built = format_timestamp(env!("BUILD_TIMESTAMP"));
  let target = env!("TARGET");
  let rustc = env!("RUSTC_VERSION");

  if json {
    let document = json!({
      "version": version,
      "git_commit": git_hash,
      "build_timestamp": built,
      "target": target,
      "rust_version": rustc,
    });
    println!("{document:#}");
    return;
  }

  println!("{} {}", colors.emphasis("xwiki-reader"), colors.number(version));
  println!("{}: {}", colors.emphasis("Git commit"), colors.code(git_hash));
  println!("{}: {}", colors.emphasis("Built"), colors.dimmed(&built));
  println!("{}: {}", colors.emphasis("Target"), target);
  println!("{}: {}", colors.emphasis("Rust version"), rustc);
}

/// Convert Unix epoch seconds into `YYYY-MM-DD HH:MM:SS UTC`, returning the
/// raw input when it is not a valid timestamp.
fn format_timestamp(timestamp: &str) -> String {
  timestamp
    .parse::<i64>()
    .ok()
    .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
    .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    .unwrap_or_else(|| timestamp.to_string())
}
