//! `groups`, `members`, and `user` subcommands.

use anyhow::Result;

use super::connect;
use super::pages::{format_page_lines, format_property_lines, report_failure};
use crate::cli::Cli;
use crate::color::ColorScheme;

/// Execute `xwiki-reader groups`.
pub(crate) async fn handle_groups_command(cli: &Cli, colors: &ColorScheme) {
  if let Err(error) = run_groups_command(cli, colors).await {
    report_failure("Failed to list groups", &error, colors);
  }
}

/// Execute `xwiki-reader members <GROUP>`.
pub(crate) async fn handle_members_command(group: &str, cli: &Cli, colors: &ColorScheme) {
  if let Err(error) = run_members_command(group, cli, colors).await {
    report_failure("Failed to list group members", &error, colors);
  }
}

/// Execute `xwiki-reader user <NAME>`.
pub(crate) async fn handle_user_command(name: &str, properties: bool, cli: &Cli, colors: &ColorScheme) {
  if let Err(error) = run_user_command(name, properties, cli, colors).await {
    report_failure("Failed to fetch user", &error, colors);
  }
}

async fn run_groups_command(cli: &Cli, colors: &ColorScheme) -> Result<()> {
  let reader = connect(cli)?;
  let groups = reader.list_group_names().await?;

  println!(
    "{} {}",
    colors.success("✓"),
    colors.info(format!("Found {} groups", colors.number(groups.len())))
  );
  for group in groups {
    println!("  {}", colors.emphasis(group));
  }

  Ok(())
}

async fn run_members_command(group: &str, cli: &Cli, colors: &ColorScheme) -> Result<()> {
  let reader = connect(cli)?;
  let members = reader.list_group_members(group).await?;

  println!(
    "{} {} {}",
    colors.success("✓"),
    colors.info(format!("{} members in", colors.number(members.len()))),
    colors.emphasis(group)
  );
  for member in members {
    println!("  {member}");
  }

  Ok(())
}

async fn run_user_command(name: &str, properties: bool, cli: &Cli, colors: &ColorScheme) -> Result<()> {
  let reader = connect(cli)?;
  let user = reader.get_user(name).await?;

  for line in format_page_lines(&user, colors) {
    println!("{line}");
  }

  if properties {
    let profile = reader.get_user_properties(&user).await;
    println!("\n{}", colors.emphasis("Profile"));
    if profile.is_empty() {
      println!("  {}", colors.dimmed("(no profile properties)"));
    }
    for line in format_property_lines(&profile, colors) {
      println!("  {line}");
    }
  }

  Ok(())
}
