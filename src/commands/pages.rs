//! `pages`, `page`, and `properties` subcommands.
//!
//! `pages` runs the full aggregation for a space and prints each page as a
//! small tree of its attachments, objects, and properties.

use std::process;

use anyhow::{Context, Result};

use super::connect;
use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::xwiki::{Page, PropertyMap};

/// Execute `xwiki-reader pages <SPACE>`.
pub(crate) async fn handle_pages_command(space: &str, json: bool, cli: &Cli, colors: &ColorScheme) {
  if let Err(error) = run_pages_command(space, json, cli, colors).await {
    report_failure("Failed to list pages", &error, colors);
  }
}

/// Execute `xwiki-reader page <SPACE> <NAME>`.
pub(crate) async fn handle_page_command(
  space: &str,
  name: &str,
  properties: bool,
  json: bool,
  cli: &Cli,
  colors: &ColorScheme,
) {
  if let Err(error) = run_page_command(space, name, properties, json, cli, colors).await {
    report_failure("Failed to fetch page", &error, colors);
  }
}

/// Execute `xwiki-reader properties <SPACE> <NAME>`.
pub(crate) async fn handle_properties_command(space: &str, name: &str, cli: &Cli, colors: &ColorScheme) {
  if let Err(error) = run_properties_command(space, name, cli, colors).await {
    report_failure("Failed to fetch properties", &error, colors);
  }
}

pub(crate) fn report_failure(what: &str, error: &anyhow::Error, colors: &ColorScheme) -> ! {
  eprintln!("{} {}", colors.error("✗"), colors.error(what));
  eprintln!("  {}: {:#}", colors.emphasis("Error"), error);
  process::exit(1);
}

async fn run_pages_command(space: &str, json: bool, cli: &Cli, colors: &ColorScheme) -> Result<()> {
  let reader = connect(cli)?;

  if !json {
    println!(
      "{} {} {}",
      colors.progress("→"),
      colors.info("Listing pages in space"),
      colors.emphasis(space)
    );
  }

  let pages = reader.list_full_pages(space).await?;

  if json {
    println!("{}", serde_json::to_string_pretty(&pages).context("Failed to serialize pages")?);
    return Ok(());
  }

  println!(
    "  {} {}",
    colors.success("✓"),
    colors.info(format!(
      "Found {} {}",
      colors.number(pages.len()),
      if pages.len() == 1 { "page" } else { "pages" }
    ))
  );

  for page in &pages {
    println!();
    for line in format_page_lines(page, colors) {
      println!("  {line}");
    }
  }

  Ok(())
}

async fn run_page_command(
  space: &str,
  name: &str,
  properties: bool,
  json: bool,
  cli: &Cli,
  colors: &ColorScheme,
) -> Result<()> {
  let reader = connect(cli)?;
  let mut page = reader.get_page(space, name).await?;

  if properties {
    reader.attach_properties(&mut page).await;
  }

  if json {
    println!("{}", serde_json::to_string_pretty(&page).context("Failed to serialize page")?);
    return Ok(());
  }

  for line in format_page_lines(&page, colors) {
    println!("{line}");
  }
  if let Some(url) = &page.absolute_url {
    println!("{}: {}", colors.emphasis("URL"), colors.link(reader.url_policy().upgrade_scheme(url)));
  }
  if !page.content.is_empty() {
    println!("\n{}", colors.emphasis("Content"));
    println!("{}", page.content);
  }

  Ok(())
}

async fn run_properties_command(space: &str, name: &str, cli: &Cli, colors: &ColorScheme) -> Result<()> {
  let reader = connect(cli)?;
  let properties = reader.get_properties(space, name).await?;

  if properties.is_empty() {
    println!("{} {}", colors.warning("⚠"), colors.warning("No properties found"));
    return Ok(());
  }

  for line in format_property_lines(&properties, colors) {
    println!("{line}");
  }

  Ok(())
}

/// Render a page header followed by one tree line per enrichment entry.
pub(crate) fn format_page_lines(page: &Page, colors: &ColorScheme) -> Vec<String> {
  let title = page.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(&page.name);
  let mut lines = vec![format!(
    "{} [space {} | name {}]",
    colors.emphasis(title),
    colors.dimmed(&page.space),
    colors.dimmed(&page.name)
  )];

  let mut entries = Vec::new();
  for attachment in page.attachments.iter().flatten() {
    let url = attachment.absolute_url.as_deref().unwrap_or("-");
    entries.push(format!(
      "attachment {} ({}, {} bytes) {}",
      colors.emphasis(&attachment.filename),
      attachment.mime_type.as_deref().unwrap_or("unknown"),
      colors.number(attachment.size),
      colors.link(url)
    ));
  }
  for object in page.objects.iter().flatten() {
    entries.push(format!("object {} #{}", colors.code(&object.class_name), object.number));
  }
  for (name, value) in page.properties.iter().flatten() {
    entries.push(format!("property {} = {}", colors.emphasis(name), value));
  }

  let count = entries.len();
  for (idx, entry) in entries.into_iter().enumerate() {
    let connector = if idx + 1 == count { "└── " } else { "├── " };
    lines.push(format!("{connector}{entry}"));
  }

  lines
}

pub(crate) fn format_property_lines(properties: &PropertyMap, colors: &ColorScheme) -> Vec<String> {
  properties
    .iter()
    .map(|(name, value)| format!("{}: {}", colors.emphasis(name), value))
    .collect()
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::cli::ColorOption;

  fn sample_page() -> Page {
    let mut page: Page = serde_json::from_value(json!({
      "id": "xwiki:Blog.News.Launch",
      "space": "Blog.News",
      "name": "Launch",
      "title": "Launch day"
    }))
    .unwrap();

    page.attachments = Some(
      serde_json::from_value(json!([{
        "name": "logo.png",
        "size": 2048,
        "mimeType": "image/png",
        "xwikiAbsoluteUrl": "https://wiki.test/bin/download/Blog/News/Launch/logo.png"
      }]))
      .unwrap(),
    );
    page.objects = Some(
      serde_json::from_value(json!([{"className": "Blog.BlogPostClass", "number": 0, "headline": "Launch day"}]))
        .unwrap(),
    );
    page
  }

  #[test]
  fn test_format_page_lines_tree() {
    let colors = ColorScheme::new(ColorOption::Never);
    let output = format_page_lines(&sample_page(), &colors).join("\n");

    insta::assert_snapshot!(output, @r###"
    Launch day [space Blog.News | name Launch]
    ├── attachment logo.png (image/png, 2048 bytes) https://wiki.test/bin/download/Blog/News/Launch/logo.png
    └── object Blog.BlogPostClass #0
    "###);
  }

  #[test]
  fn test_format_page_lines_without_enrichments() {
    let colors = ColorScheme::new(ColorOption::Never);
    let page: Page = serde_json::from_value(json!({"space": "Main", "name": "WebHome"})).unwrap();

    let lines = format_page_lines(&page, &colors);
    assert_eq!(lines, vec!["WebHome [space Main | name WebHome]"]);
  }

  #[test]
  fn test_format_property_lines_sorted_by_name() {
    let colors = ColorScheme::new(ColorOption::Never);
    let properties: PropertyMap = [("last_name", "Doe"), ("first_name", "Jane")]
      .into_iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();

    assert_eq!(
      format_property_lines(&properties, &colors),
      vec!["first_name: Jane", "last_name: Doe"]
    );
  }
}
