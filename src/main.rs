//! xwiki-reader - Read pages, attachments, and objects from an XWiki server
//!
//! This is the main entry point for the CLI application.

#[tokio::main]
async fn main() {
  xwiki_reader::cli::run().await;
}
