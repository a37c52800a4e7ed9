//! XWiki reader library
//!
//! Read-only access to the XWiki REST API: pages of a space with their
//! attachments and objects, object properties, groups, and users.

pub mod cli;
pub mod color;
pub mod commands;
pub mod xwiki;
