pub mod fake_xwiki;
pub mod fixtures;
