pub mod album;
pub mod catalog;
pub mod download;
