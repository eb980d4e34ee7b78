// Alternative-part lookup - API Core
//
// HTTP surface over the partscout pipeline: single lookup, bounded batch,
// file upload and CSV export.

pub mod config;
pub mod server;

pub use config::*;
