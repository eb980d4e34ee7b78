//! Production adapters for the three external sources.

pub mod cross_reference;
pub mod gemini;
pub mod google;

pub use cross_reference::PlaywrightCrossReference;
pub use gemini::GeminiModel;
pub use google::{build_query, GoogleSearch};
