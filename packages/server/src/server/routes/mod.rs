// HTTP routes
pub mod batch;
pub mod export;
pub mod health;
pub mod search;
pub mod upload;

pub use batch::*;
pub use export::*;
pub use health::*;
pub use search::*;
pub use upload::*;
