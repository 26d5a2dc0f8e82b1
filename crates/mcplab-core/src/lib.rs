pub mod error;
pub mod traits;
pub mod types;

pub use error::Error;
pub use traits::ToolBackend;
pub use types::{CalendarEvent, CalendarListing, SearchResult, SearchResults};
