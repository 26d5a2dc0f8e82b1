pub mod error;
pub mod sender;

pub use error::SendError;
pub use sender::{fold_lines, RequestSender};
