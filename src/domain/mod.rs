pub mod error;
pub mod homework;

pub use error::{FetchError, PollError};
pub use homework::{HomeworkRecord, HomeworkStatus, NotificationMessage};
