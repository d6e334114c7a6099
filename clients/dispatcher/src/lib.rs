pub mod button;
pub mod dispatcher;
pub mod duration;
pub mod error;
pub mod page;
pub mod render;

pub use button::ScheduleButton;
pub use dispatcher::{RequestDispatcher, DEFAULT_API_URL, IN_PROGRESS_MESSAGE};
pub use error::DispatchError;
pub use page::{element, FormPage, Page};
