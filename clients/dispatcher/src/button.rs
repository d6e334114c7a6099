use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::dispatcher::RequestDispatcher;
use crate::page::Page;

/// The `schedule_button` element: each click starts one dispatch.
///
/// Clicks are not serialized. Overlapping dispatches all write to the same
/// `response` element and the last one to finish decides what it shows.
pub struct ScheduleButton<P: Page + 'static> {
    dispatcher: Arc<RequestDispatcher>,
    page: Arc<P>,
}

impl<P: Page + 'static> ScheduleButton<P> {
    pub fn new(dispatcher: Arc<RequestDispatcher>, page: Arc<P>) -> Self {
        Self { dispatcher, page }
    }

    pub fn click(&self) -> JoinHandle<()> {
        let dispatcher = Arc::clone(&self.dispatcher);
        let page = Arc::clone(&self.page);

        tokio::spawn(async move {
            if let Err(e) = dispatcher.schedule_meeting(page.as_ref()).await {
                warn!("Schedule button click ignored: {}", e);
            }
        })
    }
}
