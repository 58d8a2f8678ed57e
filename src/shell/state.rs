use std::sync::Arc;

use crate::modules::events::core::ports::EventRepository;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventRepository>,
}
