use std::sync::Arc;

use crate::config::Config;
use crate::services::Services;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub services: Services,
}
