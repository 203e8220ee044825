use std::sync::Arc;
use std::time::Instant;

use crate::composer::Composer;
use crate::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub composer: Arc<Composer>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let composer = Arc::new(Composer::from_settings(&settings));

        Self {
            settings: Arc::new(settings),
            composer,
            start_time: Instant::now(),
        }
    }
}
