use std::sync::Arc;

use crate::config::Config;
use crate::experiences::store::ExperienceStore;
use crate::generation::template::Profile;
use crate::llm_client::CompletionClient;
use crate::rate_limit::{Clock, RateGate};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ExperienceStore,
    pub llm: Arc<dyn CompletionClient>,
    /// Cooldown state for the analyze and generate gates. One per process.
    pub gate: Arc<RateGate>,
    pub clock: Arc<dyn Clock>,
    pub profile: Arc<Profile>,
    pub config: Config,
}
