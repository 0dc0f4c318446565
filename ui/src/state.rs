use bizdesk_business::BusinessConfig;
use tokio::runtime::Handle;

use crate::widgets::Notifications;

/// The main application state.
pub struct State {
    pub config: BusinessConfig,
    /// Runtime the list screens spawn their requests on.
    pub runtime: Handle,
    pub notifications: Notifications,
}

impl State {
    pub fn new(config: BusinessConfig, runtime: Handle) -> Self {
        Self {
            config,
            runtime,
            notifications: Notifications::new(),
        }
    }

    /// State pointing at a mock backend.
    pub fn test(base_url: String, runtime: Handle) -> Self {
        Self::new(BusinessConfig::new(base_url), runtime)
    }
}
