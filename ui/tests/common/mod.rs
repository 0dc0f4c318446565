//! Shared setup for list-screen integration tests.

use std::time::Duration;

use bizdesk_business::{BusinessConfig, ResourceClient};
use bizdesk_ui::screens::{ListScreen, TableConfig};
use bizdesk_ui::widgets::Notifications;
use chrono::Utc;
use egui_kittest::Harness;
use serde_json::json;
use tokio::runtime::Handle;
use wiremock::MockServer;

/// Frames to run between polls while waiting for the mock backend.
pub const MAX_POLLS: usize = 50;

pub struct ScreenFixture<C: TableConfig> {
    pub screen: ListScreen<C>,
    pub notices: Notifications,
}

pub struct TestCtx<'a, C: TableConfig> {
    pub mock_server: MockServer,
    harness: Harness<'a, ScreenFixture<C>>,
}

impl<'a, C: TableConfig> TestCtx<'a, C> {
    /// A screen talking to a fresh mock server. Mount mocks before the first frame.
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let config = BusinessConfig::new(mock_server.uri());
        let client = ResourceClient::<C::Row>::from_config(&config).expect("client should build");
        let fixture = ScreenFixture {
            screen: ListScreen::<C>::new(client, Handle::current(), config.page_size),
            notices: Notifications::new(),
        };
        let harness = Harness::new_ui_state(
            |ui, fixture: &mut ScreenFixture<C>| {
                fixture.screen.show(ui, &mut fixture.notices, Utc::now());
            },
            fixture,
        );

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, ScreenFixture<C>> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, ScreenFixture<C>> {
        &self.harness
    }

    /// Steps frames, yielding to the runtime in between, until `done` holds.
    pub async fn settle(&mut self, done: impl Fn(&ScreenFixture<C>) -> bool) -> bool {
        for _ in 0..MAX_POLLS {
            self.harness.step();
            if done(self.harness.state()) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        false
    }
}

pub fn subsidiary_json(id: u64, name: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "city": "Lyon",
        "address": null,
        "status": status,
        "employeeCount": 4
    })
}
