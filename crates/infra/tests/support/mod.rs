use std::sync::Arc;

use slotguard_domain::CalendarConfig;
use slotguard_infra::{GoogleCalendarClient, StaticCredentials};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "ya29.test-token";
pub const EVENTS_PATH: &str = "/calendars/primary/events";

/// Client pointed at a wiremock server, authenticated with [`TEST_TOKEN`].
pub fn client_for(server: &MockServer) -> GoogleCalendarClient {
    client_with_token(server, TEST_TOKEN)
}

pub fn client_with_token(server: &MockServer, token: &str) -> GoogleCalendarClient {
    let config = CalendarConfig { api_base_url: server.uri(), ..Default::default() };
    GoogleCalendarClient::new(&config, Arc::new(StaticCredentials::new(token)))
        .expect("client should build")
}
