use chirp::ChirpClient;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Deserialize)]
pub struct Fixture {
    pub request: FixtureRequest,
    pub response: FixtureResponse,
}

#[derive(Deserialize)]
pub struct FixtureRequest {
    pub method: String,
    pub path_pattern: String,
}

#[derive(Deserialize)]
pub struct FixtureResponse {
    pub status_code: u16,
    pub body: serde_json::Value,
}

pub struct ChirpMock {
    pub server: MockServer,
}

impl ChirpMock {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
    }

    pub async fn mount_fixture(&self, fixture_path: &str) {
        let full_path = Self::fixtures_dir().join(fixture_path);

        let content = fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", full_path.display(), e));

        let fixture: Fixture = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", full_path.display(), e));

        Mock::given(method(fixture.request.method.as_str()))
            .and(path_regex(&fixture.request.path_pattern))
            .respond_with(
                ResponseTemplate::new(fixture.response.status_code)
                    .set_body_json(&fixture.response.body),
            )
            .mount(&self.server)
            .await;
    }

    pub fn client(&self) -> ChirpClient {
        ChirpClient::new("testuser", "testpass").with_base_url(format!("{}/1/", self.server.uri()))
    }
}
