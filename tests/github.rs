mod common;

use devlink::configuration::{get_configuration, Settings};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn configuration_against(mock_server: &MockServer) -> Settings {
    std::env::set_var("JWT_SECRET", common::TEST_JWT_SECRET);
    let mut configuration = get_configuration().expect("Failed to get configuration");
    if let Some(github) = configuration.connectors.github.as_mut() {
        github.base_url = mock_server.uri();
        github.retry_attempts = 0;
    }
    configuration
}

#[tokio::test]
async fn github_repositories_are_proxied() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "name": "hello-world",
                "full_name": "octocat/hello-world",
                "html_url": "https://github.com/octocat/hello-world",
                "description": "my first repository",
                "language": "Rust",
                "stargazers_count": 3,
                "forks_count": 1,
                "private": false,
                "created_at": "2020-01-01T00:00:00Z",
                "watchers": 3
            }
        ])))
        .mount(&mock_server)
        .await;

    let configuration = configuration_against(&mock_server).await;
    let Some(app) = common::spawn_app_with_configuration(configuration).await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/profile/github/octocat", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 1);
    assert_eq!(body["list"][0]["name"], "hello-world");
    assert_eq!(body["list"][0]["stargazers_count"], 3);
    assert_eq!(body["list"][0]["is_private"], false);
}

#[tokio::test]
async fn unknown_github_user_maps_to_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/nobody/repos"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let configuration = configuration_against(&mock_server).await;
    let Some(app) = common::spawn_app_with_configuration(configuration).await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/profile/github/nobody", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "No Github profile found");
}

#[tokio::test]
async fn github_error_maps_to_bad_gateway() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let configuration = configuration_against(&mock_server).await;
    let Some(app) = common::spawn_app_with_configuration(configuration).await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/profile/github/octocat", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 502);
}
