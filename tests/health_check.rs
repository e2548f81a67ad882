mod common;

#[tokio::test]
async fn health_check_works() {
    // 1. Arrange
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    // 2. Act
    let response = client
        .get(format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // 3. Assert
    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}
