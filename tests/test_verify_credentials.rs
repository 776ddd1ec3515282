mod common;

use common::mock_server::ChirpMock;

#[tokio::test]
async fn test_verify_credentials_valid() {
    let mock = ChirpMock::start().await;
    mock.mount_fixture("account/verify_credentials_valid.json")
        .await;

    let client = mock.client();
    let user = client.verify_credentials().await.unwrap();

    assert_eq!(user.id, 119_476_949);
    assert_eq!(user.screen_name, "chirpdev");
    assert!(!user.protected);
    assert_eq!(user.followers_count, 212);
    assert_eq!(user.created_at.year(), 2009);
    assert_eq!(user.utc_offset, Some(-28_800));
}

#[tokio::test]
async fn test_verify_credentials_unauthorized() {
    let mock = ChirpMock::start().await;
    mock.mount_fixture("account/verify_credentials_unauthorized.json")
        .await;

    let client = mock.client();
    let result = client.verify_credentials().await;

    assert!(result.is_err());
}
