mod common;

use chirp::account::RESET_TIME_FALLBACK;
use common::mock_server::ChirpMock;

#[tokio::test]
async fn test_rate_limit_status_valid() {
    let mock = ChirpMock::start().await;
    mock.mount_fixture("account/rate_limit_status_valid.json")
        .await;

    let client = mock.client();
    let status = client.rate_limit_status().await.unwrap();

    assert_eq!(status.hourly_limit, 150);
    assert_eq!(status.remaining_hits, 149);
    assert_eq!(status.reset_time.unix_timestamp(), 1_283_421_600);
    assert_eq!(status.reset_time_in_seconds, 1_283_421_600);
}

#[tokio::test]
async fn test_rate_limit_status_bad_reset_time_does_not_fail() {
    let mock = ChirpMock::start().await;
    mock.mount_fixture("account/rate_limit_status_bad_reset_time.json")
        .await;

    let client = mock.client();
    let status = client.rate_limit_status().await.unwrap();

    assert_eq!(status.reset_time, RESET_TIME_FALLBACK);
    assert_eq!(status.remaining_hits, 19);
}
