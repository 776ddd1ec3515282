mod common;

use chirp::query::AccountQuery;
use chirp::types::{AccountPayload, AccountSource, AccountType};
use common::mock_server::ChirpMock;

#[tokio::test]
async fn test_totals_valid() {
    let mock = ChirpMock::start().await;
    mock.mount_fixture("account/totals_valid.json").await;

    let client = mock.client();
    let totals = client.totals().await.unwrap();

    assert_eq!(totals.friends, 78);
    assert_eq!(totals.updates, 1034);
    assert_eq!(totals.followers, 999);
    assert_eq!(totals.favorites, 12);
}

#[tokio::test]
async fn test_totals_via_generic_query() {
    let mock = ChirpMock::start().await;
    mock.mount_fixture("account/totals_valid.json").await;

    let client = mock.client();
    let query = AccountQuery::new().of_type(AccountType::Totals);
    let account = client.account(&query).await.unwrap();

    assert_eq!(account.source, AccountSource::Query(AccountType::Totals));
    assert!(matches!(
        account.payload,
        Some(AccountPayload::Totals(_))
    ));
}
