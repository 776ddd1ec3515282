use chirp::query::AccountQuery;
use chirp::types::AccountType;
use chirp::ChirpClient;
use std::env;

#[tokio::main]
async fn main() {
    let username =
        env::var("CHIRP_USERNAME").expect("CHIRP_USERNAME environment variable not set");
    let password =
        env::var("CHIRP_PASSWORD").expect("CHIRP_PASSWORD environment variable not set");

    let client = ChirpClient::new(username, password);
    match client.verify_credentials().await {
        Ok(user) => println!("{user:#?}"),
        Err(e) => println!("{e:#?}"),
    }

    match client.rate_limit_status().await {
        Ok(status) => println!("{status:#?}"),
        Err(e) => println!("{e:#?}"),
    }

    match client.settings().await {
        Ok(settings) => println!("{settings:#?}"),
        Err(e) => println!("{e:#?}"),
    }

    // Same call through the generic query surface.
    let query = AccountQuery::new().of_type(AccountType::Totals);
    match client.account(&query).await {
        Ok(account) => println!("{account:#?}"),
        Err(e) => println!("{e:#?}"),
    }
}
