use contracts::domain::a001_drink::Drink;
use gloo_net::http::Request;

/// Fetch the static drinks list
pub async fn fetch_drinks(url: &str) -> Result<Vec<Drink>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch drinks: {}", response.status()));
    }

    response
        .json::<Vec<Drink>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
