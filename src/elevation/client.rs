use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn new_client() -> Result<Client, ElevationClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder().user_agent(USER_AGENT).default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ElevationClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_client_sets_the_json_accept_header() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("accept", "application/json")
            .match_header("user-agent", USER_AGENT)
            .create_async()
            .await;

        let client = new_client()?;

        client.get(format!("{}{}", server.url(), "/")).send().await?;

        // Verify that the call came in and that the headers are set
        mock.assert();

        Ok(())
    }
}
