//! Effect handlers for network requests.
//!
//! Pure async functions - the runtime spawns them and forwards the returned
//! event to the inbox.

use seekr_core::api::{DocumentId, SearchClient};
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

/// Runs a query against the search service.
///
/// Returns `UiEvent::Cancelled` if the token fires before the response lands.
pub async fn search(
    client: SearchClient,
    terms: Vec<String>,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let request = client.search(&terms);
    let result = match cancel {
        Some(cancel) => tokio::select! {
            biased;
            () = cancel.cancelled() => return UiEvent::Cancelled,
            result = request => result,
        },
        None => request.await,
    };
    UiEvent::SearchFinished { terms, result }
}

/// Fetches the body of one document.
pub async fn fetch_document(
    client: SearchClient,
    id: DocumentId,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let request = client.fetch_document(&id);
    let result = match cancel {
        Some(cancel) => tokio::select! {
            biased;
            () = cancel.cancelled() => return UiEvent::Cancelled,
            result = request => result,
        },
        None => request.await,
    };
    UiEvent::DocumentLoaded { id, result }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(url: &str) -> SearchClient {
        SearchClient::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_search_returns_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fox"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"text":{"1":["https://a.example","the (((fox)))"]},"matches":{"1":[[4,3]]},"scores":[1]}"#,
            ))
            .mount(&server)
            .await;

        let event = search(client(&server.uri()), vec!["fox".into()], None).await;

        match event {
            UiEvent::SearchFinished { terms, result } => {
                assert_eq!(terms, vec!["fox"]);
                assert_eq!(result.unwrap().len(), 1);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancelled_search_reports_cancelled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;
        let token = CancellationToken::new();
        token.cancel();

        let event = search(client(&server.uri()), vec!["fox".into()], Some(token)).await;

        assert!(matches!(event, UiEvent::Cancelled));
    }

    #[tokio::test]
    async fn test_fetch_document_carries_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/id/42"))
            .respond_with(ResponseTemplate::new(200).set_body_string("body text"))
            .mount(&server)
            .await;
        let token = CancellationToken::new();

        let event =
            fetch_document(client(&server.uri()), DocumentId::from("42"), Some(token)).await;

        match event {
            UiEvent::DocumentLoaded { id, result } => {
                assert_eq!(id.as_str(), "42");
                assert_eq!(result.unwrap(), "body text");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
