use std::sync::Arc;

use async_trait::async_trait;
use domain::{DomainError, DomainResult, LoadSurveyResult, SurveyResultModel};

use super::decode;
use crate::data::protocols::{HttpClient, HttpMethod, HttpRequest, HttpStatusCode};

/// Loads one survey's result from `{api}/surveys/{id}/results`.
pub struct RemoteLoadSurveyResult {
    url: String,
    http_client: Arc<dyn HttpClient>,
}

impl RemoteLoadSurveyResult {
    pub fn new(url: impl Into<String>, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl LoadSurveyResult for RemoteLoadSurveyResult {
    async fn load(&self) -> DomainResult<SurveyResultModel> {
        let request = HttpRequest::new(HttpMethod::Get, &self.url);
        let response = self.http_client.request(request).await?;

        match response.status_code {
            HttpStatusCode::Ok => decode(response.body),
            HttpStatusCode::Forbidden => Err(DomainError::AccessDenied),
            _ => Err(DomainError::Unexpected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::protocols::{HttpResponse, MockHttpClient};
    use chrono::Datelike;
    use serde_json::{json, Value};

    const URL: &str = "http://x/surveys/any_id/results";

    fn make_sut(status: HttpStatusCode, body: Option<Value>) -> RemoteLoadSurveyResult {
        let mut http_client = MockHttpClient::new();
        http_client
            .expect_request()
            .withf(|request| request.url == URL && request.method == HttpMethod::Get)
            .times(1)
            .returning(move |_| Ok(HttpResponse::new(status, body.clone())));
        RemoteLoadSurveyResult::new(URL, Arc::new(http_client))
    }

    #[tokio::test]
    async fn test_returns_result_on_200() {
        let sut = make_sut(
            HttpStatusCode::Ok,
            Some(json!({
                "question": "Question",
                "date": "2022-12-21T10:00:00Z",
                "answers": [
                    {"image": "any_image", "answer": "any_answer", "count": 7, "percent": 70, "isCurrentAccountAnswer": false}
                ]
            })),
        );

        let result = sut.load().await.unwrap();

        assert_eq!(result.question, "Question");
        assert_eq!(result.date.year(), 2022);
        assert_eq!(result.answers[0].percent, 70.0);
    }

    #[tokio::test]
    async fn test_access_denied_on_403() {
        let sut = make_sut(HttpStatusCode::Forbidden, None);
        assert_eq!(sut.load().await.unwrap_err(), DomainError::AccessDenied);
    }

    #[tokio::test]
    async fn test_unexpected_on_404_and_500() {
        for status in [HttpStatusCode::NotFound, HttpStatusCode::ServerError] {
            let sut = make_sut(status, None);
            assert_eq!(sut.load().await.unwrap_err(), DomainError::Unexpected);
        }
    }
}
