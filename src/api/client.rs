//! HTTP client for the bus back-office API
//!
//! Every update is a single POST with no retry. No request timeout is set,
//! so a slow backend keeps the page in its submitting state until the
//! transport gives up.

use super::error::ApiError;
use super::payload::{
    BusDetailsUpdate, BusFareUpdate, BusRouteUpdate, BusTimingUpdate, BusTypeUpdate,
};
use super::traits::BackendClientTrait;
use crate::state::PageKind;
use async_trait::async_trait;
use reqwest::multipart;
use serde::Serialize;

/// Client for the backend update endpoints
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, page: PageKind) -> String {
        format!("{}{}", self.base_url, page.endpoint())
    }

    async fn post_json(&self, page: PageKind, body: &impl Serialize) -> Result<String, ApiError> {
        let response = self.http.post(self.url(page)).json(body).send().await?;
        read_body(response).await
    }

    async fn post_multipart(
        &self,
        page: PageKind,
        form: multipart::Form,
    ) -> Result<String, ApiError> {
        let response = self.http.post(self.url(page)).multipart(form).send().await?;
        read_body(response).await
    }
}

/// Any 2xx is success, even when its body cannot be read; everything else
/// is a failure carrying whatever body arrived
async fn read_body(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: body.unwrap_or_default(),
        });
    }
    Ok(body.unwrap_or_else(|e| {
        tracing::warn!(%status, error = %e, "Update accepted but response body unreadable");
        String::new()
    }))
}

fn details_form(update: &BusDetailsUpdate) -> Result<multipart::Form, ApiError> {
    let photo = &update.bus_photo;
    let part = multipart::Part::bytes(photo.bytes.clone())
        .file_name(photo.file_name.clone())
        .mime_str(&photo.mime_type)
        .map_err(|e| ApiError::Payload(format!("bad photo type {}: {e}", photo.mime_type)))?;
    Ok(multipart::Form::new()
        .text("busName", update.bus_name.clone())
        .part("busPhoto", part))
}

#[async_trait]
impl BackendClientTrait for BackendClient {
    async fn update_bus_details(&self, update: &BusDetailsUpdate) -> Result<String, ApiError> {
        let form = details_form(update)?;
        self.post_multipart(PageKind::BusName, form).await
    }

    async fn update_bus_route(&self, update: &BusRouteUpdate) -> Result<String, ApiError> {
        self.post_json(PageKind::BusRoute, update).await
    }

    async fn update_bus_fare(&self, update: &BusFareUpdate) -> Result<String, ApiError> {
        self.post_json(PageKind::BusFare, update).await
    }

    async fn update_bus_timing(&self, update: &BusTimingUpdate) -> Result<String, ApiError> {
        self.post_json(PageKind::BusTiming, update).await
    }

    async fn update_bus_type(&self, update: &BusTypeUpdate) -> Result<String, ApiError> {
        self.post_json(PageKind::BusType, update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::SelectedPhoto;
    use crate::state::{BusSubType, BusType, FareType};
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// What the fake backend received
    struct Captured {
        head: String,
        body: Vec<u8>,
    }

    impl Captured {
        fn request_line(&self) -> &str {
            self.head.lines().next().unwrap_or_default()
        }

        fn header(&self, name: &str) -> Option<&str> {
            self.head.lines().find_map(|line| {
                let (key, value) = line.split_once(':')?;
                key.trim()
                    .eq_ignore_ascii_case(name)
                    .then_some(value.trim())
            })
        }

        fn json(&self) -> serde_json::Value {
            serde_json::from_slice(&self.body).unwrap()
        }
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    /// Serve exactly one request with the given status line and body
    async fn serve_once(
        status_line: &'static str,
        reply: &'static str,
    ) -> (String, oneshot::Receiver<Captured>) {
        serve_raw(format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
            reply.len()
        ))
        .await
    }

    /// Serve exactly one request, answering with `response` verbatim
    async fn serve_raw(response: String) -> (String, oneshot::Receiver<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];

            let header_end = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "client closed before sending headers");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = find(&buf, b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
            let captured_len = Captured {
                head: head.clone(),
                body: Vec::new(),
            }
            .header("content-length")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0);

            while buf.len() < header_end + captured_len {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let body = buf[header_end..header_end + captured_len].to_vec();

            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            let _ = tx.send(Captured { head, body });
        });

        (format!("http://{addr}/"), rx)
    }

    #[tokio::test]
    async fn test_route_posts_json_to_route_endpoint() {
        let (base, captured) = serve_once("200 OK", r#"{"ok":true}"#).await;
        let client = BackendClient::new(&base).unwrap();

        let update = BusRouteUpdate {
            departure_location: "Depot".to_string(),
            arrival_location: "Airport".to_string(),
            route_stops: vec!["Mall".to_string(), "Station".to_string()],
        };
        let body = client.update_bus_route(&update).await.unwrap();
        assert_eq!(body, r#"{"ok":true}"#);

        let captured = captured.await.unwrap();
        assert_eq!(captured.request_line(), "POST /api/update-bus-route HTTP/1.1");
        assert_eq!(captured.header("content-type"), Some("application/json"));
        assert_eq!(
            captured.json(),
            json!({
                "departureLocation": "Depot",
                "arrivalLocation": "Airport",
                "routeStops": ["Mall", "Station"]
            })
        );
    }

    #[tokio::test]
    async fn test_fare_body() {
        let (base, captured) = serve_once("200 OK", "{}").await;
        let client = BackendClient::new(&base).unwrap();

        let update = BusFareUpdate {
            fare_amount: "120".to_string(),
            fare_type: FareType::Economy,
        };
        client.update_bus_fare(&update).await.unwrap();

        let captured = captured.await.unwrap();
        assert_eq!(captured.request_line(), "POST /api/update-bus-fare HTTP/1.1");
        assert_eq!(
            captured.json(),
            json!({ "fareAmount": "120", "fareType": "Economy" })
        );
    }

    #[tokio::test]
    async fn test_timing_and_type_paths() {
        let (base, captured) = serve_once("201 Created", "").await;
        let client = BackendClient::new(&base).unwrap();
        let update = BusTimingUpdate {
            departure_time: NaiveTime::from_hms_opt(6, 5, 0).unwrap(),
            arrival_time: NaiveTime::from_hms_opt(9, 50, 0).unwrap(),
        };
        tokio_test::assert_ok!(client.update_bus_timing(&update).await);
        let captured = captured.await.unwrap();
        assert_eq!(captured.request_line(), "POST /api/update-bus-timing HTTP/1.1");
        assert_eq!(
            captured.json(),
            json!({ "departureTime": "06:05", "arrivalTime": "09:50" })
        );

        let (base, captured) = serve_once("204 No Content", "").await;
        let client = BackendClient::new(&base).unwrap();
        let update = BusTypeUpdate {
            bus_type: BusType::Ac,
            bus_sub_type: BusSubType::Seater,
        };
        let body = client.update_bus_type(&update).await.unwrap();
        assert_eq!(body, "");
        let captured = captured.await.unwrap();
        assert_eq!(captured.request_line(), "POST /api/update-bus-type HTTP/1.1");
        assert_eq!(
            captured.json(),
            json!({ "busType": "AC", "busSubType": "Seater" })
        );
    }

    #[tokio::test]
    async fn test_details_posts_multipart() {
        let (base, captured) = serve_once("200 OK", "{}").await;
        let client = BackendClient::new(&base).unwrap();

        let update = BusDetailsUpdate {
            bus_name: "Sunrise Express".to_string(),
            bus_photo: SelectedPhoto {
                file_name: "sunrise.png".to_string(),
                mime_type: "image/png".to_string(),
                bytes: b"PNGDATA".to_vec(),
            },
        };
        tokio_test::assert_ok!(client.update_bus_details(&update).await);

        let captured = captured.await.unwrap();
        assert_eq!(captured.request_line(), "POST /api/update-bus-details HTTP/1.1");
        assert!(captured
            .header("content-type")
            .is_some_and(|v| v.starts_with("multipart/form-data; boundary=")));

        let body = String::from_utf8_lossy(&captured.body).to_lowercase();
        assert!(body.contains(r#"name="busname""#));
        assert!(body.contains("sunrise express"));
        assert!(body.contains(r#"name="busphoto"; filename="sunrise.png""#));
        assert!(body.contains("content-type: image/png"));
        assert!(body.contains("pngdata"));
    }

    #[tokio::test]
    async fn test_non_2xx_is_status_error() {
        let (base, _captured) = serve_once("500 Internal Server Error", "boom").await;
        let client = BackendClient::new(&base).unwrap();
        let update = BusFareUpdate {
            fare_amount: "5".to_string(),
            fare_type: FareType::Premium,
        };
        let err = client.update_bus_fare(&update).await.unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_2xx_with_cut_off_body_is_success() {
        let (base, captured) = serve_raw(
            "HTTP/1.1 200 OK\r\nContent-Length: 64\r\nConnection: close\r\n\r\n{\"ok\"".to_string(),
        )
        .await;
        let client = BackendClient::new(&base).unwrap();
        let update = BusFareUpdate {
            fare_amount: "5".to_string(),
            fare_type: FareType::Business,
        };
        let body = client.update_bus_fare(&update).await.unwrap();
        assert_eq!(body, "");
        assert_eq!(
            captured.await.unwrap().request_line(),
            "POST /api/update-bus-fare HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = BackendClient::new(&format!("http://{addr}")).unwrap();
        let update = BusFareUpdate {
            fare_amount: "5".to_string(),
            fare_type: FareType::Economy,
        };
        let err = client.update_bus_fare(&update).await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }

    #[test]
    fn test_bad_mime_is_payload_error() {
        let update = BusDetailsUpdate {
            bus_name: "X".to_string(),
            bus_photo: SelectedPhoto {
                file_name: "x.png".to_string(),
                mime_type: "not a mime".to_string(),
                bytes: Vec::new(),
            },
        };
        assert!(matches!(details_form(&update), Err(ApiError::Payload(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BackendClient::new("http://example.test/").unwrap();
        assert_eq!(client.base_url(), "http://example.test");
        assert_eq!(
            client.url(PageKind::BusFare),
            "http://example.test/api/update-bus-fare"
        );
    }
}
