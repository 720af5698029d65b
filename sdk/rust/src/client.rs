use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope returned by every gateway endpoint.
///
/// Success responses carry `data`; error responses may carry `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Records in `data`, empty when absent.
    pub fn records(&self) -> Vec<Value> {
        match &self.data {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        }
    }
}

/// HTTP status plus decoded envelope.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub envelope: Envelope,
}

pub struct GatewayClient {
    client: Client,
    gateway_url: String,
}

impl GatewayClient {
    pub fn new(gateway_url: &str) -> Self {
        Self {
            client: Client::new(),
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<GatewayResponse, Box<dyn std::error::Error>> {
        self.get("/health", None).await
    }

    /// `GET /api/v1/negaras`.
    pub async fn countries(&self) -> Result<GatewayResponse, Box<dyn std::error::Error>> {
        self.get("/api/v1/negaras", None).await
    }

    /// `GET /api/v1/pelabuhans?id_negara=...`.
    pub async fn ports(&self, id_negara: &str) -> Result<GatewayResponse, Box<dyn std::error::Error>> {
        self.get("/api/v1/pelabuhans", Some(("id_negara", id_negara))).await
    }

    /// `GET /api/v1/barangs?id_pelabuhan=...`.
    pub async fn goods(&self, id_pelabuhan: &str) -> Result<GatewayResponse, Box<dyn std::error::Error>> {
        self.get("/api/v1/barangs", Some(("id_pelabuhan", id_pelabuhan))).await
    }

    async fn get(
        &self,
        path: &str,
        query: Option<(&str, &str)>,
    ) -> Result<GatewayResponse, Box<dyn std::error::Error>> {
        let mut request = self.client.get(format!("{}{}", self.gateway_url, path));
        if let Some(pair) = query {
            request = request.query(&[pair]);
        }

        let resp = request.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        match serde_json::from_str::<Envelope>(&text) {
            Ok(envelope) => Ok(GatewayResponse { status, envelope }),
            Err(e) => Err(format!("Gateway returned non-envelope body ({}): {}: {}", status, e, text).into()),
        }
    }
}
