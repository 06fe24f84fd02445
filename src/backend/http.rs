//! Gateway implementation talking to the node daemon REST API.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::{json, Value};

use super::{BackendError, Command, CommandName, Gateway};

#[derive(Debug, Clone)]
pub enum HttpGatewayError {
    InvalidUrl(String),
    Client(String),
}

impl fmt::Display for HttpGatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(e) => write!(f, "Invalid backend url: {}", e),
            Self::Client(e) => write!(f, "Failed to build http client: {}", e),
        }
    }
}

impl std::error::Error for HttpGatewayError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
struct Route {
    method: Method,
    segments: Vec<String>,
    body: Option<Value>,
}

impl Route {
    fn get(segments: &[&str]) -> Self {
        Self {
            method: Method::Get,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            body: None,
        }
    }

    fn post(segments: &[&str], body: Value) -> Self {
        Self {
            method: Method::Post,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: Url,
    blocks_per_mine: u64,
}

impl HttpGateway {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        blocks_per_mine: u64,
    ) -> Result<Self, HttpGatewayError> {
        let base_url =
            Url::parse(base_url).map_err(|e| HttpGatewayError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(HttpGatewayError::InvalidUrl(base_url.to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpGatewayError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            blocks_per_mine,
        })
    }

    fn route(&self, command: &Command) -> Route {
        match command {
            Command::ListWallets => Route::get(&["wallet", "list"]),
            Command::WalletInfo { wallet } => Route::get(&["wallet", wallet.as_str(), "info"]),
            Command::ListTxs { wallet } => {
                Route::get(&["wallet", wallet.as_str(), "transactions"])
            }
            Command::GenerateToAddress { wallet } => Route::get(&[
                "wallet",
                wallet.as_str(),
                "generate",
                &self.blocks_per_mine.to_string(),
            ]),
            Command::GenerateAddress { wallet } => {
                Route::get(&["wallet", wallet.as_str(), "address"])
            }
            Command::Send {
                sender,
                amount,
                receiver,
            } => Route::post(
                &["wallet", sender.as_str(), "send"],
                json!({ "address": receiver, "amount": amount.to_sat() }),
            ),
            Command::NewMmc => Route::get(&["mmc"]),
            Command::LoadWalletWithMmc { mmc } => {
                Route::post(&["wallet", "load"], json!({ "mmc": mmc }))
            }
            Command::GetData => Route::get(&["lightning", "info"]),
            Command::GetBlockchainInfo => Route::get(&["blockchain", "info"]),
        }
    }

    fn endpoint(&self, command: CommandName, segments: &[String]) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                BackendError::Unknown(command, format!("invalid backend url {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn invoke(&self, command: Command) -> Result<Value, BackendError> {
        let name = command.name();
        let route = self.route(&command);
        let url = self.endpoint(name, &route.segments)?;
        log::debug!("{} -> {:?} {}", name, route.method, url);

        let request = match route.method {
            Method::Get => self.client.get(url),
            Method::Post => {
                let request = self.client.post(url);
                match &route.body {
                    Some(body) => request.json(body),
                    None => request,
                }
            }
        };

        let response = request.send().await.map_err(|e| from_reqwest(name, e))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| from_reqwest(name, e))?;

        if !status.is_success() {
            let message = String::from_utf8_lossy(&body).trim().to_string();
            log::warn!("{} failed with status {}: {}", name, status, message);
            return Err(from_status(name, status, message));
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|e| {
            BackendError::Unknown(name, format!("response is not valid json: {}", e))
        })
    }
}

fn from_status(command: CommandName, status: StatusCode, message: String) -> BackendError {
    let message = if message.is_empty() {
        status.to_string()
    } else {
        message
    };
    match status.as_u16() {
        404 => BackendError::NotFound(command, message),
        400 | 422 => BackendError::ValidationFailed(command, message),
        502..=504 => BackendError::BackendUnavailable(command, message),
        _ => BackendError::Unknown(command, message),
    }
}

fn from_reqwest(command: CommandName, e: reqwest::Error) -> BackendError {
    if e.is_connect() || e.is_timeout() {
        BackendError::BackendUnavailable(command, e.to_string())
    } else {
        BackendError::Unknown(command, e.to_string())
    }
}
