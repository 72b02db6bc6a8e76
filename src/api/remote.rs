use super::*;
use gloo_net::http::Request;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

/// [`Api`] over `fetch`, one JSON POST per call.
#[derive(Debug, Default, Clone)]
pub struct Remote {
    endpoints: Endpoints,
}

impl Remote {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    async fn post<T>(&self, url: String, body: Option<serde_json::Value>) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
    {
        let request = Request::post(&url).header("Content-Type", "application/json");
        let request = match self.endpoints.is_cross_origin() {
            true => request.credentials(RequestCredentials::Include),
            false => request,
        };
        let request = match body {
            Some(ref json) => request.json(json),
            None => request.build(),
        }
        .map_err(|e| anyhow::anyhow!("build {}: {}", url, e))?;
        let response = request
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("send {}: {}", url, e))?;
        Self::decode(&url, response).await
    }

    async fn decode<T>(url: &str, response: Response) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.ok() {
            return Err(anyhow::anyhow!("{} responded {}", url, response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| anyhow::anyhow!("decode {}: {}", url, e))
    }
}

#[async_trait::async_trait(?Send)]
impl Api for Remote {
    async fn play(&self, cell: Cell) -> anyhow::Result<GameState> {
        let body = serde_json::to_value(crate::dto::MoveRequest::from(cell))?;
        log::debug!("playing cell {}", cell);
        self.post(self.endpoints.play(), Some(body)).await
    }
    async fn reset(&self) -> anyhow::Result<GameState> {
        self.post(self.endpoints.reset(), None).await
    }
    async fn clear(&self) -> anyhow::Result<ScoreState> {
        self.post(self.endpoints.clear(), None).await
    }
}
