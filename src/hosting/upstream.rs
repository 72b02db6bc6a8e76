use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web::web::Bytes;

/// The move service the page talks to, reached through this host so the
/// browser sees one origin and its session cookie stays first-party.
#[derive(Debug, Clone)]
pub struct Upstream {
    base: String,
}

impl Upstream {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Same path and query, upstream authority.
    pub fn url(&self, req: &HttpRequest) -> String {
        let tail = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or(req.path());
        format!("{}{}", self.base, tail)
    }

    /// Replay `req` upstream and hand the reply back, cookies and all.
    pub async fn forward(&self, req: &HttpRequest, body: Bytes) -> anyhow::Result<HttpResponse> {
        let url = self.url(req);
        let mut outbound = awc::Client::default()
            .request_from(url.as_str(), req.head())
            .no_decompress();
        outbound.headers_mut().remove(header::HOST);
        let mut inbound = outbound
            .send_body(body)
            .await
            .map_err(|e| anyhow::anyhow!("forward {} {}: {}", req.method(), url, e))?;
        let bytes = inbound
            .body()
            .await
            .map_err(|e| anyhow::anyhow!("read {}: {}", url, e))?;
        let mut response = HttpResponse::build(inbound.status());
        inbound
            .headers()
            .iter()
            .filter(|(name, _)| !Self::hop(name))
            .for_each(|(name, value)| {
                response.append_header((name.clone(), value.clone()));
            });
        log::debug!("{} {} -> {}", req.method(), url, inbound.status());
        Ok(response.body(bytes))
    }

    /// Headers that describe the upstream connection, not the reply.
    fn hop(name: &header::HeaderName) -> bool {
        name == header::CONNECTION || name == header::CONTENT_LENGTH || name == header::TRANSFER_ENCODING
    }
}
