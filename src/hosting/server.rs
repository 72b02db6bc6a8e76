use super::*;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(args: Args) -> Result<(), std::io::Error> {
        let site = web::Data::new(Site::new(args.root));
        let upstream = args.api.as_deref().map(Upstream::new).map(web::Data::new);
        log::info!("serving {} on {}", site.root().display(), args.bind);
        match upstream {
            Some(ref upstream) => log::info!("forwarding /api to {}", upstream.base()),
            None => log::warn!("no move service configured, /api will answer 503"),
        }
        HttpServer::new(move || {
            let app = App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .app_data(site.clone());
            match upstream.clone() {
                Some(upstream) => app.app_data(upstream),
                None => app,
            }
            .configure(routes)
        })
        .workers(2)
        .bind(args.bind)?
        .run()
        .await
    }
}

pub fn routes(config: &mut web::ServiceConfig) {
    config
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .route("/static/{path:.*}", web::get().to(assets))
        .route("/pkg/{path:.*}", web::get().to(bundle))
        .route("/api/{tail:.*}", web::route().to(forward));
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

async fn index(site: web::Data<Site>) -> impl Responder {
    serve(&site, Site::INDEX).await
}

async fn assets(site: web::Data<Site>, path: web::Path<String>) -> impl Responder {
    serve(&site, &format!("static/{}", path)).await
}

async fn bundle(site: web::Data<Site>, path: web::Path<String>) -> impl Responder {
    serve(&site, &format!("pkg/{}", path)).await
}

async fn forward(
    upstream: Option<web::Data<Upstream>>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    let Some(upstream) = upstream else {
        return HttpResponse::ServiceUnavailable().body("no move service configured");
    };
    upstream
        .forward(&req, body)
        .await
        .inspect_err(|e| log::error!("{}", e))
        .unwrap_or_else(|_| HttpResponse::BadGateway().body("move service unreachable"))
}

async fn serve(site: &Site, path: &str) -> HttpResponse {
    match site.read(path).await {
        Ok((bytes, mime)) => HttpResponse::Ok().content_type(mime).body(bytes),
        Err(e) => {
            log::debug!("{}", e);
            HttpResponse::NotFound().body("not found")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::http::header;
    use actix_web::test;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("tictactoe-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(root.join("static/js")).unwrap();
        std::fs::write(root.join("index.html"), "<div id=\"game-board\"></div>").unwrap();
        std::fs::write(root.join("static/js/boot.js"), "import init from '/pkg/tictactoe.js';").unwrap();
        std::fs::write(root.join("static/click sound.mp3"), [0u8; 4]).unwrap();
        root
    }

    macro_rules! app {
        ($root:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Site::new($root)))
                    .configure(routes),
            )
            .await
        };
        ($root:expr, $upstream:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Site::new($root)))
                    .app_data(web::Data::new($upstream))
                    .configure(routes),
            )
            .await
        };
    }

    /// A stand-in move service on an ephemeral port. Echoes the cell and
    /// the cookie it was sent, and sets a session cookie of its own.
    fn service() -> String {
        async fn play(req: HttpRequest, body: web::Bytes) -> HttpResponse {
            let cookie = req
                .headers()
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();
            HttpResponse::Ok()
                .insert_header((header::SET_COOKIE, "session=abc; Path=/"))
                .insert_header(("x-seen-cookie", cookie))
                .content_type("application/json")
                .body(body)
        }
        let server = HttpServer::new(|| App::new().route("/api/move", web::post().to(play)))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}", addr)
    }

    #[actix_web::test]
    async fn serves_index() {
        let app = app!(scratch("index"));
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let body = test::read_body(resp).await;
        assert!(body.starts_with(b"<div id=\"game-board\">"));
    }

    #[actix_web::test]
    async fn serves_assets() {
        let app = app!(scratch("assets"));
        let req = test::TestRequest::get().uri("/static/js/boot.js").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.headers()
                .get("content-type")
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("text/javascript")
        );
    }

    #[actix_web::test]
    async fn decodes_asset_names() {
        let app = app!(scratch("decode"));
        let req = test::TestRequest::get().uri("/static/click%20sound.mp3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("content-type").unwrap(), "audio/mpeg");
    }

    #[actix_web::test]
    async fn missing_and_escaping_paths_are_404() {
        let app = app!(scratch("missing"));
        // index.html exists one level up, so only the refusal keeps these out
        for uri in [
            "/pkg/tictactoe_bg.wasm",
            "/static/%2E%2E/index.html",
            "/static/js/%2e%2e/%2e%2e/index.html",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn health_is_ok() {
        let app = app!(scratch("health"));
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn api_without_service_is_503() {
        let app = app!(scratch("noapi"));
        let req = test::TestRequest::post()
            .uri(crate::API_MOVE)
            .insert_header(header::ContentType::json())
            .set_payload(r#"{"cell":0}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn forwards_moves_with_cookies() {
        let app = app!(scratch("forward"), Upstream::new(&service()));
        let req = test::TestRequest::post()
            .uri(crate::API_MOVE)
            .insert_header(header::ContentType::json())
            .insert_header((header::COOKIE, "session=xyz"))
            .set_payload(r#"{"cell":0}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::SET_COOKIE).unwrap(), "session=abc; Path=/");
        assert_eq!(resp.headers().get("x-seen-cookie").unwrap(), "session=xyz");
        let body = test::read_body(resp).await;
        assert!(body.as_ref() == br#"{"cell":0}"#);
    }

    #[actix_web::test]
    async fn unreachable_service_is_502() {
        let app = app!(scratch("down"), Upstream::new("http://127.0.0.1:9"));
        let req = test::TestRequest::post().uri(crate::API_RESET).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
