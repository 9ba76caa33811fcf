use httpmock::prelude::*;
use reqwest::redirect::Policy;
use std::sync::Arc;
use unfurl_proxy::{server, Settings};

const ARTICLE: &str = "/business/360923270/asian-retail-chain-goes-liquidation-owing-millions";
const DISCORD: &str = "Mozilla/5.0 (compatible; Discordbot/2.0; +https://discordapp.com)";

async fn spawn_app(upstream: &MockServer) -> String {
    let settings = Settings {
        api_base: upstream.url("/api"),
        public_origin: Some("https://fxstuff.example".to_string()),
        request_timeout_secs: 5,
        ..Settings::default()
    };
    let app = server::router(Arc::new(server::build_service(settings).unwrap()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap()
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let mut buf = b"\x89PNG\r\n\x1a\n".to_vec();
    buf.extend_from_slice(&13u32.to_be_bytes());
    buf.extend_from_slice(b"IHDR");
    buf.extend_from_slice(&width.to_be_bytes());
    buf.extend_from_slice(&height.to_be_bytes());
    buf.extend_from_slice(&[8, 2, 0, 0, 0]);
    buf
}

fn story_json(image_url: &str, alt: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "type": "story",
        "teaser": {
            "title": "Asian retail chain goes into liquidation",
            "intro": "Creditors are owed <millions> & counting",
            "image": { "id": "1", "alt": alt, "url": image_url }
        },
        "author": { "id": "9", "name": "Jane Reporter", "url": "/authors/jane-reporter" },
        "publishedDate": "2024-01-01T00:00:00Z",
        "updatedDate": "2024-01-02T00:00:00Z"
    })
}

fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[tokio::test]
async fn test_invalid_paths_redirect_to_fallback() {
    let upstream = MockServer::start_async().await;
    let base = spawn_app(&upstream).await;

    for path in ["/foo/bar", "/"] {
        let response = client()
            .get(format!("{}{}", base, path))
            .header("user-agent", DISCORD)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 302, "{}", path);
        assert_eq!(location(&response), "https://github.com/BirdMakingStuff/fxstuff");
    }
}

#[tokio::test]
async fn test_people_are_redirected_without_api_call() {
    let upstream = MockServer::start_async().await;
    let story_mock = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/story/360923270");
            then.status(200).json_body(story_json("", serde_json::json!("x")));
        })
        .await;
    let base = spawn_app(&upstream).await;

    let response = client()
        .get(format!("{}{}", base, ARTICLE))
        .header("user-agent", "Mozilla/5.0")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 302);
    assert_eq!(location(&response), format!("https://www.stuff.co.nz{}", ARTICLE));
    assert_eq!(story_mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_bot_gets_open_graph_page_with_image_size() {
    let upstream = MockServer::start_async().await;
    let image_url = upstream.url("/img/teaser.png");
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/img/teaser.png");
            then.status(206).body(png(1200, 630));
        })
        .await;
    let story_mock = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/story/360923270");
            then.status(200).json_body(story_json(&image_url, serde_json::Value::Null));
        })
        .await;
    let base = spawn_app(&upstream).await;

    let response = client()
        .get(format!("{}{}", base, ARTICLE))
        .header("user-agent", DISCORD)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.unwrap();
    story_mock.assert_async().await;
    assert!(body.contains(&format!(
        r#"<meta property="og:url" content="https://www.stuff.co.nz{}"/>"#,
        ARTICLE
    )));
    assert!(body.contains(
        r#"<meta property="og:description" content="Creditors are owed &lt;millions&gt; &amp; counting"/>"#
    ));
    assert!(body.contains(r#"<meta property="og:image:alt" content=""/>"#));
    assert!(body.contains(r#"<meta property="og:image:width" content="1200"/>"#));
    assert!(body.contains(r#"<meta property="og:image:height" content="630"/>"#));
    assert!(body.contains(
        "https://fxstuff.example/oembed?url=https%3A%2F%2Fwww.stuff.co.nz%2Fbusiness%2F360923270%2F"
    ));
    assert!(body.contains(r#"<meta property="article:published_time" content="2024-01-01T00:00:00+00:00"/>"#));
}

#[tokio::test]
async fn test_bot_page_without_probeable_image() {
    let upstream = MockServer::start_async().await;
    let image_url = upstream.url("/img/broken.jpg");
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/img/broken.jpg");
            then.status(500);
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/story/7303166");
            then.status(200).json_body(story_json(&image_url, serde_json::json!("Protest")));
        })
        .await;
    let base = spawn_app(&upstream).await;

    let response = client()
        .get(format!(
            "{}/auckland/editors-picks/7303166/Anti-abortion-group-wins-key-vote",
            base
        ))
        .header("user-agent", "Twitterbot/1.0")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains(
        r#"content="https://www.stuff.co.nz/auckland/editors-picks/7303166/Anti-abortion-group-wins-key-vote""#
    ));
    assert!(body.contains(r#"<meta property="og:image:alt" content="Protest"/>"#));
    assert!(!body.contains("og:image:width"));
}

#[tokio::test]
async fn test_bot_redirected_when_story_api_fails() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/story/360923270");
            then.status(500);
        })
        .await;
    let base = spawn_app(&upstream).await;

    let response = client()
        .get(format!("{}{}", base, ARTICLE))
        .header("user-agent", DISCORD)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 302);
    assert_eq!(location(&response), format!("https://www.stuff.co.nz{}", ARTICLE));
}

#[tokio::test]
async fn test_oembed_bad_requests() {
    let upstream = MockServer::start_async().await;
    let base = spawn_app(&upstream).await;

    let response = client().get(format!("{}/oembed", base)).send().await.unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Missing url parameter");

    for bad in ["not%20a%20url", "https%3A%2F%2Fwww.stuff.co.nz%2Fabout"] {
        let response = client()
            .get(format!("{}/oembed?url={}", base, bad))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "{}", bad);
        assert_eq!(response.text().await.unwrap(), "Invalid URL format");
    }
}

#[tokio::test]
async fn test_oembed_document() {
    let upstream = MockServer::start_async().await;
    let image_url = upstream.url("/img/teaser.png");
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/img/teaser.png");
            then.status(200).body(png(640, 480));
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/story/360923270");
            then.status(200).json_body(story_json(&image_url, serde_json::json!("alt")));
        })
        .await;
    let base = spawn_app(&upstream).await;

    let story_url = format!("https://www.stuff.co.nz{}", ARTICLE);
    let response = client()
        .get(format!("{}/oembed", base))
        .query(&[("url", story_url.as_str())])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["type"], "rich");
    assert_eq!(json["version"], "1.0");
    assert_eq!(json["title"], "Asian retail chain goes into liquidation");
    assert_eq!(json["author_name"], "Jane Reporter");
    assert_eq!(json["author_url"], "https://www.stuff.co.nz/authors/jane-reporter");
    assert_eq!(json["provider_name"], "FxStuff by BirdMakingStuff");
    assert_eq!(json["thumbnail_url"], image_url.as_str());
    assert_eq!(json["thumbnail_width"], 640);
    assert_eq!(json["thumbnail_height"], 480);
    assert_eq!(json["width"], 640);
    assert_eq!(json["height"], 480);
}

#[tokio::test]
async fn test_oembed_upstream_failure_is_bad_gateway() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/story/360923270");
            then.status(404);
        })
        .await;
    let base = spawn_app(&upstream).await;

    let story_url = format!("https://www.stuff.co.nz{}", ARTICLE);
    let response = client()
        .get(format!("{}/oembed", base))
        .query(&[("url", story_url.as_str())])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 502);
}
