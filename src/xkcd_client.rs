use crate::{
    error::FetchError,
    models::{Comic, Target},
};
use async_trait::async_trait;
use log::debug;
use url::Url;

pub const XKCD_BASE_URL: &str = "https://xkcd.com/";

/// Where comics and their images come from.
#[async_trait]
pub trait ComicSource: Send + Sync + 'static {
    async fn comic(&self, target: Target) -> Result<Comic, FetchError>;

    async fn image(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Plain HTTP client for the `info.0.json` API. Library default timeouts,
/// no retries.
#[derive(Debug, Clone)]
pub struct XkcdClient {
    base_url: Url,
    http: reqwest::Client,
}

impl XkcdClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn with_http(mut base_url: Url, http: reqwest::Client) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        XkcdClient { base_url, http }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, FetchError> {
        debug!("GET {}", url);
        let res = self.http.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }
        Ok(res)
    }
}

#[async_trait]
impl ComicSource for XkcdClient {
    async fn comic(&self, target: Target) -> Result<Comic, FetchError> {
        let url = target.url(&self.base_url)?;
        let body = self.get(url).await?.text().await?;
        Ok(Comic::from_json(&body)?)
    }

    async fn image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = Url::parse(url)?;
        let bytes = self.get(url).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Serves one canned HTTP response and hands back the request line.
    async fn serve_once(status: &'static str, body: &'static str) -> (Url, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request.lines().next().unwrap_or_default().to_string()
        });
        (Url::parse(&format!("http://{addr}")).unwrap(), handle)
    }

    fn client(base: Url) -> XkcdClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        XkcdClient::with_http(base, http)
    }

    const BODY: &str = r#"{"num": 5, "safe_title": "Blown apart", "month": "1", "day": "1", "year": "2006", "alt": "Blown into prime factors", "img": "https://imgs.xkcd.com/comics/blownapart_color.jpg"}"#;

    #[test]
    fn base_url_gets_trailing_slash() {
        let client = XkcdClient::new(Url::parse("http://localhost:8080/mirror").unwrap());
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/mirror/");
        let client = XkcdClient::new(Url::parse(XKCD_BASE_URL).unwrap());
        assert_eq!(client.base_url().as_str(), XKCD_BASE_URL);
    }

    #[tokio::test]
    async fn fetches_numbered_comic() {
        let (base, server) = serve_once("200 OK", BODY).await;
        let comic = client(base).comic(Target::ByNumber(5)).await.unwrap();
        assert_eq!(comic.number, 5);
        assert_eq!(comic.title, "Blown apart");
        assert_eq!(comic.alt_text, "Blown into prime factors");
        assert_eq!(server.await.unwrap(), "GET /5/info.0.json HTTP/1.1");
    }

    #[tokio::test]
    async fn fetches_latest() {
        let (base, server) = serve_once("200 OK", BODY).await;
        client(base).comic(Target::Latest).await.unwrap();
        assert_eq!(server.await.unwrap(), "GET /info.0.json HTTP/1.1");
    }

    #[tokio::test]
    async fn non_success_status() {
        let (base, _server) = serve_once("404 Not Found", "").await;
        let err = client(base)
            .comic(Target::ByNumber(404))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::HttpStatus(s) if s.as_u16() == 404));
    }

    #[tokio::test]
    async fn malformed_body() {
        let (base, _server) = serve_once("200 OK", r#"{"num": 5}"#).await;
        let err = client(base)
            .comic(Target::ByNumber(5))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let base = Url::parse(&format!("http://{addr}")).unwrap();
        let err = client(base).comic(Target::Latest).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn image_bytes() {
        let (base, _server) = serve_once("200 OK", "PNGDATA").await;
        let url = base.join("comics/x.png").unwrap();
        let bytes = client(base).image(url.as_str()).await.unwrap();
        assert_eq!(bytes, b"PNGDATA");
    }

    #[tokio::test]
    async fn image_with_bad_url() {
        let err = client(Url::parse(XKCD_BASE_URL).unwrap())
            .image("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
