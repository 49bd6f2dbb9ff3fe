//! RestListSource against a one-shot local HTTP server

use property_pane_core::SourceItem;
use property_pane_host::options::{OptionSource, OptionsCache, RestListSource, SourceError};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

struct OneShotServer {
    addr: SocketAddr,
    join: JoinHandle<String>,
}

impl OneShotServer {
    /// Answer one request with `status` and `body`; the raw request head is
    /// returned from `join`.
    fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind server");
        let addr = listener.local_addr().expect("server addr");
        let join = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
            let request = read_request_head(&mut stream);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
            let _ = stream.flush();
            request
        });
        Self { addr, join }
    }

    fn site(&self) -> reqwest::Url {
        reqwest::Url::parse(&format!("http://127.0.0.1:{}/sites/team", self.addr.port()))
            .expect("site url")
    }

    fn join(self) -> String {
        self.join.join().expect("server thread")
    }
}

fn read_request_head(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut scratch = [0u8; 4096];
    loop {
        match stream.read(&mut scratch) {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                buf.extend_from_slice(&scratch[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[tokio::test]
async fn test_fetch_maps_lists_in_order() {
    let server = OneShotServer::start(
        "200 OK",
        r#"{"value":[{"Id":"1","Title":"Documents"},{"Id":"2","Title":"Events"}]}"#,
    );
    let source = RestListSource::new(server.site()).with_access_token("secret");

    let items = source.fetch_options().await.unwrap();
    assert_eq!(
        items,
        vec![
            SourceItem::new("1", "Documents"),
            SourceItem::new("2", "Events"),
        ]
    );

    let request = server.join().to_lowercase();
    assert!(request.starts_with("get /sites/team/_api/web/lists?"));
    assert!(request.contains("hidden"));
    assert!(request.contains("accept: application/json;odata=nometadata"));
    assert!(request.contains("authorization: bearer secret"));
}

#[tokio::test]
async fn test_server_error_is_status() {
    let server = OneShotServer::start("500 Internal Server Error", r#"{"error":"boom"}"#);
    let source = RestListSource::new(server.site());

    let err = source.fetch_options().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 500, .. }));
    server.join();
}

#[tokio::test]
async fn test_bad_body_is_decode_error() {
    let server = OneShotServer::start("200 OK", r#"{"lists":[]}"#);
    let source = RestListSource::new(server.site());

    let err = source.fetch_options().await.unwrap_err();
    assert!(matches!(err, SourceError::Decode { .. }));
    server.join();
}

#[tokio::test]
async fn test_cache_over_failing_rest_source_stays_disabled() {
    let server = OneShotServer::start("404 Not Found", "{}");
    let cache = OptionsCache::new(Arc::new(RestListSource::new(server.site())));

    cache.request();
    cache.settled().await;

    assert!(cache.is_disabled());
    assert!(cache.snapshot().is_empty());
    server.join();
}
