//! Transport-level fetch tests against a local one-shot HTTP listener.

use offerpull::api::offers_api::OffersApi;
use offerpull::config::Config;
use offerpull::error::PullError;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use url::Url;

/// Serve exactly one connection with a canned HTTP/1.1 response.
fn serve_once(response: String) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while let Ok(n) = stream.read(&mut buf) {
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });
    Url::parse(&format!("http://{addr}/offers")).expect("listener url")
}

#[tokio::test]
async fn non_2xx_reply_maps_to_an_upstream_status_error() {
    let endpoint = serve_once(
        "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
            .to_string(),
    );
    let client = OffersApi::client(&Config::default());

    let err = OffersApi::fetch_offers(&client, &endpoint)
        .await
        .expect_err("a 500 reply must fail the run");
    assert!(matches!(err, PullError::UpstreamStatus(s) if s.as_u16() == 500));
}

#[tokio::test]
async fn well_formed_reply_is_fetched_and_decoded() {
    let body = r#"{"offers":[{"id":1,"name":"Widget","brand":"Acme","category":"Tools","merchant":"Acme Store","attributes":[{"name":"color","value":"red"}],"image":{"width":100,"height":50,"url":"http://x/img.png"}}]}"#;
    let endpoint = serve_once(format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        body.len(),
        body
    ));
    let client = OffersApi::client(&Config::default());

    let offers = OffersApi::fetch_offers(&client, &endpoint)
        .await
        .expect("fetch against local listener");
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].id, 1);
    assert_eq!(offers[0].name, "Widget");
    assert_eq!(offers[0].attributes[0].value, "red");
}
