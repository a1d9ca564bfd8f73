use season_viewers::loader::{fetch_url, load_source};
use season_viewers::{ChartError, Provenance};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

const FIXTURE: &str = include_str!("fixtures/seasons.csv");

/// Serve one HTTP response on a loopback port and return its URL.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).unwrap();
    });
    format!("http://{addr}/SimpsonsData.csv")
}

#[test]
fn url_source_is_fetched_and_parsed() {
    let url = serve_once("200 OK", FIXTURE);
    let rows = load_source(&url).unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].year, 1990);
    assert_eq!(rows[0].provenance, Provenance::Estimated);
    assert_eq!(rows[3].most_watched_episode, "Lisa's First Word");
}

#[test]
fn http_error_status_is_reported() {
    let url = serve_once("404 Not Found", "missing");
    let err = fetch_url(&url).unwrap_err();
    assert!(matches!(err, ChartError::Http(_)));
}

#[test]
fn unreachable_host_is_an_http_error() {
    let err = load_source("http://127.0.0.1:1/x.csv").unwrap_err();
    assert!(matches!(err, ChartError::Http(_)));
}
