// tests/common/mod.rs
// Canned-response HTTP server on 127.0.0.1. One response per connection, then close.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use laundry_scrape::{ClientOptions, Endpoints, LaundryClient};

pub const STATUS_PATH: &str = "/washalertweb/washalertweb.aspx";

pub struct FixtureServer {
    base: String,
}

impl FixtureServer {
    /// `routes` maps a request target (path + query) to `(status, body)`.
    /// Anything else gets a 404.
    pub fn start(routes: Vec<(String, u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}/", listener.local_addr().unwrap());
        let routes: HashMap<String, (u16, String)> =
            routes.into_iter().map(|(path, code, body)| (path, (code, body))).collect();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let _ = serve(stream, &routes);
            }
        });

        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    pub fn client(&self) -> LaundryClient {
        let opts = ClientOptions {
            endpoints: Endpoints::with_base(&self.base).unwrap(),
            timeout: Duration::from_secs(5),
            ..ClientOptions::default()
        };
        LaundryClient::new(opts).unwrap()
    }
}

fn serve(mut stream: TcpStream, routes: &HashMap<String, (u16, String)>) -> std::io::Result<()> {
    stream.set_read_timeout(Some(Duration::from_secs(5)))?;

    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk)?;
        if n == 0 { break; }
        buf.extend_from_slice(&chunk[..n]);
    }

    let req = String::from_utf8_lossy(&buf);
    let target = req.split_whitespace().nth(1).unwrap_or("/").to_string();
    let (code, body) = routes
        .get(&target)
        .cloned()
        .unwrap_or((404, String::from("<html><body>Not Found</body></html>")));
    let reason = match code { 200 => "OK", 404 => "Not Found", 500 => "Internal Server Error", _ => "Status" };

    let resp = format!(
        "HTTP/1.1 {code} {reason}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(resp.as_bytes())?;
    stream.flush()
}

pub fn status_target(identifier: &str) -> String {
    format!("{STATUS_PATH}?location={identifier}")
}

pub fn ok(path: impl Into<String>, body: impl Into<String>) -> (String, u16, String) {
    (path.into(), 200, body.into())
}

pub fn status_page(room: &str, rows: &[(&str, &str, &str, &str)]) -> String {
    let mut html = format!(
        "<html><body><table>\n<tr><td>{room}</td></tr>\n<tr><th>Machine</th><th>Type</th><th>Status</th><th>Time</th></tr>\n"
    );
    for (i, (name, kind, status, time)) in rows.iter().enumerate() {
        let class = if i % 2 == 0 { "even" } else { "odd" };
        html.push_str(&format!(
            "<tr class=\"{class}\"><td class=\"name\">{name}</td><td class=\"type\">{kind}</td>\
             <td class=\"status\">{status}</td><td class=\"time\">{time}</td></tr>\n"
        ));
    }
    html.push_str("</table></body></html>");
    html
}
