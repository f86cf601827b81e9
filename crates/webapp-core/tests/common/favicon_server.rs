//! Minimal HTTP/1.1 server standing in for the favicon lookup service.
//!
//! Serves one static body with a fixed status for every GET and records each
//! request target so tests can inspect the query the client sent.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct ServerOptions {
    /// Status code of the final response.
    pub status: u16,
    /// If true, the first hop answers `302` pointing at `/final` with the same query.
    pub redirect: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            redirect: false,
        }
    }
}

pub struct FaviconServer {
    /// Endpoint to put into `Settings::favicon_endpoint`.
    pub endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FaviconServer {
    /// Request targets (path + query) seen so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn start(body: Vec<u8>) -> FaviconServer {
    start_with_options(body, ServerOptions::default())
}

/// Starts the server on an ephemeral port. It runs until the process exits.
pub fn start_with_options(body: Vec<u8>, opts: ServerOptions) -> FaviconServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &body, opts, &seen));
        }
    });
    FaviconServer {
        endpoint: format!("http://127.0.0.1:{}/s2/favicons", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    opts: ServerOptions,
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut first = request.lines().next().unwrap_or("").split_whitespace();
    let method = first.next().unwrap_or("");
    let target = first.next().unwrap_or("/").to_string();
    seen.lock().unwrap().push(target.clone());

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    if opts.redirect && !target.starts_with("/final") {
        let query = target.split_once('?').map(|(_, q)| q).unwrap_or("");
        let response = format!(
            "HTTP/1.1 302 Found\r\nLocation: /final?{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            query
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    let reason = match opts.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let payload: &[u8] = if (200..300).contains(&opts.status) { body } else { b"not found" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        reason,
        payload.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(payload);
}
