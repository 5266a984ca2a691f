//! Minimal HTTP/1.1 server that supports HEAD and GET for integration tests.
//!
//! Serves a fixed set of static files by path. HEAD answers with
//! Content-Length (unless disabled), GET returns the whole body. Every
//! connection handles one request and is closed.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct FileServerOptions {
    /// If false, HEAD responses carry no Content-Length.
    pub advertise_length: bool,
    /// If set, HEAD advertises this size instead of the real one.
    pub head_length_override: Option<u64>,
}

impl Default for FileServerOptions {
    fn default() -> Self {
        Self {
            advertise_length: true,
            head_length_override: None,
        }
    }
}

/// Starts a server in a background thread serving `files` (path without
/// leading `/` -> body). Returns the scheme-less authority, e.g.
/// "127.0.0.1:12345", so tests can build table locations from it.
pub fn start(files: Vec<(&str, Vec<u8>)>) -> String {
    start_with_options(files, FileServerOptions::default())
}

pub fn start_with_options(files: Vec<(&str, Vec<u8>)>, opts: FileServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let files: Arc<HashMap<String, Vec<u8>>> = Arc::new(
        files
            .into_iter()
            .map(|(p, b)| (format!("/{}", p), b))
            .collect(),
    );
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let files = Arc::clone(&files);
            thread::spawn(move || handle(stream, &files, opts));
        }
    });
    format!("127.0.0.1:{}", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    files: &HashMap<String, Vec<u8>>,
    opts: FileServerOptions,
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
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");

    let body = match files.get(path) {
        Some(b) => b,
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
            return;
        }
    };

    if method.eq_ignore_ascii_case("HEAD") {
        let length = if opts.advertise_length {
            let n = opts.head_length_override.unwrap_or(body.len() as u64);
            format!("Content-Length: {}\r\n", n)
        } else {
            String::new()
        };
        let response = format!("HTTP/1.1 200 OK\r\n{}Connection: close\r\n\r\n", length);
        let _ = stream.write_all(response.as_bytes());
        return;
    }
    if method.eq_ignore_ascii_case("GET") {
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.write_all(body);
        return;
    }
    let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nConnection: close\r\n\r\n");
}
