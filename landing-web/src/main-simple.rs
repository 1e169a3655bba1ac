//! Static file server for the landing page
//!
//! Serves the built Leptos WASM app from `dist/`. Unknown paths fall back to
//! `index.html` so client-side routes (`/events`, `/speakers`, ...) survive a reload.
//!
//! Environment: `LANDING_PORT` (default 8080), `LANDING_DIST` (default `dist`).

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

const DEFAULT_PORT: u16 = 8080;
const NOT_FOUND_PAGE: &[u8] =
    b"<!DOCTYPE html><html><body><h1>Error: index.html not found</h1></body></html>";

fn main() {
    let port = std::env::var("LANDING_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let dist = PathBuf::from(std::env::var("LANDING_DIST").unwrap_or_else(|_| "dist".to_string()));

    let addr = format!("127.0.0.1:{}", port);
    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("ELICIT FEST landing running at http://{}", addr);
    println!("Serving from {}/", dist.display());
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &dist),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream, dist: &Path) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = target.split_once('?').map_or(target, |(p, _)| p);

    let (status, content_type, body) = match resolve(dist, path) {
        Some(file) => match fs::read(&file) {
            Ok(contents) => ("200 OK", content_type(&file), contents),
            Err(e) => {
                eprintln!("Failed to read {}: {}", file.display(), e);
                ("404 NOT FOUND", "text/html", NOT_FOUND_PAGE.to_vec())
            }
        },
        None => ("404 NOT FOUND", "text/html", NOT_FOUND_PAGE.to_vec()),
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}

/// File under `dist` for a request path, falling back to `index.html`.
/// Paths that try to leave `dist` resolve to nothing.
fn resolve(dist: &Path, path: &str) -> Option<PathBuf> {
    let relative = Path::new(path.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    let candidate = dist.join(relative);
    if candidate.is_file() {
        return Some(candidate);
    }

    let index = dist.join("index.html");
    index.is_file().then_some(index)
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("mp3") => "audio/mpeg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("a/b.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("logo.png")), "image/png");
        assert_eq!(content_type(Path::new("audio/click.mp3")), "audio/mpeg");
        assert_eq!(content_type(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_traversal_rejected() {
        assert_eq!(resolve(Path::new("dist"), "/../Cargo.toml"), None);
        assert_eq!(resolve(Path::new("dist"), "/a/../../b"), None);
    }
}
