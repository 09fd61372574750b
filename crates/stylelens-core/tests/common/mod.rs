use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::JoinHandle;

/// Spawn a single-request HTTP responder on an ephemeral local port.
///
/// Returns the base URL to point an `ApiClient` at, plus a handle that joins
/// to the raw request bytes the client sent (status line, headers, and body),
/// so tests can assert on the wire format.
pub fn spawn_one_shot_server(
    status_line: &'static str,
    body: String,
) -> (String, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let request = read_full_request(&mut stream);

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        request
    });

    (format!("http://{addr}"), handle)
}

/// Read an entire HTTP request: headers, then exactly Content-Length body bytes.
fn read_full_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).expect("read request");
        assert!(n > 0, "connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
    };

    let content_length = parse_content_length(&buf[..header_end]).unwrap_or(0);
    let total = header_end + 4 + content_length;
    while buf.len() < total {
        let n = stream.read(&mut chunk).expect("read body");
        assert!(n > 0, "connection closed before body was complete");
        buf.extend_from_slice(&chunk[..n]);
    }

    buf
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn parse_content_length(headers: &[u8]) -> Option<usize> {
    let text = String::from_utf8_lossy(headers);
    text.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.eq_ignore_ascii_case("content-length") {
            value.trim().parse().ok()
        } else {
            None
        }
    })
}

/// A complete, well-formed service response body.
pub fn sample_result_body() -> String {
    r##"{
        "rating": 8.5,
        "color_analysis": {
            "primary_colors": ["#112233", "#445566"],
            "dominant_color": "#112233"
        },
        "skin_tone_analysis": {"tone": "medium", "color": "#c68642"},
        "suggestions": ["Try a belt"],
        "alternative_colors": ["#eeddcc", "#332211"],
        "color_compatibility": {
            "complementary_colors": ["#000000", "#333333"],
            "avoid_colors": ["#ffffff"]
        }
    }"##
    .to_string()
}
