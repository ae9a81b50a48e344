//! One-shot HTTP agent stub for behaviour tests.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

/// Agent that answers exactly one request with a canned status and body.
pub struct StubAgent {
    pub port: u16,
    handle: JoinHandle<String>,
}

impl StubAgent {
    pub fn start(status: u16, body: impl AsRef<[u8]>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub agent");
        let port = listener.local_addr().expect("local addr").port();
        let body = body.as_ref().to_vec();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let request_line = read_request_line(&mut stream);
            let reason = if status == 200 { "OK" } else { "Status" };
            let head = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).expect("write response head");
            stream.write_all(&body).expect("write response body");
            request_line
        });

        Self { port, handle }
    }

    /// Wait for the single request and return its request line.
    pub fn request_line(self) -> String {
        self.handle.join().expect("stub agent thread")
    }
}

/// A port nothing is listening on.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    listener.local_addr().expect("local addr").port()
}

fn read_request_line(stream: &mut TcpStream) -> String {
    let mut received = Vec::new();
    let mut chunk = [0_u8; 512];
    while !received.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut chunk).expect("read request");
        if read == 0 {
            break;
        }
        received.extend_from_slice(&chunk[..read]);
    }

    String::from_utf8_lossy(&received)
        .lines()
        .next()
        .unwrap_or_default()
        .to_owned()
}
