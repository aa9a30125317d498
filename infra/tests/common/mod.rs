//! One-shot HTTP endpoint for exercising the Aliyun client without network access

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accepts a single connection, answers with `status` and a JSON `body`,
/// and resolves to the raw request head it received.
pub async fn serve_once(status: u16, body: &'static str) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json;charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            if status == 200 { "OK" } else { "Error" },
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;

        String::from_utf8_lossy(&request).into_owned()
    });

    (addr, handle)
}

/// Connection string pointing at `addr`
pub fn source_for(addr: SocketAddr) -> String {
    format!(
        "http://{}?version=2017-05-25&api_name=SendSms&access_key=testid&access_secret=testsecret\
         &sign_name=%E9%98%BF%E9%87%8C%E4%BA%91&template_code=SMS_153055065&region_id=cn-hangzhou",
        addr
    )
}
