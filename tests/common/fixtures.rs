//! Test fixtures and helpers

use async_trait::async_trait;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use vspc_exporter::{CommandExecutor, ExporterConfig, PipelineStage, Result};

/// Canned `ss -nt` output: one idle established socket, three that count
pub const SS_OUTPUT: &[&str] = &[
    "State      Recv-Q Send-Q Local Address:Port Peer Address:Port Process",
    "ESTAB      0      0      10.0.0.1:22        10.0.0.2:50000",
    "ESTAB      120    0      10.0.0.1:22        10.0.0.3:50001",
    "CLOSE-WAIT 30     0      10.0.0.1:80        10.0.0.4:50002",
    "ESTAB      0      52     10.0.0.1:22        10.0.0.5:50003",
];

/// Canned `/proc/net/tcp`: header plus three sockets
pub const PROC_NET_TCP: &[&str] = &[
    "  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode",
    "   0: 00000000:1F90 00000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 1001",
    "   1: 0100007F:0CEA 00000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 1002",
    "   2: 0A00000F:0016 0A00000E:C350 01 00000000:00000000 02:00000E4F 00000000     0        0 1003",
];

/// First stage printing `lines`, one per line
pub fn print_lines(lines: &[&str]) -> PipelineStage {
    let mut args = vec!["%s\\n".to_string()];
    args.extend(lines.iter().map(|line| line.to_string()));
    PipelineStage::new("printf", args)
}

/// Executor answering the three-stage pipeline and single commands with fixed text
pub struct StubExecutor {
    pub pipeline_output: String,
    pub single_output: String,
    pub runs: AtomicUsize,
}

impl StubExecutor {
    pub fn new(pipeline_output: &str, single_output: &str) -> Self {
        Self {
            pipeline_output: pipeline_output.to_string(),
            single_output: single_output.to_string(),
            runs: AtomicUsize::new(0),
        }
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommandExecutor for StubExecutor {
    async fn run(&self, stages: &[PipelineStage]) -> Result<String> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        if stages.len() > 1 {
            Ok(self.pipeline_output.clone())
        } else {
            Ok(self.single_output.clone())
        }
    }
}

/// A port that was free a moment ago
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr").port()
}

/// Loopback config on `port` with a fixed pod name
pub fn test_config(port: u16) -> ExporterConfig {
    ExporterConfig {
        host: "127.0.0.1".to_string(),
        port,
        stats_interval: 60,
        command_timeout: 5,
        log_level: "DEBUG".to_string(),
        pod_name: "compute-test".to_string(),
    }
}

/// Minimal HTTP/1.1 GET returning the response body
pub async fn http_get(port: u16, path: &str) -> String {
    let mut stream = TcpStream::connect(("127.0.0.1", port))
        .await
        .expect("connect to exporter");
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: 127.0.0.1\r\nConnection: close\r\n\r\n",
        path
    );
    stream.write_all(request.as_bytes()).await.expect("send request");

    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    response
        .split_once("\r\n\r\n")
        .map(|(_, body)| body.to_string())
        .unwrap_or_default()
}

/// Poll `check` every 10ms for up to two seconds
pub async fn wait_until<F: Fn() -> bool>(check: F) -> bool {
    for _ in 0..200 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
