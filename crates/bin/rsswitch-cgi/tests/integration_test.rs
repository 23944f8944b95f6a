//! End-to-end tests for the rsswitch-cgi binary.
//!
//! Each test runs the real executable the way a web server would: CGI
//! meta-variables in a cleared environment, the body on stdin, the response
//! captured from stdout. The device is a plain file and syslog is a datagram
//! socket bound inside a temporary directory.

use std::io::Write;
use std::os::unix::net::UnixDatagram;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::Duration;

use tempfile::TempDir;

struct Harness {
    dir: TempDir,
    device: PathBuf,
    syslog: UnixDatagram,
    syslog_path: PathBuf,
}

impl Harness {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let device = dir.path().join("rsswitch");
        std::fs::write(&device, "untouched").expect("device file");
        let syslog_path = dir.path().join("log");
        let syslog = UnixDatagram::bind(&syslog_path).expect("syslog socket");
        syslog
            .set_read_timeout(Some(Duration::from_millis(200)))
            .expect("read timeout");
        Self {
            dir,
            device,
            syslog,
            syslog_path,
        }
    }

    fn command(&self, method: &str) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rsswitch-cgi"));
        cmd.env_clear()
            .current_dir(self.dir.path())
            .env("REQUEST_METHOD", method)
            .env("RSSWITCH_DEVICE", &self.device)
            .env("RSSWITCH_SYSLOG_SOCKET", &self.syslog_path)
            .env("RSSWITCH_LOG", "off")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        cmd
    }

    fn run(&self, mut cmd: Command, body: &[u8]) -> Output {
        let mut child = cmd.spawn().expect("spawn rsswitch-cgi");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(body)
            .expect("write body");
        child.wait_with_output().expect("wait for rsswitch-cgi")
    }

    fn get(&self, query: &str) -> Output {
        let mut cmd = self.command("GET");
        cmd.env("QUERY_STRING", query);
        self.run(cmd, b"")
    }

    fn post(&self, body: &str) -> Output {
        let mut cmd = self.command("POST");
        cmd.env("CONTENT_TYPE", "application/x-www-form-urlencoded")
            .env("CONTENT_LENGTH", body.len().to_string());
        self.run(cmd, body.as_bytes())
    }

    fn device_content(&self) -> String {
        read(&self.device)
    }

    fn syslog_message(&self) -> Option<String> {
        let mut buf = [0u8; 256];
        let len = self.syslog.recv(&mut buf).ok()?;
        Some(String::from_utf8_lossy(&buf[..len]).into_owned())
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read file")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 response")
}

// ---------------------------------------------------------------------------
// Successful dispatch
// ---------------------------------------------------------------------------

#[test]
fn should_write_code_log_it_and_confirm_on_get() {
    let h = Harness::new();

    let output = h.get("sock_group0=on&group0=5");

    assert!(output.status.success());
    let response = stdout(&output);
    assert!(response.starts_with("Content-Type: text/html; charset=utf-8\r\n\r\n"));
    assert!(response.contains("Selected socket group is 0"));
    assert!(response.contains("Selected socket is 5"));
    assert!(response.contains("Selected data is 1</h2>"));
    assert_eq!(h.device_content(), "0051");

    let message = h.syslog_message().expect("syslog message");
    assert!(message.starts_with("<14>rsswitch["));
    assert!(message.ends_with("]: 0051"));
}

#[test]
fn should_accept_post_body() {
    let h = Harness::new();

    let output = h.post("sock_group1=off&group1=2");

    assert!(stdout(&output).contains("Selected socket group is 1"));
    assert_eq!(h.device_content(), "0120");
}

#[test]
fn should_produce_identical_results_for_repeated_submissions() {
    let h = Harness::new();

    let first = h.get("sock_group1=on&group1=3");
    let first_device = h.device_content();
    let second = h.get("sock_group1=on&group1=3");

    assert_eq!(stdout(&first), stdout(&second));
    assert_eq!(first_device, "0131");
    assert_eq!(h.device_content(), "0131");
}

#[test]
fn should_skip_empty_selector_and_use_next_group() {
    let h = Harness::new();

    let output = h.get("sock_group0=&sock_group1=on&group1=2");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Selected socket group is 1"));
    assert_eq!(h.device_content(), "0121");
}

#[test]
fn should_only_trace_code_when_syslog_disabled() {
    let h = Harness::new();
    let mut cmd = h.command("GET");
    cmd.env("QUERY_STRING", "sock_group0=off&group0=1")
        .env("RSSWITCH_SYSLOG", "false");

    let output = h.run(cmd, b"");

    assert!(output.status.success());
    assert_eq!(h.device_content(), "0010");
    assert!(h.syslog_message().is_none());
}

// ---------------------------------------------------------------------------
// Rejected submissions
// ---------------------------------------------------------------------------

#[test]
fn should_reject_missing_selector_without_writing() {
    let h = Harness::new();

    let output = h.get("group0=5");

    let response = stdout(&output);
    assert!(response.starts_with("Status: 400 Bad Request\r\n"));
    assert!(response.contains("no socket group selected"));
    assert_eq!(h.device_content(), "untouched");
    assert!(h.syslog_message().is_none());
}

#[test]
fn should_reject_unknown_state_without_writing() {
    let h = Harness::new();

    let output = h.get("sock_group0=maybe&group0=1");

    let response = stdout(&output);
    assert!(response.starts_with("Status: 400 Bad Request\r\n"));
    assert!(response.contains("unknown socket state"));
    assert_eq!(h.device_content(), "untouched");
}

#[test]
fn should_reject_missing_socket_number_without_writing() {
    let h = Harness::new();

    let output = h.get("sock_group0=on");

    let response = stdout(&output);
    assert!(response.starts_with("Status: 400 Bad Request\r\n"));
    assert!(response.contains("socket number not entered"));
    assert_eq!(h.device_content(), "untouched");
}

#[test]
fn should_reject_two_digit_socket_without_writing() {
    let h = Harness::new();

    let output = h.post("sock_group1=off&group1=12");

    let response = stdout(&output);
    assert!(response.starts_with("Status: 400 Bad Request\r\n"));
    assert!(response.contains("socket 12 is out of range (0..=9)"));
    assert_eq!(h.device_content(), "untouched");
}

#[test]
fn should_reject_socket_too_long_for_an_integer() {
    let h = Harness::new();

    let output = h.get("sock_group0=on&group0=99999999999999999999");

    let response = stdout(&output);
    assert!(response.starts_with("Status: 400 Bad Request\r\n"));
    assert!(response.contains("socket 99999999999999999999 is out of range"));
    assert_eq!(h.device_content(), "untouched");
}

#[test]
fn should_answer_405_for_unsupported_method() {
    let h = Harness::new();

    let output = h.run(h.command("DELETE"), b"");

    let response = stdout(&output);
    assert!(response.starts_with("Status: 405 Method Not Allowed\r\n"));
    assert_eq!(h.device_content(), "untouched");
}

// ---------------------------------------------------------------------------
// Dispatch failures
// ---------------------------------------------------------------------------

#[test]
fn should_answer_500_when_device_missing() {
    let h = Harness::new();
    let mut cmd = h.command("GET");
    cmd.env("QUERY_STRING", "sock_group0=on&group0=1")
        .env("RSSWITCH_DEVICE", h.dir.path().join("absent"));

    let output = h.run(cmd, b"");

    let response = stdout(&output);
    assert!(response.starts_with("Status: 500 Internal Server Error\r\n"));
    assert!(response.contains("failed to write control code to the device"));
    assert!(response.contains("failed to open"));
    assert!(!h.dir.path().join("absent").exists());
}

#[test]
fn should_answer_500_without_writing_when_syslog_unreachable() {
    let h = Harness::new();
    let mut cmd = h.command("GET");
    cmd.env("QUERY_STRING", "sock_group0=on&group0=1")
        .env("RSSWITCH_SYSLOG_SOCKET", h.dir.path().join("no-log"));

    let output = h.run(cmd, b"");

    let response = stdout(&output);
    assert!(response.starts_with("Status: 500 Internal Server Error\r\n"));
    assert!(response.contains("failed to emit control code to the system log"));
    assert_eq!(h.device_content(), "untouched");
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn should_read_config_file_from_working_directory() {
    let h = Harness::new();
    std::fs::write(h.dir.path().join("rsswitch.toml"), "[device]\nmax_socket = 2\n")
        .expect("config file");

    let output = h.get("sock_group0=on&group0=3");

    assert!(stdout(&output).starts_with("Status: 400 Bad Request\r\n"));
    assert_eq!(h.device_content(), "untouched");
}

#[test]
fn should_answer_500_and_fail_for_invalid_config() {
    let h = Harness::new();
    let config = h.dir.path().join("broken.toml");
    std::fs::write(&config, "[device]\nmax_socket = 12\n").expect("config file");
    let mut cmd = h.command("GET");
    cmd.env("QUERY_STRING", "sock_group0=on&group0=1")
        .env("RSSWITCH_CONFIG", &config);

    let output = h.run(cmd, b"");

    assert!(!output.status.success());
    let response = stdout(&output);
    assert!(response.starts_with("Status: 500 Internal Server Error\r\n"));
    assert!(response.contains("invalid configuration"));
    assert_eq!(h.device_content(), "untouched");
}
