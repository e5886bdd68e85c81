//! Comparison harness backends
//!
//! Treats the translator CLI and a reference converter as black boxes
//! behind the `Backend` capability: feed input on stdin, capture stdout and
//! wall-clock time. Spawn failures, non-zero exits, and timeouts become
//! literal `Error: ...` output strings so a broken backend never aborts the
//! harness, and comparison logic stays backend-agnostic.

use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Result of one backend invocation. A failed invocation carries an
/// `Error: ...` string in `output` rather than a separate error channel.
#[derive(Debug, Clone)]
pub struct BackendRun {
    pub output: String,
    pub elapsed: Duration,
}

impl BackendRun {
    pub fn is_error(&self) -> bool {
        self.output.starts_with("Error:")
    }
}

/// A converter the harness can drive.
pub trait Backend {
    fn name(&self) -> &str;
    fn run(&self, input: &str) -> BackendRun;
}

/// Backend that spawns an external process and feeds it stdin.
pub struct ProcessBackend {
    name: String,
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ProcessBackend {
    pub fn new(
        name: impl Into<String>,
        program: impl Into<String>,
        args: &[&str],
        timeout: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
            timeout,
        }
    }
}

impl Backend for ProcessBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, input: &str) -> BackendRun {
        let start = Instant::now();

        let mut child = match Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(err) => {
                return BackendRun {
                    output: format!("Error: {}", err),
                    elapsed: start.elapsed(),
                }
            }
        };

        // Closing stdin signals end of input
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(input.as_bytes());
        }

        // Drain pipes on threads so a chatty child cannot deadlock the wait
        let stdout = child.stdout.take();
        let out_reader = thread::spawn(move || {
            let mut buf = String::new();
            if let Some(mut pipe) = stdout {
                let _ = pipe.read_to_string(&mut buf);
            }
            buf
        });
        let stderr = child.stderr.take();
        let err_reader = thread::spawn(move || {
            let mut buf = String::new();
            if let Some(mut pipe) = stderr {
                let _ = pipe.read_to_string(&mut buf);
            }
            buf
        });

        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if start.elapsed() >= self.timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        return BackendRun {
                            output: format!(
                                "Error: timed out after {}s",
                                self.timeout.as_secs()
                            ),
                            elapsed: start.elapsed(),
                        };
                    }
                    thread::sleep(Duration::from_millis(10));
                }
                Err(err) => {
                    return BackendRun {
                        output: format!("Error: {}", err),
                        elapsed: start.elapsed(),
                    }
                }
            }
        };
        let elapsed = start.elapsed();

        let stdout_text = out_reader.join().unwrap_or_default();
        let stderr_text = err_reader.join().unwrap_or_default();

        if status.success() {
            BackendRun {
                output: stdout_text,
                elapsed,
            }
        } else {
            BackendRun {
                output: format!("Error: {}", stderr_text.trim()),
                elapsed,
            }
        }
    }
}

/// Outcome of comparing two backends on one input.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub input: String,
    pub left: BackendRun,
    pub right: BackendRun,
    pub matched: bool,
}

impl CaseReport {
    /// How many times faster the left backend was. None when the left
    /// elapsed time is zero.
    pub fn speedup(&self) -> Option<f64> {
        let left = self.left.elapsed.as_secs_f64();
        if left > 0.0 {
            Some(self.right.elapsed.as_secs_f64() / left)
        } else {
            None
        }
    }
}

/// Run both backends on the same input and compare their captured output.
/// Equality is literal: any divergence, including trailing whitespace, is a
/// mismatch.
pub fn compare_case(left: &dyn Backend, right: &dyn Backend, input: &str) -> CaseReport {
    let left_run = left.run(input);
    let right_run = right.run(input);
    let matched = left_run.output == right_run.output;
    CaseReport {
        input: input.to_string(),
        left: left_run,
        right: right_run,
        matched,
    }
}
