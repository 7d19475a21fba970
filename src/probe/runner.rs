//! Spawns one fresh interpreter per module and captures its output.
//!
//! Measurement is strictly sequential and blocking. Output is fully
//! buffered and only inspected after the child exits.

use super::outcome::{classify_output, MeasurementOutcome, ProbeOutput, SUBPROCESS_ERROR, TIMEOUT_ERROR};
use super::script::PROBE_SCRIPT;
use crate::discovery::ModuleTarget;
use crate::runtime::ScanEnvironment;
use log::{debug, warn};
use std::io::{self, ErrorKind, Read};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Poll interval while waiting on a child with a timeout
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Anything that can measure a single module
pub trait Measure {
    fn measure(&self, target: &ModuleTarget) -> MeasurementOutcome;
}

/// Subprocess-backed measurer
#[derive(Debug, Clone)]
pub struct ProbeRunner {
    interpreter: PathBuf,
    project_root: PathBuf,
    env: ScanEnvironment,
    timeout: Option<Duration>,
}

/// How a child run ended
enum ChildRun {
    Finished(ProbeOutput),
    TimedOut,
}

impl ProbeRunner {
    pub fn new(interpreter: impl Into<PathBuf>, project_root: impl Into<PathBuf>, env: ScanEnvironment) -> Self {
        Self {
            interpreter: interpreter.into(),
            project_root: project_root.into(),
            env,
            timeout: None,
        }
    }

    /// Bound each child's wall time; the child is killed on expiry
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn command(&self, module_name: &str) -> Command {
        let mut command = Command::new(&self.interpreter);
        command
            .arg("-c")
            .arg(PROBE_SCRIPT)
            .arg(module_name)
            .arg(&self.project_root)
            .current_dir(&self.project_root)
            .env_clear()
            .envs(self.env.iter())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }

    fn run(&self, mut command: Command) -> io::Result<ChildRun> {
        let Some(timeout) = self.timeout else {
            let output = command.output()?;
            return Ok(ChildRun::Finished(ProbeOutput {
                exited_ok: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }));
        };

        let mut child = command.spawn()?;
        run_with_timeout(&mut child, timeout)
    }
}

impl Measure for ProbeRunner {
    fn measure(&self, target: &ModuleTarget) -> MeasurementOutcome {
        debug!("Probing {} with {}", target.name, self.interpreter.display());

        match self.run(self.command(&target.name)) {
            Ok(ChildRun::Finished(output)) => classify_output(&output),
            Ok(ChildRun::TimedOut) => {
                let secs = self.timeout.map(|t| t.as_secs_f64()).unwrap_or_default();
                warn!("Import of {} timed out after {:.1}s", target.name, secs);
                MeasurementOutcome::failure(TIMEOUT_ERROR, format!("import did not finish within {:.1}s", secs))
            }
            Err(e) => MeasurementOutcome::failure(
                SUBPROCESS_ERROR,
                format!("failed to launch {}: {}", self.interpreter.display(), e),
            ),
        }
    }
}

type Captured = Arc<Mutex<Vec<u8>>>;

/// Read a pipe to EOF on a background thread, signalling `done` at the end
///
/// Bytes are appended as they arrive so a partial capture can be taken
/// while the pipe is still open.
fn drain<R: Read + Send + 'static>(stream: Option<R>, done: Sender<()>) -> Captured {
    let captured = Captured::default();

    let Some(mut stream) = stream else {
        let _ = done.send(());
        return captured;
    };

    let sink = Arc::clone(&captured);
    thread::spawn(move || {
        let mut chunk = [0u8; 8192];
        loop {
            match stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => {
                    if let Ok(mut bytes) = sink.lock() {
                        bytes.extend_from_slice(&chunk[..n]);
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }
        let _ = done.send(());
    });

    captured
}

fn snapshot(captured: &Captured) -> String {
    captured
        .lock()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

/// Wait for a child, killing it once `timeout` elapses
///
/// Pipes are drained on background threads so a chatty child cannot
/// block on a full pipe while we poll. The same deadline bounds the wait
/// for both pipes to close after the child exits; a background process
/// started by the import may keep them open indefinitely.
fn run_with_timeout(child: &mut Child, timeout: Duration) -> io::Result<ChildRun> {
    let (done_tx, done_rx) = mpsc::channel();
    let stdout = drain(child.stdout.take(), done_tx.clone());
    let stderr = drain(child.stderr.take(), done_tx);
    let deadline = Instant::now() + timeout;

    loop {
        if let Some(status) = child.try_wait()? {
            let mut closed = 0;
            while closed < 2 {
                let remaining = deadline.saturating_duration_since(Instant::now()).max(POLL_INTERVAL);
                match done_rx.recv_timeout(remaining) {
                    Ok(()) => closed += 1,
                    Err(RecvTimeoutError::Timeout) => {
                        warn!("Child exited but its output pipes are still open; using captured output");
                        break;
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }

            return Ok(ChildRun::Finished(ProbeOutput {
                exited_ok: status.success(),
                stdout: snapshot(&stdout),
                stderr: snapshot(&stderr),
            }));
        }

        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            // Reader threads are detached: grandchildren may still hold the pipes
            return Ok(ChildRun::TimedOut);
        }

        thread::sleep(POLL_INTERVAL);
    }
}
