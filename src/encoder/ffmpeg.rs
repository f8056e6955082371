//! ffmpeg subprocess handling for audio compression

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{InlineError, Result};

/// How often the child is polled for exit
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Bytes of stderr kept for the failure detail
const STDERR_TAIL_BYTES: usize = 4096;

/// How long to wait for the stderr tail once the encoder has exited.
/// A grandchild may still hold the pipe open.
const STDERR_GRACE: Duration = Duration::from_millis(500);

/// Transcode `input_path` into `output_path` with the given encoder
///
/// Runs `<encoder> -y -i <input> <output>`. The output container is picked by
/// the encoder from the output file's extension. Blocks until the encoder
/// exits or `timeout` elapses, in which case the process is killed.
///
/// # Errors
/// * `EncoderNotFound` if the binary cannot be spawned because it is missing
/// * `EncodingFailed` if it exits with a non-zero status
/// * `EncoderTimeout` if it runs longer than `timeout`
pub fn encode_file(
    encoder: &Path,
    input_path: &Path,
    output_path: &Path,
    timeout: Option<Duration>,
) -> Result<()> {
    // -y : overwrite the (already existing, empty) temp output file
    let mut cmd = Command::new(encoder);
    cmd.arg("-y").arg("-i").arg(input_path).arg(output_path);

    log::info!(
        "Encoding: {} -> {}",
        input_path.display(),
        output_path.display()
    );

    let started = Instant::now();
    run_to_completion(&mut cmd, encoder, timeout)?;

    log::debug!(
        "Encoder finished in {:.2}s: {}",
        started.elapsed().as_secs_f64(),
        output_path.display()
    );
    Ok(())
}

/// Spawn `cmd` and wait for it, turning exit status and timeout into errors
pub(crate) fn run_to_completion(
    cmd: &mut Command,
    program: &Path,
    timeout: Option<Duration>,
) -> Result<()> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                log::warn!("Encoder not found: {}", program.display());
                InlineError::EncoderNotFound(program.to_path_buf())
            } else {
                InlineError::io(program, e)
            }
        })?;

    // Drain stderr so a chatty encoder never stalls on a full pipe.
    // The reader is never joined: it may outlive the child.
    let stderr_rx = spawn_stderr_reader(&mut child);

    let status = match wait_with_timeout(&mut child, timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            let _ = child.kill();
            let _ = child.wait(); // Reap the process
            let timeout = timeout.unwrap_or_default();
            log::warn!(
                "Encoder {} timed out after {:?}",
                program.display(),
                timeout
            );
            return Err(InlineError::EncoderTimeout {
                encoder: program.to_path_buf(),
                timeout,
            });
        }
        Err(e) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(InlineError::io(program, e));
        }
    };

    if status.success() {
        Ok(())
    } else {
        let stderr = stderr_rx.recv_timeout(STDERR_GRACE).unwrap_or_default();
        let detail = last_line(&stderr).unwrap_or("Unknown error").to_string();
        log::warn!("Encoding failed ({}): {}", status, detail);
        Err(InlineError::encoding_failed(status, detail))
    }
}

/// Poll until the child exits. `Ok(None)` means the timeout elapsed first
fn wait_with_timeout(
    child: &mut Child,
    timeout: Option<Duration>,
) -> std::io::Result<Option<ExitStatus>> {
    let deadline = timeout.map(|t| Instant::now() + t);

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }

        if let Some(deadline) = deadline
            && Instant::now() >= deadline
        {
            return Ok(None);
        }

        thread::sleep(POLL_INTERVAL);
    }
}

/// Read stderr to EOF on a helper thread, sending back only its tail
fn spawn_stderr_reader(child: &mut Child) -> mpsc::Receiver<String> {
    let stderr = child.stderr.take();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let tail = match stderr {
            Some(stderr) => read_tail(stderr, STDERR_TAIL_BYTES),
            None => Vec::new(),
        };
        // Receiver is gone if the caller already gave up waiting
        let _ = tx.send(String::from_utf8_lossy(&tail).into_owned());
    });
    rx
}

/// Consume `reader` to EOF, keeping at most the last `limit` bytes
fn read_tail<R: Read>(mut reader: R, limit: usize) -> Vec<u8> {
    let mut tail = Vec::with_capacity(limit);
    let mut chunk = [0u8; 1024];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                tail.extend_from_slice(&chunk[..n]);
                if tail.len() > limit {
                    tail.drain(..tail.len() - limit);
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }
    tail
}

/// Last non-empty line of encoder output (ffmpeg puts the reason there)
fn last_line(output: &str) -> Option<&str> {
    output
        .lines()
        .flat_map(|line| line.split('\r'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .next_back()
}
