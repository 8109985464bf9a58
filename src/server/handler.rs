use std::io::{BufRead, Read, Write};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tracing::{debug, error, info, warn};

use crate::{
    config::EngineConfig,
    server::structures::{Command, Response},
    simulation::SimulationDriver,
    sweep::run_sweep,
};

/// Longest accepted command line in bytes, newline included.
pub const MAX_LINE_BYTES: u64 = 64 * 1024;

/// Per-connection server state. The engine configuration is owned and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct ServerState {
    config: EngineConfig,
}

impl ServerState {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Executes one command. Engine and request errors become error responses.
    pub fn handle_command(&self, cmd: Command) -> Response {
        match cmd {
            Command::Simulate(req) => {
                let params = req.to_parameters(&self.config.defaults);
                info!(?params, "Simulate command received");
                match SimulationDriver::new(&self.config).run(&params) {
                    Ok(run) => Response::run(run),
                    Err(e) => Response::error(e.to_string()),
                }
            }
            Command::Sweep(req) => {
                info!(
                    sweep_type = %req.sweep_type,
                    base = req.base,
                    step = req.step,
                    "Sweep command received"
                );
                let sweep = match req.to_sweep(&self.config.defaults) {
                    Ok(sweep) => sweep,
                    Err(e) => return Response::error(e.to_string()),
                };
                match run_sweep(&sweep, &self.config) {
                    Ok(members) => Response::sweep(members),
                    Err(e) => Response::error(e.to_string()),
                }
            }
            Command::Config => Response::config(self.config),
            Command::Close => Response::closed(),
        }
    }

    /// Parses and executes one line. Returns the response and whether to close.
    pub fn handle_line(&self, line: &str) -> (Response, bool) {
        match serde_json::from_str::<Command>(line) {
            Ok(Command::Close) => (Response::closed(), true),
            Ok(cmd) => (self.handle_command(cmd), false),
            Err(e) => {
                error!("Failed to parse command: {}", e);
                (
                    Response::error(format!("Invalid command format: {}", e)),
                    false,
                )
            }
        }
    }

    /// Serves newline-delimited JSON commands until `close` or end of input.
    ///
    /// A line longer than [`MAX_LINE_BYTES`] is answered with an error and ends the
    /// session.
    ///
    /// # Arguments
    /// * `reader` - Source of command lines.
    /// * `writer` - Sink for response lines.
    pub fn serve<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> std::io::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = (&mut reader).take(MAX_LINE_BYTES).read_line(&mut line)?;
            if read == 0 {
                break;
            }

            let oversized = read as u64 == MAX_LINE_BYTES && !line.ends_with('\n');
            let (response, close) = if oversized {
                (
                    Response::error(format!(
                        "Command exceeds the {} byte line limit",
                        MAX_LINE_BYTES
                    )),
                    true,
                )
            } else if line.trim().is_empty() {
                continue;
            } else {
                debug!("Received raw line: '{}'", line.trim());
                self.handle_line(&line)
            };

            if !response.is_ok() {
                warn!(message = ?response.message, "Command failed");
            }

            let response_str = serde_json::to_string(&response)? + "\n";
            writer.write_all(response_str.as_bytes())?;
            writer.flush()?;

            if close {
                info!("Closing session");
                break;
            }
        }
        Ok(())
    }
}

/// Counts one live connection against a shared total for as long as it is held.
#[derive(Debug)]
pub struct ConnectionSlot(Arc<AtomicUsize>);

impl ConnectionSlot {
    /// Takes a slot, or returns `None` when `max` connections are already live.
    pub fn acquire(active: &Arc<AtomicUsize>, max: usize) -> Option<Self> {
        if active.fetch_add(1, Ordering::SeqCst) >= max {
            active.fetch_sub(1, Ordering::SeqCst);
            return None;
        }
        Some(Self(Arc::clone(active)))
    }
}

impl Drop for ConnectionSlot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
