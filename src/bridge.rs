//! Top-level orchestration: one command in, one launch, one status frame out.

use std::io::{Read, Write};

use crate::config::Config;
use crate::host;
use crate::launch;
use crate::logger::Logger;
use crate::response::ResponsePool;

/// Everything went as far as a launch attempt (including a reported fork
/// failure — the host tells those apart by message content).
pub const EXIT_OK: u8 = 0;
/// The host sent an empty command.
pub const EXIT_EMPTY_COMMAND: u8 = 2;
/// Configuration could not be loaded.
pub const EXIT_CONFIG: u8 = 3;

/// How a run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The host closed the channel before sending a command. Silent success
    /// exit; nothing is ever written on this path.
    Disconnected,
    /// Normal run: the status frame (if any lines accumulated) has been
    /// flushed and the process should exit with this code.
    Exit(u8),
}

/// Run the bridge over the given channel.
///
/// Reads exactly one framed command, loads config, launches the target, and
/// flushes the aggregated status as a single frame. The flush sits on the
/// one path every non-silent exit goes through, so early returns inside
/// [`dispatch`] cannot skip it.
pub fn run<R: Read, W: Write>(input: &mut R, output: &mut W) -> Outcome {
    let command = match host::read_frame(input) {
        Ok(command) => command,
        // Closed channel is the normal shutdown signal; oversized or garbled
        // frames get the same silent treatment since there is no agreed way
        // to report them.
        Err(_) => return Outcome::Disconnected,
    };

    let mut pool = ResponsePool::new();
    let code = dispatch(&command, &mut pool);
    // stdout is gone if this fails; there is nobody left to tell.
    let _ = pool.flush_to(output);
    Outcome::Exit(code)
}

fn dispatch(command: &str, pool: &mut ResponsePool) -> u8 {
    if command.is_empty() {
        pool.append("Error: empty command received");
        return EXIT_EMPTY_COMMAND;
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            pool.append(&format!(
                "Error: problem when loading config or executing dualview ({err})"
            ));
            return EXIT_CONFIG;
        }
    };

    let mut logger = Logger::new(config.logging);
    logger.log(&format!("Received command: {command}"));

    launch::start_process(command, &config, pool, &mut logger);

    pool.append("Started process.");
    logger.log("Done");
    EXIT_OK
}
