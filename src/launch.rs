//! Detaches and execs the DualView process.
//!
//! Classic double-detachment: fork, new session in the child, stdio
//! redirected to the null device, conservative umask, configured working
//! directory, then exec. The parent never waits on the child; its only job
//! afterwards is to report status and exit.

use std::ffi::CString;
use std::fs::OpenOptions;
use std::io;
use std::os::fd::AsRawFd;
use std::os::unix::ffi::OsStrExt;
use std::process;

use nix::sys::stat::{umask, Mode};
use nix::unistd::{chdir, dup2, execv, fork, setsid, ForkResult};

use crate::command;
use crate::config::Config;
use crate::logger::Logger;
use crate::response::ResponsePool;

/// Parse the raw argument string and launch the configured executable as a
/// detached process.
///
/// All outcomes are reported through `pool`; the caller exits with the
/// success code either way. A fork failure is reported but deliberately does
/// not get its own exit code — the host tells the scenarios apart by message
/// content.
pub fn start_process(raw: &str, config: &Config, pool: &mut ResponsePool, logger: &mut Logger) {
    pool.append(&format!("Plain received args: {raw}"));

    let args = command::parse(raw);

    let mut startup = format!(
        "Starting DualView({}) with {} arguments: ",
        config.dualview_executable.display(),
        args.len()
    );
    for arg in &args {
        startup.push_str(arg);
        startup.push_str("; ");
    }
    pool.append(&startup);

    // Build the exec argv before forking: only fork-safe calls are allowed
    // in the child of a multithreaded process, and this also surfaces
    // interior NUL bytes while we can still report them.
    let argv = match build_argv(config, &args) {
        Ok(argv) => argv,
        Err(err) => {
            logger.log(&format!("Error: argument not usable for exec: {err}"));
            pool.append("Error: argument contains an interior NUL byte");
            return;
        }
    };

    // SAFETY: the child branch only calls setsid/dup2/umask/chdir/execv and
    // _exit-style termination; no locks or allocation.
    match unsafe { fork() } {
        Err(err) => {
            logger.log(&format!("Error: forking: {err}"));
            pool.append("Error: forking");
        }
        Ok(ForkResult::Parent { .. }) => {
            logger.log("Successfully forked");
            pool.append("Successfully forked, bridge process exiting");
        }
        Ok(ForkResult::Child) => detach_and_exec(config, &argv, logger),
    }
}

fn build_argv(config: &Config, args: &[String]) -> Result<Vec<CString>, std::ffi::NulError> {
    let mut argv = Vec::with_capacity(args.len() + 1);
    argv.push(CString::new(
        config.dualview_executable.as_os_str().as_bytes(),
    )?);
    for arg in args {
        argv.push(CString::new(arg.as_str())?);
    }
    Ok(argv)
}

/// Runs only in the forked child. The parent has already queued its reply,
/// so failures here cannot reach the host; the child just dies quietly.
fn detach_and_exec(config: &Config, argv: &[CString], logger: &mut Logger) -> ! {
    if setsid().is_err() {
        process::exit(1);
    }

    if redirect_stdio_to_null().is_err() {
        process::exit(1);
    }

    // Back to the conventional default mask.
    umask(Mode::from_bits_truncate(0o022));

    if chdir(config.work_dir.as_path()).is_err() {
        process::exit(1);
    }

    // On success this never returns.
    let _ = execv(&argv[0], argv);

    logger.log("Error: child returned from execv");
    process::exit(1);
}

fn redirect_stdio_to_null() -> io::Result<()> {
    let null = OpenOptions::new().read(true).write(true).open("/dev/null")?;
    for fd in 0..3 {
        dup2(null.as_raw_fd(), fd)?;
    }
    Ok(())
}
