use std::io;
use std::process::ExitCode;

use dualview_bridge::bridge::{run, Outcome};

fn main() -> ExitCode {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match run(&mut stdin, &mut stdout) {
        Outcome::Disconnected => ExitCode::SUCCESS,
        Outcome::Exit(code) => ExitCode::from(code),
    }
}
