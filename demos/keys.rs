//! Print the byte value of every key pressed until `q`.
//!
//! Run with: cargo run --example keys
//! Set `RUST_LOG=rawkey=debug` to see mode transitions.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use rawkey::{InputError, RawModeConfig, TerminalInput};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), InputError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut input = TerminalInput::stdin().with_config(RawModeConfig::new().without_echo());
    if let Err(e) = input.enable_raw_mode() {
        if e.is_not_a_terminal() {
            eprintln!("stdin is not a terminal; run this interactively");
            return Ok(());
        }
        return Err(e);
    }

    println!("press keys (q quits)");
    let mut ticks = 0u64;
    let mut burst = Vec::new();
    loop {
        burst.clear();
        if input.read_pending(&mut burst)? == 0 {
            ticks += 1;
            thread::sleep(Duration::from_millis(10));
            continue;
        }

        let shown: Vec<String> = burst.iter().map(|b| format!("{b:#04x}")).collect();
        println!("[tick {ticks}] {}", shown.join(" "));
        let _ = io::stdout().flush();

        if burst.contains(&b'q') {
            break;
        }
    }

    input.disable_raw_mode()
}
