//! Host-side helper: `cargo run` builds the trail into `static/pkg` and serves
//! the demo page in `static/` on port 8000.

use std::process::{self, Command, ExitStatus};

fn run(cmd: &mut Command, what: &str) -> ExitStatus {
    match cmd.status() {
        Ok(st) => st,
        Err(err) => {
            eprintln!("failed to run {what}: {err}");
            process::exit(1);
        }
    }
}

fn main() {
    println!("Building WASM pkg …");
    let wasm = Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status();
    match wasm {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure the wasm32-unknown-unknown target is installed.");
            process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/). Serving existing static/pkg.");
        }
    }

    println!("Serving http://127.0.0.1:8000 …");
    let status = run(
        Command::new("python3").args(["-m", "http.server", "8000", "--directory", "static"]),
        "python3 http.server",
    );
    if !status.success() {
        process::exit(status.code().unwrap_or(1));
    }
}
