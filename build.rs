use std::process::Command;

fn main() {
    let installed = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .expect("rustup not available");
    let targets = String::from_utf8_lossy(&installed.stdout);
    if !targets.lines().any(|line| line.trim() == "wasm32-unknown-unknown") {
        panic!(
            "missing wasm32-unknown-unknown target; install it with `rustup target add wasm32-unknown-unknown`"
        );
    }
}
