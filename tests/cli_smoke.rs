use std::process::Command;

#[test]
fn help_displays_overview() {
    let binary = env!("CARGO_BIN_EXE_fp-stock-ticker");
    let output = Command::new(binary)
        .arg("--help")
        .output()
        .expect("invoke fp-stock-ticker --help");

    assert!(output.status.success(), "help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Functional stock ticker over a mock event stream"),
        "expected overview text in help output"
    );
}

#[test]
fn bounded_run_prints_final_board() {
    let binary = env!("CARGO_BIN_EXE_fp-stock-ticker");
    let output = Command::new(binary)
        .args(["run", "--max-updates", "1", "--seed", "3"])
        .output()
        .expect("invoke fp-stock-ticker run");

    assert!(output.status.success(), "bounded run should exit cleanly");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in ["AAPL", "MSFT", "GOOG"] {
        assert!(stdout.contains(id), "expected {id} in ticker output");
    }
    assert!(stdout.contains("STOCK"), "expected board header");
}
