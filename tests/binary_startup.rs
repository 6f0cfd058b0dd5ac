//! 启动失败时进程退出码与日志输出

use std::path::PathBuf;
use std::process::Command;

fn temp_profile_dir() -> PathBuf {
    std::env::temp_dir().join(format!("peer-review-bin-{}", uuid::Uuid::new_v4()))
}

fn run_binary(profile: &PathBuf) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_peer-review"))
        .env("APP_ENV", "production")
        .env("RUST_LOG", "info")
        .env("STORE_TYPE", "file")
        .env("STORE_DIR", profile)
        .output()
        .expect("failed to spawn binary")
}

#[test]
fn corrupt_profile_exits_with_flushed_error_log() {
    let dir = temp_profile_dir();
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("users.json"), "{bad").unwrap();

    let output = run_binary(&dir);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Startup failed"), "stdout: {stdout}");
    assert!(stdout.contains("Store Operation Error"), "stdout: {stdout}");
    assert!(stderr.contains("Store Operation Error"), "stderr: {stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn empty_profile_seeds_and_exits_cleanly() {
    let dir = temp_profile_dir();

    let output = run_binary(&dir);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Progress summary"), "stdout: {stdout}");
    assert!(dir.join("users.json").exists());

    let _ = std::fs::remove_dir_all(&dir);
}
