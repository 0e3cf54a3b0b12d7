//! Generates `build_info.rs`: the short commit and build date the game shows
//! in its info panel and logs at startup.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::Command;

const UNKNOWN: &str = "unknown";

/// `BUILD_COMMIT` wins; otherwise ask git for a 7-character hash.
fn commit() -> String {
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return commit;
    }
    Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .filter(|hash| hash.len() == 7)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// `BUILD_DATE` wins; otherwise today's UTC date.
fn date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() -> io::Result<()> {
    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;

    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
        commit(),
        date()
    );
    fs::write(out_dir.join("build_info.rs"), generated)?;

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
    Ok(())
}
