//! Version command implementation

use crate::brew::BrewCli;
use crate::error::Result;

/// Run version command
pub fn run(brew: &BrewCli) -> Result<()> {
    println!("kickstart {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!(
        "Homebrew: {} ({})",
        brew.program().display(),
        if brew.is_installed() {
            "found"
        } else {
            "not found"
        }
    );

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
