//! Xpectro - terminal console for the threat-detection dashboard
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use xpectro_console::Args;
use xpectro_core::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    xpectro_console::run(args).await
}
