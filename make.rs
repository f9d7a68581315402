#!/usr/bin/env run-cargo-script
//! ```cargo
//! [package]
//! name = "bitseq-make"
//! version = "0.1.0"
//! edition = "2021"
//!
//! [dependencies]
//! nob = { git = "https://gitlab.isae-supaero.fr/a.stevan/nob.rs", rev = "7ea6be855cf5600558440def6e59a83f78b8b543" }
//! clap = { version = "4.5.17", features = ["derive"] }
//! ```
extern crate clap;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Formats the code.
    Fmt {
        /// Only checks instead of really formatting.
        #[arg(short, long)]
        check: bool,
    },
    /// Checks the code.
    Check,
    /// Runs Clippy.
    Clippy,
    /// Runs the tests of the library and of the `nist` tool.
    Test {
        /// Be extra verbose with the output of the tests.
        #[arg(short, long)]
        verbose: bool,
    },
    /// Shows the version of all the tools used,
    Version,
    /// Builds the documentation
    Doc {
        /// Open the documentation in the browser.
        #[arg(short, long)]
        open: bool,
        /// Document private items.
        #[arg(short, long)]
        private: bool,
    },
    /// Generates 128 bits and runs the NIST tests on them.
    Assess,
}

#[rustfmt::skip]
fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Fmt { check }) => {
            if *check {
                nob::run_cmd_and_fail!("cargo", "fmt", "--all", "--", "--check");
            } else {
                nob::run_cmd_and_fail!("cargo", "fmt", "--all");
            }
        }
        Some(Commands::Check) => {
            nob::run_cmd_and_fail!("cargo", "check", "--workspace", "--all-targets");
        }
        Some(Commands::Clippy) => {
            nob::run_cmd_and_fail!(
                "cargo",
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings"
            );
        }
        Some(Commands::Test { verbose }) => {
            let mut cmd = vec!["cargo", "test", "--workspace"];
            if *verbose { cmd.push("--verbose") }
            nob::run_cmd_as_vec_and_fail!(cmd);
        }
        Some(Commands::Version) => {
            nob::run_cmd_and_fail!(@"rustup", "--version", "2>", "/dev/null");
            nob::run_cmd_and_fail!(@"rustup", "show", "active-toolchain");
            nob::run_cmd_and_fail!(@"rustc", "--version");
            nob::run_cmd_and_fail!(@"cargo", "--version");
            nob::run_cmd_and_fail!(@"cargo", "clippy", "--version");
        }
        Some(Commands::Doc { open, private }) => {
            let mut cmd = vec!["cargo", "doc", "--no-deps", "--workspace"];
            if *open { cmd.push("--open") }
            if *private { cmd.push("--document-private-items") }
            nob::run_cmd_as_vec_and_fail!(cmd);
        }
        Some(Commands::Assess) => {
            let res = nob::run_cmd_and_fail!(@+"cargo", "run", "--quiet", "--bin", "bitseq", "--", "--bits", "128");
            let bits = String::from_utf8(res.stdout).expect("Invalid UTF-8 string");
            let sequences = std::env::temp_dir().join("bitseq-assess.json");
            std::fs::write(&sequences, format!(r#"{{"bitseq": "{}"}}"#, bits.trim()))
                .expect("could not write sequences");
            nob::run_cmd_and_fail!(
                "cargo", "run", "--quiet", "--bin", "nist", "--",
                "--sequences", sequences.to_str().expect("non UTF-8 temp dir"),
                "--output", "results.txt"
            );
        }
        None => {}
    }
}
