//! Reads HTML from stdin and writes the extracted article as JSON to stdout.
//!
//! Usage: `extract_stdin [BASE_URL] < page.html`
//!
//! Set `RUST_LOG=debug` to see pipeline diagnostics on stderr.

use std::io::{self, Read};
use std::process::ExitCode;

use article_extractor::{extract_bytes_with_options, Options};

fn main() -> ExitCode {
    env_logger::init();

    let mut html = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {e}");
        return ExitCode::FAILURE;
    }

    let options = Options {
        url: std::env::args().nth(1),
        debug: log::log_enabled!(log::Level::Debug),
        ..Options::default()
    };

    let article = match extract_bytes_with_options(&html, &options) {
        Ok(article) => article,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&article) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize article: {e}");
            ExitCode::FAILURE
        }
    }
}
