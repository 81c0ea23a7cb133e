//! furiwake command-line entry point
//!
//! Always writes exactly one JSON value to stdout and exits with status 0;
//! failures are reported through the payload, not the exit code.

use clap::error::ErrorKind;
use clap::Parser;
use furiwake_cli::commands::AnnotateArgs;
use furiwake_cli::output::{JsonWriter, Payload};

fn main() {
    let payload = match AnnotateArgs::try_parse() {
        Ok(args) => args.execute(),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => Payload::error(e.to_string()),
        },
    };

    let stdout = std::io::stdout();
    let mut writer = JsonWriter::new(stdout.lock());
    if let Err(e) = writer.write(&payload) {
        log::error!("failed to write output payload: {e}");
    }
}
