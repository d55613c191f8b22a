//! Mould's main application entry point.
//! Parses the command line, sets up logging and runs the chosen command.

use mould::{cli::get_args, cli::run, error::default_error_handler, logger::init_logger};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
