use std::process::ExitCode;

use human_panic::setup_panic;
use log::{error, warn};

use xml2ptx::prelude::*;

/// Exit status when some files failed to convert
const EXIT_FILE_FAILURES: u8 = 1;
/// Exit status when the batch could not start
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();
    let options = match parse_options(&matches) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_FATAL);
        }
    };

    if let Err(e) = init_logger(options.verbosity, options.log_file.as_deref()) {
        if init_logger(options.verbosity, None).is_err() {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(EXIT_FATAL);
        }
        warn!("Logging to the console only: {e:#}");
    }

    match perform_transform_based_on_configuration(&options) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_FILE_FAILURES),
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}
