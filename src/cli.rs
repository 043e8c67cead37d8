use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version, value_parser,
};

use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, DRY_RUN_HELP, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT,
    LOG_FILE_HELP, OUT_HELP, QUIET_HELP, STYLESHEET_HELP, TRANSFORM_COMMAND, TRANSFORM_HELP,
    VERBOSE_HELP, XML_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::find_project_folder;

/// Everything the command line asked for
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    /// Configuration file to look for
    pub config: PathBuf,
    /// Requested verbosity
    pub verbosity: LogLevel,
    /// Where to write the log, `None` to keep it on the console only
    pub log_file: Option<PathBuf>,
    /// Arguments of the `transform` subcommand
    pub transform: TransformArgs,
}

/// Arguments of the `transform` subcommand
#[derive(Debug, Clone, PartialEq)]
pub struct TransformArgs {
    /// Input directory
    pub xml: PathBuf,
    /// Output directory, if given on the command line
    pub out: Option<PathBuf>,
    /// Stylesheet, if given on the command line
    pub stylesheet: Option<PathBuf>,
    /// Only list what would be done
    pub dry_run: bool,
}

/// Builds the command-line interface
///
/// Defines the global options:
/// - `config`: Path to the configuration file
/// - `verbose` / `quiet`: Verbosity level
/// - `log_file` / `log_locally`: Log file placement
///
/// and the `transform` subcommand with `--xml`, `--out`, `--stylesheet` and
/// `--dry`.
pub fn build_command() -> Command {
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .global(true)
        .value_parser(value_parser!(PathBuf))
        .default_value(DEFAULT_CONFIG_PATH);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .global(true)
        .action(ArgAction::Count);

    let arg_quiet = Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help(QUIET_HELP)
        .global(true)
        .action(ArgAction::SetTrue);

    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .global(true)
        .default_value(LOG_FILE_DEFAULT);

    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .global(true)
        .action(ArgAction::SetTrue);

    let transform = Command::new(TRANSFORM_COMMAND)
        .about(TRANSFORM_HELP)
        .arg(
            Arg::new("xml")
                .long("xml")
                .help(XML_HELP)
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .help(OUT_HELP)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stylesheet")
                .short('s')
                .long("stylesheet")
                .help(STYLESHEET_HELP)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dry")
                .short('n')
                .long("dry")
                .help(DRY_RUN_HELP)
                .action(ArgAction::SetTrue),
        );

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(arg_config)
        .arg(arg_verbose)
        .arg(arg_quiet)
        .arg(log_file)
        .arg(log_locally)
        .subcommand(transform)
}

/// Parses the process arguments, exiting with usage on error
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Turns parsed arguments into options
///
/// # Errors
/// Returns an error if the subcommand is missing or the log directory cannot
/// be determined
pub fn parse_options(matches: &ArgMatches) -> Result<CliOptions> {
    let sub = matches
        .subcommand_matches(TRANSFORM_COMMAND)
        .ok_or_else(|| generic_error("The transform subcommand is required"))?;

    let xml = sub
        .get_one::<PathBuf>("xml")
        .cloned()
        .ok_or_else(|| generic_error("The --xml option is required"))?;

    let transform = TransformArgs {
        xml,
        out: sub.get_one::<PathBuf>("out").cloned(),
        stylesheet: sub.get_one::<PathBuf>("stylesheet").cloned(),
        dry_run: sub.get_flag("dry"),
    };

    let config = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    Ok(CliOptions {
        config,
        verbosity: get_verbosity(matches),
        log_file: get_log_file(matches)?,
        transform,
    })
}

/// Gets the verbosity level from the `-v` count and the `-q` flag
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_flags(matches.get_count("verbose"), matches.get_flag("quiet"))
}

/// Resolves where the log file goes
///
/// An empty name disables the log file. With `--log-locally` the name is
/// used relative to the working directory, otherwise the file lives in the
/// platform configuration directory.
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if filename.is_empty() {
        return Ok(None);
    }

    if matches.get_flag("log_locally") {
        Ok(Some(PathBuf::from(filename)))
    } else {
        let folder = find_project_folder()?;
        Ok(Some(folder.config_dir().join(filename)))
    }
}
