/// Constants used throughout the application
///
/// This module centralises the defaults and help texts so the command line,
/// the configuration file and the transform pipeline agree on them.

/// Extension of the source documents (docutils XML)
pub const SOURCE_EXTENSION: &str = "xml";

/// Extension given to every generated document
pub const TARGET_EXTENSION: &str = "ptx";

/// Output root used when neither the command line nor the configuration sets one
pub const DEFAULT_OUTPUT_DIR: &str = "pretext/";

/// File name of the stylesheet shipped next to the executable
pub const STYLESHEET_FILENAME: &str = "docutils2ptx.xsl";

/// Stylesheet parameter carrying the source file stem
pub const FILENAME_PARAM: &str = "filename";

/// Stylesheet parameter carrying the source file's parent directory
pub const FOLDER_PARAM: &str = "folder";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for configuration and log directories
pub const APPLICATION: &str = "xml2ptx";

/// Name of the subcommand running the batch
pub const TRANSFORM_COMMAND: &str = "transform";

/// Help text for the transform subcommand
pub const TRANSFORM_HELP: &str = "Apply the stylesheet to every XML file under a directory";

/// Help text for the input directory option
pub const XML_HELP: &str = "Path to the xml directory";

/// Help text for the output directory option
pub const OUT_HELP: &str = "Path to the output directory [default: pretext/]";

/// Help text for the stylesheet option
pub const STYLESHEET_HELP: &str = "Use a specific XSLT stylesheet instead of the bundled one";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "List the files that would be transformed without writing anything";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the quiet command-line option
pub const QUIET_HELP: &str = "Only report warnings and errors";

/// Help text for the log file option
pub const LOG_FILE_HELP: &str = "Write the log to this file (empty to disable)";

/// Help text for the local logging option
pub const LOCAL_LOGGING_HELP: &str = "Keep the log file in the working directory";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "xml2ptx.yaml";

/// Default name of the log file
pub const LOG_FILE_DEFAULT: &str = "xml2ptx.log";
