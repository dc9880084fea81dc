use clap::{ArgGroup, Parser};
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

/// Suffix added to encoded files.
pub const SUFFIX: &str = ".amc";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

/// Encode, Decode, Test, Keygen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
    Test,
    Keygen,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmcOpts {
    /// Base64 key shared by encoder and decoder
    pub key: String,
    /// Vec of names of files to read for input. Empty means stdin.
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Encode/Decode/Test/Keygen
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl AmcOpts {
    pub fn new() -> Self {
        Self {
            key: String::new(),
            files: vec![],
            force_overwrite: false,
            op_mode: Mode::Encode,
            output: Output::File,
            verbose: Verbosity::Errors,
        }
    }
}

impl Default for AmcOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Keyed compression for short texts",
    long_about = "
    AMC lays the 256 byte values out over nine groups of 5-bit codes, in the order given by
    a shared key. Bytes listed early in the key cost 5 bits instead of 8. Encoder and decoder
    must use the same key; the output carries no header.

    Use --keygen on sample files to get a key suited to similar data."
)]
#[clap(group(ArgGroup::new("mode").args(&["encode", "decode", "test", "keygen"])))]
pub struct Args {
    /// Files to process. Standard input is used when none are given
    #[clap()]
    files: Vec<String>,

    /// Encode the input (default)
    #[clap(short = 'z', long = "encode")]
    encode: bool,

    /// Decode the input
    #[clap(short = 'd', long = "decode")]
    decode: bool,

    /// Check that each input survives an encode/decode round trip
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Print a key built from the byte frequencies of the input
    #[clap(short = 'g', long = "keygen")]
    keygen: bool,

    /// Base64 key
    #[clap(short = 'k', long = "key", env = "AMC_KEY", hide_env_values = true)]
    key: Option<String>,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    ///Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Sets verbosity. -v shows warnings, -vvvv is chatty
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

impl From<Args> for AmcOpts {
    fn from(args: Args) -> Self {
        let mut opts = AmcOpts::new();
        opts.op_mode = if args.decode {
            Mode::Decode
        } else if args.test {
            Mode::Test
        } else if args.keygen {
            Mode::Keygen
        } else {
            Mode::Encode
        };
        opts.key = args.key.unwrap_or_default();
        // No files means a pipe, and a pipe always writes to stdout.
        if args.stdout || args.files.is_empty() {
            opts.output = Output::Stdout
        };
        opts.files = args.files;
        opts.force_overwrite = args.force;
        opts.verbose = match (args.quiet, args.verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Errors,
            (false, 1) => Verbosity::Warnings,
            (false, 2) => Verbosity::Info,
            (false, 3) => Verbosity::Debug,
            _ => Verbosity::Trace,
        };
        opts
    }
}

/// Parse the command line, set the log level and report what we are about to do.
pub fn amcopts_init() -> AmcOpts {
    let opts = AmcOpts::from(Args::parse());

    // Set the log level
    match opts.verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Errors => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };

    info!("---- AMC Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    if opts.files.is_empty() {
        info!("Getting input from stdin")
    }
    if opts.output == Output::Stdout {
        info!("Sending output to stdout")
    }
    if opts.key.is_empty() && opts.op_mode != Mode::Keygen {
        warn!("No key given. Only the default byte layout is available.")
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- AMC Initialization End ----\n");
    opts
}

/// Name of the file written for `input` in `mode`. Encoding appends `.amc`; decoding strips
/// it, or appends `.out` when it is missing.
pub fn output_name(input: &str, mode: Mode) -> String {
    match mode {
        Mode::Decode => match input.strip_suffix(SUFFIX) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => format!("{input}.out"),
        },
        _ => format!("{input}{SUFFIX}"),
    }
}

#[cfg(test)]
mod test {
    use super::{output_name, AmcOpts, Args, Mode, Output, Verbosity};
    use clap::Parser;

    fn parse(argv: &[&str]) -> AmcOpts {
        AmcOpts::from(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults_test() {
        let opts = parse(&["amc", "-k", "ZWF0", "notes.txt"]);
        assert_eq!(opts.op_mode, Mode::Encode);
        assert_eq!(opts.output, Output::File);
        assert_eq!(opts.verbose, Verbosity::Errors);
        assert_eq!(opts.key, "ZWF0");
        assert_eq!(opts.files, vec!["notes.txt".to_string()]);
    }

    #[test]
    fn flags_test() {
        let opts = parse(&["amc", "-d", "-c", "-f", "-vvv", "-k", "ZWF0", "a.amc", "b.amc"]);
        assert_eq!(opts.op_mode, Mode::Decode);
        assert_eq!(opts.output, Output::Stdout);
        assert!(opts.force_overwrite);
        assert_eq!(opts.verbose, Verbosity::Debug);
        assert_eq!(opts.files.len(), 2);

        assert_eq!(parse(&["amc", "-q", "-v", "x"]).verbose, Verbosity::Quiet);
        assert_eq!(parse(&["amc", "--keygen", "x"]).op_mode, Mode::Keygen);
        assert_eq!(parse(&["amc", "-t", "x"]).op_mode, Mode::Test);
    }

    #[test]
    fn stdin_goes_to_stdout_test() {
        let opts = parse(&["amc", "-k", "ZWF0"]);
        assert!(opts.files.is_empty());
        assert_eq!(opts.output, Output::Stdout);
    }

    #[test]
    fn conflicting_modes_test() {
        assert!(Args::try_parse_from(["amc", "-z", "-d", "x"]).is_err());
    }

    #[test]
    fn output_name_test() {
        assert_eq!(output_name("notes.txt", Mode::Encode), "notes.txt.amc");
        assert_eq!(output_name("notes.txt.amc", Mode::Decode), "notes.txt");
        assert_eq!(output_name("notes.txt", Mode::Decode), "notes.txt.out");
        assert_eq!(output_name(".amc", Mode::Decode), ".amc.out");
    }
}
