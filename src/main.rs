//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
use std::{
    fs::{self, File, OpenOptions},
    io::{self, Read, Write},
    path::Path,
};

use amc::tools::cli::{amcopts_init, output_name, AmcOpts, Mode, Output};
use amc::tools::freq_count::suggest_key;
use amc::Codec;

use log::{error, info, warn, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace. Logs go to stderr so they
    // never mix with data written to stdout.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let opts = amcopts_init();

    //----- Figure how what we need to do and go do it
    let result = match opts.op_mode {
        Mode::Keygen => keygen(&opts),
        _ => {
            let codec = Codec::new(&opts.key)?;
            run(&opts, &codec)
        }
    };

    info!("Done.\n");
    result
}

/// Encode, decode or test every input in turn. Stops at the first failure.
fn run(opts: &AmcOpts, codec: &Codec) -> io::Result<()> {
    if opts.files.is_empty() {
        let mut input = Vec::new();
        io::stdin().read_to_end(&mut input)?;
        let out = process(opts, codec, "<stdin>", &input)?;
        return io::stdout().write_all(&out);
    }

    for fname in &opts.files {
        let input = fs::read(fname)?;
        let out = process(opts, codec, fname, &input)?;
        match (opts.op_mode, opts.output) {
            (Mode::Test, _) => {}
            (_, Output::Stdout) => io::stdout().write_all(&out)?,
            (mode, Output::File) => {
                write_file(&output_name(fname, mode), &out, opts.force_overwrite)?
            }
        }
    }
    Ok(())
}

/// Run one input through the codec. Test mode returns nothing to write.
fn process(opts: &AmcOpts, codec: &Codec, name: &str, input: &[u8]) -> io::Result<Vec<u8>> {
    match opts.op_mode {
        Mode::Decode => {
            let out = codec.decode(input)?;
            info!("{}: {} bytes -> {} bytes", name, input.len(), out.len());
            Ok(out)
        }
        Mode::Test => {
            let packed = codec.encode(input)?;
            if codec.decode(&packed)? != input {
                error!("{}: round trip failed", name);
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("{name}: round trip failed"),
                ));
            }
            info!("{}: ok", name);
            Ok(Vec::new())
        }
        _ => {
            let out = codec.encode(input)?;
            if !input.is_empty() {
                let bits = codec.structured_bits(input)? as f64 / input.len() as f64;
                info!(
                    "{}: {} bytes -> {} bytes ({:.2} grouped bits per byte)",
                    name,
                    input.len(),
                    out.len(),
                    bits
                );
            }
            Ok(out)
        }
    }
}

/// Print a key built from all inputs taken together.
fn keygen(opts: &AmcOpts) -> io::Result<()> {
    let mut sample = Vec::new();
    if opts.files.is_empty() {
        io::stdin().read_to_end(&mut sample)?;
    }
    for fname in &opts.files {
        File::open(fname)?.read_to_end(&mut sample)?;
    }
    if sample.is_empty() {
        warn!("Empty sample. The key will be empty as well.");
    }
    println!("{}", suggest_key(&sample));
    Ok(())
}

fn write_file(fname: &str, data: &[u8], force: bool) -> io::Result<()> {
    if !force && Path::new(fname).exists() {
        error!("{} already exists. Use -f to overwrite.", fname);
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{fname} already exists"),
        ));
    }
    let mut f_out = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(fname)?;
    f_out.write_all(data)?;
    info!("Wrote {}", fname);
    Ok(())
}
