use std::{
    fs,
    io::{self, BufRead, Write},
    process,
    sync::Once,
};

use clap::Parser;
use golfstack::evaluate_with_io;

static TRACING_INIT: Once = Once::new();

/// golfstack runs a one-line program in a terse, stack-based golfing
/// language and prints what is left on the stack.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells golfstack to read the program from a file instead of the
    /// argument. Only the first line of the file is run.
    #[arg(short, long)]
    file: bool,

    /// Traces every evaluated token and the resulting stack on standard error.
    #[arg(short, long)]
    verbose: bool,

    /// The program, or its path with `--file`. Without it the program is the
    /// first line of standard input and the rest of the input is left for
    /// the `l` and `t` commands.
    contents: Option<String>,
}

/// Installs the trace subscriber. `--verbose` turns on debug output for the
/// interpreter; otherwise `RUST_LOG` decides, and nothing is installed when it
/// is unset.
fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
                    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

                    let filter = if verbose {
                        EnvFilter::new("golfstack=debug")
                    } else if std::env::var("RUST_LOG").is_ok() {
                        EnvFilter::from_default_env()
                    } else {
                        return;
                    };

                    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                                    .with_target(false))
                                                  .with(filter)
                                                  .init();
                });
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut input = io::stdin().lock();
    let source = match args.contents {
        Some(path) if args.file => fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            process::exit(1);
        }),
        Some(program) => program,
        None => {
            let mut line = String::new();
            if let Err(e) = input.read_line(&mut line) {
                eprintln!("Failed to read the program from standard input: {e}");
                process::exit(1);
            }
            line
        },
    };
    let program = source.lines().next().unwrap_or_default();

    let rendered = match evaluate_with_io(program, &mut input, io::stdout().lock()) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(&rendered)
                          .and_then(|()| stdout.write_all(b"\n"))
                          .and_then(|()| stdout.flush())
    {
        eprintln!("Failed to write the result: {e}");
        process::exit(1);
    }
}
