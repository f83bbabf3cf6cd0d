//! XRT compiler CLI

use std::process::ExitCode;

use tracing::{error, info};
use xrtc::{compile_file, dump_ast, dump_tokens, init_tracing, DriverError, Options};

fn main() -> ExitCode {
    init_tracing();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    let mut failed = 0usize;
    for path in &options.paths {
        match compile_file(path) {
            Ok(compiled) => {
                if options.dump_tokens {
                    print!("{}", dump_tokens(&compiled.tokens));
                }
                if options.dump_ast {
                    match dump_ast(&compiled.ast) {
                        Ok(text) => print!("{text}"),
                        Err(err) => error!(path = %path.display(), "{err}"),
                    }
                }
                info!(path = %path.display(), nodes = compiled.ast.len(), "compiled");
            }
            Err(err) => {
                report(&err);
                failed += 1;
            }
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        error!(failed, total = options.paths.len(), "some files failed");
        ExitCode::FAILURE
    }
}

fn report(err: &DriverError) {
    match err.compile_error() {
        Some(compile) => error!(code = %compile.code(), phase = %compile.phase(), "{err}"),
        None => error!("{err}"),
    }
}

fn print_usage() {
    eprintln!("Usage: xrtc [--tokens] [--ast] <file.xrt>...");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tokens    Print the resolved token stream of each file");
    eprintln!("  --ast       Print the AST of each file");
    eprintln!();
    eprintln!("Logging is controlled by RUST_LOG (default: info).");
}
