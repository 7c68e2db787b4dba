use std::{env, io, process};

use calm_compass::{
    cli::{self, CliContext},
    init,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        process::exit(1);
    }

    let mut ctx = CliContext::from_env()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(&args, &mut ctx, &mut out)?;
    Ok(())
}

fn print_usage() {
    eprintln!("{}", cli::usage());
}
