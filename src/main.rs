use ipfilter::{pipeline, Config};
use std::io::{self, BufWriter};
use std::process;

fn main() {
    env_logger::init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = pipeline::run(stdin.lock(), BufWriter::new(stdout.lock()), &Config::default()) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
