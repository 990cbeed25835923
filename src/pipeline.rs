use crate::config::Config;
use crate::error::{Error, ParseError};
use crate::filter::{filter_any_byte, filter_first_byte, filter_first_two_bytes};
use crate::ipv4::{Ipv4, Ipv4Pool};
use crate::split::split;
use log::debug;
use std::io::{BufRead, Write};

/// Parses the address column of one input line.
pub fn parse_line(line: &str, config: &Config) -> Result<Ipv4, ParseError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields = split(line, config.field_delim);
    Ipv4::parse(&split(fields[0], config.octet_delim))
}

/// Reads every line of `input` into a pool, stopping at the first bad one.
pub fn read_pool<R: BufRead>(input: R, config: &Config) -> Result<Ipv4Pool, Error> {
    let mut pool = Ipv4Pool::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.map_err(Error::Read)?;
        let ip = parse_line(&line, config).map_err(|cause| Error::Line {
            line: i + 1,
            cause,
        })?;
        pool.push(ip);
    }
    debug!("read {} addresses", pool.len());
    Ok(pool)
}

pub fn run<R: BufRead, W: Write>(input: R, mut output: W, config: &Config) -> Result<(), Error> {
    let mut pool = read_pool(input, config)?;
    pool.sort_desc();
    write!(output, "{}", pool).map_err(Error::Write)?;

    let (v0, v1) = config.first_two_bytes;
    let views = [
        filter_first_byte(&pool, config.first_byte),
        filter_first_two_bytes(&pool, v0, v1),
        filter_any_byte(&pool, config.any_byte),
    ];
    for (n, view) in views.iter().enumerate() {
        debug!("filter {}: {} of {} addresses", n + 1, view.len(), pool.len());
        write!(output, "{}", view).map_err(Error::Write)?;
    }
    output.flush().map_err(Error::Write)?;
    Ok(())
}
