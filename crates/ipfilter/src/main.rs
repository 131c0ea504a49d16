// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use argh::{FromArgs, from_env};
use std::{
    io::{BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

mod address;
mod any;
mod filter;
mod pool;
mod prefix;
mod report;
mod sort;
mod split;

/// sort and filter lists of ipv4 addresses
///
/// without a subcommand, reads stdin and prints the default report
#[derive(Debug, FromArgs)]
#[argh(help_triggers("-h", "--help", "help"))]
struct Opt {
    /// print what is going on to stderr
    #[argh(switch, short = 'v')]
    verbose: bool,
    #[argh(subcommand)]
    command: Option<Cmds>,
}

#[derive(Debug, FromArgs)]
#[argh(subcommand)]
enum Cmds {
    Any(any::Args),
    Prefix(prefix::Args),
    Report(report::Args),
    Sort(sort::Args),
}

#[derive(Debug, foxerror::FoxError)]
enum Error {
    /// could not load addresses
    #[err(from)]
    Pool(pool::Error),
    /// could not write output
    #[err(from)]
    Io(std::io::Error),
}

/// read every file into one pool, or stdin when there are none
///
/// all input is parsed before anything gets printed, so a bad line means
/// no output at all
fn load(files: &[PathBuf], verbose: bool) -> Result<pool::Pool, Error> {
    let stdin = [PathBuf::from("/dev/stdin")];
    let files = if files.is_empty() { &stdin[..] } else { files };

    let mut pool = pool::Pool::new();
    for name in files {
        let count = pool.read_file(name)?;
        if verbose {
            eprintln!("read {count} addresses from {}", name.display());
        }
    }
    if verbose && pool.is_empty() {
        eprintln!("no addresses, nothing to do");
    }
    Ok(pool)
}

fn print_addresses<'a>(
    out: &mut impl Write,
    addrs: impl IntoIterator<Item = &'a address::Address>,
) -> Result<usize, Error> {
    let mut count = 0;
    for addr in addrs {
        writeln!(out, "{addr}")?;
        count += 1;
    }
    Ok(count)
}

/// print the addresses of `files` matching `predicate`
fn run_filter(
    files: &[PathBuf],
    sorted: bool,
    predicate: &filter::Predicate,
    verbose: bool,
) -> Result<(), Error> {
    let mut pool = load(files, verbose)?;
    if sorted {
        pool.sort_descending();
    }

    let mut out = BufWriter::new(std::io::stdout().lock());
    let count = print_addresses(&mut out, pool.filter(predicate))?;
    out.flush()?;

    if verbose {
        eprintln!("{predicate}: {count} of {} matched", pool.len());
    }
    Ok(())
}

fn main() -> ExitCode {
    let opt: Opt = from_env();

    let res = match &opt.command {
        Some(Cmds::Any(args)) => any::run(args, opt.verbose),
        Some(Cmds::Prefix(args)) => prefix::run(args, opt.verbose),
        Some(Cmds::Report(args)) => report::run(args, opt.verbose),
        Some(Cmds::Sort(args)) => sort::run(args, opt.verbose),
        None => report::run(&report::Args::default(), opt.verbose),
    };

    if let Err(e) = res {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[test]
fn test_print_addresses() {
    let addrs = [
        address::Address::from([5, 6, 7, 8]),
        address::Address::from([1, 2, 3, 4]),
    ];
    let mut out = Vec::new();
    assert_eq!(print_addresses(&mut out, &addrs).unwrap(), 2);
    assert_eq!(out, b"5.6.7.8\n1.2.3.4\n");
}

#[test]
fn test_load_missing() {
    let err = load(&[PathBuf::from("/nonexistent/ipfilter")], false).unwrap_err();
    assert!(matches!(err, Error::Pool(pool::Error::Read { .. })));
}
