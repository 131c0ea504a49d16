// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::{Error, filter::Predicate};
use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

const FIRST: i32 = 1;
const PAIR: [i32; 2] = [46, 70];
const ANY: i32 = 46;

/// print the sorted list, then each filter over it
///
/// blocks are printed one after another with no separator: every
/// address, those starting with the first octet, those starting with the
/// pair, and those containing the any octet
#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "report")]
#[argh(help_triggers("-h", "--help"))]
pub struct Args {
    /// first octet to match
    #[argh(option, short = 'f', default = "FIRST")]
    first: i32,
    /// leading octets to match together, repeat for each one (default 46 70)
    #[argh(option, short = 'p')]
    pair: Vec<i32>,
    /// octet to match in any position
    #[argh(option, short = 'a', default = "ANY")]
    any: i32,
    #[argh(positional, greedy)]
    files: Vec<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            first: FIRST,
            pair: PAIR.to_vec(),
            any: ANY,
            files: vec![],
        }
    }
}

pub fn run(args: &Args, verbose: bool) -> Result<(), Error> {
    let pair = if args.pair.is_empty() {
        &PAIR[..]
    } else {
        &args.pair
    };

    let mut pool = crate::load(&args.files, verbose)?;
    // the filters below see this order too
    pool.sort_descending();

    let mut out = BufWriter::new(std::io::stdout().lock());
    let total = crate::print_addresses(&mut out, &pool)?;
    let first = crate::print_addresses(&mut out, pool.filter_prefix(&[args.first]))?;
    let paired = crate::print_addresses(&mut out, pool.filter_prefix(pair))?;
    let any = crate::print_addresses(&mut out, pool.filter_any(args.any))?;
    out.flush()?;

    if verbose {
        eprintln!("sorted {total} addresses");
        let queries = [
            (Predicate::Prefix(vec![args.first]), first),
            (Predicate::Prefix(pair.to_vec()), paired),
            (Predicate::Any(args.any), any),
        ];
        for (predicate, count) in queries {
            eprintln!("{predicate}: {count} of {total} matched");
        }
    }
    Ok(())
}
