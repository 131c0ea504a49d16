// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::{Error, filter::Predicate};
use std::path::PathBuf;

/// print addresses starting with the given octets
#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "prefix")]
#[argh(help_triggers("-h", "--help"))]
pub struct Args {
    /// octet to match, repeat for the octets after it
    #[argh(option, short = 'o')]
    octet: Vec<i32>,
    /// sort before filtering instead of keeping input order
    #[argh(switch, short = 's')]
    sorted: bool,
    #[argh(positional, greedy)]
    files: Vec<PathBuf>,
}

pub fn run(args: &Args, verbose: bool) -> Result<(), Error> {
    if verbose && args.octet.is_empty() {
        eprintln!("no octets given, nothing will match");
    }
    let predicate = Predicate::Prefix(args.octet.clone());
    crate::run_filter(&args.files, args.sorted, &predicate, verbose)
}
