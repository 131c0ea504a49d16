// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::{Error, filter::Predicate};
use std::path::PathBuf;

/// print addresses containing an octet anywhere
#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "any")]
#[argh(help_triggers("-h", "--help"))]
pub struct Args {
    /// sort before filtering instead of keeping input order
    #[argh(switch, short = 's')]
    sorted: bool,
    #[argh(positional)]
    value: i32,
    #[argh(positional, greedy)]
    files: Vec<PathBuf>,
}

pub fn run(args: &Args, verbose: bool) -> Result<(), Error> {
    crate::run_filter(&args.files, args.sorted, &Predicate::Any(args.value), verbose)
}
