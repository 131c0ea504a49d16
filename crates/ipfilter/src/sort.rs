// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::Error;
use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

/// print addresses largest first
#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "sort")]
#[argh(help_triggers("-h", "--help"))]
pub struct Args {
    #[argh(positional, greedy)]
    files: Vec<PathBuf>,
}

pub fn run(args: &Args, verbose: bool) -> Result<(), Error> {
    let mut pool = crate::load(&args.files, verbose)?;
    pool.sort_descending();

    let mut out = BufWriter::new(std::io::stdout().lock());
    crate::print_addresses(&mut out, &pool)?;
    out.flush()?;
    Ok(())
}
