// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::split::split;
use std::{fmt, num::ParseIntError, str::FromStr};

pub const OCTETS: usize = 4;

#[derive(Debug, PartialEq, Eq, foxerror::FoxError)]
pub enum Error {
    /// expected four octets, found
    MissingOctets(usize),
    /// invalid octet
    ///
    /// `octet` counts from 1
    BadOctet {
        octet: usize,
        text: String,
        reason: ParseIntError,
    },
}

/// an ipv4 address as four plain integers
///
/// octets are not range checked, anything that fits in an `i32` is kept
/// as is. ordering compares the most significant octet first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([i32; OCTETS]);

impl Address {
    pub fn octets(&self) -> &[i32] {
        &self.0
    }

    /// parse the address in the first tab separated field of `line`
    pub fn from_line(line: &str) -> Result<Self, Error> {
        // split never returns an empty vec
        split(line, '\t')[0].parse()
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = split(s, '.');
        if fields.len() < OCTETS {
            return Err(Error::MissingOctets(fields.len()));
        }

        let mut octets = [0; OCTETS];
        for (n, (octet, text)) in octets.iter_mut().zip(fields).enumerate() {
            *octet = text.parse().map_err(|reason| Error::BadOctet {
                octet: n + 1,
                text: text.to_string(),
                reason,
            })?;
        }
        Ok(Self(octets))
    }
}

impl From<[i32; OCTETS]> for Address {
    fn from(octets: [i32; OCTETS]) -> Self {
        Self(octets)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

#[test]
fn test_parse() {
    assert_eq!("1.2.3.4".parse(), Ok(Address::from([1, 2, 3, 4])));
    assert_eq!(
        "222.173.235.246".parse(),
        Ok(Address::from([222, 173, 235, 246]))
    );
}

#[test]
fn test_parse_unchecked_range() {
    assert_eq!("300.-1.0.999".parse(), Ok(Address::from([300, -1, 0, 999])));
}

#[test]
fn test_parse_extra_fields() {
    assert_eq!("1.2.3.4.5".parse(), Ok(Address::from([1, 2, 3, 4])));
    assert_eq!("1.2.3.4.".parse(), Ok(Address::from([1, 2, 3, 4])));
    assert_eq!("1.2.3.4.nope".parse(), Ok(Address::from([1, 2, 3, 4])));
}

#[test]
fn test_parse_missing() {
    assert_eq!("".parse::<Address>(), Err(Error::MissingOctets(1)));
    assert_eq!("1.2.3".parse::<Address>(), Err(Error::MissingOctets(3)));
}

#[test]
fn test_parse_bad_octet() {
    let Err(Error::BadOctet { octet, text, .. }) = "1.2.three.4".parse::<Address>() else {
        panic!("three is not a number");
    };
    assert_eq!(octet, 3);
    assert_eq!(text, "three");

    let Err(Error::BadOctet { octet, text, .. }) = "1..3.4".parse::<Address>() else {
        panic!("empty octet parsed");
    };
    assert_eq!(octet, 2);
    assert_eq!(text, "");
}

#[test]
fn test_from_line() {
    assert_eq!(
        Address::from_line("1.2.3.4\tX\t0"),
        Ok(Address::from([1, 2, 3, 4]))
    );
    assert_eq!(Address::from_line("5.6.7.8"), Ok(Address::from([5, 6, 7, 8])));
    assert_eq!(Address::from_line("\t1.2.3.4"), Err(Error::MissingOctets(1)));
}

#[test]
fn test_display() {
    assert_eq!(Address::from([1, 70, 44, 170]).to_string(), "1.70.44.170");
    assert_eq!(Address::from([-1, 0, 256, 9]).to_string(), "-1.0.256.9");
    assert_eq!(
        Error::MissingOctets(2).to_string(),
        "expected four octets, found: 2"
    );
}
