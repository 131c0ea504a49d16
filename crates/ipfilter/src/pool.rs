// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::{
    address::{self, Address},
    filter::{Predicate, any_matches, prefix_matches},
};
use std::{fs::read_to_string, path::Path};

#[derive(Debug, foxerror::FoxError)]
pub enum Error {
    /// could not read input
    Read {
        input: String,
        error: std::io::Error,
    },
    /// malformed address
    Malformed {
        input: String,
        line: usize,
        error: address::Error,
    },
}

/// addresses in the order they were read, until sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    addresses: Vec<Address>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.addresses.iter()
    }

    /// parse every line of `text`, stopping at the first bad one
    ///
    /// `input` only names where the text came from for error messages.
    /// nothing gets added if any line fails
    pub fn extend_from_str(&mut self, input: &str, text: &str) -> Result<usize, Error> {
        let parsed = text
            .lines()
            .enumerate()
            .map(|(n, line)| {
                Address::from_line(line).map_err(|error| Error::Malformed {
                    input: input.to_string(),
                    line: n + 1,
                    error,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let count = parsed.len();
        self.addresses.extend(parsed);
        Ok(count)
    }

    pub fn read_file(&mut self, path: &Path) -> Result<usize, Error> {
        let input = path.display().to_string();
        let text = match read_to_string(path) {
            Ok(text) => text,
            Err(error) => return Err(Error::Read { input, error }),
        };
        self.extend_from_str(&input, &text)
    }

    /// reorder so the largest address comes first
    ///
    /// equal addresses keep their relative order
    pub fn sort_descending(&mut self) {
        self.addresses.sort_by(|a, b| b.octets().cmp(a.octets()));
    }

    pub fn filter<'a>(&'a self, predicate: &Predicate) -> impl Iterator<Item = &'a Address> {
        self.addresses.iter().filter(|a| predicate.matches(a))
    }

    /// addresses whose leading octets equal `values`
    pub fn filter_prefix<'a>(&'a self, values: &[i32]) -> impl Iterator<Item = &'a Address> {
        self.addresses
            .iter()
            .filter(|a| prefix_matches(a.octets(), values))
    }

    /// addresses with `value` in any position
    pub fn filter_any(&self, value: i32) -> impl Iterator<Item = &Address> {
        self.addresses
            .iter()
            .filter(move |a| any_matches(a.octets(), value))
    }
}

impl FromIterator<Address> for Pool {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self {
            addresses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
fn pool_of(addrs: &[[i32; 4]]) -> Pool {
    addrs.iter().copied().map(Address::from).collect()
}

#[cfg(test)]
fn shown<'a>(addrs: impl IntoIterator<Item = &'a Address>) -> Vec<String> {
    addrs.into_iter().map(ToString::to_string).collect()
}

#[test]
fn test_read_lines() {
    let mut pool = Pool::new();
    let count = pool.extend_from_str("test", "1.2.3.4\tX\n5.6.7.8\tY\n");
    assert_eq!(count.unwrap(), 2);
    assert_eq!(shown(&pool), ["1.2.3.4", "5.6.7.8"]);

    pool.extend_from_str("test", "9.9.9.9\r\n").unwrap();
    assert_eq!(pool.len(), 3);
}

#[test]
fn test_read_malformed() {
    let mut pool = Pool::new();
    let err = pool
        .extend_from_str("test", "1.2.3.4\tX\n1.2.three.4\tZ\n5.6.7.8\n")
        .unwrap_err();
    let Error::Malformed { input, line, error } = err else {
        panic!("expected a malformed address");
    };
    assert_eq!(input, "test");
    assert_eq!(line, 2);
    assert!(matches!(error, address::Error::BadOctet { octet: 3, .. }));
    assert_eq!(pool.len(), 0);
}

#[test]
fn test_read_blank_line() {
    let err = Pool::new()
        .extend_from_str("test", "1.2.3.4\n\n5.6.7.8\n")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Malformed {
            line: 2,
            error: address::Error::MissingOctets(1),
            ..
        }
    ));
}

#[test]
fn test_read_missing_file() {
    let err = Pool::new()
        .read_file(Path::new("/nonexistent/ipfilter/input"))
        .unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
}

#[test]
fn test_sort() {
    let mut pool = Pool::new();
    pool.extend_from_str("test", "1.2.3.4\tX\n5.6.7.8\tY\n").unwrap();
    pool.sort_descending();
    assert_eq!(shown(&pool), ["5.6.7.8", "1.2.3.4"]);
}

#[test]
fn test_sort_octet_order() {
    let mut pool = pool_of(&[
        [1, 1, 234, 8],
        [222, 82, 198, 61],
        [1, 70, 44, 170],
        [222, 173, 235, 246],
        [1, 29, 168, 152],
        [222, 130, 177, 64],
        [1, 70, 44, 9],
    ]);
    pool.sort_descending();
    assert_eq!(
        shown(&pool),
        [
            "222.173.235.246",
            "222.130.177.64",
            "222.82.198.61",
            "1.70.44.170",
            "1.70.44.9",
            "1.29.168.152",
            "1.1.234.8",
        ]
    );
}

#[test]
fn test_sort_properties() {
    let mut pool = pool_of(&[
        [10, 0, 0, 1],
        [-5, 300, 0, 0],
        [10, 0, 0, 1],
        [255, 255, 255, 255],
        [0, 0, 0, 0],
        [10, 0, 1, 0],
        [-5, 299, 1000, 7],
    ]);
    pool.sort_descending();
    for (i, a) in pool.iter().enumerate() {
        for b in pool.iter().skip(i + 1) {
            assert!(a.octets() >= b.octets(), "{a} sorted before {b}");
        }
    }

    let once = pool.clone();
    pool.sort_descending();
    assert_eq!(pool, once);
}

#[test]
fn test_filter_first() {
    let pool = pool_of(&[[1, 2, 3, 4], [1, 2, 9, 9], [2, 0, 0, 0]]);
    assert_eq!(shown(pool.filter_prefix(&[1])), ["1.2.3.4", "1.2.9.9"]);
}

#[test]
fn test_filter_pair() {
    let pool = pool_of(&[[1, 2, 3, 4], [1, 9, 3, 4]]);
    assert_eq!(shown(pool.filter_prefix(&[1, 2])), ["1.2.3.4"]);
}

#[test]
fn test_filter_prefix_edges() {
    let pool = pool_of(&[[1, 2, 3, 4], [1, 9, 3, 4]]);
    assert_eq!(pool.filter_prefix(&[]).count(), 0);
    assert_eq!(pool.filter_prefix(&[1, 2, 3, 4, 5]).count(), 0);
    assert_eq!(shown(pool.filter_prefix(&[1, 9, 3, 4])), ["1.9.3.4"]);
}

#[test]
fn test_filter_prefix_narrows() {
    let pool = pool_of(&[
        [46, 70, 225, 39],
        [46, 101, 163, 119],
        [46, 70, 29, 76],
        [185, 46, 86, 22],
        [46, 71, 0, 0],
    ]);
    let wide: Vec<_> = pool.filter_prefix(&[46]).collect();
    let narrow: Vec<_> = pool.filter_prefix(&[46, 70]).collect();
    assert_eq!(narrow.len(), 2);
    assert!(narrow.iter().all(|a| wide.contains(a)));
}

#[test]
fn test_filter_any() {
    let pool = pool_of(&[
        [46, 1, 2, 3],
        [1, 46, 2, 3],
        [1, 2, 46, 3],
        [1, 2, 3, 46],
        [1, 2, 3, 4],
    ]);
    assert_eq!(
        shown(pool.filter_any(46)),
        ["46.1.2.3", "1.46.2.3", "1.2.46.3", "1.2.3.46"]
    );
}

#[test]
fn test_filter_any_partitions() {
    let pool = pool_of(&[
        [46, 46, 0, 0],
        [5, 189, 203, 46],
        [39, 46, 86, 85],
        [1, 87, 203, 225],
        [-46, 460, 4, 6],
    ]);
    let matched: Vec<_> = pool.filter_any(46).collect();
    for a in &pool {
        assert_eq!(matched.contains(&a), a.octets().contains(&46), "{a}");
    }
}

#[test]
fn test_filter_predicate() {
    let mut pool = pool_of(&[[1, 2, 3, 4], [46, 70, 1, 1], [46, 70, 9, 9]]);
    pool.sort_descending();
    let prefix = Predicate::Prefix(vec![46, 70]);
    assert_eq!(shown(pool.filter(&prefix)), ["46.70.9.9", "46.70.1.1"]);
    let any = Predicate::Any(4);
    assert_eq!(shown(pool.filter(&any)), ["1.2.3.4"]);
}
