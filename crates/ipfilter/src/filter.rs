// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::address::Address;
use std::fmt;

/// which addresses a filter lets through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// the leading octets equal these values, in order
    Prefix(Vec<i32>),
    /// some octet equals this value
    Any(i32),
}

impl Predicate {
    pub fn matches(&self, addr: &Address) -> bool {
        match self {
            Self::Prefix(values) => prefix_matches(addr.octets(), values),
            Self::Any(value) => any_matches(addr.octets(), *value),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(values) => {
                f.write_str("prefix")?;
                for v in values {
                    write!(f, " {v}")?;
                }
                Ok(())
            }
            Self::Any(value) => write!(f, "any {value}"),
        }
    }
}

/// check that `octets` starts with `values`
///
/// an empty `values` matches nothing, and asking for more values than
/// there are octets never matches
pub fn prefix_matches(octets: &[i32], values: &[i32]) -> bool {
    !values.is_empty()
        && octets.len() >= values.len()
        && octets.iter().zip(values).all(|(o, v)| o == v)
}

pub fn any_matches(octets: &[i32], value: i32) -> bool {
    octets.contains(&value)
}

#[test]
fn test_prefix() {
    assert!(prefix_matches(&[1, 2, 3, 4], &[1]));
    assert!(prefix_matches(&[1, 2, 3, 4], &[1, 2]));
    assert!(prefix_matches(&[1, 2, 3, 4], &[1, 2, 3, 4]));
    assert!(!prefix_matches(&[1, 2, 3, 4], &[2]));
    assert!(!prefix_matches(&[1, 9, 3, 4], &[1, 2]));
}

#[test]
fn test_prefix_edges() {
    assert!(!prefix_matches(&[1, 2, 3, 4], &[]));
    assert!(!prefix_matches(&[], &[]));
    assert!(!prefix_matches(&[1, 2, 3, 4], &[1, 2, 3, 4, 5]));
    assert!(!prefix_matches(&[], &[1]));
}

#[test]
fn test_any() {
    assert!(any_matches(&[46, 1, 2, 3], 46));
    assert!(any_matches(&[1, 2, 3, 46], 46));
    assert!(!any_matches(&[1, 2, 3, 4], 46));
    assert!(!any_matches(&[], 46));
}

#[test]
fn test_predicate() {
    let addr = Address::from([46, 70, 225, 39]);
    assert!(Predicate::Prefix(vec![46, 70]).matches(&addr));
    assert!(!Predicate::Prefix(vec![70]).matches(&addr));
    assert!(Predicate::Any(39).matches(&addr));
    assert!(!Predicate::Any(1).matches(&addr));

    assert_eq!(Predicate::Prefix(vec![46, 70]).to_string(), "prefix 46 70");
    assert_eq!(Predicate::Any(46).to_string(), "any 46");
}
