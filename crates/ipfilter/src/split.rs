// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

/// split `text` on every occurrence of `delim`
///
/// adjacent delimiters are not merged, so there is always exactly one more
/// field than there are delimiters, and an empty input gives one empty field
pub fn split(text: &str, delim: char) -> Vec<&str> {
    text.split(delim).collect()
}

#[test]
fn test_split_table() {
    assert_eq!(split("", '.'), [""]);
    assert_eq!(split("11", '.'), ["11"]);
    assert_eq!(split("..", '.'), ["", "", ""]);
    assert_eq!(split("11.", '.'), ["11", ""]);
    assert_eq!(split(".11", '.'), ["", "11"]);
    assert_eq!(split("11.22", '.'), ["11", "22"]);
}

#[test]
fn test_split_without_delim() {
    for s in ["", "meow", "1.2.3.4", "a\tb c"] {
        assert_eq!(split(s, '|'), [s]);
    }
}

#[test]
fn test_split_rejoin() {
    for s in ["1.2.3.4", "..", ".a..b.", "x", "1.2.3.4.5.6"] {
        let fields = split(s, '.');
        assert_eq!(fields.len(), s.matches('.').count() + 1);
        assert_eq!(fields.join("."), s);
    }
}

#[test]
fn test_split_tab() {
    assert_eq!(
        split("113.162.145.156\t111\t0", '\t'),
        ["113.162.145.156", "111", "0"]
    );
}
