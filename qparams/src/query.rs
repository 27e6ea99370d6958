// -*- coding: utf-8 -*-
//
// Copyright (C) 2024-2025 Michael Büsch <m@bues.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::params::Params;
use std::collections::HashMap;
use url::{Url, form_urlencoded};

/// Decode a raw `application/x-www-form-urlencoded` query string.
///
/// `+` is decoded to a space and percent-escapes are resolved.
/// Values of repeated keys are kept in query order.
/// A leading `?` is ignored.
pub fn decode(qs: &str) -> HashMap<String, Vec<String>> {
    decode_ordered(qs).0
}

fn decode_ordered(qs: &str) -> (HashMap<String, Vec<String>>, Vec<String>) {
    let qs = qs.strip_prefix('?').unwrap_or(qs);
    collect_pairs(form_urlencoded::parse(qs.as_bytes()))
}

/// Collect the pairs and the keys in order of their first occurrence.
fn collect_pairs(pairs: form_urlencoded::Parse<'_>) -> (HashMap<String, Vec<String>>, Vec<String>) {
    let mut items: HashMap<String, Vec<String>> = HashMap::with_capacity(8);
    let mut order = Vec::with_capacity(8);
    for (key, value) in pairs.into_owned() {
        items
            .entry(key)
            .or_insert_with_key(|key| {
                order.push(key.clone());
                vec![]
            })
            .push(value);
    }
    (items, order)
}

/// Immutable, typed view of the parameters of one query string.
///
/// The getters are provided by the [`Params`] trait.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, Vec<String>>,
    order: Vec<String>,
}

impl QueryParams {
    /// Wrap an already decoded parameter mapping.
    /// The keys are ordered by name.
    pub fn new(values: HashMap<String, Vec<String>>) -> Self {
        let mut order: Vec<String> = values.keys().cloned().collect();
        order.sort_unstable();
        Self { values, order }
    }

    /// Decode a raw query string. See [`decode`].
    pub fn parse(qs: &str) -> Self {
        let (values, order) = decode_ordered(qs);
        Self { values, order }
    }

    /// Decode the query component of `url`.
    pub fn from_url(url: &Url) -> Self {
        let (values, order) = collect_pairs(url.query_pairs());
        Self { values, order }
    }

    /// Names of all stored parameters.
    ///
    /// For a decoded query this is the order of first occurrence in the query.
    /// For a mapping passed to [`QueryParams::new`] the keys are sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_inner(self) -> HashMap<String, Vec<String>> {
        self.values
    }
}

impl From<HashMap<String, Vec<String>>> for QueryParams {
    fn from(values: HashMap<String, Vec<String>>) -> Self {
        Self::new(values)
    }
}

impl Params for QueryParams {
    fn values(&self, key: &str) -> &[String] {
        self.values.get(key).map(|l| &**l).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn decode_multi_values() {
        let m = decode("foo=bar1&x=1&foo=bar2");
        assert_eq!(m.len(), 2);
        assert_eq!(m.get("foo"), Some(&strings(&["bar1", "bar2"])));
        assert_eq!(m.get("x"), Some(&strings(&["1"])));
    }

    #[test]
    fn decode_escapes() {
        let m = decode("?name=a+b%20c&k%2By=%3F");
        assert_eq!(m.get("name"), Some(&strings(&["a b c"])));
        assert_eq!(m.get("k+y"), Some(&strings(&["?"])));
    }

    #[test]
    fn decode_bare_and_empty() {
        assert!(decode("").is_empty());
        assert!(decode("?").is_empty());
        let m = decode("flag&a=&&b=2");
        assert_eq!(m.get("flag"), Some(&strings(&[""])));
        assert_eq!(m.get("a"), Some(&strings(&[""])));
        assert_eq!(m.get("b"), Some(&strings(&["2"])));
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn from_url() {
        let url = Url::parse("https://example.com/path?page=2&tag=a&tag=b#frag").unwrap();
        let p = QueryParams::from_url(&url);
        assert_eq!(p.get_uint32("page", None), Ok(2));
        assert_eq!(p.get_strings("tag", None), strings(&["a", "b"]));
        assert_eq!(p.len(), 2);

        let url = Url::parse("https://example.com/").unwrap();
        let p = QueryParams::from_url(&url);
        assert!(p.is_empty());
    }

    #[test]
    fn keys_in_query_order() {
        let p = QueryParams::parse("z=1&y=2&z=3&x=4&w=5&v=6");
        assert_eq!(p.keys().collect::<Vec<_>>(), ["z", "y", "x", "w", "v"]);

        let url = Url::parse("http://localhost/?b=1&a=2&b=3").unwrap();
        let p = QueryParams::from_url(&url);
        assert_eq!(p.keys().collect::<Vec<_>>(), ["b", "a"]);
    }

    #[test]
    fn keys_and_inner() {
        let p = QueryParams::parse("b=1&a=2&b=3");
        assert_eq!(p.keys().collect::<Vec<_>>(), ["b", "a"]);
        let inner = p.clone().into_inner();
        assert_eq!(inner, decode("b=1&a=2&b=3"));

        // Without query order the keys are sorted.
        let p = QueryParams::from(inner);
        assert_eq!(p.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(p.get_strings("b", None), ["1", "3"]);
    }
}

// vim: ts=4 sw=4 expandtab
