// -*- coding: utf-8 -*-
//
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
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

use anyhow as ah;
use qparams::{Params as _, QueryParams};
use qparamscfg::ConfigList;
use std::{fmt::Write as _, writeln as ln};

/// Keys are listed in query order, unless sorting is configured.
pub fn command_list(params: &QueryParams, conf: &ConfigList) -> ah::Result<String> {
    let mut keys: Vec<&str> = params.keys().filter(|k| !conf.is_hidden(k)).collect();
    if conf.sort {
        keys.sort_unstable();
    }

    let mut b = String::new();
    for key in &keys {
        ln!(b, "{key}")?;
        for value in params.get_strings(key, None) {
            ln!(b, "  = {value:?}")?;
        }
    }
    let hidden = params.len() - keys.len();
    if hidden > 0 {
        ln!(b, "{} parameters total, {hidden} hidden", params.len())?;
    } else {
        ln!(b, "{} parameters total", params.len())?;
    }
    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qparamscfg::Config;

    #[test]
    fn sorted() {
        let p = QueryParams::parse("b=2&a=1&b=&c=x+y");
        let conf = ConfigList::default();
        assert_eq!(
            command_list(&p, &conf).unwrap(),
            "a\n  = \"1\"\nb\n  = \"2\"\n  = \"\"\nc\n  = \"x y\"\n3 parameters total\n"
        );
    }

    #[test]
    fn unsorted_keeps_query_order() {
        let conf = Config::parse_str("[list]\nsort = false\n").unwrap();
        let p = QueryParams::parse("z=1&y=2&x=3&w=4&v=5&y=6");
        let out = command_list(&p, &conf.list).unwrap();
        let keys: Vec<_> = out.lines().filter(|l| !l.starts_with(' ')).collect();
        assert_eq!(keys, ["z", "y", "x", "w", "v", "5 parameters total"]);
    }

    #[test]
    fn hidden() {
        let conf = Config::parse_str("[list]\nhide = [ \"^secret\" ]\n").unwrap();
        let p = QueryParams::parse("secret_token=abc&page=1");
        assert_eq!(
            command_list(&p, &conf.list).unwrap(),
            "page\n  = \"1\"\n2 parameters total, 1 hidden\n"
        );
    }

    #[test]
    fn empty() {
        let p = QueryParams::parse("");
        assert_eq!(
            command_list(&p, &ConfigList::default()).unwrap(),
            "0 parameters total\n"
        );
    }
}

// vim: ts=4 sw=4 expandtab
