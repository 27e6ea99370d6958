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

use qparams::Params;

pub fn command_exists(params: &impl Params, key: &str) -> bool {
    let exists = params.exists(key);
    println!("{exists}");
    exists
}

#[cfg(test)]
mod tests {
    use super::*;
    use qparams::QueryParams;

    #[test]
    fn test_exists() {
        let params = QueryParams::parse("a=1&b=");
        assert!(command_exists(&params, "a"));
        assert!(command_exists(&params, "b"));
        assert!(!command_exists(&params, "c"));
    }
}

// vim: ts=4 sw=4 expandtab
