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

#![forbid(unsafe_code)]

use anyhow::{self as ah, Context as _, format_err as err};
use regex::Regex;
use std::{num::NonZeroUsize, path::Path};
use toml::{Table, Value};

const DEFAULT_MAX_LENGTH: NonZeroUsize = NonZeroUsize::new(1024 * 4).unwrap();

fn parse_bool(name: &str, value: &Value) -> ah::Result<bool> {
    match value {
        Value::Boolean(b) => Ok(*b),
        _ => Err(err!("Configuration entry '{name}' invalid boolean.")),
    }
}

fn parse_regex(name: &str, value: &Value) -> ah::Result<Regex> {
    if let Value::String(s) = value {
        match Regex::new(s) {
            Ok(re) => Ok(re),
            Err(e) => Err(err!("Configuration entry '{name}' invalid regex: {e}")),
        }
    } else {
        Err(err!(
            "Configuration entry '{name}' array element is not a string."
        ))
    }
}

fn parse_regex_array(name: &str, value: &Value) -> ah::Result<Vec<Regex>> {
    let mut ret = vec![];
    if let Value::Array(array) = value {
        for value in array {
            ret.push(parse_regex(name, value)?);
        }
    } else {
        return Err(err!("Configuration entry '{name}' is not an array."));
    }
    Ok(ret)
}

fn parse_usize(name: &str, value: &Value) -> ah::Result<usize> {
    match value {
        Value::Integer(val) => {
            usize::try_from(*val).map_err(|_| err!("Configuration entry '{name}' invalid integer."))
        }
        _ => Err(err!("Configuration entry '{name}' invalid integer.")),
    }
}

fn parse_nonzerousize(name: &str, value: &Value) -> ah::Result<NonZeroUsize> {
    parse_usize(name, value).and_then(|v| match v.try_into() {
        Ok(v) => Ok(v),
        Err(_) => Err(err!("Configuration entry '{name}' invalid integer.")),
    })
}

#[derive(Debug, Clone)]
pub struct ConfigQuery {
    /// Maximum accepted length of a raw query string, in bytes.
    pub max_length: NonZeroUsize,
}

impl Default for ConfigQuery {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigList {
    /// Parameter names matching any of these are not listed.
    pub hide: Vec<Regex>,
    /// Sort by name. Otherwise the keys are listed in query order.
    pub sort: bool,
}

impl Default for ConfigList {
    fn default() -> Self {
        Self {
            hide: vec![],
            sort: true,
        }
    }
}

impl ConfigList {
    pub fn is_hidden(&self, key: &str) -> bool {
        self.hide.iter().any(|re| re.is_match(key))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub query: ConfigQuery,
    pub list: ConfigList,
}

impl Config {
    fn new() -> Self {
        Default::default()
    }

    pub fn parse_default_file() -> ah::Result<Self> {
        Self::parse_file(Path::new("/opt/qparams/etc/qparams/qparams.conf"))
    }

    pub fn parse_file(path: &Path) -> ah::Result<Self> {
        let s = if path.exists() {
            std::fs::read_to_string(path).context("Read configuration file")?
        } else {
            "".to_string()
        };
        Self::parse_str(&s)
    }

    pub fn parse_str(s: &str) -> ah::Result<Self> {
        let table: Table = toml::from_str(s).context("Parse configuration file")?;
        let mut config = Config::new();

        for (name, value) in &table {
            if name == "query"
                && let Value::Table(t) = value
            {
                for (name, value) in t {
                    if name == "max-length" {
                        config.query.max_length = parse_nonzerousize(name, value)?;
                        continue;
                    }
                    log::warn!("Ignoring configuration entry: {name} = {value:?}");
                }
                continue;
            }

            if name == "list"
                && let Value::Table(t) = value
            {
                for (name, value) in t {
                    if name == "hide" {
                        config.list.hide = parse_regex_array(name, value)?;
                        continue;
                    }
                    if name == "sort" {
                        config.list.sort = parse_bool(name, value)?;
                        continue;
                    }
                    log::warn!("Ignoring configuration entry: {name} = {value:?}");
                }
                continue;
            }

            log::warn!("Ignoring configuration entry: {name} = {value:?}");
        }
        Ok(config)
    }
}


// vim: ts=4 sw=4 expandtab
