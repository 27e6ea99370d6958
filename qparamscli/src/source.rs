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

use anyhow::{self as ah, Context as _, format_err as err};
use qparams::QueryParams;
use std::{env, num::NonZeroUsize};
use url::Url;

const QUERY_STRING: &str = "QUERY_STRING";

/// Where the raw query string comes from.
#[derive(Debug, Clone)]
pub enum Source {
    Query(String),
    Url(String),
    /// The CGI `QUERY_STRING` environment variable.
    Env,
}

fn check_len(what: &str, s: &str, max_len: NonZeroUsize) -> ah::Result<()> {
    if s.len() <= max_len.get() {
        Ok(())
    } else {
        Err(err!("{what} is too long."))
    }
}

fn get_env_query(max_len: NonZeroUsize) -> ah::Result<String> {
    let value = env::var_os(QUERY_STRING).unwrap_or_default();
    if value.len() > max_len.get() {
        return Err(err!("Environment variable '{QUERY_STRING}' is too long."));
    }
    value
        .into_string()
        .map_err(|_| err!("Environment variable '{QUERY_STRING}' is not valid UTF-8."))
}

impl Source {
    pub fn load(&self, max_len: NonZeroUsize) -> ah::Result<QueryParams> {
        match self {
            Self::Query(qs) => {
                check_len("Query string", qs, max_len)?;
                log::debug!("Query from command line: '{qs}'");
                Ok(QueryParams::parse(qs))
            }
            Self::Url(url) => {
                let url = Url::parse(url).context("Parse URL")?;
                let qs = url.query().unwrap_or_default();
                check_len("URL query", qs, max_len)?;
                log::debug!("Query from URL: '{qs}'");
                Ok(QueryParams::from_url(&url))
            }
            Self::Env => {
                let qs = get_env_query(max_len)?;
                log::debug!("Query from {QUERY_STRING}: '{qs}'");
                Ok(QueryParams::parse(&qs))
            }
        }
    }
}


// vim: ts=4 sw=4 expandtab
