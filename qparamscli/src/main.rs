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

mod command;
mod source;

use crate::{
    command::{
        exists::command_exists,
        get::{ParamType, command_get},
        list::command_list,
    },
    source::Source,
};
use anyhow::{self as ah, Context as _};
use clap::{Parser, Subcommand};
use qparamscfg::Config;
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser, Debug, Clone)]
struct Opts {
    /// The raw query string to inspect.
    /// If neither --query nor --url is given, QUERY_STRING from the environment is used.
    #[arg(long, conflicts_with = "url")]
    query: Option<String>,

    /// Inspect the query component of this URL.
    #[arg(long)]
    url: Option<String>,

    /// Path to the configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Opts {
    fn source(&self) -> Source {
        if let Some(qs) = &self.query {
            Source::Query(qs.clone())
        } else if let Some(url) = &self.url {
            Source::Url(url.clone())
        } else {
            Source::Env
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Check whether a parameter is present.
    /// Exits with failure if it is not.
    Exists { key: String },

    /// Print the value of a parameter converted to a type.
    Get {
        key: String,

        /// Target type.
        #[arg(long = "type", value_enum, default_value = "string")]
        ty: ParamType,

        /// Value to use if the parameter is not present.
        /// For --type strings this is a comma separated list.
        #[arg(long)]
        default: Option<String>,
    },

    /// List all parameters and their values.
    List,
}

fn main() -> ah::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Opts::parse();

    let conf = match &opts.config {
        Some(path) => Config::parse_file(path),
        None => Config::parse_default_file(),
    }
    .context("Configuration")?;

    let params = opts
        .source()
        .load(conf.query.max_length)
        .context("Load query")?;

    match &opts.command {
        Command::Exists { key } => {
            if command_exists(&params, key) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Get { key, ty, default } => {
            let value = command_get(&params, key, *ty, default.as_deref())?;
            println!("{value}");
            Ok(ExitCode::SUCCESS)
        }
        Command::List => {
            print!("{}", command_list(&params, &conf.list)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_opts() {
        let opts = Opts::try_parse_from([
            "qparamscli",
            "--query",
            "a=1",
            "get",
            "a",
            "--type",
            "uint16",
            "--default",
            "3",
        ])
        .unwrap();
        assert!(matches!(opts.source(), Source::Query(ref q) if q == "a=1"));
        match opts.command {
            Command::Get { key, ty, default } => {
                assert_eq!(key, "a");
                assert_eq!(ty, ParamType::Uint16);
                assert_eq!(default.as_deref(), Some("3"));
            }
            _ => panic!("Wrong command"),
        }

        let opts = Opts::try_parse_from(["qparamscli", "list"]).unwrap();
        assert!(matches!(opts.source(), Source::Env));

        let opts =
            Opts::try_parse_from(["qparamscli", "--url", "http://x/?a", "exists", "a"]).unwrap();
        assert!(matches!(opts.source(), Source::Url(_)));

        assert!(
            Opts::try_parse_from(["qparamscli", "--query", "a", "--url", "http://x/", "list"])
                .is_err()
        );
        assert!(Opts::try_parse_from(["qparamscli", "get", "a", "--type", "int128"]).is_err());
    }
}

// vim: ts=4 sw=4 expandtab
