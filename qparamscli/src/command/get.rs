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

use anyhow::{self as ah, Context as _};
use clap::ValueEnum;
use qparams::{ConversionError, FromParam, Params};
use std::fmt::Display;

/// Target type of the `get` command.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamType {
    String,
    Strings,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Bool,
    Float,
}

/// Convert the textual `--default` to the target type.
fn parse_default<T: FromParam>(key: &str, default: Option<&str>) -> ah::Result<Option<T>> {
    default
        .map(|d| T::from_param(d).map_err(|kind| ConversionError::new(key, d, T::TYPE_NAME, kind)))
        .transpose()
        .context("Invalid --default value")
}

fn show<T: Display>(value: Result<T, ConversionError>) -> ah::Result<String> {
    match value {
        Ok(value) => Ok(value.to_string()),
        Err(e) => {
            log::warn!("Conversion failed: {e}");
            Err(e.into())
        }
    }
}

pub fn command_get(
    params: &impl Params,
    key: &str,
    ty: ParamType,
    default: Option<&str>,
) -> ah::Result<String> {
    let d = default;
    Ok(match ty {
        ParamType::String => params.get_string(key, d).to_string(),
        ParamType::Strings => {
            let d: Option<Vec<String>> = d.map(|d| d.split(',').map(str::to_string).collect());
            params.get_strings(key, d.as_deref()).join("\n")
        }
        ParamType::Int => show(params.get_int(key, parse_default(key, d)?))?,
        ParamType::Int8 => show(params.get_int8(key, parse_default(key, d)?))?,
        ParamType::Int16 => show(params.get_int16(key, parse_default(key, d)?))?,
        ParamType::Int32 => show(params.get_int32(key, parse_default(key, d)?))?,
        ParamType::Int64 => show(params.get_int64(key, parse_default(key, d)?))?,
        ParamType::Uint => show(params.get_uint(key, parse_default(key, d)?))?,
        ParamType::Uint8 => show(params.get_uint8(key, parse_default(key, d)?))?,
        ParamType::Uint16 => show(params.get_uint16(key, parse_default(key, d)?))?,
        ParamType::Uint32 => show(params.get_uint32(key, parse_default(key, d)?))?,
        ParamType::Uint64 => show(params.get_uint64(key, parse_default(key, d)?))?,
        ParamType::Bool => show(params.get_bool(key, parse_default(key, d)?))?,
        ParamType::Float => show(params.get_float(key, parse_default(key, d)?))?,
    })
}


// vim: ts=4 sw=4 expandtab
