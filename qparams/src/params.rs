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

use crate::{convert::FromParam, error::ConversionError};
use std::collections::HashMap;

/// Typed read access to decoded, possibly multi-valued parameters.
///
/// Every typed getter takes an optional default. The default is returned
/// as-is, without any conversion, if the key does not exist.
/// If the key exists, its first value is converted and a conversion
/// failure is always returned as error, regardless of the default.
/// If neither the key nor a default is present, the empty string is
/// converted, which fails for all numeric and boolean types.
pub trait Params {
    /// All values of `key` in query order.
    /// Empty, if the key is not present.
    fn values(&self, key: &str) -> &[String];

    /// Check whether `key` is present with at least one value.
    fn exists(&self, key: &str) -> bool {
        !self.values(key).is_empty()
    }

    /// First value of `key`, or the default, or `""`.
    fn get_string<'a>(&'a self, key: &str, default: Option<&'a str>) -> &'a str {
        match self.values(key).first() {
            Some(value) => value.as_str(),
            None => default.unwrap_or_default(),
        }
    }

    /// All values of `key`, or the default, or an empty slice.
    fn get_strings<'a>(&'a self, key: &str, default: Option<&'a [String]>) -> &'a [String] {
        let values = self.values(key);
        match default {
            Some(default) if values.is_empty() => default,
            _ => values,
        }
    }

    /// Get the first value of `key` converted to `T`.
    fn get_as<T: FromParam>(&self, key: &str, default: Option<T>) -> Result<T, ConversionError> {
        let value = match (self.values(key).first(), default) {
            (Some(value), _) => value.as_str(),
            (None, Some(default)) => return Ok(default),
            (None, None) => "",
        };
        T::from_param(value).map_err(|kind| ConversionError::new(key, value, T::TYPE_NAME, kind))
    }

    fn get_int(&self, key: &str, default: Option<isize>) -> Result<isize, ConversionError> {
        self.get_as(key, default)
    }

    fn get_int8(&self, key: &str, default: Option<i8>) -> Result<i8, ConversionError> {
        self.get_as(key, default)
    }

    fn get_int16(&self, key: &str, default: Option<i16>) -> Result<i16, ConversionError> {
        self.get_as(key, default)
    }

    fn get_int32(&self, key: &str, default: Option<i32>) -> Result<i32, ConversionError> {
        self.get_as(key, default)
    }

    fn get_int64(&self, key: &str, default: Option<i64>) -> Result<i64, ConversionError> {
        self.get_as(key, default)
    }

    fn get_uint(&self, key: &str, default: Option<usize>) -> Result<usize, ConversionError> {
        self.get_as(key, default)
    }

    fn get_uint8(&self, key: &str, default: Option<u8>) -> Result<u8, ConversionError> {
        self.get_as(key, default)
    }

    fn get_uint16(&self, key: &str, default: Option<u16>) -> Result<u16, ConversionError> {
        self.get_as(key, default)
    }

    fn get_uint32(&self, key: &str, default: Option<u32>) -> Result<u32, ConversionError> {
        self.get_as(key, default)
    }

    fn get_uint64(&self, key: &str, default: Option<u64>) -> Result<u64, ConversionError> {
        self.get_as(key, default)
    }

    /// See [`FromParam`] for `bool` for the accepted spellings.
    fn get_bool(&self, key: &str, default: Option<bool>) -> Result<bool, ConversionError> {
        self.get_as(key, default)
    }

    fn get_float(&self, key: &str, default: Option<f64>) -> Result<f64, ConversionError> {
        self.get_as(key, default)
    }
}

impl Params for HashMap<String, Vec<String>> {
    fn values(&self, key: &str) -> &[String] {
        HashMap::get(self, key).map(|l| &**l).unwrap_or_default()
    }
}


// vim: ts=4 sw=4 expandtab
