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

use std::num::{IntErrorKind, ParseIntError};

/// Reason why a parameter value could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    /// The value is the empty string.
    Empty,
    /// The value is not a literal of the target type.
    Invalid,
    /// The value is a well-formed literal that does not fit the target type.
    OutOfRange,
}

impl From<&ParseIntError> for ConversionErrorKind {
    fn from(e: &ParseIntError) -> Self {
        match e.kind() {
            IntErrorKind::Empty => Self::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Self::OutOfRange,
            _ => Self::Invalid,
        }
    }
}

/// A present parameter value could not be converted to the requested type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionError {
    key: String,
    value: String,
    target: &'static str,
    kind: ConversionErrorKind,
}

impl ConversionError {
    pub fn new(key: &str, value: &str, target: &'static str, kind: ConversionErrorKind) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            target,
            kind,
        }
    }

    /// Name of the parameter that failed to convert.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw value that was presented for conversion.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Name of the requested type, e.g. `u32` or `bool`.
    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn kind(&self) -> ConversionErrorKind {
        self.kind
    }
}

impl std::error::Error for ConversionError {}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = &self.key;
        let value = &self.value;
        let target = self.target;
        match self.kind {
            ConversionErrorKind::Empty => {
                write!(f, "Parameter '{key}': empty value is not a valid {target}")
            }
            ConversionErrorKind::Invalid => {
                write!(f, "Parameter '{key}': '{value}' is not a valid {target}")
            }
            ConversionErrorKind::OutOfRange => {
                write!(f, "Parameter '{key}': '{value}' is out of range for {target}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_error_kinds() {
        let e = "".parse::<i8>().unwrap_err();
        assert_eq!(ConversionErrorKind::from(&e), ConversionErrorKind::Empty);
        let e = "12x".parse::<i8>().unwrap_err();
        assert_eq!(ConversionErrorKind::from(&e), ConversionErrorKind::Invalid);
        let e = "128".parse::<i8>().unwrap_err();
        assert_eq!(ConversionErrorKind::from(&e), ConversionErrorKind::OutOfRange);
        let e = "-129".parse::<i8>().unwrap_err();
        assert_eq!(ConversionErrorKind::from(&e), ConversionErrorKind::OutOfRange);
    }

    #[test]
    fn display() {
        let e = ConversionError::new("page", "?", "u32", ConversionErrorKind::Invalid);
        assert_eq!(e.to_string(), "Parameter 'page': '?' is not a valid u32");
        let e = ConversionError::new("page", "", "u32", ConversionErrorKind::Empty);
        assert_eq!(
            e.to_string(),
            "Parameter 'page': empty value is not a valid u32"
        );
        let e = ConversionError::new("n", "300", "u8", ConversionErrorKind::OutOfRange);
        assert_eq!(e.to_string(), "Parameter 'n': '300' is out of range for u8");
        assert_eq!(e.key(), "n");
        assert_eq!(e.value(), "300");
        assert_eq!(e.target(), "u8");
    }
}

// vim: ts=4 sw=4 expandtab
