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

use crate::error::ConversionErrorKind;

/// Conversion of a single decoded parameter value into a typed value.
pub trait FromParam: Sized {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    fn from_param(value: &str) -> Result<Self, ConversionErrorKind>;
}

impl FromParam for String {
    const TYPE_NAME: &'static str = "string";

    fn from_param(value: &str) -> Result<Self, ConversionErrorKind> {
        Ok(value.to_string())
    }
}

macro_rules! impl_from_param_signed {
    ($($ty:ty),*) => {
        $(
            impl FromParam for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn from_param(value: &str) -> Result<Self, ConversionErrorKind> {
                    value.parse().map_err(|e| ConversionErrorKind::from(&e))
                }
            }
        )*
    };
}

macro_rules! impl_from_param_unsigned {
    ($($ty:ty),*) => {
        $(
            impl FromParam for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn from_param(value: &str) -> Result<Self, ConversionErrorKind> {
                    // No sign prefix for unsigned values.
                    if value.starts_with('+') {
                        return Err(ConversionErrorKind::Invalid);
                    }
                    value.parse().map_err(|e| ConversionErrorKind::from(&e))
                }
            }
        )*
    };
}

macro_rules! impl_from_param_float {
    ($($ty:ty),*) => {
        $(
            impl FromParam for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn from_param(value: &str) -> Result<Self, ConversionErrorKind> {
                    if value.is_empty() {
                        return Err(ConversionErrorKind::Empty);
                    }
                    let v: $ty = value.parse().map_err(|_| ConversionErrorKind::Invalid)?;
                    if v.is_infinite() && !value.to_ascii_lowercase().contains("inf") {
                        // A finite literal that overflowed.
                        Err(ConversionErrorKind::OutOfRange)
                    } else {
                        Ok(v)
                    }
                }
            }
        )*
    };
}

impl_from_param_signed!(i8, i16, i32, i64, isize);
impl_from_param_unsigned!(u8, u16, u32, u64, usize);
impl_from_param_float!(f32, f64);

/// Accepted spellings:
/// `1`, `t`, `T`, `TRUE`, `true`, `True` and
/// `0`, `f`, `F`, `FALSE`, `false`, `False`.
impl FromParam for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_param(value: &str) -> Result<Self, ConversionErrorKind> {
        match value {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            "" => Err(ConversionErrorKind::Empty),
            _ => Err(ConversionErrorKind::Invalid),
        }
    }
}


// vim: ts=4 sw=4 expandtab
