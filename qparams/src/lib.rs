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

//! Typed access to URL query-string parameters.
//!
//! ```
//! use qparams::{Params as _, QueryParams};
//!
//! let params = QueryParams::parse("page=2&tag=a&tag=b&debug=t");
//! assert_eq!(params.get_uint32("page", None), Ok(2));
//! assert_eq!(params.get_uint32("limit", Some(50)), Ok(50));
//! assert_eq!(params.get_strings("tag", None), ["a", "b"]);
//! assert_eq!(params.get_bool("debug", Some(false)), Ok(true));
//! assert!(params.get_int8("tag", None).is_err());
//! ```

#![forbid(unsafe_code)]

mod convert;
mod error;
mod params;
mod query;

pub use crate::{
    convert::FromParam,
    error::{ConversionError, ConversionErrorKind},
    params::Params,
    query::{QueryParams, decode},
};

// vim: ts=4 sw=4 expandtab
