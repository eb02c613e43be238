// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod asserts;
mod fixtures;

pub(crate) use asserts::*;
pub(crate) use fixtures::*;
