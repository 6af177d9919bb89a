// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod arith;
mod assignments;
mod commands;
mod errors;
mod helpers;
mod params;
mod words;
