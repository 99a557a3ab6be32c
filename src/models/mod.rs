// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: annotations and the session that holds them.

pub mod annotation;
pub mod session;
