// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for the evcal-core pipeline.

mod fail_fast;
mod ordering;
mod output;
mod sections;
