// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
pub mod response;
pub mod types;

pub use response::ReportBuilder;
pub use types::{AuthorizationRequest, DecisionReport, Verdict};
