//! Calculation result models for the payroll deduction engine.
//!
//! This module contains the [`PayrollOutcome`] returned by the orchestrator and
//! the audit trace recording how each statutory rule was applied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayrollRecord, UpsertStatus};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The law or circular the rule implements (e.g., "RA 10963").
    pub legal_basis: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The result of calculating and storing payroll for one employee and period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollOutcome {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Whether the record was created or replaced.
    pub status: UpsertStatus,
    /// The stored record.
    pub record: PayrollRecord,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
