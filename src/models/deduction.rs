//! Contribution and deduction breakdown models.
//!
//! A [`DeductionBreakdown`] is the full result of running the four statutory
//! calculators against one salary basis. Its totals are derived on
//! construction and cannot be set independently.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::zero_money;

/// The employee and employer shares of a single statutory contribution.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Contribution;
/// use rust_decimal::Decimal;
///
/// let zero = Contribution::zero();
/// assert_eq!(zero.employee, Decimal::ZERO);
/// assert_eq!(zero.employer.to_string(), "0.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// The share withheld from the employee's salary.
    pub employee: Decimal,
    /// The share borne by the employer.
    pub employer: Decimal,
}

impl Contribution {
    /// Creates a contribution from its two shares.
    pub fn new(employee: Decimal, employer: Decimal) -> Self {
        Self { employee, employer }
    }

    /// A contribution of `0.00` on both sides.
    pub fn zero() -> Self {
        Self::new(zero_money(), zero_money())
    }
}

/// The statutory deductions computed for one salary basis.
///
/// Employer shares are informational: only the employee shares and the
/// withholding tax make up `total_deductions`, and
/// `net_pay + total_deductions` always equals the salary basis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeductionBreakdown {
    sss_employee: Decimal,
    sss_employer: Decimal,
    philhealth_employee: Decimal,
    philhealth_employer: Decimal,
    pagibig_employee: Decimal,
    pagibig_employer: Decimal,
    income_tax: Decimal,
    total_deductions: Decimal,
    net_pay: Decimal,
}

impl DeductionBreakdown {
    /// Assembles a breakdown and derives its totals.
    pub fn new(
        salary_basis: Decimal,
        sss: Contribution,
        philhealth: Contribution,
        pagibig: Contribution,
        income_tax: Decimal,
    ) -> Self {
        let total_deductions = sss.employee + philhealth.employee + pagibig.employee + income_tax;
        let net_pay = salary_basis - total_deductions;

        Self {
            sss_employee: sss.employee,
            sss_employer: sss.employer,
            philhealth_employee: philhealth.employee,
            philhealth_employer: philhealth.employer,
            pagibig_employee: pagibig.employee,
            pagibig_employer: pagibig.employer,
            income_tax,
            total_deductions,
            net_pay,
        }
    }

    /// The SSS contribution.
    pub fn sss(&self) -> Contribution {
        Contribution::new(self.sss_employee, self.sss_employer)
    }

    /// The PhilHealth contribution.
    pub fn philhealth(&self) -> Contribution {
        Contribution::new(self.philhealth_employee, self.philhealth_employer)
    }

    /// The Pag-IBIG contribution.
    pub fn pagibig(&self) -> Contribution {
        Contribution::new(self.pagibig_employee, self.pagibig_employer)
    }

    /// The monthly withholding tax.
    pub fn income_tax(&self) -> Decimal {
        self.income_tax
    }

    /// Sum of every amount withheld from the employee.
    pub fn total_deductions(&self) -> Decimal {
        self.total_deductions
    }

    /// Salary basis less total deductions.
    pub fn net_pay(&self) -> Decimal {
        self.net_pay
    }

    /// Sum of the employer-borne contributions.
    pub fn employer_contributions(&self) -> Decimal {
        self.sss_employer + self.philhealth_employer + self.pagibig_employer
    }
}
