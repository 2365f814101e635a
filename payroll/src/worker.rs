/*
 * Payroll bookkeeping behind the report sample: one record per worker,
 * one per-day ledger per record. Records only exist fully settled; the
 * constructor either computes the total or says why it cannot, so a
 * half-initialized record never reaches the report.
 */
use core::{error::Error, fmt::Display};

/// Days covered by one ledger.
pub const PERIOD_DAYS: usize = 10;

/// A worker's pay record for one period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Worker {
    pub id: u16,
    pub days_worked: u32,
    pub daily_salary: u32,
    pub total_paid: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayError {
    /* days x salary does not fit the pay field */
    Overflow,
    /* more worked days than the pay period holds */
    TooManyDays,
}

impl Display for PayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Overflow => write!(f, "pay total overflows"),
            Self::TooManyDays => write!(f, "more days than the pay period holds"),
        }
    }
}

impl Error for PayError {}

/// Attendance band used by the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayGrade {
    Idle,
    PartTime,
    FullTime,
}

impl Display for PayGrade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::PartTime => write!(f, "part-time"),
            Self::FullTime => write!(f, "full-time"),
        }
    }
}

impl Worker {
    /// Build a settled record. The total is computed here, checked, so
    /// a worker with a missing or wrapped total cannot exist.
    pub fn settled(id: u16, days_worked: u32, daily_salary: u32) -> Result<Self, PayError> {
        if days_worked as usize > PERIOD_DAYS {
            return Err(PayError::TooManyDays);
        }
        let total_paid = days_worked
            .checked_mul(daily_salary)
            .ok_or(PayError::Overflow)?;

        Ok(Worker {
            id,
            days_worked,
            daily_salary,
            total_paid,
        })
    }

    pub fn grade(&self) -> PayGrade {
        match self.days_worked {
            0 => PayGrade::Idle,
            1..=4 => PayGrade::PartTime,
            _ => PayGrade::FullTime,
        }
    }

    /// Spread the pay over the worked days of the ledger; the rest of
    /// the period is zeroed. `settled` bounds `days_worked`, so the
    /// fill can never run past the slice.
    pub fn fill_ledger(&self, ledger: &mut [u32; PERIOD_DAYS]) {
        ledger.fill(0);
        for slot in ledger.iter_mut().take(self.days_worked as usize) {
            *slot = self.daily_salary;
        }
    }
}

/// Sum of a ledger, widened so a full period cannot wrap.
pub fn ledger_total(ledger: &[u32]) -> u64 {
    ledger.iter().map(|&day| u64::from(day)).sum()
}
