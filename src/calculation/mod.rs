//! Calculation logic for the bonus engine.
//!
//! This module contains the monthly bonus pool calculation and the steps it
//! is built from: gross pool, damages deduction, net pool split, tenure
//! shares, performance scores, mileage reimbursement and perfect-week hours,
//! together with output rounding and the perfect-week evaluation used to
//! produce perfect-week records.

mod bonus_pool;
mod damages;
mod mileage;
mod perfect_week;
mod performance;
mod pool;
mod roster;
mod rounding;
mod tenure;

pub use bonus_pool::{
    BonusInput, WARNING_NET_POOL_CLAMPED, WARNING_UNDISTRIBUTED_PERFORMANCE_POOL,
    WARNING_UNDISTRIBUTED_TENURE_POOL, WARNING_UNMATCHED_RECORDS, calculate_monthly_bonus,
};
pub use damages::{DamagesDeductionResult, calculate_damages_deduction};
pub use mileage::{MileageReimbursementResult, calculate_mileage_reimbursement};
pub use perfect_week::{
    BONUS_HOURS_PER_PERFECT_WEEK, PERFECT_WEEK_HOURLY_VALUE, PerfectWeekCheck,
    PerfectWeekHoursResult, check_perfect_week, count_perfect_week_hours,
};
pub use performance::{PerformanceScoresResult, calculate_performance_scores};
pub use pool::{GrossPoolResult, PoolSplitResult, calculate_gross_pool, pro_rata, split_net_pool};
pub use roster::{ActiveRoster, Tally, TallyValue};
pub use rounding::{MONEY_DECIMAL_PLACES, round_money};
pub use tenure::{TenureSharesResult, calculate_tenure_shares, completed_months};
