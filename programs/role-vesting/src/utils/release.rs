//! Pure unlock-curve and equal-share math.
//! - nothing unlocks before start + cliff (no partial unlock during the cliff)
//! - linear interpolation over the post-cliff window, truncating toward zero
//! - equal division truncates; the remainder stays undistributed and becomes
//!   deliverable again in a later round

use crate::error::VestingError;

/// Amount of `bucket_total` unlocked at `now` under the single schedule.
/// Truncating division; monotonically non-decreasing in `now` and never
/// greater than `bucket_total`. Callers guarantee `duration_seconds > 0`
/// (enforced at schedule creation).
pub fn unlocked_amount(
    bucket_total: u64,
    start_ts: i64,
    cliff_seconds: i64,
    duration_seconds: i64,
    now: i64,
) -> Result<u64, VestingError> {
    let cliff_end = start_ts
        .checked_add(cliff_seconds)
        .ok_or(VestingError::MathOverflow)?;
    if now < cliff_end {
        return Ok(0);
    }
    let vest_end = cliff_end
        .checked_add(duration_seconds)
        .ok_or(VestingError::MathOverflow)?;
    if now >= vest_end {
        return Ok(bucket_total);
    }
    // cliff_end <= now < vest_end, so 0 <= elapsed < duration.
    let elapsed = (now - cliff_end) as u128;
    let v = (bucket_total as u128)
        .checked_mul(elapsed)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration_seconds as u128)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

/// Split `deliverable` evenly across `member_count` members. Returns the
/// per-member share and the total actually paid (`share * member_count`);
/// the difference stays in the bucket for future rounds.
pub fn equal_share(deliverable: u64, member_count: u64) -> Result<(u64, u64), VestingError> {
    if member_count == 0 {
        return Err(VestingError::EmptyBucket);
    }
    let share = deliverable / member_count;
    let paid = share
        .checked_mul(member_count)
        .ok_or(VestingError::MathOverflow)?;
    Ok((share, paid))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;
    const START: i64 = 1_700_000_000;
    const CLIFF: i64 = 2 * DAY;
    const DURATION: i64 = 10 * DAY;

    fn unlocked(total: u64, now: i64) -> u64 {
        unlocked_amount(total, START, CLIFF, DURATION, now).unwrap()
    }

    #[test]
    fn zero_before_cliff_end() {
        assert_eq!(unlocked(5_000_000, START - 1), 0);
        assert_eq!(unlocked(5_000_000, START), 0);
        assert_eq!(unlocked(5_000_000, START + CLIFF - 1), 0);
    }

    #[test]
    fn cliff_end_is_inclusive_start_of_curve() {
        // Exactly at cliff end: elapsed is 0, unlock is 0 but no longer an
        // error path for withdraw once a second passes.
        assert_eq!(unlocked(5_000_000, START + CLIFF), 0);
        assert!(unlocked(5_000_000, START + CLIFF + 1) > 0);
    }

    #[test]
    fn fully_unlocked_at_and_after_end() {
        let end = START + CLIFF + DURATION;
        assert_eq!(unlocked(5_000_000, end), 5_000_000);
        assert_eq!(unlocked(5_000_000, end + 365 * DAY), 5_000_000);
        // One second short of the end still truncates below the total.
        assert!(unlocked(5_000_000, end - 1) < 5_000_000);
    }

    #[test]
    fn linear_one_day_past_cliff() {
        // 5% of a 100M supply, one of ten days elapsed.
        let advisor_total = 5_000_000;
        assert_eq!(unlocked(advisor_total, START + CLIFF + DAY), advisor_total / 10);
    }

    #[test]
    fn monotonic_non_decreasing() {
        let mut prev = 0;
        for t in (START..START + CLIFF + DURATION + DAY).step_by(7_919) {
            let v = unlocked(123_456_789, t);
            assert!(v >= prev, "unlock curve decreased at t={t}");
            prev = v;
        }
    }

    #[test]
    fn truncates_toward_zero() {
        // total 10, 1 second of a 3-second window: floor(10/3) = 3.
        assert_eq!(unlocked_amount(10, 0, 0, 3, 1).unwrap(), 3);
        assert_eq!(unlocked_amount(10, 0, 0, 3, 2).unwrap(), 6);
        assert_eq!(unlocked_amount(10, 0, 0, 3, 3).unwrap(), 10);
    }

    #[test]
    fn large_totals_use_wide_intermediate() {
        let v = unlocked_amount(u64::MAX, 0, 0, DURATION, DAY).unwrap();
        assert_eq!(v, (u64::MAX as u128 * DAY as u128 / DURATION as u128) as u64);
    }

    #[test]
    fn equal_share_truncates_and_reports_paid() {
        let (share, paid) = equal_share(500_000, 5).unwrap();
        assert_eq!(share, 100_000);
        assert_eq!(paid, 500_000);

        let (share, paid) = equal_share(7, 3).unwrap();
        assert_eq!(share, 2);
        assert_eq!(paid, 6); // remainder 1 left for a later round
    }

    #[test]
    fn equal_share_rejects_empty_bucket() {
        assert!(matches!(equal_share(1, 0), Err(VestingError::EmptyBucket)));
    }

    #[test]
    fn consecutive_rounds_never_double_pay() {
        // Two withdrawals with no membership change: the second pays exactly
        // the newly accrued deliverable, remainder carried forward.
        let total = 5_000_000;
        let members = 3;

        let t1 = START + CLIFF + DAY;
        let unlocked_1 = unlocked(total, t1);
        let (share_1, paid_1) = equal_share(unlocked_1, members).unwrap();
        let mut total_paid = paid_1;
        assert!(total_paid <= unlocked_1);

        let t2 = START + CLIFF + 4 * DAY;
        let unlocked_2 = unlocked(total, t2);
        let deliverable_2 = unlocked_2 - total_paid;
        // Remainder from round one is deliverable again.
        assert_eq!(deliverable_2, (unlocked_2 - unlocked_1) + (unlocked_1 - paid_1));
        let (_share_2, paid_2) = equal_share(deliverable_2, members).unwrap();
        total_paid += paid_2;

        assert_eq!(total_paid, paid_1 + paid_2);
        assert!(share_1 > 0 && total_paid <= unlocked_2);
        assert!(unlocked_2 - total_paid < members); // only division dust remains
    }
}
