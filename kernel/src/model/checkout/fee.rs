use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

// 1 日あたりの延滞料 (0.50)
pub const LATE_FEE_PER_DAY: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

pub fn due_date(checked_out_on: NaiveDate, checkout_days: i32) -> Option<NaiveDate> {
    let days = u64::try_from(checkout_days).ok()?;
    checked_out_on.checked_add_days(Days::new(days))
}

// 返却期限から何日過ぎているか。期限前なら 0 以下になる
pub fn days_late(
    checked_out_on: NaiveDate,
    returned_on: Option<NaiveDate>,
    checkout_days: i32,
    today: NaiveDate,
) -> Option<i64> {
    let due = due_date(checked_out_on, checkout_days)?;
    let effective = returned_on.unwrap_or(today);
    Some(effective.signed_duration_since(due).num_days())
}

/// Late fee owed for a checkout as of `today`.
///
/// Returns `None` when the item is not late, and also when the checkout
/// date or the loan period is unknown. A late item always yields a positive
/// amount, so `None` never stands in for a waived fee.
pub fn compute_late_fee(
    checked_out_on: Option<NaiveDate>,
    returned_on: Option<NaiveDate>,
    checkout_days: Option<i32>,
    today: NaiveDate,
) -> Option<Decimal> {
    let days = days_late(checked_out_on?, returned_on, checkout_days?, today)?;
    (days > 0).then(|| Decimal::from(days) * LATE_FEE_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(n)
    }

    #[test]
    fn late_fee_is_half_unit_per_day_late() {
        // (貸出日数, 返却日, 基準日, 期待する延滞料)
        let cases: [(i32, Option<u64>, u64, Option<&str>); 7] = [
            (14, None, 20, Some("3.00")),
            (14, Some(10), 20, None),
            (14, None, 14, None),
            (14, None, 15, Some("0.50")),
            (7, Some(9), 30, Some("1.00")),
            (10, None, 0, None),
            (0, None, 1, Some("0.50")),
        ];
        for (checkout_days, returned_on, today, expected) in cases {
            let fee = compute_late_fee(
                Some(day(0)),
                returned_on.map(day),
                Some(checkout_days),
                day(today),
            );
            assert_eq!(
                fee.map(|f| f.to_string()).as_deref(),
                expected,
                "checkout_days={checkout_days} returned_on={returned_on:?} today={today}"
            );
        }
    }

    #[test]
    fn fee_is_absent_rather_than_zero_when_not_late() {
        let fee = compute_late_fee(Some(day(0)), Some(day(14)), Some(14), day(100));
        assert!(fee.is_none());
    }

    #[test]
    fn missing_inputs_yield_no_fee() {
        assert_eq!(compute_late_fee(None, None, Some(14), day(30)), None);
        assert_eq!(compute_late_fee(Some(day(0)), None, None, day(30)), None);
        assert_eq!(compute_late_fee(Some(day(0)), None, Some(-1), day(30)), None);
    }

    #[test]
    fn date_overflow_yields_no_fee() {
        assert_eq!(
            compute_late_fee(Some(NaiveDate::MAX), None, Some(1), NaiveDate::MAX),
            None
        );
    }

    #[test]
    fn repeated_computation_does_not_drift() {
        let expected = Decimal::new(300, 2);
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            let fee = compute_late_fee(Some(day(0)), None, Some(14), day(20)).unwrap();
            assert_eq!(fee, expected);
            total += fee;
        }
        assert_eq!(total, Decimal::new(300_000, 2));
    }

    #[test]
    fn fee_scales_linearly_with_days_late() {
        for d in 1..=365_i64 {
            let fee =
                compute_late_fee(Some(day(0)), None, Some(14), day(14 + d as u64)).unwrap();
            assert_eq!(fee, Decimal::new(d * 50, 2));
            assert_eq!(fee.scale(), 2);
        }
    }
}
