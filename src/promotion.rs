//! 요일/시간대 기반 할인 규칙.
//!
//! 시계는 항상 호출자가 넘긴다. 벽시계(`chrono::Local::now()`)는 CLI/GUI에서만 읽는다.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// 할인율(10%).
pub const PROMO_DISCOUNT_RATE: f64 = 0.10;
/// 이 시각(시) 이전이면 오전 할인 대상이다.
pub const MORNING_CUTOFF_HOUR: u32 = 11;

/// 화요일/수요일이면 할인 요일이다.
pub fn is_promo_weekday(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Tue | Weekday::Wed)
}

/// 영수증 단가 할인율. 할인 요일에만 적용한다.
pub fn receipt_discount_rate(now: NaiveDateTime) -> f64 {
    if is_promo_weekday(now.weekday()) {
        PROMO_DISCOUNT_RATE
    } else {
        0.0
    }
}

/// 섭취 칼로리 리포트 할인율. 할인 요일이거나 오전 11시 이전이면 적용한다.
pub fn calorie_discount_rate(now: NaiveDateTime) -> f64 {
    if is_promo_weekday(now.weekday()) || now.hour() < MORNING_CUTOFF_HOUR {
        PROMO_DISCOUNT_RATE
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn tuesday_afternoon_gets_both_discounts() {
        // 2024-06-04 은 화요일
        let now = at(2024, 6, 4, 15);
        assert_eq!(receipt_discount_rate(now), PROMO_DISCOUNT_RATE);
        assert_eq!(calorie_discount_rate(now), PROMO_DISCOUNT_RATE);
    }

    #[test]
    fn thursday_morning_only_discounts_calories() {
        // 2024-06-06 은 목요일
        let now = at(2024, 6, 6, 9);
        assert_eq!(receipt_discount_rate(now), 0.0);
        assert_eq!(calorie_discount_rate(now), PROMO_DISCOUNT_RATE);
    }

    #[test]
    fn friday_noon_has_no_discount() {
        let now = at(2024, 6, 7, 11);
        assert_eq!(receipt_discount_rate(now), 0.0);
        assert_eq!(calorie_discount_rate(now), 0.0);
    }
}
