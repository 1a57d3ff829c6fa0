use std::fmt;

use chrono::NaiveDateTime;

use super::{ActivityEntry, FoodEntry};
use crate::promotion;

pub const SURVEY_INVITATION: &str = "Please complete our online survey for feedback!";

/// 하루 요약 리포트.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub calories_burned: f64,
    pub calories_consumed: f64,
    /// 할인 규칙을 적용한 섭취 칼로리
    pub discounted_calories: f64,
    pub survey_invitation: &'static str,
}

/// 기록을 합산해 리포트를 만든다. `now`로 할인 여부를 판단한다.
pub fn generate_report(
    activities: &[ActivityEntry],
    foods: &[FoodEntry],
    now: NaiveDateTime,
) -> DailyReport {
    let calories_burned: f64 = activities.iter().map(|a| a.calories).sum();
    let calories_consumed: f64 = foods.iter().map(|f| f.calories).sum();
    let discount = promotion::calorie_discount_rate(now);
    DailyReport {
        calories_burned,
        calories_consumed,
        discounted_calories: calories_consumed * (1.0 - discount),
        survey_invitation: SURVEY_INVITATION,
    }
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "소모 칼로리: {:.2} kcal", self.calories_burned)?;
        writeln!(f, "섭취 칼로리: {:.2} kcal", self.calories_consumed)?;
        writeln!(f, "할인 적용 섭취 칼로리: {:.2} kcal", self.discounted_calories)?;
        write!(f, "{}", self.survey_invitation)
    }
}
