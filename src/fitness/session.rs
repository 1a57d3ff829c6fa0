use std::str::FromStr;

use chrono::NaiveDateTime;

use super::{
    calories_burned, generate_report, log_food, ActivityEntry, DailyReport, Exercise,
    FitnessError, FoodEntry, ProfileUpdate, UserProfile,
};

/// 기록 루프에서 선택 가능한 동작.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessAction {
    LogActivity,
    LogFood,
    UpdateProfile,
    Report,
    Quit,
}

impl FromStr for FitnessAction {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "activity" | "log an activity" => Ok(FitnessAction::LogActivity),
            "f" | "food" | "log food" => Ok(FitnessAction::LogFood),
            "u" | "profile" | "user profile" => Ok(FitnessAction::UpdateProfile),
            "r" | "report" | "generate report" => Ok(FitnessAction::Report),
            "q" | "quit" => Ok(FitnessAction::Quit),
            other => Err(FitnessError::UnknownAction(other.to_string())),
        }
    }
}

/// 한 번의 실행 동안만 유지되는 기록 세션.
#[derive(Debug, Clone)]
pub struct FitnessSession {
    profile: UserProfile,
    activities: Vec<ActivityEntry>,
    foods: Vec<FoodEntry>,
}

impl FitnessSession {
    pub fn new(profile: UserProfile) -> Self {
        tracing::debug!(bmr = profile.bmr(), tdee = profile.tdee(), "fitness session started");
        Self {
            profile,
            activities: Vec::new(),
            foods: Vec::new(),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn activities(&self) -> &[ActivityEntry] {
        &self.activities
    }

    pub fn foods(&self) -> &[FoodEntry] {
        &self.foods
    }

    /// 현재 체중으로 운동을 기록하고 기록된 항목을 돌려준다.
    pub fn log_activity(
        &mut self,
        exercise: Exercise,
        duration_min: f64,
    ) -> Result<&ActivityEntry, FitnessError> {
        if !(duration_min.is_finite() && duration_min >= 0.0) {
            return Err(FitnessError::InvalidInput("운동 시간은 0 이상이어야 합니다"));
        }
        let calories = calories_burned(exercise, duration_min, self.profile.weight_kg);
        self.activities.push(ActivityEntry {
            exercise,
            duration_min,
            calories,
        });
        Ok(&self.activities[self.activities.len() - 1])
    }

    pub fn log_food(&mut self, food_item: &str, quantity: u32, calories: f64) -> &FoodEntry {
        self.foods.push(log_food(food_item, quantity, calories));
        &self.foods[self.foods.len() - 1]
    }

    /// 프로필을 갱신하고 새 (BMR, TDEE)를 반환한다.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<(f64, f64), FitnessError> {
        self.profile.apply(update)?;
        Ok((self.profile.bmr(), self.profile.tdee()))
    }

    pub fn report(&self, now: NaiveDateTime) -> DailyReport {
        generate_report(&self.activities, &self.foods, now)
    }
}
