use std::fmt;
use std::str::FromStr;

use super::FitnessError;

/// 기록 가능한 운동 종류와 MET 값.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    Running,
    Cycling,
    Weightlifting,
}

impl Exercise {
    pub const ALL: [Exercise; 3] = [Exercise::Running, Exercise::Cycling, Exercise::Weightlifting];

    /// 안정 시 대비 에너지 소모 배수(MET).
    pub fn met(self) -> f64 {
        match self {
            Exercise::Running => 9.8,
            Exercise::Cycling => 7.5,
            Exercise::Weightlifting => 3.0,
        }
    }
}

impl FromStr for Exercise {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "running" => Ok(Exercise::Running),
            "cycling" => Ok(Exercise::Cycling),
            "weightlifting" => Ok(Exercise::Weightlifting),
            _ => Err(FitnessError::UnknownExercise(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Exercise::Running => "running",
            Exercise::Cycling => "cycling",
            Exercise::Weightlifting => "weightlifting",
        };
        f.write_str(name)
    }
}

/// 소모 칼로리 = MET × 체중[kg] × 시간[분] / 60
pub fn calories_burned(exercise: Exercise, duration_min: f64, weight_kg: f64) -> f64 {
    exercise.met() * weight_kg * duration_min / 60.0
}

/// 운동 이름 문자열로 소모 칼로리를 계산한다.
pub fn log_activity(activity: &str, duration_min: f64, weight_kg: f64) -> Result<f64, FitnessError> {
    let exercise: Exercise = activity.parse()?;
    if !(duration_min.is_finite() && duration_min >= 0.0) {
        return Err(FitnessError::InvalidInput("운동 시간은 0 이상이어야 합니다"));
    }
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(FitnessError::InvalidInput("체중은 0보다 커야 합니다"));
    }
    Ok(calories_burned(exercise, duration_min, weight_kg))
}

/// 세션에 쌓이는 운동 기록.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub exercise: Exercise,
    pub duration_min: f64,
    pub calories: f64,
}
