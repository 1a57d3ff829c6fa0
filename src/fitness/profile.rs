use std::fmt;
use std::str::FromStr;

use super::FitnessError;

/// Mifflin-St Jeor 식의 성별 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// 성별 보정값 [kcal/day]
    pub fn bmr_offset(self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }
}

impl FromStr for Gender {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(FitnessError::UnknownGender(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// 일상 활동 수준과 TDEE 배수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    /// 운동 거의 없음
    Sedentary,
    /// 주 1~3일 가벼운 운동
    Light,
    /// 주 3~5일 보통 운동
    Moderate,
    /// 주 6~7일 고강도 운동
    Active,
    /// 육체 노동 또는 하루 두 번 훈련
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very active" | "very_active" | "very-active" => Ok(ActivityLevel::VeryActive),
            _ => Err(FitnessError::UnknownActivityLevel(s.trim().to_string())),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        };
        f.write_str(name)
    }
}

/// Mifflin-St Jeor 식으로 기초대사량(BMR)을 계산한다.
///
/// BMR = 10·체중[kg] + 6.25·키[cm] − 5·나이 + 성별 보정(남 +5, 여 −161)
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + gender.bmr_offset()
}

/// 성별 문자열을 해석해 BMR을 계산한다.
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: &str,
) -> Result<f64, FitnessError> {
    let gender: Gender = gender.parse()?;
    Ok(mifflin_st_jeor(weight_kg, height_cm, age, gender))
}

/// 활동 수준 문자열을 해석해 TDEE(일일 총 에너지 소비량)를 계산한다.
pub fn calculate_tdee(bmr: f64, activity_level: &str) -> Result<f64, FitnessError> {
    let level: ActivityLevel = activity_level.parse()?;
    Ok(bmr * level.multiplier())
}

/// 세션 동안 유지되는 사용자 정보. 체중은 kg, 키는 cm 기준이다.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

/// 프로필 갱신값. `None`인 항목은 기존 값을 유지한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
}

impl UserProfile {
    pub fn new(
        age: u32,
        weight_kg: f64,
        height_cm: f64,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> Result<Self, FitnessError> {
        let profile = Self {
            age,
            weight_kg,
            height_cm,
            gender,
            activity_level,
        };
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<(), FitnessError> {
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(FitnessError::InvalidInput("체중은 0보다 커야 합니다"));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(FitnessError::InvalidInput("키는 0보다 커야 합니다"));
        }
        Ok(())
    }

    pub fn bmr(&self) -> f64 {
        mifflin_st_jeor(self.weight_kg, self.height_cm, self.age, self.gender)
    }

    pub fn tdee(&self) -> f64 {
        self.bmr() * self.activity_level.multiplier()
    }

    /// 갱신값을 반영한다. 검증에 실패하면 기존 프로필을 그대로 둔다.
    pub fn apply(&mut self, update: ProfileUpdate) -> Result<(), FitnessError> {
        let mut next = self.clone();
        if let Some(age) = update.age {
            next.age = age;
        }
        if let Some(weight) = update.weight_kg {
            next.weight_kg = weight;
        }
        if let Some(height) = update.height_cm {
            next.height_cm = height;
        }
        if let Some(gender) = update.gender {
            next.gender = gender;
        }
        if let Some(level) = update.activity_level {
            next.activity_level = level;
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}
