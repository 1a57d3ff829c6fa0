use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;

use chrono::Local;

use crate::app::{AppError, MenuChoice};
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::fitness::{
    ActivityLevel, Exercise, FitnessAction, FitnessSession, Gender, ProfileUpdate, UserProfile,
};
use crate::grocery;
use crate::quantity::QuantityKind;
use crate::vehicle::{self, TireError, TireSpec};
use crate::water::{self, HouseSupplyInput};

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Everyday Toolbox ===");
    println!("1) 주택 수압 계산");
    println!("2) 운동/칼로리 기록");
    println!("3) 영수증 출력");
    println!("4) 타이어 체적");
    println!("5) 연비 계산");
    println!("6) 단위 변환기");
    println!("7) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::WaterSupply),
            "2" => return Ok(MenuChoice::Fitness),
            "3" => return Ok(MenuChoice::Receipt),
            "4" => return Ok(MenuChoice::TireVolume),
            "5" => return Ok(MenuChoice::FuelEfficiency),
            "6" => return Ok(MenuChoice::UnitConversion),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 주택 수압 메뉴를 처리한다.
pub fn handle_water_supply() -> Result<(), AppError> {
    println!("\n-- 주택 수압 계산 --");
    let input = HouseSupplyInput {
        tower_height_m: read_f64("급수탑 높이 [m]: ")?,
        tank_height_m: read_f64("수조 벽 높이 [m]: ")?,
        supply_length_m: read_f64("수조 → 필지 본관 길이 [m]: ")?,
        fitting_count: read_parsed("본관 90° 엘보 개수: ")?,
        house_length_m: read_f64("필지 → 주택 인입관 길이 [m]: ")?,
    };
    let result = water::house_pressure(&input)?;
    println!("물기둥 높이: {:.2} m", result.water_height_m);
    println!("정수압: {:.1} kPa", result.static_gain_kpa);
    println!(
        "손실: 본관 {:.1}, 엘보 {:.2}, 관경 축소 {:.1}, 인입관 {:.1} kPa (Re={:.0})",
        result.supply_friction_kpa,
        result.fittings_kpa,
        result.reduction_kpa,
        result.house_friction_kpa,
        result.reynolds
    );
    println!("주택 수압: {:.1} kPa", result.pressure_kpa);
    println!("주택 수압: {:.1} psi", result.pressure_psi);
    Ok(())
}

/// 운동/칼로리 기록 세션을 진행한다.
pub fn handle_fitness(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 운동/칼로리 기록 (FitTrack) --");
    let system = cfg.unit_system;
    let (weight_label, height_label) = system.labels();

    let age: u32 = read_parsed("나이: ")?;
    let weight = read_f64(&format!("체중 [{weight_label}]: "))?;
    let height = read_f64(&format!("키 [{height_label}]: "))?;
    let gender: Gender = read_parsed("성별 (male/female): ")?;
    let level: ActivityLevel =
        read_parsed("활동 수준 (sedentary, light, moderate, active, very active): ")?;
    let profile = UserProfile::new(
        age,
        system.weight_to_kg(weight),
        system.height_to_cm(height),
        gender,
        level,
    )?;

    let mut session = FitnessSession::new(profile);
    println!();
    println!("기초대사량(BMR): {:.2} kcal/day", session.profile().bmr());
    println!("일일 총 소비량(TDEE): {:.2} kcal/day", session.profile().tdee());

    loop {
        let sel = read_line(
            "\n운동 기록(a), 음식 기록(f), 프로필 수정(u), 리포트(r), 종료(q) 중 선택: ",
        )?;
        let action = match sel.parse::<FitnessAction>() {
            Ok(action) => action,
            Err(_) => {
                println!("잘못된 동작입니다. 다시 선택하세요.");
                continue;
            }
        };
        match action {
            FitnessAction::LogActivity => {
                let name = read_line("운동 종류 (running, cycling, weightlifting): ")?;
                let exercise: Exercise = match name.parse() {
                    Ok(e) => e,
                    Err(e) => {
                        println!("오류: {e}");
                        continue;
                    }
                };
                let duration = read_f64("운동 시간 [분]: ")?;
                match session.log_activity(exercise, duration) {
                    Ok(entry) => println!(
                        "{} {:.0}분 기록, 소모 {:.2} kcal",
                        entry.exercise, entry.duration_min, entry.calories
                    ),
                    Err(e) => println!("오류: {e}"),
                }
            }
            FitnessAction::LogFood => {
                let item = read_line("음식 이름: ")?;
                let quantity: u32 = read_parsed("수량: ")?;
                let calories = read_f64("칼로리 [kcal]: ")?;
                let entry = session.log_food(&item, quantity, calories);
                println!(
                    "음식 기록: {}, 수량 {}, {:.1} kcal",
                    entry.food_item, entry.quantity, entry.calories
                );
            }
            FitnessAction::UpdateProfile => {
                let update = read_profile_update(session.profile(), system)?;
                match session.update_profile(update) {
                    Ok((bmr, tdee)) => {
                        println!("프로필 수정 완료. 새 BMR: {bmr:.2}, 새 TDEE: {tdee:.2}")
                    }
                    Err(e) => println!("오류: {e} (기존 프로필 유지)"),
                }
            }
            FitnessAction::Report => {
                let report = session.report(Local::now().naive_local());
                println!("\n{report}");
            }
            FitnessAction::Quit => {
                println!("기록을 종료합니다. 건강하세요!");
                break;
            }
        }
    }
    Ok(())
}

fn read_profile_update(profile: &UserProfile, system: UnitSystem) -> Result<ProfileUpdate, AppError> {
    println!("프로필 수정 (빈 칸으로 두면 현재 값 유지):");
    let (weight_label, height_label) = system.labels();
    let shown_weight = system.weight_from_kg(profile.weight_kg);
    let shown_height = system.height_from_cm(profile.height_cm);
    let age = read_optional(&format!("나이 [{}]: ", profile.age))?;
    let weight: Option<f64> =
        read_optional(&format!("체중 [{weight_label}] [{shown_weight:.1}]: "))?;
    let height: Option<f64> =
        read_optional(&format!("키 [{height_label}] [{shown_height:.1}]: "))?;
    let gender = read_optional(&format!("성별 [{}]: ", profile.gender))?;
    let activity_level = read_optional(&format!("활동 수준 [{}]: ", profile.activity_level))?;
    Ok(ProfileUpdate {
        age,
        weight_kg: weight.map(|w| system.weight_to_kg(w)),
        height_cm: height.map(|h| system.height_to_cm(h)),
        gender,
        activity_level,
    })
}

/// 설정된 CSV 파일로 영수증을 출력한다.
pub fn handle_receipt(cfg: &Config) -> Result<(), AppError> {
    let settings = &cfg.receipt;
    let catalog = grocery::read_catalog(&settings.products_path)?;
    let requests = grocery::read_requests(&settings.request_path)?;
    let receipt = grocery::build_receipt(
        &settings.store_name,
        &settings.survey_url,
        &catalog,
        &requests,
        Local::now().naive_local(),
    )?;
    println!();
    println!("{receipt}");
    println!();
    Ok(())
}

/// 타이어 체적 메뉴를 처리한다. 각 값은 하한을 만족할 때까지 다시 묻는다.
pub fn handle_tire_volume(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 타이어 체적 --");
    let width = read_validated(
        "타이어 폭 [mm] (예: 205, 215, 225): ",
        vehicle::validate_width,
    )?;
    let aspect = read_validated(
        "편평비 (예: 60, 65, 70): ",
        vehicle::validate_aspect_ratio,
    )?;
    let diameter = read_validated(
        "휠 직경 [in] (예: 15, 16, 17): ",
        vehicle::validate_wheel_diameter,
    )?;
    let spec = TireSpec::new(width, aspect, diameter)?;
    let volume = vehicle::tire_volume_liters(&spec);
    println!("\n타이어 체적(근사): {volume:.2} L");

    let log_path = &cfg.tire.log_path;
    vehicle::append_volume_record(log_path, Local::now().date_naive(), &spec, volume)?;
    println!("{} 에 기록했습니다.", log_path.display());
    Ok(())
}

/// 연비 메뉴를 처리한다.
pub fn handle_fuel_efficiency() -> Result<(), AppError> {
    println!("\n-- 연비 계산 --");
    let start = read_f64("시작 주행거리 [mile]: ")?;
    let end = read_f64("종료 주행거리 [mile]: ")?;
    let gallons = read_f64("사용 연료 [US gal]: ")?;
    let mpg = vehicle::miles_per_gallon(start, end, gallons)?;
    let lp100k = vehicle::lp100k_from_mpg(mpg)?;
    println!("{mpg:.2} miles per gallon");
    println!("{lp100k:.2} liters per 100 kilometers");
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion() -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    for (i, kind) in QuantityKind::ALL.iter().enumerate() {
        let codes: Vec<&str> = conversion::unit_options(*kind)
            .iter()
            .map(|(_, code)| *code)
            .collect();
        println!("{}) {} [{}]", i + 1, kind.label(), codes.join(", "));
    }
    let kind = loop {
        let sel = read_line("항목 번호를 입력: ")?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if let Some(kind) = n.checked_sub(1).and_then(|i| QuantityKind::ALL.get(i)) {
                break *kind;
            }
        }
        println!("지원하지 않는 번호입니다.");
    };
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line("입력 단위(ex: kPa, mi, gal): ")?;
    let to_unit = read_line("변환 단위(ex: psi, km, l): ")?;
    let result = conversion::convert(kind, value, &from_unit, &to_unit)?;
    println!("변환 결과: {result:.4} {to_unit}");
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 단위 시스템: {:?}", cfg.unit_system);
    println!("1) Metric (kg/cm)  2) Imperial (lb/in)");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    if sel.is_empty() {
        return Ok(());
    }
    let Some(system) = unit_system_choice(&sel) else {
        println!("잘못된 입력이므로 변경하지 않습니다.");
        return Ok(());
    };
    cfg.unit_system = system;
    println!("단위 시스템이 {:?} 로 설정되었습니다.", cfg.unit_system);
    Ok(())
}

/// 설정 메뉴 번호를 단위 시스템으로 바꾼다.
fn unit_system_choice(sel: &str) -> Option<UnitSystem> {
    match sel.trim() {
        "1" => Some(UnitSystem::Metric),
        "2" => Some(UnitSystem::Imperial),
        _ => None,
    }
}

/// 프롬프트를 출력하고 앞뒤 공백을 제거한 한 줄을 읽는다.
fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf.trim().to_string())
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("숫자를 입력하세요."),
        }
    }
}

/// 해석에 성공할 때까지 다시 묻는다.
fn read_parsed<T>(prompt: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    loop {
        let s = read_line(prompt)?;
        match s.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(e) => println!("잘못된 입력: {e}"),
        }
    }
}

/// 빈 입력이면 `None`.
fn read_optional<T>(prompt: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    loop {
        let s = read_line(prompt)?;
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<T>() {
            Ok(v) => return Ok(Some(v)),
            Err(e) => println!("잘못된 입력: {e}"),
        }
    }
}

fn read_validated(
    prompt: &str,
    validate: fn(f64) -> Result<f64, TireError>,
) -> Result<f64, AppError> {
    loop {
        let value = read_f64(prompt)?;
        match validate(value) {
            Ok(v) => return Ok(v),
            Err(e) => println!("오류: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_choice_accepts_only_listed_numbers() {
        assert_eq!(unit_system_choice("1"), Some(UnitSystem::Metric));
        assert_eq!(unit_system_choice(" 2 "), Some(UnitSystem::Imperial));
        assert_eq!(unit_system_choice("3"), None);
        assert_eq!(unit_system_choice("imperial"), None);
    }
}
