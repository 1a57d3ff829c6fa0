use chrono::{NaiveDate, NaiveDateTime};
use everyday_toolbox::fitness::{
    calculate_bmr, calculate_tdee, generate_report, log_activity, log_food, ActivityEntry,
    ActivityLevel, Exercise, FitnessAction, FitnessError, FitnessSession, Gender, ProfileUpdate,
    UserProfile, SURVEY_INVITATION,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, 30, 0))
        .expect("valid timestamp")
}

fn sample_profile() -> UserProfile {
    UserProfile::new(25, 70.0, 175.0, Gender::Male, ActivityLevel::Moderate).expect("valid profile")
}

#[test]
fn bmr_by_gender() {
    assert_close(calculate_bmr(70.0, 175.0, 25, "male").unwrap(), 1673.75, 1e-9);
    assert_close(calculate_bmr(70.0, 175.0, 25, "female").unwrap(), 1507.75, 1e-9);
    assert_close(calculate_bmr(70.0, 175.0, 25, " Female ").unwrap(), 1507.75, 1e-9);
    assert_eq!(
        calculate_bmr(70.0, 175.0, 25, "other"),
        Err(FitnessError::UnknownGender("other".to_string()))
    );
}

#[test]
fn tdee_multipliers() {
    let male = [
        ("sedentary", 2008.5),
        ("light", 2301.40625),
        ("moderate", 2594.3125),
        ("active", 2887.21875),
        ("very active", 3180.125),
    ];
    for (level, expected) in male {
        assert_close(calculate_tdee(1673.75, level).unwrap(), expected, 0.01);
    }
    let female = [
        ("sedentary", 1809.3),
        ("light", 2073.15625),
        ("moderate", 2337.0125),
        ("active", 2600.86875),
        ("very_active", 2864.725),
    ];
    for (level, expected) in female {
        assert_close(calculate_tdee(1507.75, level).unwrap(), expected, 0.01);
    }
    assert!(matches!(
        calculate_tdee(1673.75, "couch"),
        Err(FitnessError::UnknownActivityLevel(_))
    ));
}

#[test]
fn activity_calories_from_met() {
    assert_close(log_activity("running", 30.0, 70.0).unwrap(), 343.0, 0.5);
    assert_close(log_activity("Cycling", 45.0, 70.0).unwrap(), 393.75, 1e-9);
    assert_close(log_activity("weightlifting", 60.0, 80.0).unwrap(), 240.0, 1e-9);
    assert_close(log_activity("running", 0.0, 70.0).unwrap(), 0.0, 1e-9);
}

#[test]
fn activity_rejects_bad_input() {
    assert!(matches!(
        log_activity("swimming", 30.0, 70.0),
        Err(FitnessError::UnknownExercise(_))
    ));
    assert!(matches!(
        log_activity("running", -5.0, 70.0),
        Err(FitnessError::InvalidInput(_))
    ));
    assert!(matches!(
        log_activity("running", 30.0, 0.0),
        Err(FitnessError::InvalidInput(_))
    ));
}

#[test]
fn food_entry_keeps_calories_as_given() {
    let entry = log_food("  apple ", 3, 95.0);
    assert_eq!(entry.food_item, "apple");
    assert_eq!(entry.quantity, 3);
    assert_close(entry.calories, 95.0, 1e-9);
}

#[test]
fn report_discounts_calories_on_promo_day() {
    let activities = [ActivityEntry {
        exercise: Exercise::Running,
        duration_min: 30.0,
        calories: 343.5,
    }];
    let foods = [log_food("salad", 1, 190.0)];

    // 2024-06-04 화요일 오후
    let report = generate_report(&activities, &foods, at(2024, 6, 4, 15));
    assert_close(report.calories_burned, 343.5, 1e-9);
    assert_close(report.calories_consumed, 190.0, 1e-9);
    assert_close(report.discounted_calories, 171.0, 1e-9);
    assert_eq!(report.survey_invitation, SURVEY_INVITATION);

    // 2024-06-07 금요일 오후
    let report = generate_report(&activities, &foods, at(2024, 6, 7, 15));
    assert_close(report.discounted_calories, 190.0, 1e-9);

    // 금요일 오전
    let report = generate_report(&activities, &foods, at(2024, 6, 7, 9));
    assert_close(report.discounted_calories, 171.0, 1e-9);
}

#[test]
fn empty_report_is_zero() {
    let report = generate_report(&[], &[], at(2024, 6, 6, 18));
    assert_close(report.calories_burned, 0.0, 1e-9);
    assert_close(report.calories_consumed, 0.0, 1e-9);
    assert_close(report.discounted_calories, 0.0, 1e-9);
    assert!(report.to_string().contains(SURVEY_INVITATION));
}

#[test]
fn action_parsing() {
    assert_eq!("a".parse::<FitnessAction>(), Ok(FitnessAction::LogActivity));
    assert_eq!("Log Food".parse::<FitnessAction>(), Ok(FitnessAction::LogFood));
    assert_eq!("profile".parse::<FitnessAction>(), Ok(FitnessAction::UpdateProfile));
    assert_eq!(" r ".parse::<FitnessAction>(), Ok(FitnessAction::Report));
    assert_eq!("quit".parse::<FitnessAction>(), Ok(FitnessAction::Quit));
    assert!(matches!(
        "dance".parse::<FitnessAction>(),
        Err(FitnessError::UnknownAction(_))
    ));
}

#[test]
fn session_uses_current_weight() {
    let mut session = FitnessSession::new(sample_profile());
    let first = session.log_activity(Exercise::Cycling, 45.0).unwrap().calories;
    assert_close(first, 393.75, 1e-9);

    let (bmr, tdee) = session
        .update_profile(ProfileUpdate {
            weight_kg: Some(80.0),
            ..Default::default()
        })
        .unwrap();
    assert_close(bmr, 1773.75, 1e-9);
    assert_close(tdee, 1773.75 * 1.55, 1e-9);

    let second = session.log_activity(Exercise::Cycling, 45.0).unwrap().calories;
    assert_close(second, 450.0, 1e-9);
    assert_eq!(session.activities().len(), 2);

    session.log_food("rice", 2, 300.0);
    let report = session.report(at(2024, 6, 6, 15));
    assert_close(report.calories_burned, 843.75, 1e-9);
    assert_close(report.calories_consumed, 300.0, 1e-9);
}

#[test]
fn rejected_update_leaves_profile_untouched() {
    let mut session = FitnessSession::new(sample_profile());
    let err = session
        .update_profile(ProfileUpdate {
            age: Some(40),
            height_cm: Some(-1.0),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, FitnessError::InvalidInput(_)));
    assert_eq!(session.profile(), &sample_profile());
    assert!(session.log_activity(Exercise::Running, -1.0).is_err());
    assert!(session.activities().is_empty());
}

#[test]
fn profile_requires_positive_body_measurements() {
    assert!(UserProfile::new(30, 0.0, 170.0, Gender::Female, ActivityLevel::Light).is_err());
    assert!(UserProfile::new(30, 60.0, 0.0, Gender::Female, ActivityLevel::Light).is_err());
}

#[test]
fn nan_measurements_are_rejected() {
    assert!(UserProfile::new(30, f64::NAN, 170.0, Gender::Male, ActivityLevel::Light).is_err());
    assert!(UserProfile::new(30, 70.0, f64::NAN, Gender::Male, ActivityLevel::Light).is_err());
    assert!(log_activity("running", f64::NAN, 70.0).is_err());
    assert!(log_activity("running", 30.0, f64::INFINITY).is_err());

    let mut session = FitnessSession::new(sample_profile());
    assert!(session
        .update_profile(ProfileUpdate {
            weight_kg: Some(f64::NAN),
            ..Default::default()
        })
        .is_err());
    assert_eq!(session.profile(), &sample_profile());
    assert!(session.log_activity(Exercise::Running, f64::NAN).is_err());
}
