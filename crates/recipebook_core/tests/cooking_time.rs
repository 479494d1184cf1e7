use recipebook_core::{format_cooking_time, CookingTime, CookingTimeError, TimePreset};

#[test]
fn display_rule_matches_picker_contract() {
    assert_eq!(format_cooking_time(0, 15).unwrap(), "15 mins");
    assert_eq!(format_cooking_time(1, 0).unwrap(), "1 hour");
    assert_eq!(format_cooking_time(2, 0).unwrap(), "2 hours");
    assert_eq!(format_cooking_time(1, 30).unwrap(), "1h 30m");
}

#[test]
fn presets_render_expected_strings() {
    let rendered = TimePreset::ALL
        .iter()
        .map(|preset| preset.cooking_time().to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        rendered,
        vec!["15 mins", "30 mins", "45 mins", "1 hour", "1h 30m", "2 hours"]
    );
}

#[test]
fn picker_label_and_total_minutes() {
    let time = CookingTime::new(2, 5).unwrap();
    assert_eq!(time.picker_label(), "2h 5m");
    assert_eq!(time.total_minutes(), 125);
}

#[test]
fn out_of_range_input_is_an_error() {
    assert_eq!(
        format_cooking_time(0, 75),
        Err(CookingTimeError::MinutesOutOfRange(75))
    );
}
