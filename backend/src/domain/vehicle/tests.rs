//! Tests for vehicle validation and patch merging.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn camry() -> Vehicle {
    Vehicle::new("Toyota", "Camry", 2022, "ABC-1234")
}

#[rstest]
fn valid_vehicle_has_no_violations(camry: Vehicle) {
    assert!(camry.violations().is_empty());
    assert!(camry.validate().is_ok());
}

#[rstest]
#[case::brand(Vehicle::new("T", "Camry", 2022, "ABC-1234"), "vehicle brand is invalid")]
#[case::empty_brand(Vehicle::new("", "Camry", 2022, "ABC-1234"), "vehicle brand is invalid")]
#[case::model(Vehicle::new("Toyota", "C", 2022, "ABC-1234"), "vehicle model is invalid")]
#[case::year(Vehicle::new("Toyota", "Camry", 1886, "ABC-1234"), "vehicle year is invalid")]
#[case::zero_year(Vehicle::new("Toyota", "Camry", 0, "ABC-1234"), "vehicle year is invalid")]
#[case::plate_without_hyphen(Vehicle::new("Toyota", "Camry", 2022, "ABC1234"), "vehicle plate is invalid")]
#[case::plate_lowercase(Vehicle::new("Toyota", "Camry", 2022, "abc-1234"), "vehicle plate is invalid")]
#[case::plate_too_long(Vehicle::new("Toyota", "Camry", 2022, "ABC-12345"), "vehicle plate is invalid")]
fn single_invalid_field_reports_one_violation(#[case] vehicle: Vehicle, #[case] expected: &str) {
    let violations = vehicle.violations();
    assert_eq!(violations.messages(), [expected.to_owned()]);
}

#[rstest]
fn first_year_after_1886_is_accepted() {
    assert!(Vehicle::new("Benz", "Velo", 1887, "ABC-12x4").validate().is_ok());
}

#[rstest]
fn all_invalid_fields_are_reported_in_field_order() {
    let vehicle = Vehicle::new("T", "C", 1886, "ABC1234");
    let err = vehicle.validate().expect_err("every field is invalid");
    assert_eq!(
        err.messages(),
        [
            "vehicle brand is invalid".to_owned(),
            "vehicle model is invalid".to_owned(),
            "vehicle year is invalid".to_owned(),
            "vehicle plate is invalid".to_owned(),
        ]
    );
}

#[rstest]
fn fixing_one_field_removes_exactly_one_violation() {
    let broken = Vehicle::new("T", "C", 1886, "ABC1234");
    let before = broken.violations().len();

    let mut fixed = broken.clone();
    fixed.model = "Camry".to_owned();

    assert_eq!(fixed.violations().len(), before - 1);
    assert!(
        !fixed
            .violations()
            .messages()
            .contains(&"vehicle model is invalid".to_owned())
    );
}

#[rstest]
fn empty_patch_keeps_every_field(camry: Vehicle) {
    let mut merged = camry.clone();
    merged.apply(VehiclePatch::default());
    assert_eq!(merged, camry);
}

#[rstest]
fn patch_overwrites_only_non_zero_fields(camry: Vehicle) {
    let mut merged = camry.clone();
    merged.apply(VehiclePatch {
        plate: "XYZ-9876".to_owned(),
        year: 2024,
        ..VehiclePatch::default()
    });

    assert_eq!(merged.brand, camry.brand);
    assert_eq!(merged.model, camry.model);
    assert_eq!(merged.year, 2024);
    assert_eq!(merged.plate, "XYZ-9876");
}

#[rstest]
fn merging_a_record_with_itself_is_a_no_op(camry: Vehicle) {
    let mut merged = camry.clone();
    merged.apply(VehiclePatch::from(&camry));
    assert_eq!(merged, camry);
}
