use roster_core::{
    validate_gpa, validate_id, validate_name, Gpa, Student, StudentField, ValidationError,
    ValidationReason,
};

#[test]
fn validate_id_accepts_exactly_twelve_ascii_digits() {
    assert!(validate_id("123456789012"));
    assert!(validate_id("000000000000"));
    assert!(!validate_id("12345678901"));
    assert!(!validate_id("1234567890123"));
    assert!(!validate_id("12.345"));
    assert!(!validate_id("12345678901a"));
    assert!(!validate_id(" 23456789012"));
    // Arabic-Indic digits are Unicode digits but not ASCII.
    assert!(!validate_id("١٢٣٤٥٦٧٨٩٠١٢"));
}

#[test]
fn validate_name_enforces_charset_and_length() {
    assert!(validate_name("Ada Lovelace"));
    assert!(validate_name("J. O'Neil-Smith"));
    assert!(validate_name("Zoë Saldaña"));
    assert!(validate_name("Al"));
    assert!(validate_name(&"a".repeat(80)));

    assert!(!validate_name("A"));
    assert!(!validate_name(&"a".repeat(81)));
    assert!(!validate_name("R2D2"));
    assert!(!validate_name("Ada_Lovelace"));
    assert!(!validate_name(""));
}

#[test]
fn validate_gpa_accepts_two_decimal_values_in_range() {
    for value in ["0", "4", "3.9", "3.95", "0.00", "4.00"] {
        assert!(validate_gpa(value), "{value} should be valid");
    }
    for value in ["4.01", "4.5", "3.951", "-1", "abc", "", "3.", ".5", "10"] {
        assert!(!validate_gpa(value), "{value} should be invalid");
    }
}

#[test]
fn gpa_displays_two_decimals() {
    assert_eq!(Gpa::parse("3.9").unwrap().to_string(), "3.90");
    assert_eq!(Gpa::parse("4").unwrap().to_string(), "4.00");
    assert_eq!(Gpa::from_hundredths(5).unwrap().to_string(), "0.05");
}

#[test]
fn gpa_rejects_out_of_range_with_reason() {
    let err = Gpa::parse("4.5").unwrap_err();
    assert_eq!(
        err,
        ValidationError::new(StudentField::Gpa, ValidationReason::GpaOutOfRange)
    );
    let err = Gpa::from_f64(-0.5).unwrap_err();
    assert_eq!(err.reason, ValidationReason::GpaOutOfRange);
}

#[test]
fn student_parse_names_the_failing_field() {
    let err = Student::parse("12345", "Ada Lovelace", "CS", "3.9").unwrap_err();
    assert_eq!(err.field, StudentField::Id);
    assert_eq!(err.reason, ValidationReason::InvalidIdFormat);

    let err = Student::parse("100000000001", "Ada #1", "CS", "3.9").unwrap_err();
    assert_eq!(err.field, StudentField::Name);

    let err = Student::parse("100000000001", "Ada Lovelace", "CS", "3,9").unwrap_err();
    assert_eq!(err.field, StudentField::Gpa);
    assert_eq!(err.reason, ValidationReason::InvalidGpaFormat);
    assert_eq!(
        err.to_string(),
        "invalid gpa: expected a number with at most two decimal places"
    );
}

#[test]
fn major_is_unconstrained() {
    let student = Student::parse("100000000001", "Ada Lovelace", "", "3.9").unwrap();
    assert_eq!(student.major, "");
    let student = Student::parse("100000000001", "Ada Lovelace", "C++ & Math #2", "3.9").unwrap();
    assert_eq!(student.major, "C++ & Math #2");
}

#[test]
fn student_serialization_uses_expected_wire_fields() {
    let student = Student::parse("100000000001", "Ada Lovelace", "CS", "3.9").unwrap();

    let json = serde_json::to_value(&student).unwrap();
    assert_eq!(json["id"], "100000000001");
    assert_eq!(json["name"], "Ada Lovelace");
    assert_eq!(json["major"], "CS");
    assert_eq!(json["gpa"], 3.9);

    let decoded: Student = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, student);
}

#[test]
fn deserialize_accepts_legacy_field_names() {
    let value = serde_json::json!({
        "nim": "100000000001",
        "name": "Ada Lovelace",
        "major": "CS",
        "ipk": 3.5
    });

    let student: Student = serde_json::from_value(value).unwrap();
    assert_eq!(student.id, "100000000001");
    assert_eq!(student.gpa.hundredths(), 350);
}

#[test]
fn deserialize_rejects_out_of_range_gpa() {
    let value = serde_json::json!({
        "id": "100000000001",
        "name": "Ada Lovelace",
        "major": "CS",
        "gpa": 4.2
    });

    let err = serde_json::from_value::<Student>(value).unwrap_err();
    assert!(
        err.to_string().contains("must be between 0.00 and 4.00"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_over_precise_gpa() {
    let value = serde_json::json!({
        "id": "100000000001",
        "name": "Ada Lovelace",
        "major": "CS",
        "gpa": 3.999999999
    });

    let err = serde_json::from_value::<Student>(value).unwrap_err();
    assert!(
        err.to_string().contains("at most two decimal places"),
        "unexpected error: {err}"
    );

    let value = serde_json::json!({
        "id": "100000000001",
        "name": "Ada Lovelace",
        "major": "CS",
        "gpa": 3.9
    });
    let student: Student = serde_json::from_value(value).unwrap();
    assert_eq!(student.gpa.to_string(), "3.90");
}

#[test]
fn deserialize_rejects_partial_records() {
    let value = serde_json::json!({ "id": "100000000001", "name": "Ada Lovelace" });
    assert!(serde_json::from_value::<Student>(value).is_err());
}

#[test]
fn field_names_parse_case_insensitively_with_legacy_aliases() {
    assert_eq!("ID".parse::<StudentField>().unwrap(), StudentField::Id);
    assert_eq!("nim".parse::<StudentField>().unwrap(), StudentField::Id);
    assert_eq!(" Major ".parse::<StudentField>().unwrap(), StudentField::Major);
    assert_eq!("ipk".parse::<StudentField>().unwrap(), StudentField::Gpa);

    let err = "email".parse::<StudentField>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown field `email`; expected id|name|major|gpa"
    );
}

#[test]
fn field_text_renders_gpa_with_two_decimals() {
    let student = Student::parse("100000000001", "Ada Lovelace", "CS", "4").unwrap();
    assert_eq!(student.field_text(StudentField::Gpa), "4.00");
    assert_eq!(student.field_text(StudentField::Id), "100000000001");
}
