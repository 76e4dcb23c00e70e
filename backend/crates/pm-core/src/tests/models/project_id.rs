use crate::{CoreError, ProjectId};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_small_number_when_formatted_then_zero_padded_to_three_digits() {
    let id = ProjectId::from_number(7).unwrap();

    assert_that!(id.to_string(), eq("Sanvii-007"));
}

#[test]
fn given_number_past_999_when_formatted_then_grows_wider() {
    let id = ProjectId::from_number(1000).unwrap();

    assert_that!(id.to_string(), eq("Sanvii-1000"));
}

#[test]
fn given_formatted_id_when_parsed_then_number_recovered() {
    let id = ProjectId::from_str("Sanvii-042").unwrap();

    assert_that!(id.number(), eq(42));
    assert_that!(id.to_string(), eq("Sanvii-042"));
}

#[test]
fn given_non_canonical_padding_when_parsed_then_rejected() {
    for alias in ["Sanvii-5", "Sanvii-05", "Sanvii-0005", "Sanvii-01000"] {
        let result = ProjectId::from_str(alias);
        assert!(
            matches!(result, Err(CoreError::InvalidProjectId { .. })),
            "expected {alias:?} to be rejected"
        );
    }
}

#[test]
fn given_every_canonical_width_when_parsed_then_round_trips() {
    for canonical in ["Sanvii-001", "Sanvii-999", "Sanvii-1000", "Sanvii-12345"] {
        let id = ProjectId::from_str(canonical).unwrap();

        assert_that!(id.to_string(), eq(canonical));
    }
}

#[test]
fn given_malformed_ids_when_parsed_then_rejected() {
    for bad in [
        "",
        "Sanvii",
        "Sanvii-",
        "Sanvii-000",
        "Sanvii-12a",
        "sanvii-001",
        "Other-001",
        "Sanvii--1",
        "Sanvii-99999999999",
    ] {
        let result = ProjectId::from_str(bad);
        assert!(
            matches!(result, Err(CoreError::InvalidProjectId { .. })),
            "expected {bad:?} to be rejected"
        );
    }
}

#[test]
fn given_non_positive_number_when_built_then_rejected() {
    assert_that!(ProjectId::from_number(0), err(anything()));
    assert_that!(ProjectId::from_number(-3), err(anything()));
}

#[test]
fn given_ids_when_compared_then_ordered_numerically() {
    let low = ProjectId::from_str("Sanvii-999").unwrap();
    let high = ProjectId::from_str("Sanvii-1000").unwrap();

    assert_that!(low < high, eq(true));
}

#[test]
fn given_id_when_serialized_then_json_string() {
    let id = ProjectId::from_number(12).unwrap();

    let json = serde_json::to_string(&id).unwrap();
    assert_that!(json, eq("\"Sanvii-012\""));

    let back: ProjectId = serde_json::from_str(&json).unwrap();
    assert_that!(back, eq(id));
    assert_that!(
        serde_json::from_str::<ProjectId>("\"nope\""),
        err(anything())
    );
}
