use openday_core::models::{
    availability::{
        AvailabilityDay, AvailabilityRow, DayEntry, NewAvailabilityRow, SaveAvailabilityRequest,
    },
    status::StoreStatus,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

#[test]
fn test_default_day_is_open() {
    let day = AvailabilityDay::default_for("2030-05-17");

    assert_eq!(
        serde_json::to_value(&day).unwrap(),
        json!({
            "date": "2030-05-17",
            "status": "available",
            "message": null,
            "timeSlots": []
        })
    );
}

#[test]
fn test_row_maps_to_camel_case_day() {
    let row = AvailabilityRow {
        date: "2024-01-02".to_string(),
        status: "unavailable".to_string(),
        message: Some("closed".to_string()),
        time_slots: Some(json!(["9am", "1pm"])),
    };

    let day = AvailabilityDay::from(row);

    assert_eq!(
        serde_json::to_value(&day).unwrap(),
        json!({
            "date": "2024-01-02",
            "status": "unavailable",
            "message": "closed",
            "timeSlots": ["9am", "1pm"]
        })
    );
}

#[rstest]
#[case::missing(None)]
#[case::null(Some(Value::Null))]
fn test_missing_slots_read_as_empty(#[case] time_slots: Option<Value>) {
    let row = AvailabilityRow {
        date: "2024-01-01".to_string(),
        status: "available".to_string(),
        message: None,
        time_slots,
    };

    assert_eq!(AvailabilityDay::from(row.clone()).time_slots, json!([]));
    assert_eq!(DayEntry::from(row).time_slots, json!([]));
}

#[test]
fn test_slots_pass_through_verbatim() {
    let slots = json!([{ "start": "09:00", "end": "10:30", "label": "morning" }, "odd"]);
    let row = AvailabilityRow {
        date: "2024-01-01".to_string(),
        status: "limited".to_string(),
        message: None,
        time_slots: Some(slots.clone()),
    };

    assert_eq!(AvailabilityDay::from(row).time_slots, slots);
}

#[test]
fn test_row_reads_snake_case_store_payload() {
    let row: AvailabilityRow = serde_json::from_value(json!({
        "date": "2024-01-01",
        "status": "available",
        "message": null,
        "time_slots": ["9am"]
    }))
    .unwrap();

    assert_eq!(row.time_slots, Some(json!(["9am"])));
}

#[test]
fn test_save_request_maps_to_snake_case_row() {
    let request: SaveAvailabilityRequest = serde_json::from_value(json!({
        "date": "2024-01-01",
        "status": "available",
        "message": "bring snacks",
        "timeSlots": ["9am", "10am"]
    }))
    .unwrap();

    let row = NewAvailabilityRow::from(request);

    assert_eq!(
        serde_json::to_value(&row).unwrap(),
        json!({
            "date": "2024-01-01",
            "status": "available",
            "message": "bring snacks",
            "time_slots": ["9am", "10am"]
        })
    );
}

#[test]
fn test_save_request_accepts_missing_fields() {
    let request: SaveAvailabilityRequest =
        serde_json::from_value(json!({ "date": "2024-01-01" })).unwrap();

    assert_eq!(
        NewAvailabilityRow::from(request),
        NewAvailabilityRow {
            date: Some(json!("2024-01-01")),
            ..NewAvailabilityRow::default()
        }
    );
}

#[test]
fn test_save_body_keeps_non_string_values() {
    let request = SaveAvailabilityRequest::from_body(json!({
        "date": "2030-01-01",
        "status": "available",
        "message": 42,
        "timeSlots": null
    }));

    assert_eq!(
        request,
        SaveAvailabilityRequest {
            date: Some(json!("2030-01-01")),
            status: Some(json!("available")),
            message: Some(json!(42)),
            time_slots: None,
        }
    );
}

#[rstest]
#[case::array(json!([{ "date": "2030-01-01" }]))]
#[case::string(json!("2030-01-01"))]
#[case::number(json!(7))]
#[case::null(Value::Null)]
fn test_save_body_that_is_not_an_object_has_no_fields(#[case] body: Value) {
    assert_eq!(
        SaveAvailabilityRequest::from_body(body),
        SaveAvailabilityRequest::default()
    );
}

#[test]
fn test_store_status_serialization() {
    assert_eq!(
        serde_json::to_value(StoreStatus::connected()).unwrap(),
        json!({ "status": "connected" })
    );
    assert_eq!(
        serde_json::to_value(StoreStatus::disconnected("relation \"availability\" does not exist"))
            .unwrap(),
        json!({
            "status": "disconnected",
            "error": "relation \"availability\" does not exist"
        })
    );
}
