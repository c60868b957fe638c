//! Marked code must behave exactly like unmarked code.

use semtag_macros::tagged;

#[tagged]
pub struct Event {
    #[semtag(current_time_millis)]
    pub created_at_millis: u64,
    pub name: String,
}

#[tagged(current_time_millis)]
pub fn fixed_timestamp() -> u64 {
    1_700_000_000_000
}

pub fn fixed_timestamp_plain() -> u64 {
    1_700_000_000_000
}

#[tagged]
pub fn clamp_to_epoch(#[semtag(current_time_millis)] raw_millis: i64) -> i64 {
    raw_millis.max(0)
}

#[tagged]
impl Event {
    #[semtag(current_time_millis)]
    pub fn created_at_millis(&self) -> u64 {
        self.created_at_millis
    }
}

#[test]
fn tagged_function_returns_same_value_as_plain() {
    assert_eq!(fixed_timestamp(), fixed_timestamp_plain());
    assert_eq!(fixed_timestamp(), 1_700_000_000_000);
}

#[test]
fn param_marker_does_not_change_behavior() {
    assert_eq!(clamp_to_epoch(-5), 0);
    assert_eq!(clamp_to_epoch(42), 42);
}

#[test]
fn field_and_method_markers_leave_struct_usable() {
    let event = Event {
        created_at_millis: 1_700_000_000_000,
        name: "deploy".to_string(),
    };
    assert_eq!(event.created_at_millis(), 1_700_000_000_000);
    assert_eq!(event.name, "deploy");
}
