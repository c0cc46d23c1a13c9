//! Unit tests for the import context.


use crate::import::domain::ImportRow;
use serde_json::Value;

pub(super) fn row(value: Value) -> ImportRow {
    serde_json::from_value(value).expect("object row")
}
