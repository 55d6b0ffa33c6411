//! Integer arithmetic tools (`add`, `subtract`).
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};

pub const ADD_TOOL_ID: &str = "add";
pub const SUBTRACT_TOOL_ID: &str = "subtract";

/// Input for both arithmetic tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ArithmeticRequest {
    /// First operand (minuend for `subtract`).
    pub a: i64,
    /// Second operand (subtrahend for `subtract`).
    pub b: i64,
}

/// Integer result wrapped as structured content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ArithmeticResponse {
    #[serde(serialize_with = "serialize_json_integer")]
    pub result: i128,
}

/// `a + b`, widened so no 64-bit input pair can overflow.
pub fn add(a: i64, b: i64) -> i128 {
    i128::from(a) + i128::from(b)
}

/// `a - b`, widened like [`add`].
pub fn subtract(a: i64, b: i64) -> i128 {
    i128::from(a) - i128::from(b)
}

/// Write `value` as a JSON integer when `i64` or `u64` can hold it.
///
/// `serde_json::Value` has no wider integer, so the few results below
/// `i64::MIN` go out as the nearest `f64`.
fn serialize_json_integer<S>(value: &i128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if let Ok(value) = i64::try_from(*value) {
        serializer.serialize_i64(value)
    } else if let Ok(value) = u64::try_from(*value) {
        serializer.serialize_u64(value)
    } else {
        serializer.serialize_f64(*value as f64)
    }
}
