//! Reusable field validators
//!
//! These build the checks that resource chains are assembled from. Each takes
//! an accessor into the payload so the same check works for dishes and orders.

use super::chain::Submission;
use crate::core::entity::Record;
use crate::core::error::ApiError;
use crate::storage::Records;
use serde_json::Value;

/// JavaScript-style truthiness, used by presence checks
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// `value` as an integer strictly greater than 0
///
/// Accepts integral floats (`3.0`), rejects fractions, strings and booleans.
pub fn as_positive_integer(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return (n > 0).then_some(n);
    }
    let f = value.as_f64()?;
    (f > 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}

/// The string inside an untyped payload field, if it is one
pub fn as_text(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}

/// Whether `value` is a JSON number with no fractional part
pub fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64() || value.as_f64().is_some_and(|f| f.fract() == 0.0)
}

/// Validator: field is present and truthy
///
/// Fails with `<resource> must include a <field>`.
pub fn required<P, R, T, F>(
    resource: &'static str,
    field: &'static str,
    get: F,
) -> impl for<'a> Fn(&Submission<'a, P, R>) -> Result<(), ApiError> + Send + Sync + 'static
where
    P: 'static,
    R: 'static,
    T: Truthy + ?Sized + 'static,
    F: Fn(&P) -> &T + Send + Sync + 'static,
{
    move |submission: &Submission<'_, P, R>| {
        if get(submission.payload).is_truthy() {
            Ok(())
        } else {
            Err(ApiError::Validation(format!(
                "{resource} must include a {field}"
            )))
        }
    }
}

/// Validator: field is a string holding something other than whitespace
///
/// Non-string values fail too. Fails with `<resource> must include a <field>`.
pub fn not_blank<P, R, F>(
    resource: &'static str,
    field: &'static str,
    get: F,
) -> impl for<'a> Fn(&Submission<'a, P, R>) -> Result<(), ApiError> + Send + Sync + 'static
where
    P: 'static,
    R: 'static,
    F: Fn(&P) -> &Option<Value> + Send + Sync + 'static,
{
    move |submission: &Submission<'_, P, R>| match as_text(get(submission.payload)) {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(ApiError::Validation(format!(
            "{resource} must include a {field}"
        ))),
    }
}

/// Validator: numeric field is an integer greater than 0
pub fn positive_integer<P, R, F>(
    message: &'static str,
    get: F,
) -> impl for<'a> Fn(&Submission<'a, P, R>) -> Result<(), ApiError> + Send + Sync + 'static
where
    P: 'static,
    R: 'static,
    F: Fn(&P) -> &Option<Value> + Send + Sync + 'static,
{
    move |submission: &Submission<'_, P, R>| {
        match get(submission.payload).as_ref().and_then(as_positive_integer) {
            Some(_) => Ok(()),
            None => Err(ApiError::Validation(message.to_string())),
        }
    }
}

/// Validator: the payload id, when given, equals the route id
///
/// An absent or falsy payload id passes. Fails with
/// `<resource> id does not match route id. <resource>: <payload id>, Route: <route id>`.
pub fn id_matches_route<P, R, F>(
    resource: &'static str,
    get: F,
) -> impl for<'a> Fn(&Submission<'a, P, R>) -> Result<(), ApiError> + Send + Sync + 'static
where
    P: 'static,
    R: 'static,
    F: Fn(&P) -> &Option<Value> + Send + Sync + 'static,
{
    move |submission: &Submission<'_, P, R>| {
        let (Some(payload_id), Some(route_id)) = (get(submission.payload), submission.route_id)
        else {
            return Ok(());
        };
        if !payload_id.is_truthy() || payload_id.as_str() == Some(route_id) {
            return Ok(());
        }
        let shown = match payload_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Err(ApiError::Conflict(format!(
            "{resource} id does not match route id. {resource}: {shown}, Route: {route_id}"
        )))
    }
}

/// Existence lookup: linear search of the store by id
///
/// Returns the record's position along with the record, so later checks and
/// the handler work on it without searching again.
pub fn find_existing<'s, R: Record>(
    records: &'s Records<R>,
    id: &str,
) -> Result<(usize, &'s R), ApiError> {
    records
        .iter()
        .enumerate()
        .find(|(_, record)| record.id() == id)
        .ok_or_else(|| ApiError::not_found(R::kind(), id))
}
