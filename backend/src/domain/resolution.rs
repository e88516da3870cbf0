//! Shape resolution of upstream payloads.
//!
//! Some DB Handler routes signal absence with HTTP 404, others answer 200
//! with a `{"detail": "..."}` body. A payload is therefore checked against
//! an ordered list of candidate shapes: the expected resource first, then
//! the not-found marker. The first shape that matches decides the outcome;
//! when none does, the failures of every attempt are reported together.
//!
//! List payloads are validated element by element and all-or-nothing: the
//! first invalid element rejects the whole list.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::ResourceRef;

/// Minimal not-found shape some upstream routes answer with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbsenceMarker {
    /// Upstream explanation, logged but not forwarded.
    pub detail: String,
}

/// Outcome of resolving one payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedResource<T> {
    /// The payload matched the resource shape.
    Found(T),
    /// The payload matched the not-found marker.
    NotFound(ResourceRef),
    /// The payload matched no candidate shape.
    Malformed(String),
}

/// A candidate shape that matched.
enum Matched<T> {
    Resource(T),
    Absent(AbsenceMarker),
}

/// One candidate: a label for diagnostics plus its decoder.
type Attempt<T> = (&'static str, fn(&Value) -> Result<Matched<T>, String>);

/// Resolve an object payload against `T`, falling back to the marker.
///
/// # Examples
/// ```
/// use events_gateway::domain::{ResourceRef, ValidatedResource, resolve};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Event { id: i64 }
///
/// let event = ResourceRef::new("event", 1);
/// assert_eq!(
///     resolve::<Event>(&json!({"id": 1}), &event),
///     ValidatedResource::Found(Event { id: 1 })
/// );
/// assert_eq!(
///     resolve::<Event>(&json!({"detail": "not found"}), &event),
///     ValidatedResource::NotFound(event.clone())
/// );
/// assert!(matches!(
///     resolve::<Event>(&json!({"unexpected": true}), &event),
///     ValidatedResource::Malformed(_)
/// ));
/// ```
pub fn resolve<T: DeserializeOwned>(body: &Value, resource: &ResourceRef) -> ValidatedResource<T> {
    let attempts: [Attempt<T>; 2] = [
        ("resource", decode_resource::<T>),
        ("not-found marker", decode_absence::<T>),
    ];
    resolve_with(body, resource, &attempts)
}

/// Resolve an array payload, validating every element against `T`.
pub fn resolve_list<T: DeserializeOwned>(
    body: &Value,
    resource: &ResourceRef,
) -> ValidatedResource<Vec<T>> {
    let attempts: [Attempt<Vec<T>>; 2] = [
        ("resource list", decode_items::<T>),
        ("not-found marker", decode_absence::<Vec<T>>),
    ];
    resolve_with(body, resource, &attempts)
}

fn resolve_with<T>(
    body: &Value,
    resource: &ResourceRef,
    attempts: &[Attempt<T>],
) -> ValidatedResource<T> {
    let mut failures = Vec::with_capacity(attempts.len());
    for (shape, attempt) in attempts {
        match attempt(body) {
            Ok(Matched::Resource(value)) => return ValidatedResource::Found(value),
            Ok(Matched::Absent(marker)) => {
                tracing::debug!(
                    resource = %resource,
                    detail = %marker.detail,
                    "upstream reported absence in body"
                );
                return ValidatedResource::NotFound(resource.clone());
            }
            Err(cause) => failures.push(format!("{shape}: {cause}")),
        }
    }
    ValidatedResource::Malformed(format!(
        "payload for {resource} matched no expected shape ({})",
        failures.join("; ")
    ))
}

fn decode_resource<T: DeserializeOwned>(body: &Value) -> Result<Matched<T>, String> {
    T::deserialize(body)
        .map(Matched::Resource)
        .map_err(|err| err.to_string())
}

fn decode_items<T: DeserializeOwned>(body: &Value) -> Result<Matched<Vec<T>>, String> {
    let items = body
        .as_array()
        .ok_or_else(|| format!("expected a JSON array, found {}", json_kind(body)))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| T::deserialize(item).map_err(|err| format!("item {index}: {err}")))
        .collect::<Result<Vec<_>, _>>()
        .map(Matched::Resource)
}

fn decode_absence<T>(body: &Value) -> Result<Matched<T>, String> {
    AbsenceMarker::deserialize(body)
        .map(Matched::Absent)
        .map_err(|err| err.to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
