//! Multi-schema immunization decoder.
//!
//! Records arrive as JSON under one of two incompatible FHIR releases. Both
//! put the vaccine code in `vaccineCode.coding[].code`, but they disagree on
//! the administration date field: DSTU2 uses `date`, R4 uses `recorded`.
//! [`decode`] dispatches on the record's declared [`SchemaVersion`] and
//! normalizes either shape into a [`NormalizedImmunization`].
//!
//! # Single-coding-entry policy
//!
//! Only index 0 of the coding list is consulted. A record whose relevant code
//! is not first in its coding list will never match. This is deliberate,
//! documented behavior; widening it to the full list is an open product
//! question, not a bug fix.
//!
//! Required fields are modeled as `Option` and checked explicitly, so a
//! payload missing any of them produces a typed [`DecodeError`] instead of a
//! panic - one bad record must never take down a scan.

use serde::Deserialize;

use crate::error::{DecodeCause, DecodeError, UNKNOWN_RESOURCE_TYPE};
use crate::record::{FhirDateTime, RawRecord, SchemaVersion};

// =============================================================================
// NORMALIZED FACT
// =============================================================================

/// What a successfully decoded record boils down to: the product code to
/// match on and the administration date to display. Transient value with no
/// identity beyond the scan that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedImmunization {
    pub product_code: String,
    pub occurred_on: FhirDateTime,
}

// =============================================================================
// WIRE SHAPES
// =============================================================================

// Minimal projections of the two external data contracts. Unknown fields are
// ignored; required fields stay Option so their absence is a typed failure.

#[derive(Debug, Deserialize)]
struct Coding {
    #[serde(default)]
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CodeableConcept {
    #[serde(default)]
    coding: Option<Vec<Coding>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Dstu2Immunization {
    #[serde(default)]
    resource_type: Option<String>,
    #[serde(default)]
    vaccine_code: Option<CodeableConcept>,
    #[serde(default)]
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct R4Immunization {
    #[serde(default)]
    resource_type: Option<String>,
    #[serde(default)]
    vaccine_code: Option<CodeableConcept>,
    #[serde(default)]
    recorded: Option<String>,
}

// =============================================================================
// DECODING
// =============================================================================

/// Decode one raw record into a normalized immunization fact.
///
/// Exhaustive over [`SchemaVersion`]; `Unrecognized` fails closed with
/// `UnsupportedVersion` before the payload is even looked at.
pub fn decode(raw: &RawRecord) -> Result<NormalizedImmunization, DecodeError> {
    match raw.schema_version() {
        SchemaVersion::Dstu2 => {
            let imm: Dstu2Immunization = parse_payload(raw.payload())?;
            normalize(imm.resource_type, imm.vaccine_code, imm.date, "date")
        }
        SchemaVersion::R4 => {
            let imm: R4Immunization = parse_payload(raw.payload())?;
            normalize(imm.resource_type, imm.vaccine_code, imm.recorded, "recorded")
        }
        SchemaVersion::Unrecognized => Err(DecodeError::new(
            UNKNOWN_RESOURCE_TYPE,
            DecodeCause::UnsupportedVersion(SchemaVersion::Unrecognized),
        )),
    }
}

fn parse_payload<'de, T: Deserialize<'de>>(payload: &'de [u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(payload).map_err(|err| {
        DecodeError::new(
            declared_resource_type(payload),
            DecodeCause::MalformedPayload(err.to_string()),
        )
    })
}

/// Best-effort read of the payload's `resourceType` for error reporting.
/// A payload that is not a JSON object at all reports as unknown.
fn declared_resource_type(payload: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(payload)
        .ok()
        .and_then(|value| value.get("resourceType")?.as_str().map(str::to_string))
        .unwrap_or_else(|| UNKNOWN_RESOURCE_TYPE.to_string())
}

fn normalize(
    resource_type: Option<String>,
    vaccine_code: Option<CodeableConcept>,
    date: Option<String>,
    date_field: &'static str,
) -> Result<NormalizedImmunization, DecodeError> {
    let resource_type = resource_type.unwrap_or_else(|| UNKNOWN_RESOURCE_TYPE.to_string());
    let fail = |cause| Err(DecodeError::new(resource_type.clone(), cause));

    let coding = match vaccine_code.and_then(|concept| concept.coding) {
        Some(coding) if !coding.is_empty() => coding,
        // Absent list and empty list report the same way.
        _ => return fail(DecodeCause::MissingField("vaccineCode.coding")),
    };

    // Single-coding-entry policy: index 0 only (see module docs).
    let product_code = match coding.into_iter().next().and_then(|entry| entry.code) {
        Some(code) => code,
        None => return fail(DecodeCause::MissingField("vaccineCode.coding[0].code")),
    };

    let date_text = match date {
        Some(text) => text,
        None => return fail(DecodeCause::MissingField(date_field)),
    };
    let occurred_on = match FhirDateTime::parse(&date_text) {
        Some(dt) => dt,
        None => return fail(DecodeCause::MalformedDate(date_text)),
    };

    Ok(NormalizedImmunization {
        product_code,
        occurred_on,
    })
}
