//! Declarative field validation helpers.
//!
//! Every resource payload is checked through these helpers before any
//! store interaction: a payload that fails here produces no side
//! effects. String fields are trimmed, numeric fields are coerced and
//! bounded, and tenant references are checked for presence before
//! format.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{ScolarisError, ScolarisResult};

/// Required string field: present and non-empty after trimming.
pub fn required_text(field: &'static str, value: Option<String>) -> ScolarisResult<String> {
    match value {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Err(ScolarisError::MissingField { field })
            } else {
                Ok(trimmed.to_string())
            }
        }
        None => Err(ScolarisError::MissingField { field }),
    }
}

/// Optional string field: trimmed when present, dropped when blank.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Patch string field: a present value is trimmed and must not become
/// empty, so an update cannot produce a record creation would refuse.
pub fn patch_text(field: &'static str, value: Option<String>) -> ScolarisResult<Option<String>> {
    value
        .map(|raw| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Err(ScolarisError::InvalidValue {
                    field,
                    reason: "must not be empty".into(),
                })
            } else {
                Ok(trimmed.to_string())
            }
        })
        .transpose()
}

/// Identifier format check shared by path, query, and body references.
pub fn ident(value: &str) -> ScolarisResult<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|_| ScolarisError::InvalidIdentifier {
        value: value.to_string(),
    })
}

/// Required tenant reference: presence is checked before format.
pub fn tenant_ref(field: &'static str, value: Option<String>) -> ScolarisResult<Uuid> {
    let raw = match value {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Err(ScolarisError::MissingField { field }),
    };
    ident(&raw)
}

/// Optional identifier reference (e.g. a subject's teacher).
pub fn optional_ref(value: Option<String>) -> ScolarisResult<Option<Uuid>> {
    match optional_text(value) {
        Some(raw) => ident(&raw).map(Some),
        None => Ok(None),
    }
}

/// Required integer field with a lower bound of zero.
pub fn non_negative_int(field: &'static str, value: Option<i64>) -> ScolarisResult<u32> {
    let raw = value.ok_or(ScolarisError::MissingField { field })?;
    u32::try_from(raw).map_err(|_| ScolarisError::InvalidValue {
        field,
        reason: "must be a non-negative integer".into(),
    })
}

/// Patch integer variant of [`non_negative_int`].
pub fn patch_non_negative_int(
    field: &'static str,
    value: Option<i64>,
) -> ScolarisResult<Option<u32>> {
    value
        .map(|raw| {
            u32::try_from(raw).map_err(|_| ScolarisError::InvalidValue {
                field,
                reason: "must be a non-negative integer".into(),
            })
        })
        .transpose()
}

/// Required numeric field with a lower bound of zero.
pub fn non_negative_number(field: &'static str, value: Option<f64>) -> ScolarisResult<f64> {
    let raw = value.ok_or(ScolarisError::MissingField { field })?;
    bounded_number(field, raw)
}

/// Patch numeric variant of [`non_negative_number`].
pub fn patch_non_negative_number(
    field: &'static str,
    value: Option<f64>,
) -> ScolarisResult<Option<f64>> {
    value.map(|raw| bounded_number(field, raw)).transpose()
}

fn bounded_number(field: &'static str, raw: f64) -> ScolarisResult<f64> {
    if raw.is_finite() && raw >= 0.0 {
        Ok(raw)
    } else {
        Err(ScolarisError::InvalidValue {
            field,
            reason: "must be a non-negative number".into(),
        })
    }
}

/// Required datetime field, coerced from an RFC 3339 string.
pub fn datetime(field: &'static str, value: Option<String>) -> ScolarisResult<DateTime<Utc>> {
    let raw = required_text(field, value)?;
    parse_datetime(field, &raw)
}

/// Patch datetime variant of [`datetime`].
pub fn patch_datetime(
    field: &'static str,
    value: Option<String>,
) -> ScolarisResult<Option<DateTime<Utc>>> {
    match optional_text(value) {
        Some(raw) => parse_datetime(field, &raw).map(Some),
        None => Ok(None),
    }
}

fn parse_datetime(field: &'static str, raw: &str) -> ScolarisResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ScolarisError::InvalidValue {
            field,
            reason: "expected an RFC 3339 datetime".into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims() {
        let value = required_text("name", Some("  Books  ".into())).unwrap();
        assert_eq!(value, "Books");
    }

    #[test]
    fn required_text_rejects_absent_and_blank() {
        assert!(matches!(
            required_text("name", None),
            Err(ScolarisError::MissingField { field: "name" })
        ));
        assert!(matches!(
            required_text("name", Some("   ".into())),
            Err(ScolarisError::MissingField { field: "name" })
        ));
    }

    #[test]
    fn optional_text_drops_blank() {
        assert_eq!(optional_text(Some("  ".into())), None);
        assert_eq!(optional_text(Some(" note ".into())), Some("note".into()));
    }

    #[test]
    fn patch_text_rejects_explicit_empty() {
        assert!(matches!(
            patch_text("name", Some("".into())),
            Err(ScolarisError::InvalidValue { field: "name", .. })
        ));
        assert_eq!(patch_text("name", None).unwrap(), None);
    }

    #[test]
    fn tenant_ref_checks_presence_before_format() {
        assert!(matches!(
            tenant_ref("school_id", None),
            Err(ScolarisError::MissingField { field: "school_id" })
        ));
        assert!(matches!(
            tenant_ref("school_id", Some("not-an-id".into())),
            Err(ScolarisError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn ident_accepts_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(ident(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn non_negative_int_rejects_negative() {
        assert!(matches!(
            non_negative_int("quantity", Some(-1)),
            Err(ScolarisError::InvalidValue { field: "quantity", .. })
        ));
        assert_eq!(non_negative_int("quantity", Some(7)).unwrap(), 7);
    }

    #[test]
    fn non_negative_number_rejects_negative_and_nan() {
        assert!(non_negative_number("purchase_price", Some(-0.5)).is_err());
        assert!(non_negative_number("purchase_price", Some(f64::NAN)).is_err());
        assert_eq!(
            non_negative_number("purchase_price", Some(12.5)).unwrap(),
            12.5
        );
    }

    #[test]
    fn datetime_parses_rfc3339() {
        let parsed = datetime("purchase_date", Some("2024-03-01T10:00:00Z".into())).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T10:00:00+00:00");
        assert!(matches!(
            datetime("purchase_date", Some("yesterday".into())),
            Err(ScolarisError::InvalidValue { field: "purchase_date", .. })
        ));
    }
}
