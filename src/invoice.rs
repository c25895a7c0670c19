//! # Invoice Snapshot
//!
//! The fully resolved invoice handed to the renderer: header, totals and
//! line items, already joined with type, status and register names.
//!
//! Snapshots are deserialized from the camelCase JSON produced by the
//! invoicing side, used for one request and dropped. Amounts are displayed
//! verbatim; nothing here recomputes totals.
//!
//! ```
//! use ticketera::invoice::PrintRequest;
//!
//! let json = r#"{
//!   "ok": true,
//!   "data": {
//!     "id": "6f3d4742-0b6b-4860-bd74-6084bb45782a",
//!     "typeId": 1, "statusId": 1,
//!     "registerId": "0768bd87-b1f6-4843-8ef1-08de3454633a",
//!     "userId": "0ff341fc-835d-4d6a-685f-08de31f4f351",
//!     "issuedAt": "2025-12-05T20:37:27",
//!     "total": 95, "subtotal": 80.51, "tax": 14.49,
//!     "type": { "id": 1, "name": "DEBITO" },
//!     "status": { "id": 1, "name": "EMITIDA" },
//!     "register": { "id": "0768bd87-b1f6-4843-8ef1-08de3454633a", "code": "001", "name": "001-Diciembre" },
//!     "lines": [{
//!       "productId": "002", "productName": "Chocolate Embajador", "quantity": 1,
//!       "taxPercent": 18, "unitPrice": 95, "total": 95, "subtotal": 80.51, "tax": 14.49
//!     }]
//!   }
//! }"#;
//!
//! let request: PrintRequest = serde_json::from_str(json).unwrap();
//! let invoice = request.snapshot().unwrap();
//! assert_eq!(invoice.invoice_number(), "6F3D4742");
//! ```

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{self, InvoiceStatus, InvoiceType};
use crate::error::{TicketError, TicketResult};

/// Request envelope: `{ ok, data }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrintRequest {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub data: Option<InvoiceSnapshot>,
}

impl PrintRequest {
    pub fn new(data: InvoiceSnapshot) -> Self {
        Self {
            ok: true,
            data: Some(data),
        }
    }

    /// The snapshot, if it is present and has at least one line item.
    ///
    /// # Errors
    ///
    /// [`TicketError::InvalidInvoice`] when `data` is missing or `lines` is
    /// empty.
    pub fn snapshot(&self) -> TicketResult<&InvoiceSnapshot> {
        let invoice = self
            .data
            .as_ref()
            .ok_or_else(|| TicketError::InvalidInvoice("invoice data is required".into()))?;
        invoice.validate()?;
        Ok(invoice)
    }
}

/// Code plus display name, as joined from a lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub id: i16,
    #[serde(default)]
    pub name: String,
}

/// Cash register (caja) the invoice was issued on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Register {
    #[serde(default)]
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

/// One product entry with its own price and tax breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub tax_percent: Decimal,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub subtotal: Decimal,
    pub tax: Decimal,
}

/// Immutable invoice snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSnapshot {
    pub id: Uuid,
    #[serde(default)]
    pub type_id: i16,
    #[serde(default)]
    pub status_id: i16,
    #[serde(default)]
    pub register_id: Uuid,
    #[serde(default)]
    pub user_id: Uuid,
    /// Wall-clock time of issue. An offset or `Z`, when present, is dropped.
    #[serde(deserialize_with = "wall_clock::deserialize")]
    pub issued_at: NaiveDateTime,
    pub total: Decimal,
    pub subtotal: Decimal,
    pub tax: Decimal,
    #[serde(rename = "type")]
    pub invoice_type: Descriptor,
    pub status: Descriptor,
    pub register: Register,
    #[serde(default)]
    pub lines: Vec<LineItem>,
}

impl InvoiceSnapshot {
    /// Reject snapshots that cannot be rendered.
    ///
    /// # Errors
    ///
    /// [`TicketError::InvalidInvoice`] when there are no line items or a
    /// line has a zero quantity.
    pub fn validate(&self) -> TicketResult<()> {
        if self.lines.is_empty() {
            return Err(TicketError::InvalidInvoice(
                "invoice must have at least one line item".into(),
            ));
        }
        if let Some(item) = self.lines.iter().find(|l| l.quantity == 0) {
            return Err(TicketError::InvalidInvoice(format!(
                "line item {:?} must have a positive quantity",
                item.product_name
            )));
        }
        Ok(())
    }

    /// Human invoice number: first 8 hex digits of the id, uppercased.
    pub fn invoice_number(&self) -> String {
        let simple = self.id.simple().to_string();
        simple[..8].to_uppercase()
    }

    /// Type name, or the catalog name when the snapshot carries none.
    pub fn type_name(&self) -> String {
        non_blank(&self.invoice_type.name)
            .unwrap_or_else(|| catalog::name_or_code::<InvoiceType>(self.invoice_type.id))
    }

    /// Status name, or the catalog name when the snapshot carries none.
    pub fn status_name(&self) -> String {
        non_blank(&self.status.name)
            .unwrap_or_else(|| catalog::name_or_code::<InvoiceStatus>(self.status.id))
    }
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Accepts RFC 3339 timestamps with an offset (keeping their local
/// wall-clock time) as well as offset-less ISO 8601.
mod wall_clock {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, de};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(dt.naive_local());
        }
        raw.parse::<NaiveDateTime>().map_err(de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    pub fn line(name: &str, total_cents: i64) -> LineItem {
        LineItem {
            product_id: "002".into(),
            product_name: name.into(),
            quantity: 1,
            tax_percent: Decimal::new(18, 0),
            unit_price: Decimal::new(total_cents, 2),
            total: Decimal::new(total_cents, 2),
            subtotal: Decimal::new(8051, 2),
            tax: Decimal::new(1449, 2),
        }
    }

    pub fn sample_invoice() -> InvoiceSnapshot {
        InvoiceSnapshot {
            id: Uuid::parse_str("6f3d4742-0b6b-4860-bd74-6084bb45782a").unwrap(),
            type_id: 1,
            status_id: 1,
            register_id: Uuid::parse_str("0768bd87-b1f6-4843-8ef1-08de3454633a").unwrap(),
            user_id: Uuid::parse_str("0ff341fc-835d-4d6a-685f-08de31f4f351").unwrap(),
            issued_at: NaiveDate::from_ymd_opt(2025, 12, 5)
                .unwrap()
                .and_hms_opt(20, 37, 27)
                .unwrap(),
            total: Decimal::new(95, 0),
            subtotal: Decimal::new(8051, 2),
            tax: Decimal::new(1449, 2),
            invoice_type: Descriptor {
                id: 1,
                name: "DEBITO".into(),
            },
            status: Descriptor {
                id: 1,
                name: "EMITIDA".into(),
            },
            register: Register {
                id: Uuid::parse_str("0768bd87-b1f6-4843-8ef1-08de3454633a").unwrap(),
                code: "001".into(),
                name: "001-Diciembre".into(),
            },
            lines: vec![line("Chocolate Embajador", 9500)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_invoice;
    use super::*;

    #[test]
    fn test_invoice_number() {
        assert_eq!(sample_invoice().invoice_number(), "6F3D4742");
    }

    #[test]
    fn test_validate_rejects_empty_lines() {
        let mut invoice = sample_invoice();
        invoice.lines.clear();
        let err = invoice.validate().unwrap_err();
        assert!(matches!(err, TicketError::InvalidInvoice(_)));
    }

    #[test]
    fn test_request_without_data() {
        let request: PrintRequest = serde_json::from_str(r#"{ "ok": false }"#).unwrap();
        assert!(matches!(
            request.snapshot(),
            Err(TicketError::InvalidInvoice(_))
        ));
    }

    #[test]
    fn test_missing_lines_default_to_empty() {
        let mut value = serde_json::to_value(sample_invoice()).unwrap();
        value.as_object_mut().unwrap().remove("lines");
        let invoice: InvoiceSnapshot = serde_json::from_value(value).unwrap();
        assert!(invoice.lines.is_empty());
        assert!(invoice.validate().is_err());
    }

    #[test]
    fn test_blank_names_fall_back_to_catalog() {
        let mut invoice = sample_invoice();
        invoice.invoice_type = Descriptor { id: 2, name: "".into() };
        invoice.status = Descriptor { id: 5, name: "  ".into() };
        assert_eq!(invoice.type_name(), "CREDITO");
        assert_eq!(invoice.status_name(), "#5");
    }

    #[test]
    fn test_issued_at_accepts_utc_and_offsets() {
        let expected = sample_invoice().issued_at;
        for raw in [
            "2025-12-05T20:37:27",
            "2025-12-05T20:37:27Z",
            "2025-12-05T20:37:27-04:00",
            "2025-12-05T20:37:27.120-04:00",
        ] {
            let mut value = serde_json::to_value(sample_invoice()).unwrap();
            value["issuedAt"] = serde_json::Value::from(raw);
            let invoice: InvoiceSnapshot = serde_json::from_value(value).unwrap();
            assert_eq!(
                invoice.issued_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                expected.format("%Y-%m-%d %H:%M:%S").to_string(),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_issued_at_rejects_garbage() {
        let mut value = serde_json::to_value(sample_invoice()).unwrap();
        value["issuedAt"] = serde_json::Value::from("ayer");
        assert!(serde_json::from_value::<InvoiceSnapshot>(value).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        let mut invoice = sample_invoice();
        invoice.lines.push(fixtures::line("Regalo", 0));
        invoice.lines[1].quantity = 0;
        let err = invoice.validate().unwrap_err();
        assert!(matches!(err, TicketError::InvalidInvoice(ref m) if m.contains("Regalo")));
    }

    #[test]
    fn test_camel_case_wire_names() {
        let value = serde_json::to_value(sample_invoice()).unwrap();
        assert!(value.get("issuedAt").is_some());
        assert!(value.get("type").is_some());
        assert!(value["lines"][0].get("productName").is_some());
        assert!(value["lines"][0].get("taxPercent").is_some());
    }
}
