//! Closed code tables for invoice type and status.
//!
//! Each table is a fieldless enum whose discriminant is the stored code.
//! [`CodeTable`] gives every table the same `code`/`name`/`from_code`
//! surface, so callers never need per-table helpers.

/// A closed set of coded values with uppercase display names.
pub trait CodeTable: Copy + Sized + 'static {
    /// Every variant, in code order.
    const ALL: &'static [Self];

    fn code(self) -> i16;

    fn name(self) -> &'static str;

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn from_code(code: i16) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.code() == code)
    }
}

/// Invoice type (`TipoFactura`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum InvoiceType {
    Debit = 1,
    Credit = 2,
}

impl CodeTable for InvoiceType {
    const ALL: &'static [Self] = &[Self::Debit, Self::Credit];

    fn code(self) -> i16 {
        self as i16
    }

    fn name(self) -> &'static str {
        match self {
            Self::Debit => "DEBITO",
            Self::Credit => "CREDITO",
        }
    }
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum InvoiceStatus {
    Issued = 1,
    Cancelled = 2,
}

impl CodeTable for InvoiceStatus {
    const ALL: &'static [Self] = &[Self::Issued, Self::Cancelled];

    fn code(self) -> i16 {
        self as i16
    }

    fn name(self) -> &'static str {
        match self {
            Self::Issued => "EMITIDA",
            Self::Cancelled => "CANCELADA",
        }
    }
}

/// Display name for `code`, falling back to `#<code>` when the table has no
/// such entry.
pub fn name_or_code<T: CodeTable>(code: i16) -> String {
    T::from_code(code)
        .map(|v| v.name().to_string())
        .unwrap_or_else(|| format!("#{}", code))
}
