//! Tagged results for recoverable layout steps.

use std::fmt;

/// Why a layout step fell back to a reduced result.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DegradeReason {
    /// Wrapping was asked for a zero character budget.
    ZeroWidth,
    /// Line height or start position was not a positive finite number.
    InvalidGeometry { line_height: f32, start_y: f32 },
    /// Required column widths do not fit the printable width.
    ColumnsExceedWidth { required: f32, available: f32 },
    /// A single table row is taller than an empty page body.
    RowExceedsPage { row: usize, height: f32, available: f32 },
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "wrap width is zero"),
            Self::InvalidGeometry {
                line_height,
                start_y,
            } => write!(
                f,
                "invalid geometry (line height {line_height}, start {start_y})"
            ),
            Self::ColumnsExceedWidth {
                required,
                available,
            } => write!(
                f,
                "table needs {required:.1}pt but only {available:.1}pt are available"
            ),
            Self::RowExceedsPage {
                row,
                height,
                available,
            } => write!(
                f,
                "row {row} is {height:.1}pt tall, page body holds {available:.1}pt"
            ),
        }
    }
}

/// Result of a step that never fails outright.
///
/// `Degraded` still carries a usable value, so callers can keep going
/// and report the reason separately.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Ok(T),
    Degraded { value: T, reason: DegradeReason },
}

impl<T> Outcome<T> {
    pub fn degraded(value: T, reason: DegradeReason) -> Self {
        Self::Degraded { value, reason }
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Ok(value) | Self::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Ok(value) | Self::Degraded { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn reason(&self) -> Option<&DegradeReason> {
        match self {
            Self::Ok(_) => None,
            Self::Degraded { reason, .. } => Some(reason),
        }
    }

    /// Split into the value and the optional reason.
    pub fn into_parts(self) -> (T, Option<DegradeReason>) {
        match self {
            Self::Ok(value) => (value, None),
            Self::Degraded { value, reason } => (value, Some(reason)),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Degraded { value, reason } => Outcome::Degraded {
                value: f(value),
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keeps_reason() {
        let out = Outcome::degraded(2, DegradeReason::ZeroWidth).map(|v| v * 10);
        assert_eq!(out.value(), &20);
        assert_eq!(out.reason(), Some(&DegradeReason::ZeroWidth));
    }

    #[test]
    fn ok_has_no_reason() {
        let (value, reason) = Outcome::Ok("x").into_parts();
        assert_eq!(value, "x");
        assert!(reason.is_none());
    }
}
