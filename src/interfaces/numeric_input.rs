// ============================================================================
// Numeric Input Interface
// Anything an adapter can hand to the converter as a number
// ============================================================================

use crate::numeric::{NumericResult, Precise};
use rust_decimal::Decimal;

/// A value that can be read as an exact decimal.
///
/// Adapters pull numbers out of JSON as strings, native integers, floats or
/// `rust_decimal::Decimal`; the converter accepts all of them through this
/// trait so no caller has to stringify first.
pub trait NumericInput {
    /// Exact decimal reading of `self`.
    ///
    /// # Errors
    /// Returns `Parse` when the value is not a finite decimal.
    fn to_precise(&self) -> NumericResult<Precise>;

    /// True when the value is present but carries no number at all, like an
    /// empty string field. Blank values are handled as absent.
    fn is_blank(&self) -> bool {
        false
    }
}

impl NumericInput for str {
    fn to_precise(&self) -> NumericResult<Precise> {
        self.parse()
    }

    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl NumericInput for String {
    fn to_precise(&self) -> NumericResult<Precise> {
        self.parse()
    }

    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl NumericInput for Precise {
    fn to_precise(&self) -> NumericResult<Precise> {
        Ok(self.clone())
    }
}

impl NumericInput for Decimal {
    fn to_precise(&self) -> NumericResult<Precise> {
        Ok(Precise::from_decimal(*self))
    }
}

impl NumericInput for f64 {
    fn to_precise(&self) -> NumericResult<Precise> {
        Precise::from_f64(*self)
    }
}

macro_rules! impl_numeric_input_for_int {
    ($($t:ty),*) => {
        $(
            impl NumericInput for $t {
                fn to_precise(&self) -> NumericResult<Precise> {
                    Ok(Precise::from_integer(*self))
                }
            }
        )*
    };
}

impl_numeric_input_for_int!(i32, i64, i128, u32, u64, u128);

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_precise(&self) -> NumericResult<Precise> {
        (**self).to_precise()
    }

    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

#[cfg(feature = "serde")]
impl NumericInput for serde_json::Value {
    fn to_precise(&self) -> NumericResult<Precise> {
        use serde_json::Value;

        match self {
            Value::String(s) => s.parse(),
            Value::Number(n) => n.to_string().parse(),
            other => Err(crate::numeric::NumericError::parse(&other.to_string())),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            serde_json::Value::Null => true,
            serde_json::Value::String(s) => s.is_blank(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_inputs() {
        assert_eq!("123.45".to_precise().unwrap().to_string(), "123.45");
        assert_eq!(String::from("-1e-3").to_precise().unwrap().to_string(), "-0.001");
        assert!("12,5".to_precise().is_err());
    }

    #[test]
    fn test_native_inputs() {
        assert_eq!(42i64.to_precise().unwrap().to_string(), "42");
        assert_eq!(u128::MAX.to_precise().unwrap().to_string(), u128::MAX.to_string());
        assert_eq!(0.1f64.to_precise().unwrap().to_string(), "0.1");
        assert!(f64::NAN.to_precise().is_err());
        assert_eq!(
            Decimal::new(-5, 3).to_precise().unwrap().to_string(),
            "-0.005"
        );
    }

    #[test]
    fn test_blank_inputs() {
        assert!("".is_blank());
        assert!(" \t ".is_blank());
        assert!(String::new().is_blank());
        assert!((&"").is_blank());
        assert!(!"0".is_blank());
        assert!(!0i64.is_blank());
        assert!(!f64::NAN.is_blank());
    }

    #[test]
    fn test_reference_blanket() {
        let s = String::from("7.5");
        let r: &String = &s;
        assert_eq!(r.to_precise().unwrap().to_string(), "7.5");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_inputs() {
        use serde_json::json;

        assert_eq!(json!("0.0001").to_precise().unwrap().to_string(), "0.0001");
        assert_eq!(json!(12345).to_precise().unwrap().to_string(), "12345");
        assert!(json!(null).to_precise().is_err());
        assert!(json!([1]).to_precise().is_err());
        assert!(json!(null).is_blank());
        assert!(json!("").is_blank());
        assert!(!json!(0).is_blank());
    }
}
