//! Request parameters
//!
//! A [`ParameterSet`] keeps its entries sorted by name, so the order used to
//! compute a signature is the same order the parameters are written to the
//! wire, no matter in which order they were added.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::ValidationError;

/// Values that can be stored in a [`ParameterSet`]
///
/// `None` means "absent": the parameter is not stored and never sent.
pub trait ParameterValue {
    fn to_parameter(&self) -> Option<String>;
}

impl ParameterValue for str {
    fn to_parameter(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ParameterValue for String {
    fn to_parameter(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl ParameterValue for bool {
    fn to_parameter(&self) -> Option<String> {
        Some(if *self { "true" } else { "false" }.to_string())
    }
}

macro_rules! integer_parameter {
    ($($ty:ty),*) => {
        $(impl ParameterValue for $ty {
            fn to_parameter(&self) -> Option<String> {
                Some(self.to_string())
            }
        })*
    };
}

integer_parameter!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! float_parameter {
    ($($ty:ty),*) => {
        $(impl ParameterValue for $ty {
            fn to_parameter(&self) -> Option<String> {
                // Whole numbers keep one decimal ("2.0"), the rest use the shortest form
                if self.is_finite() && self.fract() == 0.0 {
                    Some(format!("{:.1}", self))
                } else {
                    Some(self.to_string())
                }
            }
        })*
    };
}

float_parameter!(f32, f64);

impl ParameterValue for Url {
    fn to_parameter(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

impl<T: ParameterValue> ParameterValue for Option<T> {
    fn to_parameter(&self) -> Option<String> {
        self.as_ref().and_then(ParameterValue::to_parameter)
    }
}

impl<T: ParameterValue + ?Sized> ParameterValue for &T {
    fn to_parameter(&self) -> Option<String> {
        (**self).to_parameter()
    }
}

/// Name-sorted request parameters with "omit if absent" semantics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: BTreeMap<String, String>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`, replacing any previous value
    ///
    /// Absent values are ignored and leave an existing entry untouched.
    pub fn add(&mut self, name: impl Into<String>, value: impl ParameterValue) -> &mut Self {
        if let Some(value) = value.to_parameter() {
            self.entries.insert(name.into(), value);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by name, as signed and as sent
    pub fn sorted_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// `application/x-www-form-urlencoded` rendering of [`Self::sorted_pairs`]
    pub fn to_form_urlencoded(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.sorted_pairs())
            .finish()
    }
}

/// ISO 639-1 language code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_lowercase()))
        } else {
            Err(ValidationError::invalid_value(
                "lang",
                code,
                "expected a two-letter ISO 639-1 code",
            ))
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ParameterValue for Language {
    fn to_parameter(&self) -> Option<String> {
        Some(self.0.clone())
    }
}
