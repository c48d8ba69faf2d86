//! Form field names and per-field storage

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Error returned when a raw field name is not part of the form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldNameError {
    #[error("Unknown form field '{0}'")]
    Unknown(String),
}

/// Kind of input a field represents, mirroring the HTML input types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Email,
    Tel,
    Password,
}

impl InputKind {
    /// Whether the value should be hidden when rendered
    pub fn is_masked(self) -> bool {
        matches!(self, InputKind::Password)
    }

    /// Whether a typed character is accepted by this kind of input.
    ///
    /// This only filters keystrokes; validity is decided by the validator.
    pub fn accepts(self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        match self {
            InputKind::Number => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
            InputKind::Tel => c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'),
            InputKind::Text | InputKind::Email | InputKind::Password => true,
        }
    }
}

/// The fixed set of fields collected by the form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FirstName,
    LastName,
    Age,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub const COUNT: usize = 7;

    pub const ALL: [FieldName; FieldName::COUNT] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Age,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Position of the field in display order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Field at a display position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The camelCase name used as the field key
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Age => "age",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human readable label shown on the input
    pub fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First name",
            FieldName::LastName => "Last name",
            FieldName::Age => "Age",
            FieldName::Email => "Email",
            FieldName::Phone => "Phone number",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Confirm password",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            FieldName::FirstName | FieldName::LastName => InputKind::Text,
            FieldName::Age => InputKind::Number,
            FieldName::Email => InputKind::Email,
            FieldName::Phone => InputKind::Tel,
            FieldName::Password | FieldName::ConfirmPassword => InputKind::Password,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FieldNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FieldNameError::Unknown(s.to_string()))
    }
}

/// A total mapping from every [`FieldName`] to a value.
///
/// Every field always has a slot, so lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldMap<T> {
    slots: [T; FieldName::COUNT],
}

impl<T> FieldMap<T> {
    /// Build a map by computing the value of each field
    pub fn from_fn(mut f: impl FnMut(FieldName) -> T) -> Self {
        Self {
            slots: std::array::from_fn(|i| f(FieldName::ALL[i])),
        }
    }

    pub fn get(&self, name: FieldName) -> &T {
        &self.slots[name.index()]
    }

    pub fn get_mut(&mut self, name: FieldName) -> &mut T {
        &mut self.slots[name.index()]
    }

    /// Replace the value of a field, returning the previous one
    pub fn set(&mut self, name: FieldName, value: T) -> T {
        std::mem::replace(&mut self.slots[name.index()], value)
    }

    /// Iterate over all fields in display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &T)> {
        FieldName::ALL.into_iter().zip(self.slots.iter())
    }
}

impl<T> Index<FieldName> for FieldMap<T> {
    type Output = T;

    fn index(&self, name: FieldName) -> &T {
        self.get(name)
    }
}

impl<T> IndexMut<FieldName> for FieldMap<T> {
    fn index_mut(&mut self, name: FieldName) -> &mut T {
        self.get_mut(name)
    }
}

impl<T: Serialize> Serialize for FieldMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FieldName::COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name.as_str(), value)?;
        }
        map.end()
    }
}
