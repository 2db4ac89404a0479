//! GST state codes.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A two-digit GST state code as it appears in a GSTIN prefix.
///
/// Covers the published jurisdiction list: 01-38 for states and union
/// territories, 97 for Other Territory, 99 for Centre Jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StateCode(u8);

impl StateCode {
    /// Creates a state code, rejecting anything off the published list.
    pub fn new(code: u8) -> Result<Self, ValidationError> {
        match code {
            1..=38 | 97 | 99 => Ok(Self(code)),
            _ => Err(ValidationError::UnknownStateCode { code }),
        }
    }

    /// The numeric code.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Jurisdiction name from the published list.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            1 => "Jammu and Kashmir",
            2 => "Himachal Pradesh",
            3 => "Punjab",
            4 => "Chandigarh",
            5 => "Uttarakhand",
            6 => "Haryana",
            7 => "Delhi",
            8 => "Rajasthan",
            9 => "Uttar Pradesh",
            10 => "Bihar",
            11 => "Sikkim",
            12 => "Arunachal Pradesh",
            13 => "Nagaland",
            14 => "Manipur",
            15 => "Mizoram",
            16 => "Tripura",
            17 => "Meghalaya",
            18 => "Assam",
            19 => "West Bengal",
            20 => "Jharkhand",
            21 => "Odisha",
            22 => "Chhattisgarh",
            23 => "Madhya Pradesh",
            24 => "Gujarat",
            25 => "Daman and Diu",
            26 => "Dadra and Nagar Haveli and Daman and Diu",
            27 => "Maharashtra",
            28 => "Andhra Pradesh (before division)",
            29 => "Karnataka",
            30 => "Goa",
            31 => "Lakshadweep",
            32 => "Kerala",
            33 => "Tamil Nadu",
            34 => "Puducherry",
            35 => "Andaman and Nicobar Islands",
            36 => "Telangana",
            37 => "Andhra Pradesh",
            38 => "Ladakh",
            97 => "Other Territory",
            99 => "Centre Jurisdiction",
            _ => "Unknown",
        }
    }
}

impl TryFrom<u8> for StateCode {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<StateCode> for u8 {
    fn from(code: StateCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
