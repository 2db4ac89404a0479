//! Transaction parties.

use serde::{Deserialize, Serialize};

use crate::gst::state::StateCode;

/// One side of a supply, either the seller or the buyer.
///
/// The GSTIN is stored as the raw string the user entered. Structural
/// validation happens at computation time so an invoice can be drafted
/// before the counterparty's registration details are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Registered legal name.
    pub legal_name: String,
    /// GST identification number, absent for unregistered parties.
    pub gstin: Option<String>,
    /// Declared place-of-supply state.
    pub state: StateCode,
}

impl Party {
    /// Creates a GST-registered party.
    #[must_use]
    pub fn registered(legal_name: impl Into<String>, gstin: impl Into<String>, state: StateCode) -> Self {
        Self {
            legal_name: legal_name.into(),
            gstin: Some(gstin.into()),
            state,
        }
    }

    /// Creates an unregistered party, valid only for nil-rated supplies.
    #[must_use]
    pub fn unregistered(legal_name: impl Into<String>, state: StateCode) -> Self {
        Self {
            legal_name: legal_name.into(),
            gstin: None,
            state,
        }
    }
}
