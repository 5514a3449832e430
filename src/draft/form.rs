// src/draft/form.rs

//! Form buffers for the asset and party steps, and the conversions between
//! what the user types and what the draft stores.

use crate::error::{AppError, AppResult};

use super::types::{
    Asset, AssetDraft, Party, PartyDraft, PartyRole, PROOF_URL_NOT_PROVIDED,
    SIGNATURE_NOT_PROVIDED,
};

pub const NAIRA_SIGN: char = '₦';

const MAX_FRACTION_DIGITS: usize = 3;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetForm {
    pub asset_type: String,
    pub description: String,
    /// Plain number as typed, e.g. "5000000".
    pub value: String,
    pub document_proof_url: String,
}

impl AssetForm {
    pub fn validate(&self) -> AppResult<AssetDraft> {
        let asset_type = self.asset_type.trim();
        let description = self.description.trim();
        if asset_type.is_empty() || description.is_empty() {
            return Err(AppError::AssetFieldsRequired);
        }

        let proof = self.document_proof_url.trim();

        Ok(AssetDraft {
            asset_type: asset_type.to_string(),
            description: description.to_string(),
            value: format_naira(&self.value)?,
            document_proof_url: if proof.is_empty() {
                PROOF_URL_NOT_PROVIDED.to_string()
            } else {
                proof.to_string()
            },
        })
    }

    /// Refills the form for editing; stored sentinels come back as empty fields.
    pub fn from_asset(a: &Asset) -> Self {
        Self {
            asset_type: a.asset_type.clone(),
            description: a.description.clone(),
            value: strip_naira(&a.value),
            document_proof_url: if a.document_proof_url == PROOF_URL_NOT_PROVIDED {
                String::new()
            } else {
                a.document_proof_url.clone()
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartyForm {
    pub user_name: String,
    pub relationship: String,
    pub email: String,
    pub phone_number: String,
    pub user_signature: String,
    pub user_signature_type: String,
    pub user_role: PartyRole,
}

impl Default for PartyForm {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            relationship: String::new(),
            email: String::new(),
            phone_number: String::new(),
            user_signature: String::new(),
            user_signature_type: String::new(),
            user_role: PartyRole::Beneficiary,
        }
    }
}

impl PartyForm {
    pub fn validate(&self) -> AppResult<PartyDraft> {
        let required = [
            &self.user_name,
            &self.relationship,
            &self.email,
            &self.phone_number,
        ];
        if required.iter().any(|s| s.trim().is_empty()) {
            return Err(AppError::PartyFieldsRequired);
        }

        Ok(PartyDraft {
            user_name: self.user_name.trim().to_string(),
            user_role: self.user_role,
            relationship: self.relationship.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            user_signature: or_not_provided(&self.user_signature),
            user_signature_type: or_not_provided(&self.user_signature_type),
        })
    }

    pub fn from_party(p: &Party) -> Self {
        Self {
            user_name: p.user_name.clone(),
            relationship: p.relationship.clone(),
            email: p.email.clone(),
            phone_number: p.phone_number.clone(),
            user_signature: blank_if_not_provided(&p.user_signature),
            user_signature_type: blank_if_not_provided(&p.user_signature_type),
            user_role: p.user_role,
        }
    }
}

fn or_not_provided(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() {
        SIGNATURE_NOT_PROVIDED.to_string()
    } else {
        s.to_string()
    }
}

fn blank_if_not_provided(s: &str) -> String {
    if s == SIGNATURE_NOT_PROVIDED {
        String::new()
    } else {
        s.to_string()
    }
}

/// "5000000" -> "₦5,000,000"; "" -> "". At most three fraction digits, rounded half up.
/// Commas and a leading naira sign in the input are ignored.
pub fn format_naira(raw: &str) -> AppResult<String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != NAIRA_SIGN)
        .collect();

    if cleaned.is_empty() {
        return Ok(String::new());
    }

    let (int_part, frac_part) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) || (int_part.is_empty() && frac_part.is_empty())
    {
        return Err(AppError::InvalidAssetValue(raw.to_string()));
    }

    let mut int_digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let mut frac_digits: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();

    if frac_digits.len() > MAX_FRACTION_DIGITS {
        let round_up = frac_digits[MAX_FRACTION_DIGITS] >= 5;
        frac_digits.truncate(MAX_FRACTION_DIGITS);
        if round_up {
            let carry = increment_digits(&mut frac_digits);
            if carry && increment_digits(&mut int_digits) {
                int_digits.insert(0, 1);
            }
        }
    }

    while frac_digits.last() == Some(&0) {
        frac_digits.pop();
    }

    let first_nonzero = int_digits
        .iter()
        .position(|d| *d != 0)
        .unwrap_or(int_digits.len());
    let int_digits = &int_digits[first_nonzero..];

    let mut out = String::new();
    out.push(NAIRA_SIGN);
    if int_digits.is_empty() {
        out.push('0');
    }
    for (i, d) in int_digits.iter().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(b'0' + d));
    }
    if !frac_digits.is_empty() {
        out.push('.');
        out.extend(frac_digits.iter().map(|d| char::from(b'0' + d)));
    }

    Ok(out)
}

// Adds one to a big-endian digit string; true when it overflows.
fn increment_digits(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

/// Inverse of `format_naira` for editing: drops the sign and separators.
pub fn strip_naira(display: &str) -> String {
    display
        .chars()
        .filter(|c| *c != NAIRA_SIGN && *c != ',')
        .collect()
}

// ======================================================
// Unit Tests
// ======================================================
