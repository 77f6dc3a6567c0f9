//! Contact value objects shared by channel senders.
//!
//! `Phone` and `Email` are validated newtypes so a sender can never carry
//! a structurally bogus contact. `ContactType` names the contact column
//! used by member-by-contact repository lookups.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::ContactError;

/// A phone number, normalized to an optional leading `+` followed by digits.
///
/// Spaces, dashes, dots, and parentheses are stripped on parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, ContactError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ContactError::EmptyPhone);
        }
        let mut normalized = String::with_capacity(trimmed.len());
        for (i, ch) in trimmed.chars().enumerate() {
            match ch {
                '+' if i == 0 => normalized.push(ch),
                '0'..='9' => normalized.push(ch),
                ' ' | '-' | '.' | '(' | ')' => {}
                _ => return Err(ContactError::InvalidPhone(raw.to_string())),
            }
        }
        let digits = normalized.strip_prefix('+').unwrap_or(&normalized);
        // E.164 allows at most 15 digits; anything under 5 is junk input.
        if digits.len() < 5 || digits.len() > 15 {
            return Err(ContactError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phone::new(s)
    }
}

/// An email address. Validation is structural only: one `@`, a non-empty
/// local part, and a dotted domain. Deliverability is the channel's problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self, ContactError> {
        let trimmed = raw.trim();
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(ContactError::InvalidEmail(raw.to_string()));
        };
        if local.is_empty()
            || domain.is_empty()
            || domain.contains('@')
            || !domain.contains('.')
            || trimmed.contains(char::is_whitespace)
        {
            return Err(ContactError::InvalidEmail(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s)
    }
}

/// The kind of contact value used to look a chat member up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Phone,
    Email,
    Telegram,
    Instagram,
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactType::Phone => write!(f, "phone"),
            ContactType::Email => write!(f, "email"),
            ContactType::Telegram => write!(f, "telegram"),
            ContactType::Instagram => write!(f, "instagram"),
        }
    }
}

impl FromStr for ContactType {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "phone" => Ok(ContactType::Phone),
            "email" => Ok(ContactType::Email),
            "telegram" => Ok(ContactType::Telegram),
            "instagram" => Ok(ContactType::Instagram),
            other => Err(ContactError::InvalidContactType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_normalizes_separators() {
        let phone = Phone::new("+1 (202) 555-01.99").unwrap();
        assert_eq!(phone.as_str(), "+12025550199");
    }

    #[test]
    fn test_phone_rejects_letters() {
        assert_eq!(
            Phone::new("call-me"),
            Err(ContactError::InvalidPhone("call-me".to_string()))
        );
    }

    #[test]
    fn test_phone_rejects_empty_and_too_short() {
        assert_eq!(Phone::new("   "), Err(ContactError::EmptyPhone));
        assert!(Phone::new("123").is_err());
    }

    #[test]
    fn test_phone_rejects_plus_in_the_middle() {
        assert!(Phone::new("12+34567").is_err());
    }

    #[test]
    fn test_email_accepts_plain_address() {
        let email = Email::new(" user@example.com ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_email_rejects_missing_at_and_domain() {
        assert!(Email::new("example.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("user@localhost").is_err());
        assert!(Email::new("@example.com").is_err());
    }

    #[test]
    fn test_contact_type_roundtrip() {
        for ct in [
            ContactType::Phone,
            ContactType::Email,
            ContactType::Telegram,
            ContactType::Instagram,
        ] {
            let parsed: ContactType = ct.to_string().parse().unwrap();
            assert_eq!(ct, parsed);
        }
    }

    #[test]
    fn test_phone_serde_transparent() {
        let phone = Phone::new("+998901234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+998901234567\"");
    }
}
