//! Sender identities: who authored a message and over which channel.
//!
//! A sender is two layers. The [`BaseSender`] is the core identity (an
//! internal user or a CRM client). The [`Sender`] sum type tags that
//! identity with the channel it arrived over and the channel-specific
//! details (Telegram chat id, WhatsApp phone, and so on). A channel
//! variant overrides the transport of its base; the sender type (user vs
//! client) always comes from the base.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::contact::{Email, Phone};

/// Whether the core identity behind a sender is staff, a client, or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    Unknown,
    User,
    Client,
}

impl Default for SenderType {
    fn default() -> Self {
        SenderType::Unknown
    }
}

impl fmt::Display for SenderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SenderType::Unknown => write!(f, "unknown"),
            SenderType::User => write!(f, "user"),
            SenderType::Client => write!(f, "client"),
        }
    }
}

impl FromStr for SenderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(SenderType::Unknown),
            "user" => Ok(SenderType::User),
            "client" => Ok(SenderType::Client),
            other => Err(format!("invalid sender type: '{other}'")),
        }
    }
}

/// The channel a message travels over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Telegram,
    Whatsapp,
    Instagram,
    Sms,
    Email,
    Phone,
    Website,
    Other,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Telegram => write!(f, "telegram"),
            Transport::Whatsapp => write!(f, "whatsapp"),
            Transport::Instagram => write!(f, "instagram"),
            Transport::Sms => write!(f, "sms"),
            Transport::Email => write!(f, "email"),
            Transport::Phone => write!(f, "phone"),
            Transport::Website => write!(f, "website"),
            Transport::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "telegram" => Ok(Transport::Telegram),
            "whatsapp" => Ok(Transport::Whatsapp),
            "instagram" => Ok(Transport::Instagram),
            "sms" => Ok(Transport::Sms),
            "email" => Ok(Transport::Email),
            "phone" => Ok(Transport::Phone),
            "website" => Ok(Transport::Website),
            "other" => Ok(Transport::Other),
            other => Err(format!("invalid transport: '{other}'")),
        }
    }
}

/// An internal staff member acting as a message author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSender {
    pub transport: Transport,
    pub user_id: u32,
    pub first_name: String,
    pub last_name: String,
}

impl UserSender {
    /// Name fields are not validated here; the DTO layer owns that.
    pub fn new(
        transport: Transport,
        user_id: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            user_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// A CRM client acting as a message author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSender {
    pub transport: Transport,
    pub client_id: u32,
    pub contact_id: u32,
    pub first_name: String,
    pub last_name: String,
}

impl ClientSender {
    pub fn new(
        transport: Transport,
        client_id: u32,
        contact_id: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            client_id,
            contact_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Core identity behind a sender, independent of channel decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BaseSender {
    User(UserSender),
    Client(ClientSender),
}

impl BaseSender {
    pub fn sender_type(&self) -> SenderType {
        match self {
            BaseSender::User(_) => SenderType::User,
            BaseSender::Client(_) => SenderType::Client,
        }
    }

    /// The transport the base identity was created for. A channel variant
    /// of [`Sender`] overrides this.
    pub fn transport(&self) -> Transport {
        match self {
            BaseSender::User(user) => user.transport,
            BaseSender::Client(client) => client.transport,
        }
    }

    pub fn first_name(&self) -> &str {
        match self {
            BaseSender::User(user) => &user.first_name,
            BaseSender::Client(client) => &client.first_name,
        }
    }

    pub fn last_name(&self) -> &str {
        match self {
            BaseSender::User(user) => &user.last_name,
            BaseSender::Client(client) => &client.last_name,
        }
    }
}

impl From<UserSender> for BaseSender {
    fn from(sender: UserSender) -> Self {
        BaseSender::User(sender)
    }
}

impl From<ClientSender> for BaseSender {
    fn from(sender: ClientSender) -> Self {
        BaseSender::Client(sender)
    }
}

/// A channel-tagged message author.
///
/// Each channel variant extends a [`BaseSender`] with the contact details
/// that channel knows about. `Direct` is an undecorated user/client sender
/// that keeps its base transport (internal notes, staff replies).
///
/// Every channel variant holds its base by value: a channel sender
/// without a core identity cannot be constructed.
/// The one deliberate exception is [`Sender::other`]: `other` is the
/// designated fallback transport and must never fail, so a missing base
/// synthesizes an "Unknown Sender" user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "transport", rename_all = "lowercase")]
pub enum Sender {
    Telegram {
        base: BaseSender,
        chat_id: i64,
        username: String,
        phone: Phone,
    },
    Whatsapp {
        base: BaseSender,
        phone: Phone,
    },
    Instagram {
        base: BaseSender,
        username: String,
    },
    Sms {
        base: BaseSender,
        phone: Phone,
    },
    Email {
        base: BaseSender,
        email: Email,
    },
    Phone {
        base: BaseSender,
        phone: Phone,
    },
    /// The website widget may capture a phone, an email, both, or neither.
    Website {
        base: BaseSender,
        phone: Option<Phone>,
        email: Option<Email>,
    },
    Other {
        base: BaseSender,
    },
    /// Nested under `base` like every other variant, so the tag never
    /// collides with the base identity's own `transport` field.
    Direct {
        base: BaseSender,
    },
}

impl Sender {
    pub fn telegram(
        base: impl Into<BaseSender>,
        chat_id: i64,
        username: impl Into<String>,
        phone: Phone,
    ) -> Self {
        Sender::Telegram {
            base: base.into(),
            chat_id,
            username: username.into(),
            phone,
        }
    }

    pub fn whatsapp(base: impl Into<BaseSender>, phone: Phone) -> Self {
        Sender::Whatsapp {
            base: base.into(),
            phone,
        }
    }

    pub fn instagram(base: impl Into<BaseSender>, username: impl Into<String>) -> Self {
        Sender::Instagram {
            base: base.into(),
            username: username.into(),
        }
    }

    pub fn sms(base: impl Into<BaseSender>, phone: Phone) -> Self {
        Sender::Sms {
            base: base.into(),
            phone,
        }
    }

    pub fn email(base: impl Into<BaseSender>, email: Email) -> Self {
        Sender::Email {
            base: base.into(),
            email,
        }
    }

    pub fn phone_call(base: impl Into<BaseSender>, phone: Phone) -> Self {
        Sender::Phone {
            base: base.into(),
            phone,
        }
    }

    pub fn website(
        base: impl Into<BaseSender>,
        phone: Option<Phone>,
        email: Option<Email>,
    ) -> Self {
        Sender::Website {
            base: base.into(),
            phone,
            email,
        }
    }

    /// Fallback channel. A missing base yields the "Unknown Sender" user
    /// identity on the `other` transport instead of failing.
    pub fn other(base: Option<BaseSender>) -> Self {
        let base = base.unwrap_or_else(|| {
            BaseSender::User(UserSender::new(Transport::Other, 0, "Unknown", "Sender"))
        });
        Sender::Other { base }
    }

    /// The channel this sender is tagged with. Channel variants win over
    /// the base sender's own transport.
    pub fn transport(&self) -> Transport {
        match self {
            Sender::Telegram { .. } => Transport::Telegram,
            Sender::Whatsapp { .. } => Transport::Whatsapp,
            Sender::Instagram { .. } => Transport::Instagram,
            Sender::Sms { .. } => Transport::Sms,
            Sender::Email { .. } => Transport::Email,
            Sender::Phone { .. } => Transport::Phone,
            Sender::Website { .. } => Transport::Website,
            Sender::Other { .. } => Transport::Other,
            Sender::Direct { base } => base.transport(),
        }
    }

    pub fn base(&self) -> &BaseSender {
        match self {
            Sender::Telegram { base, .. }
            | Sender::Whatsapp { base, .. }
            | Sender::Instagram { base, .. }
            | Sender::Sms { base, .. }
            | Sender::Email { base, .. }
            | Sender::Phone { base, .. }
            | Sender::Website { base, .. }
            | Sender::Other { base }
            | Sender::Direct { base } => base,
        }
    }

    /// User vs client, always taken from the base identity.
    pub fn sender_type(&self) -> SenderType {
        self.base().sender_type()
    }

    /// The phone number captured by the channel, if any.
    pub fn phone(&self) -> Option<&Phone> {
        match self {
            Sender::Telegram { phone, .. }
            | Sender::Whatsapp { phone, .. }
            | Sender::Sms { phone, .. }
            | Sender::Phone { phone, .. } => Some(phone),
            Sender::Website { phone, .. } => phone.as_ref(),
            _ => None,
        }
    }

    /// The email address captured by the channel, if any.
    pub fn email_address(&self) -> Option<&Email> {
        match self {
            Sender::Email { email, .. } => Some(email),
            Sender::Website { email, .. } => email.as_ref(),
            _ => None,
        }
    }

    /// The channel username (Telegram or Instagram), if any.
    pub fn username(&self) -> Option<&str> {
        match self {
            Sender::Telegram { username, .. } | Sender::Instagram { username, .. } => {
                Some(username)
            }
            _ => None,
        }
    }

    /// The Telegram chat id, if this is a Telegram sender.
    pub fn telegram_chat_id(&self) -> Option<i64> {
        match self {
            Sender::Telegram { chat_id, .. } => Some(*chat_id),
            _ => None,
        }
    }
}

impl From<BaseSender> for Sender {
    fn from(base: BaseSender) -> Self {
        Sender::Direct { base }
    }
}
