use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The value type a claim is extracted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimKind {
    Boolean,
    String,
}

/// Logical claims understood by a generic identity provider.
///
/// The variant name is the logical field name used as the mapping table key
/// (`StandardClaim::EmailVerified.as_ref() == "EmailVerified"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum StandardClaim {
    Subject,
    Issuer,
    Name,
    FamilyName,
    GivenName,
    MiddleName,
    NickName,
    PreferredUsername,
    Profile,
    Picture,
    Website,
    Gender,
    Birthdate,
    ZoneInfo,
    Locale,
    UpdatedAt,
    Email,
    EmailVerified,
    EmailPrimary,
    Phone,
    PhoneVerified,
}

impl StandardClaim {
    #[must_use]
    pub const fn kind(self) -> ClaimKind {
        match self {
            Self::EmailVerified | Self::EmailPrimary | Self::PhoneVerified => ClaimKind::Boolean,
            _ => ClaimKind::String,
        }
    }
}

/// Claims resolved from a provider payload.
///
/// Unresolved strings are empty and unresolved flags are `false`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct UserClaims {
    pub subject: String,
    pub issuer: String,
    pub name: String,
    pub family_name: String,
    pub given_name: String,
    pub middle_name: String,
    pub nick_name: String,
    pub preferred_username: String,
    pub profile: String,
    pub picture: String,
    pub website: String,
    pub gender: String,
    pub birthdate: String,
    pub zone_info: String,
    pub locale: String,
    pub updated_at: String,
    pub email: String,
    pub email_verified: bool,
    pub email_primary: bool,
    pub phone: String,
    pub phone_verified: bool,
}

impl UserClaims {
    /// Stores a string claim. Returns `false` if `claim` is not a string claim.
    pub fn set_string(&mut self, claim: StandardClaim, value: String) -> bool {
        let slot = match claim {
            StandardClaim::Subject => &mut self.subject,
            StandardClaim::Issuer => &mut self.issuer,
            StandardClaim::Name => &mut self.name,
            StandardClaim::FamilyName => &mut self.family_name,
            StandardClaim::GivenName => &mut self.given_name,
            StandardClaim::MiddleName => &mut self.middle_name,
            StandardClaim::NickName => &mut self.nick_name,
            StandardClaim::PreferredUsername => &mut self.preferred_username,
            StandardClaim::Profile => &mut self.profile,
            StandardClaim::Picture => &mut self.picture,
            StandardClaim::Website => &mut self.website,
            StandardClaim::Gender => &mut self.gender,
            StandardClaim::Birthdate => &mut self.birthdate,
            StandardClaim::ZoneInfo => &mut self.zone_info,
            StandardClaim::Locale => &mut self.locale,
            StandardClaim::UpdatedAt => &mut self.updated_at,
            StandardClaim::Email => &mut self.email,
            StandardClaim::Phone => &mut self.phone,
            StandardClaim::EmailVerified
            | StandardClaim::EmailPrimary
            | StandardClaim::PhoneVerified => return false,
        };
        *slot = value;
        true
    }

    /// Stores a boolean claim. Returns `false` if `claim` is not a boolean claim.
    pub fn set_boolean(&mut self, claim: StandardClaim, value: bool) -> bool {
        match claim {
            StandardClaim::EmailVerified => self.email_verified = value,
            StandardClaim::EmailPrimary => self.email_primary = value,
            StandardClaim::PhoneVerified => self.phone_verified = value,
            _ => return false,
        }
        true
    }
}
