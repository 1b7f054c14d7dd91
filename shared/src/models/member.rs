//! Member Model

use serde::{Deserialize, Serialize};

/// Membership tier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MembershipType {
    #[default]
    #[serde(alias = "Basic", alias = "BASIC")]
    Basic,
    #[serde(alias = "Premium", alias = "PREMIUM")]
    Premium,
    #[serde(alias = "VIP", alias = "Vip")]
    Vip,
}

impl MembershipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
            Self::Vip => "vip",
        }
    }
}

/// Membership status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    #[default]
    #[serde(alias = "Active", alias = "ACTIVE")]
    Active,
    #[serde(alias = "Inactive", alias = "INACTIVE")]
    Inactive,
    #[serde(alias = "Suspended", alias = "SUSPENDED")]
    Suspended,
    #[serde(alias = "Expired", alias = "EXPIRED")]
    Expired,
}

impl MembershipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
            Self::Expired => "expired",
        }
    }

    /// Label shown in tables and badges
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Suspended => "Suspended",
            Self::Expired => "Expired",
        }
    }
}

/// Member entity as returned by the gym API
///
/// Date fields keep the server's raw strings; parsing is lenient and
/// happens where the dates are consumed (see [`crate::stats`]).
/// Serializes camelCase; deserialization goes through [`MemberWire`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MemberWire")]
pub struct Member {
    pub id: i64,
    /// Human-facing membership code, distinct from `id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub membership_type: MembershipType,
    pub status: MembershipStatus,
    /// Join date
    pub start_date: Option<String>,
    /// Expiry date
    pub end_date: Option<String>,
    pub created_at: Option<String>,
}

impl Member {
    pub fn display_name(&self) -> &str {
        &self.full_name
    }
}

/// Incoming member record.
///
/// Servers send camelCase, snake_case or legacy names, sometimes several for
/// one field; each spelling is its own slot and the first non-null wins.
#[derive(Deserialize)]
struct MemberWire {
    id: i64,
    #[serde(default, rename = "memberId")]
    member_id_camel: Option<String>,
    #[serde(default)]
    member_id: Option<String>,
    #[serde(default, rename = "fullName")]
    full_name_camel: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default, rename = "membershipType")]
    membership_type_camel: Option<MembershipType>,
    #[serde(default)]
    membership_type: Option<MembershipType>,
    #[serde(default)]
    status: Option<MembershipStatus>,
    #[serde(default, rename = "startDate")]
    start_date_camel: Option<String>,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default, rename = "joinDate")]
    join_date: Option<String>,
    #[serde(default, rename = "endDate")]
    end_date_camel: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default, rename = "expiryDate")]
    expiry_date: Option<String>,
    #[serde(default, rename = "createdAt")]
    created_at_camel: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl TryFrom<MemberWire> for Member {
    type Error = String;

    fn try_from(w: MemberWire) -> Result<Self, Self::Error> {
        let full_name = w
            .full_name_camel
            .or(w.full_name)
            .or(w.name)
            .ok_or_else(|| "missing field `fullName`".to_string())?;
        Ok(Self {
            id: w.id,
            member_id: w.member_id_camel.or(w.member_id),
            full_name,
            email: w.email.unwrap_or_default(),
            phone: w.phone.unwrap_or_default(),
            membership_type: w
                .membership_type_camel
                .or(w.membership_type)
                .unwrap_or_default(),
            status: w.status.unwrap_or_default(),
            start_date: w.start_date_camel.or(w.start_date).or(w.join_date),
            end_date: w.end_date_camel.or(w.end_date).or(w.expiry_date),
            created_at: w.created_at_camel.or(w.created_at),
        })
    }
}

/// Create / update member payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberFormData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub membership_type: MembershipType,
    pub status: MembershipStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl From<&Member> for MemberFormData {
    fn from(member: &Member) -> Self {
        Self {
            full_name: member.full_name.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
            membership_type: member.membership_type,
            status: member.status,
            start_date: member.start_date.clone(),
            end_date: member.end_date.clone(),
        }
    }
}
