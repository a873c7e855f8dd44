// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::LeadId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LeadType {
    Buyer,
    Seller,
    #[serde(rename = "Buyer/Seller")]
    BuyerSeller,
}

impl LeadType {
    pub const ALL: [Self; 3] = [Self::Buyer, Self::Seller, Self::BuyerSeller];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buyer => "Buyer",
            Self::Seller => "Seller",
            Self::BuyerSeller => "Buyer/Seller",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "buyer" => Some(Self::Buyer),
            "seller" => Some(Self::Seller),
            "buyer/seller" | "buyer-seller" | "both" => Some(Self::BuyerSeller),
            _ => None,
        }
    }
}

/// Logical table columns. Every column maps onto a `LeadRecord` attribute,
/// so every column is sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LeadField {
    Name,
    Phone,
    Email,
    Address,
    Type,
    Category,
    Agent,
    Source,
    Status,
    SecondarySource,
    ThirdSource,
}

impl LeadField {
    pub const ALL: [Self; 11] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Address,
        Self::Type,
        Self::Category,
        Self::Agent,
        Self::Source,
        Self::Status,
        Self::SecondarySource,
        Self::ThirdSource,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::Type => "type",
            Self::Category => "category",
            Self::Agent => "agent",
            Self::Source => "source",
            Self::Status => "status",
            Self::SecondarySource => "secondarySource",
            Self::ThirdSource => "thirdSource",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "E Mail",
            Self::Address => "Address",
            Self::Type => "Type",
            Self::Category => "Category",
            Self::Agent => "Agent",
            Self::Source => "Source",
            Self::Status => "Status",
            Self::SecondarySource => "Secondary Source",
            Self::ThirdSource => "Third Source",
        }
    }

    /// Text shown when an optional attribute is absent.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Category => "Residential",
            Self::Agent => "Unassigned",
            Self::Status => "New",
            Self::Source | Self::SecondarySource | Self::ThirdSource => "-",
            Self::Name | Self::Phone | Self::Email | Self::Address | Self::Type => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRange {
    Under200K,
    From200KTo400K,
    From400KTo600K,
    From600KTo800K,
    From800KTo1M,
    Over1M,
}

impl BudgetRange {
    pub const ALL: [Self; 6] = [
        Self::Under200K,
        Self::From200KTo400K,
        Self::From400KTo600K,
        Self::From600KTo800K,
        Self::From800KTo1M,
        Self::Over1M,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under200K => "Under $200K",
            Self::From200KTo400K => "$200K - $400K",
            Self::From400KTo600K => "$400K - $600K",
            Self::From600KTo800K => "$600K - $800K",
            Self::From800KTo1M => "$800K - $1M",
            Self::Over1M => "Over $1M",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadSource {
    Website,
    Referral,
    SocialMedia,
    ColdCall,
    WalkIn,
    Advertisement,
}

impl LeadSource {
    pub const ALL: [Self; 6] = [
        Self::Website,
        Self::Referral,
        Self::SocialMedia,
        Self::ColdCall,
        Self::WalkIn,
        Self::Advertisement,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Referral => "Referral",
            Self::SocialMedia => "Social Media",
            Self::ColdCall => "Cold Call",
            Self::WalkIn => "Walk-in",
            Self::Advertisement => "Advertisement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: LeadId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(rename = "type")]
    pub lead_type: LeadType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetRange>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl LeadRecord {
    pub fn new(
        id: impl Into<LeadId>,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        lead_type: LeadType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            lead_type,
            category: None,
            agent: None,
            source: None,
            status: None,
            secondary_source: None,
            third_source: None,
            budget: None,
            notes: String::new(),
        }
    }

    /// Raw attribute value, `None` when an optional attribute is absent.
    pub fn field(&self, field: LeadField) -> Option<&str> {
        match field {
            LeadField::Name => Some(&self.name),
            LeadField::Phone => Some(&self.phone),
            LeadField::Email => Some(&self.email),
            LeadField::Address => Some(&self.address),
            LeadField::Type => Some(self.lead_type.as_str()),
            LeadField::Category => self.category.as_deref(),
            LeadField::Agent => self.agent.as_deref(),
            LeadField::Source => self.source.as_deref(),
            LeadField::Status => self.status.as_deref(),
            LeadField::SecondarySource => self.secondary_source.as_deref(),
            LeadField::ThirdSource => self.third_source.as_deref(),
        }
    }

    pub fn sort_key(&self, field: LeadField) -> &str {
        self.field(field).unwrap_or("")
    }

    /// Cell text with placeholder substitution for blank optional attributes.
    pub fn display(&self, field: LeadField) -> &str {
        match self.field(field) {
            Some(value) if !value.is_empty() => value,
            _ => field.placeholder(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Only(LeadType),
}

impl TypeFilter {
    pub fn matches(self, lead_type: LeadType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == lead_type,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Types",
            Self::Only(LeadType::Buyer) => "Buyers",
            Self::Only(LeadType::Seller) => "Sellers",
            Self::Only(LeadType::BuyerSeller) => "Buyer/Sellers",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Only(LeadType::Buyer),
            Self::Only(LeadType::Buyer) => Self::Only(LeadType::Seller),
            Self::Only(LeadType::Seller) => Self::Only(LeadType::BuyerSeller),
            Self::Only(LeadType::BuyerSeller) => Self::All,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        LeadType::parse(value).map(Self::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: LeadField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: LeadField::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    /// Header-click semantics: same column flips, a new column starts ascending.
    pub fn toggled(self, column: LeadField) -> Self {
        if self.column == column {
            Self {
                column,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                column,
                direction: SortDirection::Asc,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Dashboard,
    Leads,
    Appointments,
    Team,
    Analytics,
    Reports,
}

impl TabKind {
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Leads,
        Self::Appointments,
        Self::Team,
        Self::Analytics,
        Self::Reports,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Leads => "leads",
            Self::Appointments => "appointments",
            Self::Team => "team",
            Self::Analytics => "analytics",
            Self::Reports => "reports",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(value.trim()))
    }

    /// Headline and blurb for tabs that have no content yet.
    pub const fn placeholder(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Leads => None,
            Self::Dashboard => Some((
                "Dashboard Overview",
                "Comprehensive analytics and insights coming soon...",
            )),
            Self::Appointments => Some((
                "Appointment Management",
                "Schedule and manage client appointments...",
            )),
            Self::Team => Some((
                "Team Management",
                "Manage your real estate team members...",
            )),
            Self::Analytics => Some((
                "Analytics & Reports",
                "Detailed performance analytics and insights...",
            )),
            Self::Reports => Some((
                "Custom Reports",
                "Generate custom reports and exports...",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppMode {
    Nav,
    Search,
    AddLead,
    Columns,
}

#[cfg(test)]
mod tests {
    use super::{LeadField, LeadRecord, LeadType, SortDirection, SortSpec, TypeFilter};

    #[test]
    fn display_substitutes_placeholders_for_blank_optionals() {
        let mut lead = LeadRecord::new("1", "Ann", "555", "a@b.c", "NJ", LeadType::Buyer);
        lead.status = Some(String::new());
        lead.agent = Some("Dana".to_owned());

        assert_eq!(lead.display(LeadField::Category), "Residential");
        assert_eq!(lead.display(LeadField::Status), "New");
        assert_eq!(lead.display(LeadField::Agent), "Dana");
        assert_eq!(lead.display(LeadField::ThirdSource), "-");
        assert_eq!(lead.display(LeadField::Type), "Buyer");
        assert_eq!(lead.sort_key(LeadField::Category), "");
    }

    #[test]
    fn field_keys_parse_back() {
        for field in LeadField::ALL {
            assert_eq!(LeadField::parse(field.as_str()), Some(field));
        }
        assert_eq!(LeadField::parse("SECONDARYSOURCE"), Some(LeadField::SecondarySource));
        assert_eq!(LeadField::parse("contact"), None);
    }

    #[test]
    fn lead_type_parse_accepts_display_strings() {
        for lead_type in LeadType::ALL {
            assert_eq!(LeadType::parse(lead_type.as_str()), Some(lead_type));
        }
        assert_eq!(LeadType::parse("renter"), None);
    }

    #[test]
    fn type_filter_cycles_through_every_type() {
        let mut filter = TypeFilter::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(
            seen,
            vec![
                TypeFilter::Only(LeadType::Buyer),
                TypeFilter::Only(LeadType::Seller),
                TypeFilter::Only(LeadType::BuyerSeller),
                TypeFilter::All,
            ]
        );
    }

    #[test]
    fn sort_toggle_flips_same_column_and_resets_new_column() {
        let spec = SortSpec::default();
        let flipped = spec.toggled(LeadField::Name);
        assert_eq!(flipped.direction, SortDirection::Desc);

        let other = flipped.toggled(LeadField::Email);
        assert_eq!(other.column, LeadField::Email);
        assert_eq!(other.direction, SortDirection::Asc);
    }
}
