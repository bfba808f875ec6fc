use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::Filters;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    #[default]
    Personal,
    Business,
}

impl ProfileType {
    pub const ALL: [ProfileType; 2] = [ProfileType::Personal, ProfileType::Business];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Personal => "personal",
            ProfileType::Business => "business",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileType::Personal => "Personal",
            ProfileType::Business => "Business",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// The owner of a profile, populated or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    #[serde(rename_all = "camelCase")]
    Summary {
        #[serde(alias = "_id")]
        id: String,
        #[serde(default)]
        first_name: String,
        #[serde(default)]
        last_name: String,
        #[serde(default)]
        email: String,
    },
}

impl UserRef {
    pub fn display(&self) -> String {
        match self {
            UserRef::Id(id) => id.clone(),
            UserRef::Summary {
                first_name,
                last_name,
                email,
                ..
            } => {
                let name = format!("{first_name} {last_name}");
                let name = name.trim();
                if name.is_empty() {
                    email.clone()
                } else {
                    name.to_string()
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub profile_type: ProfileType,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFilters {
    pub profile_type: Option<ProfileType>,
    pub is_active: Option<bool>,
}

impl Filters for ProfileFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(kind) = self.profile_type {
            pairs.push(("profileType", kind.as_str().to_string()));
        }
        if let Some(active) = self.is_active {
            pairs.push(("isActive", active.to_string()));
        }
        pairs
    }
}
