use serde::{Serialize, Deserialize};
use crate::wheel::Prize;

/// Everything a public landing page needs to render, as served by
/// `GET /api/public-page/:id`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PublicPage {
    pub id: String,
    pub content: PageContent,
    pub branding: Branding,
    #[serde(default)]
    pub flags: PageFlags,
    pub prizes: Vec<Prize>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PageContent {
    pub headline: String,
    #[serde(default)]
    pub subheadline: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub button_label: String,
    #[serde(default)]
    pub footer_note: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Branding {
    pub primary_color: String,
    pub accent_color: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            primary_color: "#2563eb".to_string(),
            accent_color: "#f59e0b".to_string(),
            logo_url: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PageFlags {
    #[serde(default = "default_true")]
    pub wheel_enabled: bool,
    #[serde(default)]
    pub sound_enabled: bool,
    #[serde(default = "default_true")]
    pub confetti_enabled: bool,
    #[serde(default = "default_true")]
    pub one_spin_per_visit: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PageFlags {
    fn default() -> Self {
        Self {
            wheel_enabled: true,
            sound_enabled: false,
            confetti_enabled: true,
            one_spin_per_visit: true,
        }
    }
}

/// Body of `PUT /api/public-page/:id` from the admin content editor.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UpdatePageRequest {
    pub content: PageContent,
    pub branding: Branding,
    pub flags: PageFlags,
}
