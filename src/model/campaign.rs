use serde::{Deserialize, Serialize};

/// Facebook ad campaign as returned by the Graph API listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDto {
    pub id: String,
    pub name: String,
    pub status: String,
    pub objective: Option<String>,
}

/// Request body for creating a campaign. New campaigns start paused so
/// nothing spends before an admin reviews it in Ads Manager.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCampaignDto {
    pub name: String,
    pub objective: String,
}
