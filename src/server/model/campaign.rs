//! Ad campaign domain models.

use crate::model::campaign::CampaignDto;

/// Facebook ad campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: String,
    pub objective: Option<String>,
}

impl Campaign {
    pub fn into_dto(self) -> CampaignDto {
        CampaignDto {
            id: self.id,
            name: self.name,
            status: self.status,
            objective: self.objective,
        }
    }
}

/// Parameters for creating a campaign on the ad account.
#[derive(Debug, Clone)]
pub struct CreateCampaignParam {
    pub name: String,
    pub objective: String,
}
