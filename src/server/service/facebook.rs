//! Facebook Marketing API shim for ad campaigns.
//!
//! Thin request/response wrappers over the Graph API; no retry or rate-limit
//! handling. Provider failures surface as internal errors with the provider's
//! response body logged.

use serde::Deserialize;

use crate::server::{
    config::Config,
    error::AppError,
    model::campaign::{Campaign, CreateCampaignParam},
};

#[derive(Deserialize)]
struct CampaignListResponse {
    #[serde(default)]
    data: Vec<GraphCampaign>,
}

#[derive(Deserialize)]
struct GraphCampaign {
    id: String,
    name: String,
    status: String,
    objective: Option<String>,
}

#[derive(Deserialize)]
struct CreateCampaignResponse {
    id: String,
}

pub struct FacebookService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> FacebookService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self { http_client, config }
    }

    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, AppError> {
        let url = format!(
            "{}/act_{}/campaigns",
            self.config.facebook_graph_url, self.config.facebook_ad_account_id
        );

        let response = self
            .http_client
            .get(url)
            .query(&[
                ("fields", "id,name,status,objective"),
                ("access_token", self.config.facebook_access_token.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body, "facebook campaign list failed");
            return Err(AppError::InternalError(format!(
                "Facebook campaign list failed with status {status}"
            )));
        }

        let list: CampaignListResponse = response.json().await?;

        Ok(list
            .data
            .into_iter()
            .map(|c| Campaign {
                id: c.id,
                name: c.name,
                status: c.status,
                objective: c.objective,
            })
            .collect())
    }

    /// Creates a campaign on the ad account. New campaigns always start
    /// paused; activating spend is a deliberate step in the ads manager.
    pub async fn create_campaign(&self, param: CreateCampaignParam) -> Result<Campaign, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Campaign name must not be empty".to_string(),
            ));
        }

        let url = format!(
            "{}/act_{}/campaigns",
            self.config.facebook_graph_url, self.config.facebook_ad_account_id
        );

        let response = self
            .http_client
            .post(url)
            .form(&[
                ("name", param.name.as_str()),
                ("objective", param.objective.as_str()),
                ("status", "PAUSED"),
                ("special_ad_categories", "[]"),
                ("access_token", self.config.facebook_access_token.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body, "facebook campaign creation failed");
            return Err(AppError::InternalError(format!(
                "Facebook campaign creation failed with status {status}"
            )));
        }

        let created: CreateCampaignResponse = response.json().await?;
        tracing::info!(campaign_id = %created.id, name = %param.name, "facebook campaign created");

        Ok(Campaign {
            id: created.id,
            name: param.name,
            status: "PAUSED".to_string(),
            objective: Some(param.objective),
        })
    }
}
