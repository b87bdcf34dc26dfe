//! Helpers around the core creation flow: amount conversion and the metadata
//! pinning collaborator.
//!
//! Metadata pinning is not part of the core transaction flow; the client only
//! sees the final URI string. The helpers here shape Metaplex-format metadata
//! JSON and pin it through Pinata, mirroring what the Pump.fun web client
//! stores for a new token.

pub mod transaction;

use isahc::{AsyncReadResponseExt, Request, RequestExt};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{constants, error::ClientError};

/// Converts a SOL amount in human units to lamports.
///
/// Truncates instead of rounding so the result never exceeds the caller's
/// stated ceiling.
pub fn sol_to_lamports(amount_sol: f64) -> u64 {
    (amount_sol * constants::trade::LAMPORTS_PER_SOL as f64) as u64
}

/// Credentials for the Pinata pinning service.
#[derive(Debug, Clone)]
pub struct PinataConfig {
    pub api_key: String,
    pub secret_api_key: String,
}

/// Token metadata to pin before creation
///
/// # Fields
///
/// * `name` - Name of the token
/// * `symbol` - Symbol/ticker of the token
/// * `description` - Description shown on the token page
/// * `image` - URI of the already-hosted token image
/// * `twitter` - Optional Twitter link
/// * `telegram` - Optional Telegram link
/// * `website` - Optional website link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTokenMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub website: Option<String>,
}

impl CreateTokenMetadata {
    /// Shapes the metadata into the Metaplex JSON layout.
    ///
    /// The `links` object is omitted entirely when no social link is set.
    pub fn to_metaplex_json(&self) -> serde_json::Value {
        let mut properties = json!({
            "files": [{"uri": self.image, "type": "image/png"}],
            "category": "image",
        });

        let mut links = serde_json::Map::new();
        if let Some(telegram) = &self.telegram {
            links.insert("telegram".to_string(), json!(telegram));
        }
        if let Some(website) = &self.website {
            links.insert("website".to_string(), json!(website));
        }
        if let Some(twitter) = &self.twitter {
            links.insert("twitter".to_string(), json!(twitter));
        }
        if !links.is_empty() {
            properties["links"] = serde_json::Value::Object(links);
        }

        json!({
            "name": self.name,
            "symbol": self.symbol,
            "description": self.description,
            "image": self.image,
            "attributes": [],
            "properties": properties,
        })
    }
}

#[derive(Deserialize)]
struct PinResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
}

/// Pins Metaplex-format metadata JSON and returns its gateway URI.
///
/// The returned string is what goes into the create instruction's `uri`
/// argument.
pub async fn upload_token_metadata(
    config: &PinataConfig,
    metadata: &CreateTokenMetadata,
) -> Result<String, ClientError> {
    let body = metadata.to_metaplex_json().to_string();

    let request = Request::post("https://api.pinata.cloud/pinning/pinJSONToIPFS")
        .header("Content-Type", "application/json")
        .header("pinata_api_key", &config.api_key)
        .header("pinata_secret_api_key", &config.secret_api_key)
        .body(body)
        .map_err(|err| ClientError::UploadMetadata(Box::new(err)))?;

    let mut response = request
        .send_async()
        .await
        .map_err(|err| ClientError::UploadMetadata(Box::new(err)))?;

    let text = response
        .text()
        .await
        .map_err(|err| ClientError::UploadMetadata(Box::new(err)))?;

    if !response.status().is_success() {
        return Err(ClientError::UploadMetadata(
            format!("pinning service returned {}: {}", response.status(), text).into(),
        ));
    }

    let pinned: PinResponse =
        serde_json::from_str(&text).map_err(|err| ClientError::UploadMetadata(Box::new(err)))?;

    Ok(format!(
        "https://gateway.pinata.cloud/ipfs/{}",
        pinned.ipfs_hash
    ))
}
