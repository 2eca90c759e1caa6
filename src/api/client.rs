use std::time::Duration;

use thiserror::Error;

use crate::api::types::{Address, BurialEntry, DeceasedFields};

pub const DEFAULT_BASE_URL: &str = "https://obituario.umuarama.pr.gov.br";
pub const VIACEP_BASE_URL: &str = "https://viacep.com.br";

/// One timeout for every service call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode the response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Thin async client over the memorial service endpoints.
#[derive(Clone)]
pub struct MemorialClient {
    http: reqwest::Client,
    base_url: String,
    viacep_url: String,
}

impl MemorialClient {
    pub fn new(base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            viacep_url: VIACEP_BASE_URL.to_string(),
        }
    }

    /// Search by name and/or death date (`YYYY-MM-DD`). Empty params
    /// are sent as empty strings, exactly as the app always did.
    pub async fn search(&self, nome: &str, data: &str) -> Result<Vec<DeceasedFields>, ApiError> {
        let url = format!("{}/memorial_api.php", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("nome", nome), ("data", data)])
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.clone(),
                source: e,
            })?;
        Self::decode(url, response).await
    }

    /// Full record by id.
    pub async fn deceased(&self, id: &str) -> Result<DeceasedFields, ApiError> {
        let url = format!("{}/obter_falecido.php", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("id", id)])
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.clone(),
                source: e,
            })?;
        Self::decode(url, response).await
    }

    /// Bumps the visit counter; the service answers the new total.
    pub async fn increment_visit(&self, id: &str) -> Result<Option<u64>, ApiError> {
        #[derive(serde::Deserialize)]
        struct VisitResponse {
            #[serde(default)]
            count: Option<u64>,
        }

        let url = format!("{}/increment_visit.php", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "id": id }))
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.clone(),
                source: e,
            })?;
        let visit: VisitResponse = Self::decode(url, response).await?;
        Ok(visit.count)
    }

    /// Everyone resting at the given site reference.
    pub async fn burials_at(&self, localsep: &str) -> Result<Vec<BurialEntry>, ApiError> {
        let url = format!("{}/buscar_por_localsep.php", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "localsep": localsep }))
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.clone(),
                source: e,
            })?;
        Self::decode(url, response).await
    }

    /// viacep address lookup; `Ok(None)` is the service's own "CEP not
    /// found" marker, distinct from a transport failure.
    pub async fn lookup_cep(&self, digits: &str) -> Result<Option<Address>, ApiError> {
        let url = format!("{}/ws/{}/json/", self.viacep_url, digits);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.clone(),
                source: e,
            })?;
        let address: Address = Self::decode(url, response).await?;
        Ok(if address.is_error() { None } else { Some(address) })
    }

    /// Portrait URL for a record; the service keeps a default portrait
    /// for records without one.
    pub fn photo_url(&self, id: &str) -> String {
        if id.is_empty() {
            format!("{}/fotos/default.jpg", self.base_url)
        } else {
            format!("{}/fotos/{}.jpg", self.base_url, id)
        }
    }

    /// The ambient track the detail screen loops.
    pub fn music_url(&self) -> String {
        format!("{}/music/memorias.mp3", self.base_url)
    }

    /// Raw download, used for the ambient track.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.to_string(),
                source: e,
            })?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }
        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| ApiError::Decode {
                url: url.to_string(),
                source: e,
            })
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        url: String,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::Status {
                url,
                status: response.status(),
            });
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode { url, source: e })
    }
}
