//! Omie API client.
//!
//! Low-level HTTP client that owns the credentials, builds the request
//! envelope and classifies failures. Resource operations are implemented
//! via traits on the model types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{OmieError, Result};

const DEFAULT_API_URL: &str = "https://app.omie.com.br/api";
const USER_AGENT: &str = concat!("omie-rs/", env!("CARGO_PKG_VERSION"));

/// Omie API client.
///
/// Every Omie call is a JSON POST to a resource path whose body carries the
/// credentials, the call identifier and a single-element parameter list:
///
/// ```json
/// {"app_key": "...", "app_secret": "...", "call": "ListarClientes", "param": [{...}]}
/// ```
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use omie::OmieClient;
///
/// # fn example() -> omie::Result<()> {
/// // Create from environment variables
/// let client = OmieClient::from_env()?;
///
/// // Or configure manually
/// let client = OmieClient::with_credentials("app-key", "app-secret")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OmieClient {
    http: Client,
    base_url: Arc<Url>,
    app_key: String,
    app_secret: String,
}

impl std::fmt::Debug for OmieClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmieClient")
            .field("base_url", &self.base_url.as_str())
            .field("app_key", &self.app_key)
            .finish_non_exhaustive()
    }
}

/// Outgoing request body.
#[derive(Serialize)]
struct Envelope<'a, P: Serialize + ?Sized> {
    app_key: &'a str,
    app_secret: &'a str,
    call: &'a str,
    param: [&'a P; 1],
}

impl OmieClient {
    /// Create a client from environment variables.
    ///
    /// Uses `OMIE_APP_KEY` and `OMIE_APP_SECRET` for authentication and
    /// optionally `OMIE_API_URL` for the base URL (defaults to
    /// `https://app.omie.com.br/api`).
    ///
    /// # Errors
    ///
    /// Returns [`OmieError::MissingCredentials`] if either credential is unset.
    pub fn from_env() -> Result<Self> {
        let app_key = env::var("OMIE_APP_KEY").map_err(|_| {
            OmieError::MissingCredentials("OMIE_APP_KEY environment variable not set".to_string())
        })?;
        let app_secret = env::var("OMIE_APP_SECRET").map_err(|_| {
            OmieError::MissingCredentials(
                "OMIE_APP_SECRET environment variable not set".to_string(),
            )
        })?;

        let base_url = env::var("OMIE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&app_key, &app_secret, &base_url)
    }

    /// Create a client against the public Omie endpoint.
    pub fn with_credentials(app_key: &str, app_secret: &str) -> Result<Self> {
        Self::new(app_key, app_secret, DEFAULT_API_URL)
    }

    /// Create a new client with the provided credentials and base URL.
    ///
    /// Credentials are not checked here; a blank key or secret fails the
    /// first request with [`OmieError::MissingCredentials`].
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(app_key: &str, app_secret: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(OmieError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            app_key: app_key.to_string(),
            app_secret: app_secret.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the application key.
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Perform an Omie call and return the parsed JSON body.
    ///
    /// # Arguments
    ///
    /// * `path` - Resource path relative to the base URL (e.g. `v1/geral/clientes/`)
    /// * `call` - The call identifier (e.g. `ListarClientes`)
    /// * `params` - The single element of the `param` list
    ///
    /// # Errors
    ///
    /// - [`OmieError::MissingCredentials`] before any network attempt when
    ///   the key or secret is blank
    /// - [`OmieError::Request`] when Omie answers with a fault payload
    /// - [`OmieError::InvalidResponse`] for any other non-success status
    #[tracing::instrument(skip(self, params))]
    pub async fn request<P: Serialize + ?Sized>(
        &self,
        path: &str,
        call: &str,
        params: &P,
    ) -> Result<Value> {
        let body = self.envelope(call, params)?;
        let url = self.base_url.join(path)?;

        tracing::debug!(%url, "sending Omie call");

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(OmieError::HttpError)?;

        let status = response.status();
        let text = response.text().await.map_err(OmieError::HttpError)?;

        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }

        Err(Self::classify_failure(status, text))
    }

    /// Perform an Omie call and deserialize the response into `R`.
    pub async fn request_as<P, R>(&self, path: &str, call: &str, params: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let value = self.request(path, call, params).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Build the request body, validating credentials first.
    fn envelope<'a, P: Serialize + ?Sized>(
        &'a self,
        call: &'a str,
        params: &'a P,
    ) -> Result<Envelope<'a, P>> {
        if self.app_key.trim().is_empty() || self.app_secret.trim().is_empty() {
            return Err(OmieError::MissingCredentials(
                "app_key and app_secret cannot be blank".to_string(),
            ));
        }

        Ok(Envelope {
            app_key: &self.app_key,
            app_secret: &self.app_secret,
            call,
            param: [params],
        })
    }

    /// Turn a failed response into an error.
    ///
    /// Omie does not use 4xx codes for client errors: every documented
    /// rejection is a 500 whose body holds `faultstring` and `faultcode`.
    fn classify_failure(status: StatusCode, body: String) -> OmieError {
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            if let Ok(json) = serde_json::from_str::<Value>(&body) {
                let fault_string = json.get("faultstring").and_then(Value::as_str);
                let fault_code = json.get("faultcode").and_then(Value::as_str);
                if fault_string.is_some() || fault_code.is_some() {
                    return OmieError::Request {
                        fault_code: fault_code.unwrap_or_default().to_string(),
                        fault_string: fault_string.unwrap_or_default().to_string(),
                    };
                }
            }
        }

        OmieError::InvalidResponse {
            status: status.as_u16(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_debug() {
        let client = OmieClient::new("test-key", "test-secret", DEFAULT_API_URL).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("OmieClient"));
        assert!(debug.contains("base_url"));
        // Secret should not be in debug output
        assert!(!debug.contains("test-secret"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = OmieClient::new("k", "s", "https://app.omie.com.br/api").unwrap();
        let client2 = OmieClient::new("k", "s", "https://app.omie.com.br/api/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
        assert_eq!(
            client1.base_url().join("v1/geral/clientes/").unwrap().as_str(),
            "https://app.omie.com.br/api/v1/geral/clientes/"
        );
    }

    #[test]
    fn test_envelope_shape() {
        let client = OmieClient::with_credentials("APP_KEY", "APP_SECRET").unwrap();
        let params = json!({"pagina": 1});
        let envelope = client.envelope("ListarClientes", &params).unwrap();

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "app_key": "APP_KEY",
                "app_secret": "APP_SECRET",
                "call": "ListarClientes",
                "param": [{"pagina": 1}]
            })
        );
    }

    #[test]
    fn test_envelope_requires_credentials() {
        let empty = json!({});
        let client = OmieClient::with_credentials("", "APP_SECRET").unwrap();
        let result = client.envelope("ListarClientes", &empty);
        assert!(matches!(result, Err(OmieError::MissingCredentials(_))));

        let client = OmieClient::with_credentials("APP_KEY", "  ").unwrap();
        let result = client.envelope("ListarClientes", &empty);
        assert!(matches!(result, Err(OmieError::MissingCredentials(_))));
    }

    #[test]
    fn test_classify_fault_body() {
        let body = json!({
            "faultstring": "ERROR: Cliente não cadastrado",
            "faultcode": "SOAP-ENV:Client-103"
        })
        .to_string();

        match OmieClient::classify_failure(StatusCode::INTERNAL_SERVER_ERROR, body) {
            OmieError::Request {
                fault_code,
                fault_string,
            } => {
                assert_eq!(fault_code, "SOAP-ENV:Client-103");
                assert_eq!(fault_string, "ERROR: Cliente não cadastrado");
            }
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_other_status() {
        let err = OmieClient::classify_failure(StatusCode::NOT_FOUND, "missing".to_string());
        assert!(matches!(
            err,
            OmieError::InvalidResponse { status: 404, ref body } if body == "missing"
        ));

        // A 500 without a fault object is not classified
        let err = OmieClient::classify_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>oops</html>".to_string(),
        );
        assert!(matches!(err, OmieError::InvalidResponse { status: 500, .. }));
    }
}
