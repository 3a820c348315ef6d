//! Deploy request payload defined by the Kong API Gateway webservice API
use crate::Error;

/// JSON payload of a `POST /deployKongApiGateway` request.
///
/// Field names are renamed to the exact JSON keys the API accepts;
/// any other key in the request body is rejected.
#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployPayload {
    /// Base64 encoded SSL certificate
    #[serde(rename = "sslCertBase64", default)]
    ssl_cert_base64: String,
    /// Base64 encoded SSL certificate key
    #[serde(rename = "sslCertKeyBase64", default)]
    ssl_cert_key_base64: String,
    /// Domain name the gateway will serve
    #[serde(rename = "kongApiGatewayDomain", default)]
    kong_api_gateway_domain: String,
}

impl DeployPayload {
    /// Decode exactly one JSON object from the request body, then validate it.
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        if body.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(Error::EmptyBody);
        }

        // First pass consumes one JSON value and rejects anything after it,
        // so that trailing garbage is reported as such instead of as a
        // schema mismatch of a second value.
        let mut values =
            serde_json::Deserializer::from_slice(body).into_iter::<serde_json::Value>();
        let value = match values.next() {
            Some(Ok(value)) => value,
            Some(Err(err)) => return Err(Error::JsonDecodeError(err)),
            None => return Err(Error::EmptyBody),
        };
        if values.next().is_some() {
            return Err(Error::TrailingData);
        }

        let payload: Self = serde_json::from_value(value).map_err(Error::JsonDecodeError)?;
        payload.validate()?;
        Ok(payload)
    }

    /// All three fields are required and must be non-empty.
    /// Returns the first failing field, in declaration order.
    fn validate(&self) -> Result<(), Error> {
        if self.ssl_cert_base64.is_empty() {
            return Err(Error::EmptyField("sslCertBase64"));
        }
        if self.ssl_cert_key_base64.is_empty() {
            return Err(Error::EmptyField("sslCertKeyBase64"));
        }
        if self.kong_api_gateway_domain.is_empty() {
            return Err(Error::EmptyField("kongApiGatewayDomain"));
        }
        Ok(())
    }

    pub fn ssl_cert_base64<'a>(&'a self) -> &'a str {
        self.ssl_cert_base64.as_str()
    }

    pub fn ssl_cert_key_base64<'a>(&'a self) -> &'a str {
        self.ssl_cert_key_base64.as_str()
    }

    pub fn kong_api_gateway_domain<'a>(&'a self) -> &'a str {
        self.kong_api_gateway_domain.as_str()
    }
}
