//! Validated service endpoints consumed by the client.
//!
//! [`ServiceConfig`] names the API base that every endpoint path is joined onto and the
//! browser-facing authorization page. Both must use HTTPS unless the builder is told to
//! accept plain HTTP (local mock servers, recorded fixtures).

// self
use crate::{_prelude::*, error::ConfigError};

/// Default API base for the hosted service.
pub const DEFAULT_API_BASE: &str = "https://getpocket.com/v3/";
/// Default browser page used during authorization.
pub const DEFAULT_AUTHORIZE_ENDPOINT: &str = "https://getpocket.com/auth/authorize";

/// Immutable endpoint configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
	/// Base URL for API calls; always ends with `/`.
	pub api_base: Url,
	/// Page the user visits to approve a request token.
	pub authorize_endpoint: Url,
}
impl ServiceConfig {
	/// Creates a new builder seeded with the hosted service's endpoints.
	pub fn builder() -> ServiceConfigBuilder {
		ServiceConfigBuilder::default()
	}

	/// Joins a relative API path (e.g. `"add"`, `"oauth/request"`) onto the API base.
	pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		self.api_base
			.join(path.trim_start_matches('/'))
			.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "api", source })
	}
}
impl Default for ServiceConfig {
	fn default() -> Self {
		Self {
			api_base: Url::parse(DEFAULT_API_BASE)
				.unwrap_or_else(|_| unreachable!("default API base is a valid URL")),
			authorize_endpoint: Url::parse(DEFAULT_AUTHORIZE_ENDPOINT)
				.unwrap_or_else(|_| unreachable!("default authorize endpoint is a valid URL")),
		}
	}
}

/// Builder for [`ServiceConfig`] values.
#[derive(Debug, Default)]
pub struct ServiceConfigBuilder {
	/// API base URL; a trailing slash is added when missing.
	pub api_base: Option<Url>,
	/// Authorization page URL.
	pub authorize_endpoint: Option<Url>,
	/// Accept `http://` endpoints.
	pub allow_insecure: bool,
}
impl ServiceConfigBuilder {
	/// Overrides the API base.
	pub fn api_base(mut self, url: Url) -> Self {
		self.api_base = Some(url);

		self
	}

	/// Parses and overrides the API base.
	pub fn api_base_str(self, url: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(url)
			.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "api", source })?;

		Ok(self.api_base(url))
	}

	/// Overrides the authorization page.
	pub fn authorize_endpoint(mut self, url: Url) -> Self {
		self.authorize_endpoint = Some(url);

		self
	}

	/// Accepts plain-HTTP endpoints.
	pub fn allow_insecure_endpoints(mut self) -> Self {
		self.allow_insecure = true;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ServiceConfig, ConfigError> {
		let defaults = ServiceConfig::default();
		let mut api_base = self.api_base.unwrap_or(defaults.api_base);
		let authorize_endpoint = self.authorize_endpoint.unwrap_or(defaults.authorize_endpoint);

		if api_base.cannot_be_a_base() {
			return Err(ConfigError::CannotBeABase { endpoint: "api", url: api_base.to_string() });
		}
		if !api_base.path().ends_with('/') {
			let path = format!("{}/", api_base.path());

			api_base.set_path(&path);
		}
		if !self.allow_insecure {
			validate_endpoint("api", &api_base)?;
			validate_endpoint("authorize", &authorize_endpoint)?;
		}

		Ok(ServiceConfig { api_base, authorize_endpoint })
	}
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ConfigError> {
	if url.scheme() != "https" {
		Err(ConfigError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	} else {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Failed to parse test URL.")
	}

	#[test]
	fn defaults_point_at_hosted_service() {
		let config = ServiceConfig::builder().build().expect("Default config should validate.");

		assert_eq!(config, ServiceConfig::default());
		assert_eq!(
			config.endpoint("oauth/request").expect("Join should succeed.").as_str(),
			"https://getpocket.com/v3/oauth/request"
		);
		assert_eq!(config.authorize_endpoint.as_str(), "https://getpocket.com/auth/authorize");
	}

	#[test]
	fn base_gains_trailing_slash() {
		let config = ServiceConfig::builder()
			.api_base(url("https://api.example.com/v3"))
			.build()
			.expect("HTTPS base should validate.");

		assert_eq!(config.api_base.as_str(), "https://api.example.com/v3/");
		assert_eq!(
			config.endpoint("/get").expect("Join should succeed.").as_str(),
			"https://api.example.com/v3/get"
		);
	}

	#[test]
	fn insecure_endpoints_need_opt_in() {
		let err = ServiceConfig::builder()
			.api_base(url("http://127.0.0.1:8080/v3/"))
			.build()
			.expect_err("Plain HTTP should be rejected by default.");

		assert!(matches!(err, ConfigError::InsecureEndpoint { endpoint: "api", .. }));

		let err = ServiceConfig::builder()
			.authorize_endpoint(url("http://example.com/auth/authorize"))
			.build()
			.expect_err("Plain HTTP authorize pages should be rejected by default.");

		assert!(matches!(err, ConfigError::InsecureEndpoint { endpoint: "authorize", .. }));

		ServiceConfig::builder()
			.api_base(url("http://127.0.0.1:8080/v3/"))
			.allow_insecure_endpoints()
			.build()
			.expect("Opted-in plain HTTP should validate.");
	}

	#[test]
	fn rejects_unusable_bases() {
		let err = ServiceConfig::builder()
			.api_base(url("data:text/plain,hello"))
			.build()
			.expect_err("Opaque URLs cannot carry endpoint paths.");

		assert!(matches!(err, ConfigError::CannotBeABase { .. }));
		assert!(matches!(
			ServiceConfig::builder().api_base_str("not a url"),
			Err(ConfigError::InvalidEndpoint { endpoint: "api", .. })
		));
	}
}
