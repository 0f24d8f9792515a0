//! AWS Systems Manager Parameter Store backend.
//!
//! Enable with `--features aws` (on by default).
//!
//! Uses AWS credentials from the environment (`AWS_ACCESS_KEY_ID`,
//! `AWS_PROFILE`, ...) or the default credential provider chain. Region and
//! profile can be pinned in `.parambulk.toml`:
//!
//! ```toml
//! [store]
//! backend = "aws"
//! region = "eu-central-1"
//! profile = "dev"
//! ```
//!
//! The SDK is async; every call is driven to completion on a private
//! current-thread runtime so the engine stays synchronous.

use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::ParameterType;
use tracing::trace;

use super::{Page, Parameter, ParameterStore};
use crate::error::{Result, StoreError};

/// SSM Parameter Store client.
pub struct SsmStore {
    runtime: tokio::runtime::Runtime,
    client: aws_sdk_ssm::Client,
}

impl SsmStore {
    /// Load AWS configuration and create a client.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the async runtime cannot be built.
    pub fn connect(region: Option<&str>, profile: Option<&str>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Runtime(e.to_string()))?;

        let client = runtime.block_on(async {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
            if let Some(region) = region {
                loader = loader.region(aws_config::Region::new(region.to_string()));
            }
            if let Some(profile) = profile {
                loader = loader.profile_name(profile);
            }
            let config = loader.load().await;
            aws_sdk_ssm::Client::new(&config)
        });

        trace!(?region, ?profile, "connected to SSM");
        Ok(Self { runtime, client })
    }
}

/// Convert SDK parameters, skipping entries without a name.
fn convert(parameters: &[aws_sdk_ssm::types::Parameter]) -> Vec<Parameter> {
    parameters
        .iter()
        .filter_map(|p| {
            p.name()
                .map(|name| Parameter::new(name, p.value().unwrap_or_default()))
        })
        .collect()
}

fn request_failed(operation: &'static str, error: impl std::error::Error) -> StoreError {
    StoreError::Request {
        operation,
        message: DisplayErrorContext(error).to_string(),
    }
}

impl ParameterStore for SsmStore {
    fn get_parameters(&self, names: &[String]) -> Result<Vec<Parameter>> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameters()
                    .set_names(Some(names.to_vec()))
                    .with_decryption(true)
                    .send(),
            )
            .map_err(|e| request_failed("GetParameters", e))?;

        if !output.invalid_parameters().is_empty() {
            trace!(invalid = ?output.invalid_parameters(), "names not found in batch");
        }
        Ok(convert(output.parameters()))
    }

    fn get_parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        next_token: Option<&str>,
    ) -> Result<Page> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameters_by_path()
                    .path(path)
                    .recursive(recursive)
                    .with_decryption(true)
                    .set_next_token(next_token.map(str::to_string))
                    .send(),
            )
            .map_err(|e| request_failed("GetParametersByPath", e))?;

        Ok(Page {
            parameters: convert(output.parameters()),
            next_token: output.next_token().map(str::to_string),
        })
    }

    fn get_parameter(&self, name: &str) -> Result<Parameter> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameter()
                    .name(name)
                    .with_decryption(true)
                    .send(),
            )
            .map_err(|e| {
                let missing = e
                    .as_service_error()
                    .is_some_and(|service| service.is_parameter_not_found());
                if missing {
                    StoreError::ParameterNotFound(name.to_string())
                } else {
                    request_failed("GetParameter", e)
                }
            })?;

        output
            .parameter()
            .and_then(|p| convert(std::slice::from_ref(p)).into_iter().next())
            .ok_or_else(|| StoreError::ParameterNotFound(name.to_string()).into())
    }

    fn put_parameter(&self, name: &str, value: &str) -> Result<()> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .put_parameter()
                    .name(name)
                    .value(value)
                    .overwrite(true)
                    .r#type(ParameterType::SecureString)
                    .send(),
            )
            .map_err(|e| request_failed("PutParameter", e))?;

        trace!(%name, version = output.version(), "put parameter");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "aws"
    }
}
