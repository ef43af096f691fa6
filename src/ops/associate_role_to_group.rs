//! [`AssociateRoleToGroup`](https://docs.aws.amazon.com/greengrass/latest/apireference/associateroletogroup-put.html)

use crate::config::Config;
use crate::decode::FieldDecoder;
use crate::errors::DtoResult;
use crate::message::{
    count_present, json_payload, JsonDocument, Protocol, ServiceRequest, ServiceResponse,
    ServiceResult,
};

use bytes::Bytes;
use serde::Serialize;

/// `AssociateRoleToGroupRequest`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociateRoleToGroupRequest {
    /// The ID of the Greengrass group.
    pub(crate) group_id: Option<String>,
    /// The ARN of the role you wish to associate with this group.
    pub(crate) role_arn: Option<String>,
}

impl AssociateRoleToGroupRequest {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> AssociateRoleToGroupRequestBuilder {
        AssociateRoleToGroupRequestBuilder::default()
    }

    /// Converts back into a builder holding the same fields
    #[must_use]
    pub fn into_builder(self) -> AssociateRoleToGroupRequestBuilder {
        AssociateRoleToGroupRequestBuilder { inner: self }
    }

    /// The ID of the Greengrass group.
    #[must_use]
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    /// The ARN of the role to associate with the group.
    #[must_use]
    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }
}

/// Builder of [`AssociateRoleToGroupRequest`]
#[derive(Debug, Clone, Default)]
pub struct AssociateRoleToGroupRequestBuilder {
    /// fields set so far
    inner: AssociateRoleToGroupRequest,
}

impl AssociateRoleToGroupRequestBuilder {
    /// Sets `GroupId`
    #[must_use]
    pub fn group_id(mut self, input: impl Into<String>) -> Self {
        self.inner.group_id = Some(input.into());
        self
    }

    /// Sets or clears `GroupId`
    #[must_use]
    pub fn set_group_id(mut self, input: Option<String>) -> Self {
        self.inner.group_id = input;
        self
    }

    /// Sets `RoleArn`
    #[must_use]
    pub fn role_arn(mut self, input: impl Into<String>) -> Self {
        self.inner.role_arn = Some(input.into());
        self
    }

    /// Sets or clears `RoleArn`
    #[must_use]
    pub fn set_role_arn(mut self, input: Option<String>) -> Self {
        self.inner.role_arn = input;
        self
    }

    /// Finishes the request
    #[must_use]
    pub fn build(self) -> AssociateRoleToGroupRequest {
        self.inner
    }
}

/// JSON body; `GroupId` travels in the path
#[derive(Serialize)]
struct Payload<'a> {
    #[serde(rename = "RoleArn", skip_serializing_if = "Option::is_none")]
    role_arn: Option<&'a str>,
}

impl ServiceRequest for AssociateRoleToGroupRequest {
    const SERVICE_REQUEST_NAME: &'static str = "AssociateRoleToGroup";
    const PROTOCOL: Protocol = Protocol::RestJson;

    fn serialize_payload_with(&self, config: &Config) -> DtoResult<Bytes> {
        let payload = Payload {
            role_arn: self.role_arn(),
        };
        json_payload(Self::SERVICE_REQUEST_NAME, &payload, config)
    }

    fn path_labels(&self) -> Vec<(&'static str, String)> {
        self.group_id
            .iter()
            .map(|id| ("GroupId", id.clone()))
            .collect()
    }
}

/// `AssociateRoleToGroupResult`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociateRoleToGroupResult {
    /// The time, in milliseconds since the epoch, when the role ARN was associated with the group.
    pub(crate) associated_at: Option<String>,
}

impl AssociateRoleToGroupResult {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> AssociateRoleToGroupResultBuilder {
        AssociateRoleToGroupResultBuilder::default()
    }

    /// Converts back into a builder holding the same fields
    #[must_use]
    pub fn into_builder(self) -> AssociateRoleToGroupResultBuilder {
        AssociateRoleToGroupResultBuilder { inner: self }
    }

    /// When the role was associated with the group.
    #[must_use]
    pub fn associated_at(&self) -> Option<&str> {
        self.associated_at.as_deref()
    }
}

/// Builder of [`AssociateRoleToGroupResult`]
#[derive(Debug, Clone, Default)]
pub struct AssociateRoleToGroupResultBuilder {
    /// fields set so far
    inner: AssociateRoleToGroupResult,
}

impl AssociateRoleToGroupResultBuilder {
    /// Sets `AssociatedAt`
    #[must_use]
    pub fn associated_at(mut self, input: impl Into<String>) -> Self {
        self.inner.associated_at = Some(input.into());
        self
    }

    /// Sets or clears `AssociatedAt`
    #[must_use]
    pub fn set_associated_at(mut self, input: Option<String>) -> Self {
        self.inner.associated_at = input;
        self
    }

    /// Finishes the result
    #[must_use]
    pub fn build(self) -> AssociateRoleToGroupResult {
        self.inner
    }
}

impl ServiceResult for AssociateRoleToGroupResult {
    const OPERATION: &'static str = "AssociateRoleToGroup";
    type Document = JsonDocument;

    fn decode(
        response: &ServiceResponse<JsonDocument>,
        decoder: &FieldDecoder,
    ) -> DtoResult<Self> {
        let doc = response.document().object();
        Ok(Self {
            associated_at: decoder.json(doc, "AssociatedAt")?,
        })
    }

    fn present_fields(&self) -> usize {
        count_present!(self.associated_at)
    }
}
