//! Process allow entries.

use super::{ProcessUri, ProcessVersion};
use crate::identity::domain::{OrganizationId, Principal, PrincipalRole};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Triggering combination looked up in the process catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessKey {
    process_url: String,
    process_version: ProcessVersion,
    message_name: String,
}

impl ProcessKey {
    /// Creates a key from its parts.
    #[must_use]
    pub fn new(
        process_url: impl Into<String>,
        process_version: ProcessVersion,
        message_name: impl Into<String>,
    ) -> Self {
        Self {
            process_url: process_url.into(),
            process_version,
            message_name: message_name.into(),
        }
    }

    /// Creates a key for a message sent to a parsed process URI.
    #[must_use]
    pub fn for_message(uri: &ProcessUri, message_name: impl Into<String>) -> Self {
        Self::new(uri.process_url(), uri.version(), message_name)
    }

    /// Returns the versionless process URL.
    #[must_use]
    pub fn process_url(&self) -> &str {
        &self.process_url
    }

    /// Returns the process version.
    #[must_use]
    pub const fn process_version(&self) -> ProcessVersion {
        self.process_version
    }

    /// Returns the message name.
    #[must_use]
    pub fn message_name(&self) -> &str {
        &self.message_name
    }
}

impl fmt::Display for ProcessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}#{}",
            self.process_url, self.process_version, self.message_name
        )
    }
}

/// Publication status of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// Entry is being prepared and does not accept messages yet.
    Draft,
    /// Entry accepts messages.
    Active,
    /// Entry no longer accepts messages.
    Retired,
}

/// Organizations permitted to send a message to a process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "organization", rename_all = "snake_case")]
pub enum AllowedRequester {
    /// Any authenticated caller.
    Any,
    /// Any local user.
    AnyLocal,
    /// Any remote user.
    AnyRemote,
    /// Members of one organization.
    Organization(OrganizationId),
}

impl AllowedRequester {
    /// Returns whether the principal satisfies this requester rule.
    #[must_use]
    pub fn permits(&self, principal: &Principal) -> bool {
        match self {
            Self::Any => true,
            Self::AnyLocal => principal.role() == PrincipalRole::Local,
            Self::AnyRemote => principal.role() == PrincipalRole::Remote,
            Self::Organization(id) => principal.organization() == id,
        }
    }
}

/// Catalog entry recognising a `(process, version, message)` combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessAllowEntry {
    key: ProcessKey,
    status: ProcessStatus,
    allowed_requesters: Vec<AllowedRequester>,
}

impl ProcessAllowEntry {
    /// Creates an active entry without any allowed requesters.
    #[must_use]
    pub const fn new(key: ProcessKey) -> Self {
        Self {
            key,
            status: ProcessStatus::Active,
            allowed_requesters: Vec::new(),
        }
    }

    /// Sets the publication status.
    #[must_use]
    pub const fn with_status(mut self, status: ProcessStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds an allowed requester rule.
    #[must_use]
    pub fn allowing(mut self, requester: AllowedRequester) -> Self {
        if !self.allowed_requesters.contains(&requester) {
            self.allowed_requesters.push(requester);
        }
        self
    }

    /// Returns the entry key.
    #[must_use]
    pub const fn key(&self) -> &ProcessKey {
        &self.key
    }

    /// Returns the publication status.
    #[must_use]
    pub const fn status(&self) -> ProcessStatus {
        self.status
    }

    /// Returns the allowed requester rules.
    #[must_use]
    pub fn allowed_requesters(&self) -> &[AllowedRequester] {
        &self.allowed_requesters
    }

    /// Returns whether the entry is active and permits the principal.
    #[must_use]
    pub fn permits(&self, principal: &Principal) -> bool {
        self.status == ProcessStatus::Active
            && self
                .allowed_requesters
                .iter()
                .any(|requester| requester.permits(principal))
    }
}
