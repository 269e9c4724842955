/*!
 * Field validation for resolver endpoint API requests
 * Checks every supplied field and reports all constraint failures in one
 * aggregated ValidationError instead of failing on the first offender.
 */

use crate::error::{ValidationError, Violation};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Pattern advertised to callers when a name fails validation. The regex
/// crate has no lookahead support, so the check itself is split into a
/// charset match plus an all-digits rejection below.
const NAME_PATTERN: &str = r"^(?!^[0-9]+$)([a-zA-Z0-9-_' ']+)$";

/// Recognized request fields, identified by their wire-level names.
///
/// Dispatch over this enum is exhaustive, so a field the validator does
/// not know about cannot be submitted in the first place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestField {
    #[serde(rename = "creatorRequestId")]
    CreatorRequestId,
    #[serde(rename = "direction")]
    Direction,
    #[serde(rename = "resolverEndpointId")]
    ResolverEndpointId,
    #[serde(rename = "ipAddresses")]
    IpAddresses,
    #[serde(rename = "maxResults")]
    MaxResults,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "securityGroupIds")]
    SecurityGroupIds,
    #[serde(rename = "ipAddresses.subnetId")]
    SubnetIds,
}

impl RequestField {
    /// Returns the wire-level name of the field as it appears in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestField::CreatorRequestId => "creatorRequestId",
            RequestField::Direction => "direction",
            RequestField::ResolverEndpointId => "resolverEndpointId",
            RequestField::IpAddresses => "ipAddresses",
            RequestField::MaxResults => "maxResults",
            RequestField::Name => "name",
            RequestField::SecurityGroupIds => "securityGroupIds",
            RequestField::SubnetIds => "ipAddresses.subnetId",
        }
    }
}

impl fmt::Display for RequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accumulative validator for resolver endpoint requests.
///
/// Every `(field, value)` pair is checked against its field-specific
/// constraint; failures are collected in input order and raised as a
/// single [`ValidationError`] so callers can report all of them at once.
pub struct FieldValidator {
    name_charset: Regex,
    all_digits: Regex,
}

impl FieldValidator {
    /// Create a validator with its name patterns compiled.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            name_charset: Regex::new(r"^[a-zA-Z0-9\-_' ]+$")?,
            all_digits: Regex::new(r"^[0-9]+$")?,
        })
    }

    /// Validate an ordered sequence of `(field, value)` pairs.
    ///
    /// All pairs are evaluated; there is no short-circuit across fields.
    /// Returns `Ok(())` when every constraint holds, otherwise one
    /// aggregated error carrying a violation per failing field.
    pub fn validate(&self, pairs: &[(RequestField, Value)]) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        for (field, value) in pairs {
            if let Some(message) = self.check(*field, value) {
                violations.push(Violation {
                    field: *field,
                    value: value.clone(),
                    message,
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }

    fn check(&self, field: RequestField, value: &Value) -> Option<String> {
        match field {
            RequestField::CreatorRequestId => Self::check_creator_request_id(value),
            RequestField::Direction => Self::check_direction(value),
            RequestField::ResolverEndpointId => Self::check_endpoint_id(value),
            RequestField::IpAddresses => Self::check_ip_addresses(value),
            RequestField::MaxResults => Self::check_max_results(value),
            RequestField::Name => self.check_name(value),
            RequestField::SecurityGroupIds => Self::check_security_group_ids(value),
            RequestField::SubnetIds => Self::check_subnet_ids(value),
        }
    }

    /// Creator request ids are optional but bounded in length.
    fn check_creator_request_id(value: &Value) -> Option<String> {
        match value.as_str() {
            Some(id) if id.len() > 255 => {
                Some("have length less than or equal to 255".to_string())
            }
            _ => None,
        }
    }

    /// Direction is optional; when present it must name a known endpoint
    /// direction.
    fn check_direction(value: &Value) -> Option<String> {
        if value.is_null() {
            return None;
        }
        match value.as_str() {
            Some("") | Some("INBOUND") | Some("OUTBOUND") => None,
            _ => Some("satisfy enum value set: [INBOUND, OUTBOUND]".to_string()),
        }
    }

    fn check_endpoint_id(value: &Value) -> Option<String> {
        if value.as_str().map_or(false, |id| id.len() > 64) {
            Some("have length less than or equal to 64".to_string())
        } else {
            None
        }
    }

    fn check_ip_addresses(value: &Value) -> Option<String> {
        if value.as_array().map_or(false, |addresses| addresses.len() > 10) {
            Some("have length less than or equal to 10".to_string())
        } else {
            None
        }
    }

    fn check_max_results(value: &Value) -> Option<String> {
        if value.as_f64().map_or(false, |count| count > 100.0) {
            Some("have length less than or equal to 100".to_string())
        } else {
            None
        }
    }

    /// Names are optional; when present they are bounded in length and
    /// restricted to a charset that excludes purely numeric names.
    fn check_name(&self, value: &Value) -> Option<String> {
        let name = value.as_str().unwrap_or("");
        if name.is_empty() {
            return None;
        }
        if name.len() > 64 {
            return Some("have length less than or equal to 64".to_string());
        }
        if !self.name_charset.is_match(name) || self.all_digits.is_match(name) {
            return Some(format!(
                "satisfy regular expression pattern: {}",
                NAME_PATTERN
            ));
        }
        None
    }

    /// Stops at the first offending group id. The minimum-length clause in
    /// the message is advertised but not enforced; callers depend on the
    /// message text as-is.
    fn check_security_group_ids(value: &Value) -> Option<String> {
        let groups = value.as_array()?;
        for group_id in groups.iter().filter_map(Value::as_str) {
            if group_id.len() > 64 {
                return Some(
                    "have length less than or equal to 64 and Member must have \
                     length greater than or equal to 1"
                        .to_string(),
                );
            }
        }
        None
    }

    /// Stops at the first offending subnet id across the address records.
    fn check_subnet_ids(value: &Value) -> Option<String> {
        let addresses = value.as_array()?;
        for subnet_id in addresses
            .iter()
            .filter_map(|address| address.get("SubnetId").and_then(Value::as_str))
        {
            if subnet_id.len() > 32 {
                return Some("have length less than or equal to 32".to_string());
            }
        }
        None
    }
}
