//! DNS client model extension
//!
//! Defines the property and item types that let a user describe a node's
//! DNS client: its search domains and up to three ordered nameservers.

use tracing::{debug, Span};

use crate::config::{NameserverConfig, SchemaConfig, SearchConfig};
use crate::domain::extensions::ModelExtension;
use crate::domain::validation::builtin::{IsNotDigitValidator, IP_ADDRESS_WITH_PREFIXLEN};
use crate::domain::validation::{
    Collection, ItemType, MaxCountValidator, MaxLengthValidator, Property, PropertyType,
};
use crate::shared::error::AppResult;

pub const POSITION_VALUE: &str = "position_value";
pub const COMMA_SEPARATED_DOMAIN_NAMES: &str = "comma_separated_domain_names";
pub const DNS_CLIENT: &str = "dns-client";
pub const NAMESERVER: &str = "nameserver";

const SEARCH_DELIMITER: &str = ",";

const POSITION_PATTERN: &str = r"^[1-3]$";

// One or more hostnames separated by commas. Every label is alphanumeric
// with inner hyphens; hostnames after the first must end in a label that
// starts with a letter.
const DOMAIN_NAMES_PATTERN: &str = concat!(
    r"^(([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9\-]*[a-zA-Z0-9])\.)*",
    r"([A-Za-z0-9]|[A-Za-z0-9][A-Za-z0-9\-]*[A-Za-z0-9])",
    r"(,+(([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9\-]*[a-zA-Z0-9])\.)*",
    r"([A-Za-z]|[A-Za-z][A-Za-z0-9\-]*[A-Za-z0-9]))*$",
);

/// DNS client (resolv.conf) model extension
pub struct DnsClientExtension {
    search: SearchConfig,
    nameservers: NameserverConfig,
    span: Span,
}

impl DnsClientExtension {
    /// Extension with the default bounds
    pub fn new() -> Self {
        Self::with_config(&SchemaConfig::default())
    }

    /// Extension with bounds taken from configuration
    pub fn with_config(config: &SchemaConfig) -> Self {
        Self {
            search: config.search.clone(),
            nameservers: config.nameservers.clone(),
            span: tracing::info_span!("model_extension", extension = "dnsclient"),
        }
    }
}

impl Default for DnsClientExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelExtension for DnsClientExtension {
    fn name(&self) -> &str {
        "dnsclient"
    }

    fn define_property_types(&self) -> AppResult<Vec<PropertyType>> {
        let _guard = self.span.enter();

        let property_types = vec![
            PropertyType::new(POSITION_VALUE, POSITION_PATTERN)?,
            PropertyType::new(COMMA_SEPARATED_DOMAIN_NAMES, DOMAIN_NAMES_PATTERN)?
                .with_validator(IsNotDigitValidator)
                .with_validator(MaxLengthValidator::new(self.search.max_length))
                .with_validator(MaxCountValidator::new(
                    self.search.min_domains,
                    self.search.max_domains,
                    SEARCH_DELIMITER,
                )?),
        ];

        debug!(count = property_types.len(), "Defined property types");
        Ok(property_types)
    }

    fn define_item_types(&self) -> Vec<ItemType> {
        let _guard = self.span.enter();

        let item_types = vec![
            ItemType {
                id: DNS_CLIENT.to_string(),
                extend_item: Some("node-config".to_string()),
                description: "A node-level DNS client (resolv.conf) configuration.".to_string(),
                properties: vec![Property {
                    name: "search".to_string(),
                    property_type_id: COMMA_SEPARATED_DOMAIN_NAMES.to_string(),
                    required: false,
                    site_specific: true,
                    description: "Comma separated list of domain names".to_string(),
                }],
                collections: vec![Collection {
                    name: "nameservers".to_string(),
                    item_type_id: NAMESERVER.to_string(),
                    min_count: self.nameservers.min_count,
                    max_count: self.nameservers.max_count,
                }],
            },
            ItemType {
                id: NAMESERVER.to_string(),
                extend_item: None,
                description: "A nameserver within the DNS (Domain Name System) client configuration."
                    .to_string(),
                properties: vec![
                    Property {
                        name: "ipaddress".to_string(),
                        property_type_id: IP_ADDRESS_WITH_PREFIXLEN.to_string(),
                        required: true,
                        site_specific: true,
                        description: "IP address of nameserver".to_string(),
                    },
                    Property {
                        name: "position".to_string(),
                        property_type_id: POSITION_VALUE.to_string(),
                        required: true,
                        site_specific: false,
                        description: "Position of the nameserver in servers list".to_string(),
                    },
                ],
                collections: vec![],
            },
        ];

        debug!(count = item_types.len(), "Defined item types");
        item_types
    }
}
