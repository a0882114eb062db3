//! End-to-end checks of the DNS client schema through the public API.

use std::collections::HashSet;
use std::sync::Once;

use dnsclient_schema::{
    DnsClientExtension, ItemValues, MaxCountValidator, MaxLengthValidator, ModelExtension,
    PropertyValidator, SchemaConfig, SchemaRegistry, ValidationError,
};

static INIT: Once = Once::new();

fn init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

fn registry() -> SchemaRegistry {
    init();
    let mut registry = SchemaRegistry::new().unwrap();
    registry.register_extension(&DnsClientExtension::new()).unwrap();
    registry
}

#[test]
fn property_types_registered_in_order() {
    init();
    let ids: Vec<String> = DnsClientExtension::new()
        .define_property_types()
        .unwrap()
        .iter()
        .map(|pt| pt.id().to_string())
        .collect();
    assert_eq!(ids, ["position_value", "comma_separated_domain_names"]);
}

#[test]
fn item_types_registered() {
    init();
    let ids: HashSet<String> = DnsClientExtension::new()
        .define_item_types()
        .into_iter()
        .map(|it| it.id)
        .collect();
    assert_eq!(ids, HashSet::from(["dns-client".to_string(), "nameserver".to_string()]));
}

#[test]
fn max_length_items() {
    let validator = MaxLengthValidator::new(12);
    let error = validator.validate("property_value_string_more_than_12");
    let expected = ValidationError::new("Length of property cannot be more than 12 characters");
    assert_eq!(error, Some(expected));

    assert_eq!(validator.validate("less_than_12"), None);
}

#[test]
fn max_count_items() {
    let validator = MaxCountValidator::new(3, 6, ",").unwrap();

    let error_max = validator
        .validate("test1.com,test2.com,test3.com,test4.com,test5.com,test6.com,test7.com");
    assert_eq!(
        error_max,
        Some(ValidationError::new("A maximum of 6 domains per search may be specified"))
    );

    let error_min = validator.validate("test1.com,test2.com");
    assert_eq!(
        error_min,
        Some(ValidationError::new("A minium of 3 domains per search may be specified"))
    );

    assert_eq!(validator.validate("test1.com,test2.com,test3.com"), None);
}

#[test]
fn count_boundaries_for_every_element_count() {
    let validator = MaxCountValidator::new(2, 4, ",").unwrap();
    for n in 1..=6 {
        let value = vec!["x.com"; n].join(",");
        let error = validator.validate(&value).map(|e| e.error_message);
        match n {
            1 => assert_eq!(error.as_deref(), Some("A minium of 2 domains per search may be specified")),
            2..=4 => assert_eq!(error, None),
            _ => assert_eq!(error.as_deref(), Some("A maximum of 4 domains per search may be specified")),
        }
    }
}

#[test]
fn search_domains_through_registry() {
    let registry = registry();
    let check = |value: &str| {
        registry
            .validate_property("comma_separated_domain_names", value)
            .unwrap()
            .map(|e| e.error_message)
    };

    assert_eq!(check("example.com"), None);
    assert_eq!(check("a.com,b.org"), None);
    assert_eq!(check(""), Some("Invalid value ''.".to_string()));
    assert_eq!(check(",a.com"), Some("Invalid value ',a.com'.".to_string()));
    assert_eq!(check("a.com,"), Some("Invalid value 'a.com,'.".to_string()));
    assert_eq!(check("12345"), Some("Property cannot be a digit".to_string()));
    assert_eq!(
        check(&format!("{}.com", "a".repeat(300))),
        Some("Length of property cannot be more than 256 characters".to_string())
    );
    assert_eq!(
        check("a.com,b.com,c.com,d.com,e.com,f.com,g.com"),
        Some("A maximum of 6 domains per search may be specified".to_string())
    );
}

#[test]
fn position_values_through_registry() {
    let registry = registry();
    for value in ["1", "2", "3"] {
        assert_eq!(registry.validate_property("position_value", value).unwrap(), None);
    }
    for value in ["0", "4", "12", ""] {
        assert!(registry.validate_property("position_value", value).unwrap().is_some());
    }
}

#[test]
fn well_formed_dns_client() {
    let registry = registry();

    let client = ItemValues::new()
        .with_property("search", "example.com,example.org")
        .with_collection_count("nameservers", 3);
    assert!(registry.validate_item("dns-client", &client).unwrap().is_empty());

    for (ip, position) in [("10.10.10.1", "1"), ("fe80::1", "2"), ("192.168.1.1/24", "3")] {
        let nameserver = ItemValues::new()
            .with_property("ipaddress", ip)
            .with_property("position", position);
        assert!(registry.validate_item("nameserver", &nameserver).unwrap().is_empty());
    }
}

#[test]
fn dns_client_with_too_many_nameservers() {
    let registry = registry();
    let client = ItemValues::new().with_collection_count("nameservers", 4);
    let errors = registry.validate_item("dns-client", &client).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "This collection is limited to a maximum of 3 items");
}

#[test]
fn configured_schema_from_toml() {
    init();
    let config = SchemaConfig::from_toml_str(
        r#"
        [search]
        max_domains = 3

        [nameservers]
        max_count = 2
        "#,
    )
    .unwrap();

    let mut registry = SchemaRegistry::new().unwrap();
    registry.register_extension(&DnsClientExtension::with_config(&config)).unwrap();

    let error = registry
        .validate_property("comma_separated_domain_names", "a.com,b.com,c.com,d.com")
        .unwrap();
    assert_eq!(
        error,
        Some(ValidationError::new("A maximum of 3 domains per search may be specified"))
    );

    let client = ItemValues::new().with_collection_count("nameservers", 3);
    let errors = registry.validate_item("dns-client", &client).unwrap();
    assert_eq!(errors[0].error_message, "This collection is limited to a maximum of 2 items");
}

#[test]
fn item_types_serialize() {
    let items = DnsClientExtension::new().define_item_types();
    let value = serde_json::to_value(&items).unwrap();

    assert_eq!(value[0]["id"], "dns-client");
    assert_eq!(value[0]["extend_item"], "node-config");
    assert_eq!(value[0]["collections"][0]["name"], "nameservers");
    assert_eq!(value[0]["collections"][0]["min_count"], 1);
    assert_eq!(value[0]["collections"][0]["max_count"], 3);
    assert_eq!(value[1]["properties"][1]["property_type_id"], "position_value");
    assert_eq!(value[1]["properties"][1]["required"], true);
}

#[test]
fn validators_shared_across_threads() {
    let validator = std::sync::Arc::new(MaxCountValidator::new(1, 6, ",").unwrap());
    let handles: Vec<_> = (1..=8)
        .map(|n| {
            let validator = validator.clone();
            std::thread::spawn(move || validator.validate(&vec!["a.com"; n].join(",")).is_none())
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, [true, true, true, true, true, true, false, false]);
}
