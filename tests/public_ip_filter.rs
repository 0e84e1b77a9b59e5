use pubip::filter::{Event, FilterConfig, FilterOutcome, PublicIpFilter};
use serde_json::{json, Value};

fn filter(source: &str, target_ipv: &str, target_pub_ip: &str) -> PublicIpFilter {
    PublicIpFilter::new(FilterConfig {
        source: source.to_owned(),
        target_ipv: target_ipv.to_owned(),
        target_pub_ip: target_pub_ip.to_owned(),
        ..FilterConfig::default()
    })
    .unwrap()
}

fn run(filter: &PublicIpFilter, record: Value) -> (FilterOutcome, Value) {
    let mut event: Event = serde_json::from_value(record).unwrap();
    let outcome = filter.filter(&mut event);
    (outcome, serde_json::to_value(&event).unwrap())
}

#[test]
fn ip_version() {
    let (_, record) = run(&filter("ip", "ipv", "pubip"), json!({"ip": "10.0.0.1"}));
    assert_eq!(record["ipv"], "4");
}

#[test]
fn invalid_ip_is_tagged() {
    let (outcome, record) = run(&filter("ip", "ipv", "pubip"), json!({"ip": "10000.0.0.1"}));
    assert!(matches!(outcome, FilterOutcome::Tagged(_)));
    assert_eq!(record["tags"], json!(["_invalid_ip"]));
    assert!(record.get("ipv").is_none());
    assert!(record.get("pubip").is_none());
}

#[test]
fn ipv4_private() {
    let (_, record) = run(&filter("ip", "ipv", "pubip"), json!({"ip": "10.0.0.1"}));
    assert_eq!(record["pubip"], false);
    assert!(record.get("tags").is_none());
}

#[test]
fn ipv6_public_nested_targets() {
    let (_, record) = run(
        &filter("src_ip", "[src][ipv]", "[src][pubip]"),
        json!({"src_ip": "2606:4700:4700::1001"}),
    );
    assert_eq!(record["src"], json!({"ipv": "6", "pubip": true}));
}

#[test]
fn null_source_is_tagged() {
    let (_, record) = run(&filter("ip", "ipv", "pubip"), json!({"ip": null}));
    assert_eq!(record["tags"], json!(["_invalid_ip"]));
}

#[test]
fn missing_and_non_string_sources_are_tagged() {
    let f = filter("ip", "ipv", "pubip");
    for record in [json!({}), json!({"ip": 167772161}), json!({"ip": ["10.0.0.1"]})] {
        let (outcome, record) = run(&f, record);
        assert!(matches!(outcome, FilterOutcome::Tagged(_)));
        assert_eq!(record["tags"], json!(["_invalid_ip"]));
    }
}

#[test]
fn nested_source() {
    let (_, record) = run(
        &filter("[client][ip]", "ip_version", "public_ip"),
        json!({"client": {"ip": "192.168.1.10"}, "tags": ["seen"]}),
    );
    assert_eq!(record["ip_version"], "4");
    assert_eq!(record["public_ip"], false);
    assert_eq!(record["tags"], json!(["seen"]));
}

#[test]
fn custom_invalid_tags() {
    let f = PublicIpFilter::new(FilterConfig {
        source: "ip".to_owned(),
        tag_on_invalid_ip: vec!["_bad_ip".to_owned(), "_review".to_owned()],
        ..FilterConfig::default()
    })
    .unwrap();
    let (_, record) = run(&f, json!({"ip": "::gg", "tags": ["_bad_ip"]}));
    assert_eq!(record["tags"], json!(["_bad_ip", "_review"]));
}
