//! Building a source from catalog records and serializing it, without
//! resolving, must reproduce the input grouping with all flags null.

#[path = "../common/fixtures.rs"]
mod fixtures;

use v6ready_domain::{CatalogRecord, Source};

#[test]
fn grouping_and_names_survive_the_round_trip() {
    let records: Vec<CatalogRecord> =
        serde_json::from_str(fixtures::two_country_catalog()).unwrap();
    let mut source = Source::new();
    source.extend_from_records(records);

    let json = serde_json::to_value(source.report()).unwrap();
    let countries = &json["countries"];

    let it_isp = countries["it"]["isp"].as_array().unwrap();
    assert_eq!(it_isp.len(), 2);
    assert_eq!(it_isp[0]["name"], "Alpha Net");
    assert_eq!(it_isp[0]["main_host"]["name"], "alpha.example");
    assert_eq!(
        it_isp[0]["additional_hosts"][0]["name"],
        "www.alpha.example"
    );
    assert_eq!(
        it_isp[0]["additional_hosts"][1]["name"],
        "mail.alpha.example"
    );
    // Name falls back to the main host when the record has none.
    assert_eq!(it_isp[1]["name"], "beta.example");

    let it_bank = countries["it"]["bank"].as_array().unwrap();
    assert_eq!(it_bank.len(), 1);
    assert_eq!(it_bank[0]["name"], "Gamma Bank");

    let us_isp = countries["us"]["isp"].as_array().unwrap();
    assert_eq!(us_isp.len(), 1);
    assert_eq!(us_isp[0]["main_host"]["name"], "delta.example");
}

#[test]
fn unresolved_report_has_only_null_flags() {
    let records: Vec<CatalogRecord> =
        serde_json::from_str(fixtures::two_country_catalog()).unwrap();
    let mut source = Source::new();
    source.extend_from_records(records);

    let json = serde_json::to_value(source.report()).unwrap();
    assert!(json["last_resolved"].is_null());

    for (_, categories) in json["countries"].as_object().unwrap() {
        for (_, entities) in categories.as_object().unwrap() {
            for entity in entities.as_array().unwrap() {
                assert!(entity["main_host"]["has_ipv4_address"].is_null());
                assert!(entity["main_host"]["has_ipv6_address"].is_null());
                for host in entity["additional_hosts"].as_array().unwrap() {
                    assert!(host["has_ipv4_address"].is_null());
                    assert!(host["has_ipv6_address"].is_null());
                }
            }
        }
    }
}
