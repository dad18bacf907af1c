use serde_json::json;

use super::*;

#[test]
fn txt_record_creation() {
    let record = ZoneRecord::txt("_acme-challenge.example.com", "abc123", 300).unwrap();
    assert_eq!(
        record,
        ZoneRecord {
            id: None,
            domain: "example.com".to_string(),
            host: "_acme-challenge".to_string(),
            ttl: 300,
            prio: 0,
            type_: Type::Txt,
            rdata: "abc123".to_string(),
            last_mod: None,
            revoked: None,
            new_host: None,
        }
    );

    // trailing dot and mixed case
    let record = ZoneRecord::txt("_acme-challenge.WWW.Example.co.uk.", "abc123", 120).unwrap();
    assert_eq!(record.domain, "example.co.uk");
    assert_eq!(record.host, "_acme-challenge.www");

    let record = ZoneRecord::txt("example.com", "abc123", 120).unwrap();
    assert_eq!(record.host, APEX_HOST);

    assert!(matches!(
        ZoneRecord::txt("com.", "abc123", 120),
        Err(DomainError::MissingRoot(_))
    ));
    assert!(matches!(
        ZoneRecord::txt(".", "abc123", 120),
        Err(DomainError::Empty(_))
    ));
}

#[test]
fn serialization() {
    let record = ZoneRecord::txt("_acme-challenge.example.com", "abc123", 300).unwrap();

    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "domain": "example.com",
            "host": "_acme-challenge",
            "ttl": "300",
            "prio": "0",
            "type": "TXT",
            "rdata": "abc123",
        })
    );
}

#[test]
fn deserialization() {
    let record: ZoneRecord = serde_json::from_value(json!({
        "id": "REC1",
        "domain": "example.com",
        "host": "_acme-challenge",
        "ttl": "300",
        "prio": 0,
        "type": "TXT",
        "rdata": "abc123",
        "last_mod": "2024-01-01 00:00:00",
        "revoked": "0",
        "new_host": null,
    }))
    .unwrap();

    assert_eq!(record.id.as_deref(), Some("REC1"));
    assert_eq!(record.ttl, 300);
    assert_eq!(record.prio, 0);
    assert_eq!(record.type_, Type::Txt);
    assert_eq!(record.last_mod.as_deref(), Some("2024-01-01 00:00:00"));
    assert_eq!(record.revoked, Some(0));
    assert_eq!(record.new_host, None);

    let bad_ttl = serde_json::from_value::<ZoneRecord>(json!({
        "domain": "example.com",
        "host": "_acme-challenge",
        "ttl": "five minutes",
        "prio": "0",
        "type": "TXT",
        "rdata": "abc123",
    }));
    assert!(bad_ttl.is_err());
}

#[test]
fn type_strings() {
    assert_eq!(Type::Txt.as_str(), "TXT");
    assert_eq!(Type::Aaaa.as_str(), "AAAA");
    assert_eq!(serde_json::to_value(Type::Cname).unwrap(), json!("CNAME"));
}
