//! Decode tests for the upstream offers payload.

use offerpull::types::offers::offers_from_slice;

const SAMPLE: &str = r#"{"offers":[{"id":1,"name":"Widget","brand":"Acme","category":"Tools","merchant":"Acme Store","attributes":[{"name":"color","value":"red"}],"image":{"width":100,"height":50,"url":"http://x/img.png"}}]}"#;

#[test]
fn parses_complete_envelope() {
    let offers = offers_from_slice(SAMPLE.as_bytes()).expect("well-formed payload");
    assert_eq!(offers.len(), 1);

    let offer = &offers[0];
    assert_eq!(offer.id, 1);
    assert_eq!(offer.name, "Widget");
    assert_eq!(offer.brand, "Acme");
    assert_eq!(offer.category, "Tools");
    assert_eq!(offer.merchant, "Acme Store");
    assert_eq!(offer.attributes.len(), 1);
    assert_eq!(offer.attributes[0].name, "color");
    assert_eq!(offer.attributes[0].value, "red");
    assert_eq!(offer.image.width, 100);
    assert_eq!(offer.image.height, 50);
    assert_eq!(offer.image.url, "http://x/img.png");
}

#[test]
fn empty_offer_list_is_accepted() {
    let offers = offers_from_slice(br#"{"offers":[]}"#).expect("empty catalog");
    assert!(offers.is_empty());
}

#[test]
fn empty_attribute_list_is_accepted() {
    let body = r#"{"offers":[{"id":3,"name":"Bolt","brand":"Acme","category":"Hardware","merchant":"Acme Store","attributes":[],"image":{"width":10,"height":10,"url":"http://x/bolt.png"}}]}"#;
    let offers = offers_from_slice(body.as_bytes()).expect("offer without attributes");
    assert!(offers[0].attributes.is_empty());
}

#[test]
fn missing_image_key_is_a_decode_error() {
    let body = r#"{"offers":[{"id":2,"name":"Gadget","brand":"Acme","category":"Tools","merchant":"Acme Store","attributes":[]}]}"#;
    let err = offers_from_slice(body.as_bytes()).expect_err("image is required");
    assert!(err.to_string().contains("image"));
}

#[test]
fn missing_envelope_key_is_a_decode_error() {
    assert!(offers_from_slice(br#"{"items":[]}"#).is_err());
}

#[test]
fn non_json_body_is_a_decode_error() {
    assert!(offers_from_slice(b"<html>offline</html>").is_err());
}

#[test]
fn unknown_fields_are_ignored() {
    let body = r#"{"offers":[{"id":4,"name":"Nut","brand":"Acme","category":"Hardware","merchant":"Acme Store","promo":true,"attributes":[{"name":"finish","value":"zinc","rank":2}],"image":{"width":10,"height":10,"url":"http://x/nut.png","alt":"a nut"}}],"total":1}"#;
    let offers = offers_from_slice(body.as_bytes()).expect("extra keys are tolerated");
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].attributes[0].value, "zinc");
}
