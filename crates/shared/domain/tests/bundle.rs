use adauth_domain::extension::{ExtensionSet, WINDOWS_EXTENSIONS};
use adauth_domain::registry::ExtensionBundle;
use serde_json::json;

#[test]
fn empty_bundle_is_present_and_serializes_to_an_empty_list() {
    let bundle = ExtensionBundle::new(ExtensionSet::Empty);
    assert!(bundle.is_empty());

    let value = serde_json::to_value(&bundle).expect("bundle serialize");
    assert_eq!(value, json!({ "set": "empty", "extensions": [] }));
}

#[test]
fn windows_bundle_keeps_registration_order() {
    let bundle: ExtensionBundle = ExtensionSet::Windows.into();
    assert_eq!(bundle.len(), 6);
    assert!(bundle.iter().eq(WINDOWS_EXTENSIONS.iter()));
}

#[test]
fn descriptors_serialize_with_id_and_kind() {
    let bundle = ExtensionBundle::new(ExtensionSet::Windows);
    let value = serde_json::to_value(&bundle).expect("bundle serialize");

    assert_eq!(value["set"], "windows");
    assert_eq!(value["extensions"][0], json!({ "id": "windows.security-realm", "kind": "realm" }));
    assert_eq!(value["extensions"][5], json!({ "id": "windows.logout-filter", "kind": "filter" }));
}
