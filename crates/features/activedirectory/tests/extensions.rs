use adauth_activedirectory::{ActiveDirectoryError, ActiveDirectoryExtensions};
use adauth_domain::constants::LDAP_WINDOWS_AUTH;
use adauth_domain::extension::{
    ExtensionDescriptor, ExtensionSet, SSO_AUTHENTICATION_FILTER_EXT, SSO_VALIDATION_FILTER_EXT,
    WINDOWS_AUTH_SETTINGS_EXT, WINDOWS_AUTHENTICATION_HELPER_EXT, WINDOWS_LOGOUT_FILTER_EXT,
    WINDOWS_SECURITY_REALM_EXT,
};
use adauth_kernel::settings::MapSettings;
use adauth_kernel::system::StaticOs;
use std::collections::HashSet;

fn expected_windows_extensions() -> HashSet<ExtensionDescriptor> {
    HashSet::from([
        WINDOWS_SECURITY_REALM_EXT,
        WINDOWS_AUTHENTICATION_HELPER_EXT,
        WINDOWS_AUTH_SETTINGS_EXT,
        SSO_AUTHENTICATION_FILTER_EXT,
        SSO_VALIDATION_FILTER_EXT,
        WINDOWS_LOGOUT_FILTER_EXT,
    ])
}

fn extensions(settings: MapSettings, windows: bool) -> Result<ExtensionSet, ActiveDirectoryError> {
    ActiveDirectoryExtensions::with_system(settings, StaticOs::new(windows)).extensions()
}

fn assert_same_elements(set: ExtensionSet, expected: &HashSet<ExtensionDescriptor>) {
    let actual: HashSet<_> = set.descriptors().iter().copied().collect();
    assert_eq!(actual.len(), set.len(), "duplicate descriptors in {set}");
    assert_eq!(&actual, expected);
}

#[test]
fn provide_returns_a_bundle() {
    let bundle = ActiveDirectoryExtensions::new(MapSettings::new()).provide();
    assert!(bundle.is_ok(), "default settings must never fail on the build host");
}

#[test]
fn provide_returns_an_empty_bundle_on_other_os() {
    let bundle = ActiveDirectoryExtensions::with_system(MapSettings::new(), StaticOs::OTHER)
        .provide()
        .expect("default settings must not fail");
    assert_eq!(bundle.set, ExtensionSet::Empty);
    assert!(bundle.is_empty());
}

#[test]
fn default_on_windows_activates_windows_extensions() {
    let set = extensions(MapSettings::new(), true).expect("default on Windows");
    assert_same_elements(set, &expected_windows_extensions());
}

#[test]
fn default_on_other_os_activates_nothing() {
    let set = extensions(MapSettings::new(), false).expect("default elsewhere");
    assert_same_elements(set, &HashSet::new());
}

#[test]
fn explicit_false_behaves_like_absent() {
    let settings = MapSettings::new().with(LDAP_WINDOWS_AUTH, "false");
    assert_eq!(extensions(settings.clone(), true).ok(), Some(ExtensionSet::Windows));
    assert_eq!(extensions(settings, false).ok(), Some(ExtensionSet::Empty));
}

#[test]
fn windows_security_on_windows() {
    let settings = MapSettings::new().with(LDAP_WINDOWS_AUTH, "true");
    let set = extensions(settings, true).expect("explicit true on Windows");
    assert_same_elements(set, &expected_windows_extensions());
}

#[test]
fn windows_security_on_other_os_fails() {
    let settings = MapSettings::new().with(LDAP_WINDOWS_AUTH, "true");
    let result = ActiveDirectoryExtensions::with_system(settings, StaticOs::OTHER).provide();

    assert!(matches!(result, Err(ActiveDirectoryError::Configuration { .. })));
}
