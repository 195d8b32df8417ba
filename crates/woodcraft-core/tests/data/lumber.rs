use woodcraft_core::data::lumber::*;
use woodcraft_core::CoreError;

#[test]
fn test_every_standard_profile_is_valid() {
    for profile in standard_catalog().profiles() {
        assert!(
            profile.validate().is_ok(),
            "profile {} violates dimension invariants",
            profile.id
        );
        assert!(profile.actual_width <= profile.nominal_width);
        assert!(profile.actual_height <= profile.nominal_height);
        assert!(profile.default_length > 0.0);
    }
}

#[test]
fn test_profile_ids_are_unique() {
    let catalog = standard_catalog();
    let mut ids: Vec<&str> = catalog.profiles().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn test_catalog_order_is_stable() {
    let ids: Vec<String> = standard_catalog()
        .profiles()
        .take(3)
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(ids, vec!["2x4", "2x6", "2x8"]);
}

#[test]
fn test_require_unknown_profile() {
    let err = standard_catalog().require("3x5").unwrap_err();
    assert_eq!(
        err,
        CoreError::UnknownProfile {
            id: "3x5".to_string()
        }
    );
}

#[test]
fn test_search_by_name() {
    let catalog = standard_catalog();

    let plywood = catalog.search_by_name("plywood");
    assert_eq!(plywood.len(), 3);
    assert!(plywood
        .iter()
        .all(|p| p.category == LumberCategory::SheetGood));

    let walnut = catalog.search_by_name("WALNUT");
    assert_eq!(walnut.len(), 1);
    assert_eq!(walnut[0].id.as_str(), "walnut");

    assert!(catalog.search_by_name("bamboo").is_empty());
}

#[test]
fn test_empty_catalog() {
    let catalog = LumberCatalog::new();
    assert!(catalog.is_empty());
    assert!(catalog.get("2x4").is_none());
}

#[test]
fn test_category_serde_names() {
    let json = serde_json::to_string(&LumberCategory::SheetGood).unwrap();
    assert_eq!(json, "\"sheet-good\"");
}
