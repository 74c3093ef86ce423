use adresse_core::{
    Address, AdminLevel, AdminLevelCollection, AdminLevelError, Bounds, Coordinates, Country,
    FrenchAddress,
};

#[test]
fn coordinates_from_parts_is_all_or_nothing() {
    assert_eq!(Coordinates::from_parts(None, None), None);
    assert_eq!(Coordinates::from_parts(Some(48.85), None), None);
    assert_eq!(Coordinates::from_parts(None, Some(2.35)), None);
    assert_eq!(
        Coordinates::from_parts(Some(48.85), Some(2.35)),
        Some(Coordinates::new(48.85, 2.35))
    );
}

#[test]
fn bounds_from_parts_is_all_or_nothing() {
    assert_eq!(
        Bounds::from_parts(Some(1.0), Some(2.0), Some(3.0), None),
        None
    );
    assert_eq!(
        Bounds::from_parts(Some(1.0), Some(2.0), Some(3.0), Some(4.0)),
        Some(Bounds::new(1.0, 2.0, 3.0, 4.0))
    );
}

#[test]
fn country_from_parts_requires_at_least_one_part() {
    assert_eq!(Country::from_parts(None, None), None);

    let name_only =
        Country::from_parts(Some("France".to_string()), None).expect("name alone is enough");
    assert_eq!(name_only.name.as_deref(), Some("France"));
    assert_eq!(name_only.code, None);

    let code_only = Country::from_parts(None, Some("FR".to_string())).expect("code alone is enough");
    assert_eq!(code_only.code.as_deref(), Some("FR"));
}

#[test]
fn collection_sorts_entries_by_level() {
    let collection = AdminLevelCollection::new(vec![
        AdminLevel::new(2, "Paris", Some("75".to_string())),
        AdminLevel::new(1, "Île-de-France", None),
    ])
    .expect("distinct levels should be accepted");

    let levels: Vec<u32> = collection.iter().map(|entry| entry.level).collect();
    assert_eq!(levels, vec![1, 2]);
    assert_eq!(collection.get(2).map(|e| e.name.as_str()), Some("Paris"));
    assert_eq!(collection.get(3), None);
}

#[test]
fn collection_rejects_duplicate_levels() {
    let error = AdminLevelCollection::new(vec![
        AdminLevel::new(1, "Île-de-France", None),
        AdminLevel::new(1, "Bretagne", None),
    ])
    .expect_err("duplicate levels must be rejected");

    assert_eq!(error, AdminLevelError::DuplicateLevel(1));
    assert!(error.to_string().contains("level 1"));
}

#[test]
fn collection_deserialization_enforces_unique_levels() {
    let duplicate = serde_json::json!([
        { "level": 1, "name": "Île-de-France", "code": null },
        { "level": 1, "name": "Bretagne", "code": null }
    ]);
    let result: Result<AdminLevelCollection, _> = serde_json::from_value(duplicate);
    assert!(result.is_err());
}

#[test]
fn copy_on_write_setter_changes_only_the_target_field() {
    let mut base = Address::new("addok", AdminLevelCollection::empty());
    base.postal_code = Some("97600".to_string());
    base.locality = Some("Mamoudzou".to_string());
    let original = FrenchAddress::new(base).with_old_city(Some("Passamaïnty".to_string()));

    let updated = original.clone().with_city_code(Some("97611".to_string()));

    assert_eq!(updated.city_code(), Some("97611"));
    assert_eq!(original.city_code(), None);
    assert_eq!(updated.base, original.base);
    assert_eq!(updated.old_city_code(), original.old_city_code());
    assert_eq!(updated.old_city(), original.old_city());
}

#[test]
fn french_address_serializes_flat_camel_case() {
    let mut base = Address::new("addok", AdminLevelCollection::empty());
    base.coordinates = Some(Coordinates::new(-12.7806, 45.2278));
    base.postal_code = Some("97600".to_string());
    let address = FrenchAddress::new(base).with_city_code(Some("97611".to_string()));

    let json = serde_json::to_value(&address).expect("address should serialize");
    assert_eq!(json["providedBy"], "addok");
    assert_eq!(json["postalCode"], "97600");
    assert_eq!(json["coordinates"]["latitude"], -12.7806);
    assert_eq!(json["adminLevels"], serde_json::json!([]));
    assert_eq!(json["cityCode"], "97611");
    assert_eq!(json["oldCityCode"], serde_json::Value::Null);

    let decoded: FrenchAddress = serde_json::from_value(json).expect("address should round-trip");
    assert_eq!(decoded, address);
}
