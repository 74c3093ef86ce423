use adresse_core::classify;

#[test]
fn missing_postal_code_yields_no_country() {
    assert_eq!(classify(None), None);
}

#[test]
fn metropolitan_postal_code_maps_to_france() {
    let country = classify(Some("75001")).expect("postal code should classify");
    assert_eq!(country.name.as_deref(), Some("France"));
    assert_eq!(country.code.as_deref(), Some("FR"));
}

#[test]
fn overseas_prefixes_map_to_their_territory() {
    let cases = [
        ("97100", "Guadeloupe", "GP"),
        ("97200", "Martinique", "MQ"),
        ("97300", "Guyane", "GF"),
        ("97400", "La Réunion", "RE"),
        ("97500", "Saint-Pierre-et-Miquelon", "PM"),
        ("97600", "Mayotte", "YT"),
        ("97700", "Saint-Barthélemy", "BL"),
        ("97800", "Saint-Martin", "MF"),
        ("98600", "Wallis-et-Futuna", "WF"),
        ("98700", "Polynésie française", "PF"),
        ("98800", "Nouvelle-Calédonie", "NC"),
    ];

    for (postal_code, name, code) in cases {
        let country = classify(Some(postal_code)).expect("postal code should classify");
        assert_eq!(country.name.as_deref(), Some(name), "for {postal_code}");
        assert_eq!(country.code.as_deref(), Some(code), "for {postal_code}");
    }
}

#[test]
fn short_postal_code_falls_back_to_france() {
    let country = classify(Some("1")).expect("short code still classifies");
    assert_eq!(country.code.as_deref(), Some("FR"));
}

#[test]
fn unrelated_prefix_falls_back_to_france() {
    // 98x codes outside the collectivity table fall through to the default.
    let country = classify(Some("98000")).expect("postal code should classify");
    assert_eq!(country.name.as_deref(), Some("France"));
    assert_eq!(country.code.as_deref(), Some("FR"));
}
