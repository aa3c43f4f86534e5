use glide_content_core::{parse_site_content_json, ContentError, PageKind};

/// it should load and validate the full site fixture
#[test]
fn loads_site_fixture() {
    let raw = glide_test_fixtures::content::json("site").expect("fixture available");
    let site = parse_site_content_json(&raw).expect("fixture parses");
    assert_eq!(site.pages.len(), 4);

    let home = site.page("home").expect("home page");
    assert_eq!(home.kind, PageKind::Paged);
    assert_eq!(home.sections.len(), 5);
    assert_eq!(home.sections[0].title, "welcome.");
    assert_eq!(home.sections[4].panel.items.len(), 3);

    let graphics = site.page("graphics").expect("graphics page");
    assert_eq!(graphics.kind, PageKind::Gallery);
    assert_eq!(graphics.gallery.len(), 6);

    let websites = site.page("websites").expect("websites page");
    assert_eq!(websites.showcases.len(), 5);
    assert!(websites.showcases[1].second_is_mobile);
    assert!(!websites.showcases[0].second_is_mobile);

    let arcade = site.page("arcade").expect("arcade page");
    assert_eq!(arcade.kind, PageKind::Scroll);
    assert_eq!(arcade.projects.len(), 3);
    assert_eq!(arcade.skills.len(), 5);
    assert!(arcade.projects[0].achievement.is_some());
    assert!(arcade.projects[1].achievement.is_none());
    assert!(arcade.projects[0].stats.get("rank").is_some());
}

/// it should reject malformed JSON with a Parse error
#[test]
fn malformed_json_is_a_parse_error() {
    let err = parse_site_content_json("{ not json").unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

/// it should reject a paged page without sections
#[test]
fn paged_page_requires_sections() {
    let raw = r#"{ "pages": [ { "id": "home", "name": "Home", "kind": "paged" } ] }"#;
    let err = parse_site_content_json(raw).unwrap_err();
    assert!(matches!(err, ContentError::Invalid(ref m) if m.contains("no sections")));
}

/// it should reject duplicate page ids
#[test]
fn duplicate_page_ids_rejected() {
    let raw = r#"{ "pages": [
        { "id": "g", "name": "A", "kind": "gallery" },
        { "id": "g", "name": "B", "kind": "gallery" }
    ] }"#;
    let err = parse_site_content_json(raw).unwrap_err();
    assert!(matches!(err, ContentError::Invalid(ref m) if m.contains("duplicate")));
}

/// it should reject skill levels above 100
#[test]
fn skill_level_is_a_percentage() {
    let raw = r#"{ "pages": [ {
        "id": "arcade", "name": "Arcade", "kind": "scroll",
        "skills": [ { "name": "REACT", "level": 120, "exp": "3+ YRS" } ]
    } ] }"#;
    let err = parse_site_content_json(raw).unwrap_err();
    assert!(matches!(err, ContentError::Invalid(ref m) if m.contains("max 100")));
}

/// it should reject showcases without images
#[test]
fn showcase_requires_an_image() {
    // The literal contains `"#`, so the delimiter needs two hashes.
    let raw = r##"{ "pages": [ {
        "id": "websites", "name": "Websites", "kind": "gallery",
        "showcases": [ { "images": [], "link": "#", "bio": "x" } ]
    } ] }"##;
    let err = parse_site_content_json(raw).unwrap_err();
    assert!(matches!(err, ContentError::Invalid(ref m) if m.contains("no images")));
}

/// it should default optional lists to empty
#[test]
fn optional_lists_default_empty() {
    let raw = r#"{ "pages": [ { "id": "g", "name": "G", "kind": "gallery" } ] }"#;
    let site = parse_site_content_json(raw).unwrap();
    let page = site.page("g").unwrap();
    assert!(page.sections.is_empty());
    assert!(page.gallery.is_empty());
    assert!(page.projects.is_empty());
}
