//! Record durability across content store instances.

#![allow(clippy::unwrap_used)]

use portico_cms::models::{
    BusinessInfoPatch, HeroPatch, MediaUpload, NewService, NewTestimonial, NewUser, SettingsPatch,
};
use portico_core::{Rating, UserRole, UserStatus};
use portico_integration_tests::TestContext;

#[test]
fn business_info_round_trips_through_disk() {
    let ctx = TestContext::new();

    let mut store = ctx.content();
    store
        .update_business_info(BusinessInfoPatch {
            name: Some("Acme Ltd".to_owned()),
            phone: Some("555-0100".to_owned()),
            ..BusinessInfoPatch::default()
        })
        .unwrap();

    let reopened = ctx.content();
    assert_eq!(reopened.business_info().name, "Acme Ltd");
    assert_eq!(reopened.business_info().phone, "555-0100");
    // Fields absent from the patch keep their defaults.
    assert_eq!(reopened.business_info().email, "peter@redhotteam.app");
}

#[test]
fn each_record_lives_in_its_own_file() {
    let ctx = TestContext::new();

    let mut store = ctx.content();
    store
        .update_hero(HeroPatch {
            title: Some("Hello".to_owned()),
            ..HeroPatch::default()
        })
        .unwrap();

    assert!(ctx.records_dir().join("content.json").exists());
    assert!(!ctx.records_dir().join("businessInfo.json").exists());
    assert!(!ctx.records_dir().join("settings.json").exists());
}

#[test]
fn service_and_testimonial_lists_are_durable() {
    let ctx = TestContext::new();

    let mut store = ctx.content();
    let service_id = store
        .add_service(NewService {
            title: "Auditing".to_owned(),
            description: "Books checked".to_owned(),
            icon: "clipboard".to_owned(),
            features: vec!["Quarterly".to_owned()],
        })
        .unwrap();
    let testimonial_id = store
        .add_testimonial(NewTestimonial {
            name: "Jane Doe".to_owned(),
            role: "CFO".to_owned(),
            content: "Spotless.".to_owned(),
            rating: Rating::new(4).unwrap(),
        })
        .unwrap();

    let reopened = ctx.content();
    assert!(
        reopened
            .content()
            .services
            .iter()
            .any(|s| s.id == service_id)
    );
    assert!(
        reopened
            .content()
            .testimonials
            .iter()
            .any(|t| t.id == testimonial_id)
    );
}

#[test]
fn ids_stay_unique_across_restarts() {
    let ctx = TestContext::new();

    let new_service = || NewService {
        title: "S".to_owned(),
        description: "D".to_owned(),
        icon: "i".to_owned(),
        features: vec![],
    };

    let mut first = ctx.content();
    let a = first.add_service(new_service()).unwrap();

    let mut second = ctx.content();
    let b = second.add_service(new_service()).unwrap();

    assert!(b > a);
}

#[test]
fn users_persist_with_creation_time() {
    let ctx = TestContext::new();

    let mut store = ctx.content();
    let id = store
        .add_user(NewUser {
            name: "New Editor".to_owned(),
            email: "editor@example.com".parse().unwrap(),
            role: UserRole::Editor,
            status: UserStatus::Active,
        })
        .unwrap();

    let reopened = ctx.content();
    let user = reopened.users().iter().find(|u| u.id == id).unwrap();
    assert_eq!(user.name, "New Editor");
    assert_eq!(user.role, UserRole::Editor);
}

#[test]
fn media_payload_round_trips_as_data_uri() {
    let ctx = TestContext::new();

    let mut store = ctx.content();
    let id = store
        .add_media(MediaUpload {
            name: "logo.png".to_owned(),
            content_type: "image/png".to_owned(),
            bytes: vec![137, 80, 78, 71],
        })
        .unwrap();

    let reopened = ctx.content();
    let item = reopened.media().iter().find(|m| m.id == id).unwrap();
    assert!(item.url.starts_with("data:image/png;base64,"));
    assert!(item.is_image);
    assert_eq!(item.size, 4);

    let mut again = ctx.content();
    again.remove_media(id).unwrap();
    assert!(ctx.content().media().is_empty());
}

#[test]
fn settings_merge_is_durable() {
    let ctx = TestContext::new();

    let mut store = ctx.content();
    store
        .update_settings(SettingsPatch {
            site_name: Some("Portal".to_owned()),
            ..SettingsPatch::default()
        })
        .unwrap();

    let reopened = ctx.content();
    assert_eq!(reopened.settings().site_name, "Portal");
    // Untouched groups keep their defaults.
    assert!(reopened.settings().backup.auto_backup);
}

#[test]
fn on_disk_records_use_the_published_field_names() {
    let ctx = TestContext::new();

    let mut store = ctx.content();
    store
        .update_business_info(BusinessInfoPatch::default())
        .unwrap();

    let raw = std::fs::read_to_string(ctx.records_dir().join("businessInfo.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.get("socialMedia").is_some());
    assert!(value.get("operatingHours").is_some());
}
