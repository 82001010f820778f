// Test the canonical Online Store list view settings end to end:
// formatter dispatch, escaping, and toolbar registration.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use storelist_wasm::render::ContentKind;
use storelist_wasm::{store_listview_settings, ListView, ListViewSettings, StoreRecord};

fn loaded_view() -> ListView {
    let mut view = ListView::new(store_listview_settings("/app/online-store"));
    view.load();
    view
}

fn shopee_record() -> StoreRecord {
    StoreRecord {
        name: "SHOPEE:SG:70000101".to_string(),
        store_type: Some("Shopee".to_string()),
        shop_logo_url: Some("https://cdn.example.com/logo.png".to_string()),
        region: Some("SG".to_string()),
        shop_id: Some("70000101".to_string()),
        status: Some("active".to_string()),
    }
}

#[test]
fn descriptor_declares_extra_fields_and_hides_name_column() {
    let view = loaded_view();
    let descriptor = view.settings().descriptor();

    assert_eq!(descriptor.doctype, "Online Store");
    assert_eq!(
        descriptor.add_fields,
        vec!["store_type", "shop_logo_url", "region", "shop_id"]
    );
    assert!(descriptor.hide_name_column,
            "default identity column should be suppressed in favor of the identity card");
    assert!(descriptor.formatted_fields.contains(&"name"));
    assert!(descriptor.formatted_fields.contains(&"store_type"));
}

#[test]
fn store_type_cell_renders_platform_icon() {
    let view = loaded_view();

    let fragment = view.format_cell("store_type", &shopee_record());
    assert_eq!(fragment.kind, ContentKind::Html);
    assert!(fragment.content.contains("shopee.png"),
            "Shopee stores should get the Shopee icon, got: {}", fragment.content);

    let lazada = StoreRecord {
        store_type: Some("My Lazada Shop".to_string()),
        ..shopee_record()
    };
    assert!(view.format_cell("store_type", &lazada).content.contains("lazada.png"));
}

#[test]
fn store_type_falls_back_to_integration_key_platform() {
    let view = loaded_view();
    let record = StoreRecord {
        name: "LAZADA:MY:42".to_string(),
        store_type: None,
        ..Default::default()
    };

    let fragment = view.format_cell("store_type", &record);
    assert!(fragment.content.contains("lazada.png"),
            "platform should be derived from the integration key when store_type is absent");
}

#[test]
fn unmatched_store_type_passes_through_as_plain_text() {
    let view = loaded_view();
    let record = StoreRecord {
        name: "TIKTOK:SG:1".to_string(),
        store_type: Some("TikTok".to_string()),
        ..Default::default()
    };

    let fragment = view.format_cell("store_type", &record);
    assert_eq!(fragment.kind, ContentKind::PlainText);
    assert_eq!(fragment.content, "TikTok");
}

#[test]
fn name_cell_renders_escaped_identity_card() {
    let view = loaded_view();
    let record = StoreRecord {
        name: "ABC 123/x".to_string(),
        shop_id: Some("<script>".to_string()),
        region: Some("A&B".to_string()),
        shop_logo_url: None,
        ..Default::default()
    };

    let fragment = view.format_cell("name", &record);
    assert_eq!(fragment.kind, ContentKind::Html);
    assert!(fragment.content.contains("/app/online-store/ABC%20123%2Fx"));
    assert!(fragment.content.contains("&lt;script&gt;"));
    assert!(fragment.content.contains("A&amp;B"));
    assert!(!fragment.content.contains("<script>"));
    // No logo URL: placeholder block instead of a broken image tag
    assert!(!fragment.content.contains("<img"));
}

#[test]
fn formatting_never_panics_on_empty_record() {
    let view = loaded_view();
    let record = StoreRecord::default();

    for (field, _fragment) in view.format_row(&record) {
        // Each formatted field must also be individually dispatchable
        let _ = view.format_cell(field, &record);
    }
}

#[test]
fn fields_without_formatter_pass_through() {
    let view = loaded_view();
    let record = StoreRecord {
        region: Some("SG".to_string()),
        ..Default::default()
    };

    let fragment = view.format_cell("region", &record);
    assert_eq!(fragment.kind, ContentKind::PlainText);
    assert_eq!(fragment.content, "SG");

    // Unknown column: empty cell, not an error
    assert!(view.format_cell("no_such_field", &record).is_empty());
}

#[test]
fn load_registers_exactly_one_toolbar_button() {
    let mut view = ListView::new(store_listview_settings("/app/online-store"));
    assert!(view.toolbar().is_empty());

    view.load();
    assert_eq!(view.toolbar().labels(), vec!["Sync Stores"]);

    // Loading again must not duplicate the button
    view.load();
    assert_eq!(view.toolbar().len(), 1);
}

#[test]
fn toolbar_click_invokes_bound_handler_once_per_click() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);

    let settings = ListViewSettings::new("Online Store").on_load(move |toolbar| {
        let counter = Arc::clone(&counter);
        toolbar.add_inner_button("Sync Stores", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    });

    let mut view = ListView::new(settings);
    view.load();

    view.toolbar().click("Sync Stores").unwrap();
    view.toolbar().click("Sync Stores").unwrap();
    assert_eq!(clicks.load(Ordering::SeqCst), 2);

    assert!(view.toolbar().click("Export").is_err());
}
