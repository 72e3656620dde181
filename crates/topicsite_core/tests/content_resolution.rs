use rusqlite::Connection;
use topicsite_core::db::open_db_in_memory;
use topicsite_core::{
    content_type_fallback_count, AddressError, AddressService, Category, Content, ContentTypeDescriptor, ContentTypeRegistry,
    DetailViewType, InMemoryContentTypeRegistry, RepoError, SqliteContentTypeRegistry,
    SqlitePayloadStore, Topic, UidTypeChoice, UidValue,
};
use uuid::Uuid;

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

fn ikigai() -> Category {
    Category::new(Topic::new("Notes"), "Ikigai")
}

#[test]
fn sqlite_registry_registers_and_resolves_labels() {
    let conn = setup();
    let registry = SqliteContentTypeRegistry::new(&conn);

    let note = registry.register("note", "Note", "Field Note").unwrap();
    let quote = registry.register("quote", "Quote", "Quote").unwrap();

    assert_eq!(registry.get_by_label("note").unwrap(), Some(note.clone()));
    assert_eq!(registry.get_by_id(quote.id).unwrap(), Some(quote));
    assert_eq!(registry.get_by_label("video").unwrap(), None);

    let labels: Vec<String> = registry
        .list()
        .unwrap()
        .into_iter()
        .map(|descriptor| descriptor.app_label)
        .collect();
    assert_eq!(labels, vec!["note", "quote"]);

    assert!(matches!(
        registry.register("note", "Note", "Note"),
        Err(RepoError::DuplicateLabel(_))
    ));
}

#[test]
fn resolve_content_type_reports_missing_labels() {
    let conn = setup();
    let registry = SqliteContentTypeRegistry::new(&conn);
    let content = Content::new(ikigai(), "essay", 1, "slug", "sample-slug");

    let err = content.resolve_content_type(&registry).unwrap_err();
    assert!(matches!(err, AddressError::ContentTypeNotFound(label) if label == "essay"));
    assert_eq!(content.content_type_slug(&registry).unwrap(), "essay");
}

#[test]
fn resolved_descriptor_passes_through_without_registry_lookup() {
    let registry = InMemoryContentTypeRegistry::new();
    let descriptor = ContentTypeDescriptor::new(7, "video", "Video", "Video Clip");
    let content = Content::new(ikigai(), descriptor.clone(), 1, UidTypeChoice::BigInteger, 99_i64);

    assert_eq!(content.resolve_content_type(&registry).unwrap(), descriptor);
    assert_eq!(
        content.get_absolute_url(&registry).unwrap(),
        "/topics/notes/categories/ikigai/video-clip::99/"
    );
}

#[test]
fn content_object_reads_payload_for_resolved_type() {
    let conn = setup();
    let registry = SqliteContentTypeRegistry::new(&conn);
    let store = SqlitePayloadStore::new(&conn);
    let note = registry.register("note", "Note", "Note").unwrap();
    store.put_payload(&note, 1, "first body").unwrap();
    store.put_payload(&note, 1, "# Ikigai").unwrap();

    let content = Content::new(ikigai(), "note", 1, "slug", "sample-slug");
    let payload = content.content_object(&registry, &store).unwrap();
    assert_eq!(payload.content_type_id, note.id);
    assert_eq!(payload.object_id, 1);
    assert_eq!(payload.body, "# Ikigai");
}

#[test]
fn content_object_propagates_lookup_failures() {
    let conn = setup();
    let registry = SqliteContentTypeRegistry::new(&conn);
    let store = SqlitePayloadStore::new(&conn);
    registry.register("note", "Note", "Note").unwrap();

    let missing_object = Content::new(ikigai(), "note", 404, "slug", "gone");
    assert!(matches!(
        missing_object.content_object(&registry, &store),
        Err(AddressError::ObjectNotFound { object_id: 404, .. })
    ));

    let missing_type = Content::new(ikigai(), "essay", 1, "slug", "draft");
    assert!(matches!(
        missing_type.content_object(&registry, &store),
        Err(AddressError::ContentTypeNotFound(_))
    ));
}

#[test]
fn registry_storage_failures_propagate_instead_of_falling_back() {
    let conn = setup();
    let registry = SqliteContentTypeRegistry::new(&conn);
    let store = SqlitePayloadStore::new(&conn);
    registry.register("note", "Note", "Field Note").unwrap();
    conn.execute_batch("DROP TABLE payloads; DROP TABLE content_types;")
        .unwrap();

    let content = Content::new(ikigai(), "note", 1, "slug", "sample-slug");
    let before = content_type_fallback_count();

    assert!(matches!(
        content.content_type_slug(&registry),
        Err(AddressError::Repo(RepoError::Db(_)))
    ));
    let service = AddressService::new(registry, store);
    assert!(matches!(
        service.content_url(&content),
        Err(AddressError::Repo(_))
    ));
    assert!(matches!(
        service.detail_view(&content, None),
        Err(AddressError::Repo(_))
    ));
    assert_eq!(content_type_fallback_count(), before);
}

#[test]
fn unknown_uid_type_is_rejected() {
    let content = Content::new(ikigai(), "note", 1, "binary", "sample-slug");
    assert!(matches!(
        content.resolve_uid_type(),
        Err(AddressError::UnknownUidType(name)) if name == "binary"
    ));
}

#[test]
fn uid_type_names_round_trip_through_url_encoding() {
    for choice in UidTypeChoice::ALL {
        let encoded = topicsite_core::slug::encode_uid(choice.as_str());
        assert_eq!(Content::resolve_uid_type_from_url(&encoded).unwrap(), choice);
    }
}

#[test]
fn uuid_uids_render_in_hyphenated_form() {
    let registry = InMemoryContentTypeRegistry::new();
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let content = Content::new(ikigai(), "note", 1, UidTypeChoice::Uuid, id);

    assert_eq!(content.uid(), &UidValue::Uuid(id));
    assert!(content
        .get_absolute_url(&registry)
        .unwrap()
        .ends_with("/note::11111111-2222-4333-8444-555555555555/"));
}

#[test]
fn address_service_bundles_registry_and_store() {
    let conn = setup();
    let registry = SqliteContentTypeRegistry::new(&conn);
    let store = SqlitePayloadStore::new(&conn);
    let quote = registry.register("quote", "Quote", "Quote").unwrap();
    store.put_payload(&quote, 5, "Stay hungry.").unwrap();

    let service = AddressService::new(registry, store);
    let content = Content::new(
        Category::new(Topic::new("StackEditDump"), "Waking_Life_Quotes"),
        "quote",
        5,
        "slug",
        "stay-hungry",
    );

    assert_eq!(service.content_type_slug(&content).unwrap(), "quote");
    assert_eq!(
        service.content_url(&content).unwrap(),
        "/topics/stackeditdump/categories/waking-life-quotes/quote::stay-hungry/"
    );
    assert_eq!(service.content_object(&content).unwrap().body, "Stay hungry.");

    let detail = service.detail_view(&content, Some(DetailViewType::Quote)).unwrap();
    assert_eq!(detail.view_type, DetailViewType::Quote);
    assert_eq!(detail.url, service.content_url(&content).unwrap());
    assert_eq!(
        detail.template_candidates.last().map(String::as_str),
        Some("topics/content_detail.html")
    );
    assert_eq!(
        service.detail_view(&content, None).unwrap().view_type,
        DetailViewType::Full
    );
}
