use pretty_assertions::assert_eq;
use tests::*;

#[test]
fn create_builds_a_root_entity() {
    let db = blog();
    let post = db
        .db()
        .create("Posts", doc! { "_id" => OID, "views" => "7", "tags" => "rust" })
        .unwrap();

    assert!(post.is_entity());
    assert_eq!(post.path_key(), None);
    assert_eq!(post.model().map(|model| model.name()), Some("Posts"));
    assert_eq!(post.get("_id"), Some(&oid(OID)));
    assert_eq!(post.get("views"), Some(&Value::I64(7)));

    let tags = post.get("tags").and_then(Value::as_item).unwrap();
    assert_eq!(tags.as_list().unwrap(), [Value::from("rust")]);
}

#[test]
fn recasting_an_entity_only_touches_array_fields() {
    let db = blog();
    let post = db
        .db()
        .create("Posts", doc! { "views" => "7", "author" => doc! { "id" => OID } })
        .unwrap();
    let model = post.model().cloned().unwrap();

    let mut fields = post.as_document().cloned().unwrap();
    fields.insert("views", "8");
    fields.insert("tags", vec!["a", "b"]);
    let updated = Item::entity(Some(model.clone()), None, fields);

    let value = model
        .schema()
        .cast(
            Some(&post),
            Value::Item(updated),
            CastOptions::new().database(&db),
        )
        .unwrap();

    assert_eq!(db.ops(), [post_op(ItemClass::Array, "tags")]);

    let updated = value.as_item().unwrap();
    assert_eq!(updated.get("views"), Some(&Value::from("8")));
    assert_eq!(value.get_path("author.id"), Some(&oid(OID)));
}

#[test]
fn defaults_from_the_model_schema() {
    let schema = Schema::builder()
        .field("status", Field::new("string").with_default("draft"))
        .field("views", Field::new("integer").with_default(0))
        .build()
        .unwrap();
    let db = Db::builder().model("Drafts", schema).build().unwrap();

    let mut fields = db.model("Drafts").unwrap().schema().defaults();
    fields.insert("views", "12");

    let draft = db.create("Drafts", fields).unwrap();
    assert_eq!(draft.get("status"), Some(&Value::from("draft")));
    assert_eq!(draft.get("views"), Some(&Value::I64(12)));
}
