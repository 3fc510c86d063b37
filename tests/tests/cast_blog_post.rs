use bson::Bson;
use pretty_assertions::assert_eq;
use tests::*;

fn post() -> Document {
    doc! {
        "_id" => OID,
        "title" => "Casting documents",
        "created" => 1700000000,
        "views" => "10",
        "published" => "1",
        "matcher" => "/^cast/i",
        "tags" => vec!["rust", "bson"],
        "related" => vec![OID2, "not-an-id"],
        "author" => doc! {
            "id" => OID2,
            "joined" => "2023-11-14",
            "name" => "Ada",
        },
        "comments" => vec![
            doc! { "author_id" => OID, "votes" => "3", "body" => "nice" },
            doc! { "author_id" => "anon", "votes" => 1.9, "body" => "meh" },
        ],
    }
}

#[test]
fn nested_items_are_built_in_order() {
    let db = blog();
    db.cast("Posts", post()).unwrap();

    assert_eq!(
        db.ops(),
        [
            post_op(ItemClass::Array, "tags"),
            post_op(ItemClass::Array, "related"),
            post_op(ItemClass::Entity, "author"),
            post_op(ItemClass::Array, "comments"),
            post_op(ItemClass::Entity, "comments"),
            post_op(ItemClass::Entity, "comments"),
        ]
    );
}

#[test]
fn top_level_scalars_are_cast() {
    let value = blog().cast("Posts", post()).unwrap();

    assert_eq!(value.get_path("_id"), Some(&oid(OID)));
    assert_eq!(
        value.get_path("title"),
        Some(&Value::from("Casting documents"))
    );
    assert_eq!(value.get_path("views"), Some(&Value::I64(10)));
    assert_eq!(value.get_path("published"), Some(&Value::Bool(true)));
    assert_eq!(
        value.get_path("created"),
        Some(&Value::Native(Bson::DateTime(bson::DateTime::from_millis(
            1_700_000_000_000
        ))))
    );

    match value.get_path("matcher") {
        Some(Value::Native(Bson::RegularExpression(re))) => {
            assert_eq!(re.pattern, "^cast");
            assert_eq!(re.options, "i");
        }
        other => panic!("expected a regex; got {other:?}"),
    }
}

#[test]
fn array_elements_are_cast_at_the_array_path() {
    let value = blog().cast("Posts", post()).unwrap();

    let tags = value.get_path("tags").and_then(Value::as_item).unwrap();
    assert!(tags.is_array());
    assert_eq!(tags.path_key(), Some("tags"));
    assert_eq!(
        tags.as_list().unwrap(),
        [Value::from("rust"), Value::from("bson")]
    );

    let related = value.get_path("related").and_then(Value::as_item).unwrap();
    assert_eq!(
        related.as_list().unwrap(),
        [oid(OID2), Value::from("not-an-id")]
    );
}

#[test]
fn embedded_entity_fields_are_cast() {
    let value = blog().cast("Posts", post()).unwrap();

    let author = value.get_path("author").and_then(Value::as_item).unwrap();
    assert!(author.is_entity());
    assert_eq!(author.model().map(|model| model.name()), Some("Posts"));
    assert_eq!(author.get("id"), Some(&oid(OID2)));
    assert_eq!(author.get("name"), Some(&Value::from("Ada")));
    assert_eq!(
        author.get("joined"),
        Some(&Value::Native(Bson::DateTime(bson::DateTime::from_millis(
            1_699_920_000_000
        ))))
    );
}

#[test]
fn entities_inside_arrays_are_cast() {
    let value = blog().cast("Posts", post()).unwrap();

    assert_eq!(value.get_path("comments.0.author_id"), Some(&oid(OID)));
    assert_eq!(value.get_path("comments.0.votes"), Some(&Value::I64(3)));
    assert_eq!(value.get_path("comments.0.body"), Some(&Value::from("nice")));

    assert_eq!(
        value.get_path("comments.1.author_id"),
        Some(&Value::from("anon"))
    );
    assert_eq!(value.get_path("comments.1.votes"), Some(&Value::I64(1)));

    let comment = value
        .get_path("comments.1")
        .and_then(Value::as_item)
        .unwrap();
    assert_eq!(comment.path_key(), Some("comments"));
}

#[test]
fn recasting_rewraps_only_array_fields() {
    let db = blog();
    let once = db.cast("Posts", post()).unwrap();
    let before = db.ops().len();

    let twice = db.cast("Posts", once.clone()).unwrap();

    for path in ["_id", "created", "matcher", "author"] {
        assert_eq!(twice.get_path(path), once.get_path(path), "{path}");
    }

    // Items at array fields are wrapped in a fresh array
    assert_eq!(
        &db.ops()[before..],
        [
            post_op(ItemClass::Array, "tags"),
            post_op(ItemClass::Array, "related"),
            post_op(ItemClass::Array, "comments"),
        ]
    );
    assert_eq!(twice.get_path("tags.0"), once.get_path("tags"));
}

#[test]
fn missing_model_is_reported() {
    let err = blog().cast("Drafts", post()).unwrap_err();
    assert_eq!(err.to_string(), "unknown model: Drafts");
}
