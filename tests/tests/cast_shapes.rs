use pretty_assertions::assert_eq;
use tests::*;

#[test]
fn keyed_document_at_array_field_becomes_array() {
    let db = blog();
    let value = db
        .cast("Posts", doc! { "tags" => doc! { "first" => "a", "second" => "b" } })
        .unwrap();

    assert_eq!(db.ops(), [post_op(ItemClass::Array, "tags")]);

    let tags = value.get_path("tags").and_then(Value::as_item).unwrap();
    assert_eq!(tags.as_list().unwrap(), [Value::from("a"), Value::from("b")]);
}

#[test]
fn sequential_document_becomes_array() {
    let db = blog();
    let value = db
        .cast("Posts", doc! { "letters" => doc! { "0" => "x", "1" => "y" } })
        .unwrap();

    assert_eq!(db.ops(), [post_op(ItemClass::Array, "letters")]);
    assert_eq!(value.get_path("letters.1"), Some(&Value::from("y")));
}

#[test]
fn empty_document_becomes_array() {
    let db = blog();
    let value = db.cast("Posts", doc! { "extra" => doc! {} }).unwrap();

    assert_eq!(db.ops(), [post_op(ItemClass::Array, "extra")]);
    assert!(value
        .get_path("extra")
        .and_then(Value::as_item)
        .unwrap()
        .is_empty());
}

#[test]
fn scalar_at_array_field_becomes_single_element_array() {
    let db = blog();
    let value = db.cast("Posts", doc! { "related" => OID }).unwrap();

    assert_eq!(db.ops(), [post_op(ItemClass::Array, "related")]);

    let related = value.get_path("related").and_then(Value::as_item).unwrap();
    assert_eq!(related.as_list().unwrap(), [oid(OID)]);
}

#[test]
fn nested_lists_become_nested_arrays() {
    let db = blog();
    let value = db
        .cast("Posts", doc! { "grid" => vec![vec![1, 2], vec![3]] })
        .unwrap();

    assert_eq!(
        db.ops(),
        [
            post_op(ItemClass::Array, "grid"),
            post_op(ItemClass::Array, "grid"),
            post_op(ItemClass::Array, "grid"),
        ]
    );
    assert_eq!(value.get_path("grid.0.1"), Some(&Value::I64(2)));
    assert_eq!(value.get_path("grid.1.0"), Some(&Value::I64(3)));
}

#[test]
fn keyed_document_becomes_entity() {
    let db = blog();
    let value = db
        .cast("Posts", doc! { "settings" => doc! { "theme" => "dark" } })
        .unwrap();

    assert_eq!(db.ops(), [post_op(ItemClass::Entity, "settings")]);
    assert!(value
        .get_path("settings")
        .and_then(Value::as_item)
        .unwrap()
        .is_entity());
}

#[test]
fn deep_entities_extend_the_path() {
    let db = blog();
    db.cast(
        "Posts",
        doc! { "author" => doc! { "address" => doc! { "city" => "London" } } },
    )
    .unwrap();

    assert_eq!(
        db.ops(),
        [
            post_op(ItemClass::Entity, "author"),
            post_op(ItemClass::Entity, "author.address"),
        ]
    );
}

#[test]
fn flat_documents_build_nothing() {
    let db = blog();
    db.cast("Posts", doc! { "title" => "t", "views" => 3 })
        .unwrap();

    assert!(db.ops().is_empty());
}
