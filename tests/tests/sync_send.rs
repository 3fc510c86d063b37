use tests::{Db, Error, Item, Schema, Value};

fn assert_sync_send<T: Send + Sync>() {}

#[test]
fn ensure_types_sync_send() {
    assert_sync_send::<Schema>();
    assert_sync_send::<Db>();
    assert_sync_send::<Value>();
    assert_sync_send::<Item>();
    assert_sync_send::<Error>();
}

#[test]
fn schema_is_shared_across_threads() {
    let db = std::sync::Arc::new(tests::blog());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let db = db.clone();
            std::thread::spawn(move || {
                db.cast("Posts", tests::doc! { "views" => i.to_string() })
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().unwrap();
        assert_eq!(value.get_path("views"), Some(&Value::I64(i as i64)));
    }
}
