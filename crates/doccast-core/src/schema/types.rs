/// Store-native type names and the logical types they stand for.
pub(super) const ALIASES: &[(&str, &str)] = &[
    ("ObjectId", "id"),
    ("DateTime", "date"),
    ("JavaScriptCode", "code"),
    ("Binary", "binary"),
    ("datetime", "date"),
    ("timestamp", "date"),
    ("int", "integer"),
];

/// Field every document carries unless the schema declares it otherwise.
pub(super) const ID_FIELD: (&str, &str) = ("_id", "id");
