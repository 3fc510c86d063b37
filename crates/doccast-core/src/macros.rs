/// Builds a [`Document`](crate::Document) from `key => value` pairs.
///
/// Values go through `Value::from`, so literals, strings, nested documents
/// and lists can be mixed freely.
#[macro_export]
macro_rules! doc {
    () => {
        $crate::Document::new()
    };
    (
        $( $key:expr => $value:expr ),+ $(,)?
    ) => {
        [ $( ($key.to_string(), $crate::Value::from($value)), )+ ]
            .into_iter()
            .collect::<$crate::Document>()
    };
}
