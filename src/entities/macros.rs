//! Macros for reducing boilerplate when defining records

/// Implement [`Record`](crate::core::entity::Record) for a struct with a
/// `pub id: RecordId` field.
///
/// The optional list names the wire fields matched by free-text search; the
/// optional trailing block is pasted into the impl to override provided
/// methods such as `apply_create_defaults` or `validation_config`.
///
/// # Example
///
/// ```rust,ignore
/// impl_record!(Equipment, "equipment", "equipment", ["name_c", "type_c"]);
///
/// impl_record!(Task, "task", "tasks", ["title_c"], {
///     fn apply_create_defaults(fields: &mut Fields) {
///         fields.insert("completed_c".into(), false.into());
///     }
/// });
/// ```
#[macro_export]
macro_rules! impl_record {
    ($type:ident, $singular:literal, $plural:literal) => {
        $crate::impl_record!($type, $singular, $plural, [], {});
    };

    ($type:ident, $singular:literal, $plural:literal, [$($field:literal),* $(,)?]) => {
        $crate::impl_record!($type, $singular, $plural, [$($field),*], {});
    };

    ($type:ident, $singular:literal, $plural:literal, [$($field:literal),* $(,)?], { $($body:tt)* }) => {
        impl $crate::core::entity::Record for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> $crate::core::entity::RecordId {
                self.id
            }

            fn searchable_fields() -> &'static [&'static str] {
                &[$($field),*]
            }

            $($body)*
        }
    };
}
