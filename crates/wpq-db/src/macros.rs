//! Macros for defining entity schemas.
//!
//! The [`define_entity!`] macro generates column constants for a WordPress
//! table, tying database column names to the [`Entity`](crate::schema::Entity)
//! they belong to.

/// Defines a module with column constants for a WordPress table.
///
/// # Syntax
///
/// ```ignore
/// define_entity!(
///     terms {
///         entity: Terms,
///         columns: {
///             TERM_ID => "term_id",
///             NAME => "name"
///         }
///     }
/// );
/// ```
///
/// This expands to:
///
/// ```ignore
/// pub mod terms {
///     pub const ENTITY: Entity = Entity::Terms;
///     pub const TABLE: &str = "terms";
///     pub const TERM_ID: Col = Col::qualified(Entity::Terms, "term_id");
///     pub const NAME: Col = Col::qualified(Entity::Terms, "name");
/// }
/// ```
///
/// Columns are qualified with their table so they can be used in joined
/// queries; call [`Col::bare`](crate::expr::Col::bare) for the unqualified form.
#[macro_export]
macro_rules! define_entity {
    (
        $module:ident {
            entity: $entity:ident,
            columns: {
                $($col_name:ident => $db_col:literal),* $(,)?
            }
        }
    ) => {
        pub mod $module {
            use $crate::{expr::Col, schema::Entity};

            pub const ENTITY: Entity = Entity::$entity;

            pub const TABLE: &str = ENTITY.table();

            $(
                pub const $col_name: Col = Col::qualified(ENTITY, $db_col);
            )*
        }
    };
}
