//! WordPress table definitions.

use std::fmt;

use crate::define_entity;

/// A WordPress table the composer can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Posts,
    PostMeta,
    Terms,
    TermTaxonomy,
    TermRelationships,
    Comments,
}

impl Entity {
    /// Table name without the installation prefix.
    pub const fn table(self) -> &'static str {
        match self {
            Entity::Posts => "posts",
            Entity::PostMeta => "postmeta",
            Entity::Terms => "terms",
            Entity::TermTaxonomy => "term_taxonomy",
            Entity::TermRelationships => "term_relationships",
            Entity::Comments => "comments",
        }
    }

    /// Table name as stored in the database, e.g. `wp_posts`.
    pub fn prefixed(self, prefix: &str) -> String {
        format!("{prefix}{}", self.table())
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

define_entity!(
    posts {
        entity: Posts,
        columns: {
            ID => "ID",
            POST_AUTHOR => "post_author",
            POST_DATE => "post_date",
            POST_CONTENT => "post_content",
            POST_TITLE => "post_title",
            POST_EXCERPT => "post_excerpt",
            POST_STATUS => "post_status",
            POST_NAME => "post_name",
            POST_MODIFIED => "post_modified",
            GUID => "guid",
            MENU_ORDER => "menu_order",
            POST_TYPE => "post_type",
            COMMENT_COUNT => "comment_count",
        }
    }
);

define_entity!(
    postmeta {
        entity: PostMeta,
        columns: {
            META_ID => "meta_id",
            POST_ID => "post_id",
            META_KEY => "meta_key",
            META_VALUE => "meta_value",
        }
    }
);

define_entity!(
    terms {
        entity: Terms,
        columns: {
            TERM_ID => "term_id",
            NAME => "name",
            SLUG => "slug",
        }
    }
);

define_entity!(
    term_taxonomy {
        entity: TermTaxonomy,
        columns: {
            TERM_TAXONOMY_ID => "term_taxonomy_id",
            TERM_ID => "term_id",
            TAXONOMY => "taxonomy",
            COUNT => "count",
        }
    }
);

define_entity!(
    term_relationships {
        entity: TermRelationships,
        columns: {
            OBJECT_ID => "object_id",
            TERM_TAXONOMY_ID => "term_taxonomy_id",
        }
    }
);

define_entity!(
    comments {
        entity: Comments,
        columns: {
            COMMENT_ID => "comment_ID",
            COMMENT_POST_ID => "comment_post_ID",
            COMMENT_AUTHOR => "comment_author",
            COMMENT_DATE => "comment_date",
            COMMENT_CONTENT => "comment_content",
            COMMENT_APPROVED => "comment_approved",
        }
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_tables() {
        assert_eq!(posts::TABLE, "posts");
        assert_eq!(term_relationships::TABLE, "term_relationships");
        assert_eq!(Entity::PostMeta.prefixed("wp_"), "wp_postmeta");
        assert_eq!(Entity::Comments.prefixed(""), "comments");
    }

    #[test]
    fn test_generated_columns_are_qualified() {
        assert_eq!(terms::NAME.entity, Some(Entity::Terms));
        assert_eq!(terms::NAME.name, "name");
        assert_eq!(comments::COMMENT_POST_ID.name, "comment_post_ID");
    }
}
