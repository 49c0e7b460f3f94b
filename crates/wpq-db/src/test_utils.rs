use rusqlite::Connection;

const SCHEMA: &str = "
    CREATE TABLE wp_posts (
        ID INTEGER PRIMARY KEY,
        post_author INTEGER NOT NULL DEFAULT 0,
        post_date TEXT NOT NULL,
        post_content TEXT NOT NULL DEFAULT '',
        post_title TEXT NOT NULL,
        post_excerpt TEXT NOT NULL DEFAULT '',
        post_status TEXT NOT NULL DEFAULT 'publish',
        post_name TEXT NOT NULL DEFAULT '',
        post_modified TEXT NOT NULL DEFAULT '',
        guid TEXT NOT NULL DEFAULT '',
        menu_order INTEGER NOT NULL DEFAULT 0,
        post_type TEXT NOT NULL DEFAULT 'post',
        comment_count INTEGER NOT NULL DEFAULT 0
    );
    CREATE TABLE wp_postmeta (
        meta_id INTEGER PRIMARY KEY,
        post_id INTEGER NOT NULL,
        meta_key TEXT,
        meta_value TEXT
    );
    CREATE TABLE wp_terms (
        term_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        slug TEXT NOT NULL,
        term_group INTEGER NOT NULL DEFAULT 0
    );
    CREATE TABLE wp_term_taxonomy (
        term_taxonomy_id INTEGER PRIMARY KEY,
        term_id INTEGER NOT NULL,
        taxonomy TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        parent INTEGER NOT NULL DEFAULT 0,
        count INTEGER NOT NULL DEFAULT 0
    );
    CREATE TABLE wp_term_relationships (
        object_id INTEGER NOT NULL,
        term_taxonomy_id INTEGER NOT NULL,
        term_order INTEGER NOT NULL DEFAULT 0,
        PRIMARY KEY (object_id, term_taxonomy_id)
    );
    CREATE TABLE wp_comments (
        comment_ID INTEGER PRIMARY KEY,
        comment_post_ID INTEGER NOT NULL,
        comment_author TEXT NOT NULL DEFAULT '',
        comment_date TEXT NOT NULL DEFAULT '',
        comment_content TEXT NOT NULL DEFAULT '',
        comment_approved TEXT NOT NULL DEFAULT '1'
    );
";

// term_taxonomy ids differ from term ids on purpose so a join on the wrong
// column returns nothing.
const DATA: &str = "
    INSERT INTO wp_posts (ID, post_date, post_title, post_excerpt, post_status, post_type, guid, post_content) VALUES
        (1, '2024-01-01 10:00:00', 'Hello world', 'First', 'publish', 'post', 'http://example.com/?p=1', 'Welcome'),
        (2, '2024-01-02 10:00:00', 'About', '', 'publish', 'page', 'http://example.com/?page_id=2', 'About us'),
        (3, '2024-01-03 10:00:00', 'Draft', '', 'draft', 'post', 'http://example.com/?p=3', 'WIP'),
        (4, '2024-02-01 10:00:00', 'Second post', '', 'publish', 'post', 'http://example.com/?p=4', 'More'),
        (5, '2024-03-01 10:00:00', 'Third post', '', 'publish', 'post', 'http://example.com/?p=5', 'Even more');
    INSERT INTO wp_postmeta (meta_id, post_id, meta_key, meta_value) VALUES
        (1, 1, '_thumbnail_id', '42'),
        (2, 1, 'views', '100'),
        (3, 4, 'views', '7');
    INSERT INTO wp_terms (term_id, name, slug) VALUES
        (1, 'Uncategorized', 'uncategorized'),
        (2, 'News', 'news'),
        (3, 'rust', 'rust'),
        (4, 'sqlite', 'sqlite');
    INSERT INTO wp_term_taxonomy (term_taxonomy_id, term_id, taxonomy, count) VALUES
        (11, 1, 'category', 0),
        (12, 2, 'category', 2),
        (13, 3, 'post_tag', 1),
        (14, 4, 'post_tag', 1);
    INSERT INTO wp_term_relationships (object_id, term_taxonomy_id) VALUES
        (1, 12), (1, 13), (4, 12), (4, 14);
    INSERT INTO wp_comments (comment_ID, comment_post_ID, comment_author, comment_date, comment_content) VALUES
        (1, 1, 'alice', '2024-01-01 12:00:00', 'Nice'),
        (2, 1, 'bob', '2024-01-01 13:00:00', 'Agreed'),
        (3, 4, 'carol', '2024-02-02 09:00:00', 'Hmm');
";

/// An in-memory WordPress database with the `wp_` prefix and no rows.
pub fn empty_wordpress_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    conn
}

/// An in-memory WordPress database with the `wp_` prefix and a small blog.
///
/// Published posts are 1, 4 and 5; post 2 is a page and post 3 a draft.
/// Posts 1 and 4 are in the `News` category; post 1 is tagged `rust`, post 4
/// `sqlite`. Post 1 has two comments and post 4 one.
pub fn wordpress_db() -> Connection {
    let conn = empty_wordpress_db();
    conn.execute_batch(DATA).unwrap();
    conn
}
