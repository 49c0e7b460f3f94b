pub fn default_post_fields() -> Vec<String> {
    [
        "id",
        "guid",
        "post_title",
        "post_content",
        "post_excerpt",
        "post_date",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use wpq_utils::ident::is_valid_field;

    use super::*;

    #[test]
    fn test_default_post_fields() {
        let fields = default_post_fields();

        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0], "id");
        assert!(fields.iter().all(|f| is_valid_field(f)));
    }
}
