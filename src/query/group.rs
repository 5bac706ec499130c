use super::item::QueryItem;

/// Anything that can stand in for an ordered run of query pairs.
pub trait QueryGroup {
    /// The pairs of this group, in declaration order. Duplicates are kept.
    fn query_items(&self) -> Vec<QueryItem>;
}

impl QueryGroup for [QueryItem] {
    fn query_items(&self) -> Vec<QueryItem> {
        self.to_vec()
    }
}

impl QueryGroup for Vec<QueryItem> {
    fn query_items(&self) -> Vec<QueryItem> {
        self.as_slice().query_items()
    }
}

impl<const N: usize> QueryGroup for [QueryItem; N] {
    fn query_items(&self) -> Vec<QueryItem> {
        self.as_slice().query_items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_preserves_order_and_duplicates() {
        let group = vec![
            QueryItem::new("b", "2"),
            QueryItem::new("a", "1"),
            QueryItem::new("b", "2"),
        ];
        let items = group.query_items();
        assert_eq!(items, group);
    }

    #[test]
    fn test_empty_group() {
        let group: Vec<QueryItem> = Vec::new();
        assert!(group.query_items().is_empty());
    }
}
