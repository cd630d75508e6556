use crate::item::InventoryItem;

/// Case-insensitive substring match on name or category.
///
/// A blank query returns every item, in their input order.
pub fn filter_by_text(items: &[InventoryItem], query: &str) -> Vec<InventoryItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            item.name().to_lowercase().contains(&needle)
                || item.category().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
