use std::collections::BTreeMap;

/// Asset name to mention count. `None` marks an asset whose lookup failed.
pub type MentionCounts = BTreeMap<String, Option<u64>>;

/// Number of assets with a known count.
pub fn known_count(mentions: &MentionCounts) -> usize {
    mentions.values().filter(|c| c.is_some()).count()
}
