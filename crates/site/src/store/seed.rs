//! Content loaded into a fresh store.

use songbird_core::{ContentKind, NewContentItem};

/// The six records every seeded store starts with, in creation order.
///
/// They take content ids 1 through 6.
#[must_use]
pub fn seed_content() -> Vec<NewContentItem> {
    vec![
        NewContentItem::new(
            ContentKind::Bio,
            "About Me",
            "American vocalist with a passion for performance. My music combines \
             traditional American sounds with contemporary influences.",
            1,
        ),
        NewContentItem::new(
            ContentKind::Video,
            "Live at Nashville",
            "https://www.facebook.com/facebook/videos/10153231379946729/",
            1,
        ),
        NewContentItem::new(
            ContentKind::Video,
            "Studio Session",
            "https://www.facebook.com/facebook/videos/10154659446646729/",
            2,
        ),
        NewContentItem::new(
            ContentKind::Social,
            "Facebook",
            "https://facebook.com/vocalist",
            1,
        ),
        NewContentItem::new(
            ContentKind::Social,
            "Instagram",
            "https://instagram.com/vocalist",
            2,
        ),
        NewContentItem::new(
            ContentKind::Social,
            "YouTube",
            "https://youtube.com/vocalist",
            3,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_composition() {
        let seed = seed_content();
        assert_eq!(seed.len(), 6);

        let count = |kind: ContentKind| seed.iter().filter(|i| i.kind == kind.as_str()).count();
        assert_eq!(count(ContentKind::Bio), 1);
        assert_eq!(count(ContentKind::Video), 2);
        assert_eq!(count(ContentKind::Social), 3);

        assert!(seed.iter().all(|i| i.is_active));
    }
}
