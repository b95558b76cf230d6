//! Density grouping.
//!
//! Each spritesheet is assembled from images sharing one device-pixel
//! ratio, so descriptors are partitioned by ratio before naming.

use std::collections::BTreeMap;

use crate::types::{SheetOptions, SpriteImage};

/// Images sharing one device-pixel ratio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityGroup {
    pub ratio: u32,
    /// Descriptors in source order; one reference may appear under
    /// several selectors.
    pub images: Vec<SpriteImage>,
}

impl DensityGroup {
    /// Density suffix for this group: `None` at ratio 1, `@2x` style above.
    pub fn suffix(&self) -> Option<String> {
        (self.ratio > 1).then(|| format!("@{}x", self.ratio))
    }

    /// Spritesheet filename this group resolves to.
    pub fn spritesheet(&self, options: &SheetOptions) -> String {
        match self.suffix() {
            Some(suffix) => options.filename(&[suffix.as_str()]),
            None => options.filename(&[]),
        }
    }

    /// Unique references in this group, in first-seen order.
    pub fn references(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for image in &self.images {
            if !seen.contains(&image.url.as_str()) {
                seen.push(image.url.as_str());
            }
        }
        seen
    }
}

/// Partition descriptors by ratio, ascending.
pub fn group_by_ratio(images: Vec<SpriteImage>) -> Vec<DensityGroup> {
    let mut by_ratio: BTreeMap<u32, Vec<SpriteImage>> = BTreeMap::new();
    for image in images {
        by_ratio.entry(image.ratio).or_default().push(image);
    }

    by_ratio
        .into_iter()
        .map(|(ratio, images)| DensityGroup { ratio, images })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(selector: &str, url: &str, ratio: u32) -> SpriteImage {
        SpriteImage {
            selector: selector.to_string(),
            url: url.to_string(),
            ratio,
            color: None,
            line: 1,
        }
    }

    #[test]
    fn test_groups_sorted_by_ratio() {
        let groups = group_by_ratio(vec![
            image(".b", "b@2x.png", 2),
            image(".a", "a.png", 1),
            image(".c", "c@3x.png", 3),
        ]);

        let ratios: Vec<u32> = groups.iter().map(|g| g.ratio).collect();
        assert_eq!(ratios, vec![1, 2, 3]);
    }

    #[test]
    fn test_group_preserves_source_order() {
        let groups = group_by_ratio(vec![
            image(".a", "a.png", 1),
            image(".b", "b.png", 1),
        ]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].images[0].selector, ".a");
        assert_eq!(groups[0].images[1].selector, ".b");
    }

    #[test]
    fn test_suffix() {
        let base = DensityGroup { ratio: 1, images: vec![] };
        let retina = DensityGroup { ratio: 2, images: vec![] };

        assert_eq!(base.suffix(), None);
        assert_eq!(retina.suffix().as_deref(), Some("@2x"));
    }

    #[test]
    fn test_spritesheet_names() {
        let options = SheetOptions::new("./");
        let base = DensityGroup { ratio: 1, images: vec![] };
        let retina = DensityGroup { ratio: 2, images: vec![] };

        assert_eq!(base.spritesheet(&options), "sprite.png");
        assert_eq!(retina.spritesheet(&options), "sprite.@2x.png");
    }

    #[test]
    fn test_references_deduplicated() {
        let group = DensityGroup {
            ratio: 1,
            images: vec![
                image(".a", "shared.png", 1),
                image(".b", "shared.png", 1),
                image(".c", "other.png", 1),
            ],
        };

        assert_eq!(group.references(), vec!["shared.png", "other.png"]);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_by_ratio(vec![]).is_empty());
    }
}
