//! Raw text analysis: normalization, paragraph segmentation and heading
//! classification.

mod classify;
mod segment;

pub use classify::{classify, HeadingHeuristic, HeadingPolicy, UppercaseRule};
pub use segment::{segment, SegmentOptions, Segmenter};

use crate::model::Block;

/// Segment raw text and classify every paragraph.
///
/// Order is preserved and every non-blank paragraph yields exactly one block.
pub fn to_blocks(raw: &str, segmenter: &Segmenter, policy: &dyn HeadingPolicy) -> Vec<Block> {
    segmenter
        .split(raw)
        .into_iter()
        .map(|text| {
            let kind = policy.classify(&text);
            Block::new(text, kind)
        })
        .collect()
}
