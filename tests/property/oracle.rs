//! Reference oracle for differential testing.
//!
//! Walks each page once, cutting a new block at every empty line, and keeps
//! the blocks with a matching line. Slow and obviously correct.

use klein::{AggregatedBlock, LineId, Page, Timestamp};

struct OracleBlock {
    anchor: Option<LineId>,
    lines: Vec<String>,
    updated: Timestamp,
    matched: bool,
}

impl OracleBlock {
    fn new() -> Self {
        Self {
            anchor: None,
            lines: Vec::new(),
            updated: Timestamp::MIN,
            matched: false,
        }
    }
}

pub fn oracle_search(pages: &[Page], needle: &str) -> Vec<AggregatedBlock> {
    let mut results = Vec::new();
    for page in pages {
        let mut blocks = vec![OracleBlock::new()];
        for line in &page.lines {
            if line.text.is_empty() {
                blocks.push(OracleBlock::new());
                continue;
            }
            let block = blocks.last_mut().unwrap();
            block.anchor.get_or_insert_with(|| line.id.clone());
            block.lines.push(line.text.clone());
            block.updated = block.updated.max(line.updated);
            block.matched |= line.text.contains(needle);
        }
        for block in blocks.into_iter().filter(|b| b.matched) {
            results.push(AggregatedBlock {
                page_id: page.id.clone(),
                title: page.title.clone(),
                anchor: block.anchor.unwrap(),
                text: block.lines.join("\n"),
                updated: block.updated,
            });
        }
    }
    results.sort_by(|a, b| b.updated.cmp(&a.updated).then_with(|| a.page_id.cmp(&b.page_id)));
    results
}

#[test]
fn test_oracle_on_mention_page() {
    let results = oracle_search(&[klein::testing::mention_page()], "[meganii.icon]");
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].text, "[meganii.icon] hello\nworld");
}
