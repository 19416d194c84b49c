//! Document-ready pass: accessibility backfill and generated anchors.

use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::document::{Document, NodeKind, SkipLink};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EnhanceReport {
    pub aria_labels: usize,
    pub heading_ids: usize,
    pub skip_links: usize,
}

/// Give every button and link without an `aria-label` one derived from its
/// text, its `title`, or its role.
pub fn backfill_aria_labels(document: &mut Document) -> usize {
    let mut filled = 0;
    for node in &mut document.nodes {
        let fallback = match node.kind {
            NodeKind::Button => "Button",
            NodeKind::Link => "Link",
            _ => continue,
        };
        if node.aria_label.as_deref().is_some_and(|l| !l.trim().is_empty()) {
            continue;
        }
        let text = node.text.trim();
        let label = if !text.is_empty() {
            text.to_string()
        } else if let Some(title) = node.title.as_deref().filter(|t| !t.trim().is_empty()) {
            title.trim().to_string()
        } else {
            fallback.to_string()
        };
        node.aria_label = Some(label);
        filled += 1;
    }
    filled
}

/// Assign `section-N` ids to headings that have none, skipping ids already in use.
pub fn assign_heading_ids(document: &mut Document) -> usize {
    let mut taken: HashSet<String> = document
        .nodes
        .iter()
        .filter_map(|n| n.html_id.clone())
        .collect();
    let mut counter = 0;
    let mut assigned = 0;

    for node in &mut document.nodes {
        if !matches!(node.kind, NodeKind::Heading(_)) || node.html_id.is_some() {
            continue;
        }
        let id = loop {
            counter += 1;
            let candidate = format!("section-{counter}");
            if !taken.contains(&candidate) {
                break candidate;
            }
        };
        taken.insert(id.clone());
        node.html_id = Some(id);
        assigned += 1;
    }
    assigned
}

/// Skip links for the landmarks the page actually has.
pub fn skip_links(document: &Document) -> Vec<SkipLink> {
    let mut links = Vec::new();
    if let Some(main) = &document.landmarks.main_content {
        links.push(SkipLink {
            target: format!("#{main}"),
            label: "Skip to main content".to_string(),
        });
    }
    if document.landmarks.navigation {
        links.push(SkipLink {
            target: "#navigation".to_string(),
            label: "Skip to navigation".to_string(),
        });
    }
    if document.landmarks.search_input {
        links.push(SkipLink {
            target: "#search-input".to_string(),
            label: "Skip to search".to_string(),
        });
    }
    links
}

pub fn enhance(document: &mut Document) -> EnhanceReport {
    let aria_labels = backfill_aria_labels(document);
    let heading_ids = assign_heading_ids(document);
    if document.skip_links.is_empty() {
        document.skip_links = skip_links(document);
    }
    let report = EnhanceReport {
        aria_labels,
        heading_ids,
        skip_links: document.skip_links.len(),
    };
    debug!(?report, "enhanced document");
    report
}
