//! Document rewriting: finds same-origin asset references, points them at
//! local copies, and collects the download plan. Performs no network or disk
//! I/O.

mod plan;

pub use plan::{DownloadPlan, ResolvedAsset};

use url::Url;

use crate::dom::{self, Element, Node};
use crate::naming;
use crate::origin;

/// Reference kinds tracked by the rewriter. Each kind is visited over the
/// whole document in document order, kinds in this fixed order, so the plan
/// order is reproducible.
const REFERENCE_KINDS: &[(&str, &str)] = &[("img", "src"), ("script", "src"), ("link", "href")];

/// Parses `markup`, rewrites every same-origin reference to
/// `<assets_dir_name>/<local name>`, and returns the new markup together with
/// the plan of assets to download.
pub fn rewrite(page_url: &Url, markup: &str, assets_dir_name: &str) -> (String, DownloadPlan) {
    let base = origin::normalized_base(page_url);
    let mut document = dom::parse_document(markup);
    let mut plan = DownloadPlan::new();

    for &(tag, attr) in REFERENCE_KINDS {
        for node in &mut document.nodes {
            visit(node, tag, attr, &base, assets_dir_name, &mut plan);
        }
    }

    (document.to_html(), plan)
}

fn visit(
    node: &mut Node,
    tag: &str,
    attr: &str,
    base: &Url,
    assets_dir_name: &str,
    plan: &mut DownloadPlan,
) {
    let Node::Element(element) = node else { return };
    if element.name == tag {
        rewrite_reference(element, attr, base, assets_dir_name, plan);
    }
    for child in &mut element.children {
        visit(child, tag, attr, base, assets_dir_name, plan);
    }
}

fn rewrite_reference(
    element: &mut Element,
    attr: &str,
    base: &Url,
    assets_dir_name: &str,
    plan: &mut DownloadPlan,
) {
    let Some(value) = element.attr(attr).map(str::to_string) else {
        return;
    };
    if !origin::is_local(base, &value) {
        tracing::debug!(reference = %value, "skipping non-local reference");
        return;
    }
    let Some(absolute) = origin::resolve(base, &value) else {
        return;
    };

    // Repeated references to one URL share a single plan entry.
    if let Some(existing) = plan.iter().find(|a| a.absolute_url == absolute) {
        let relative = existing.relative_path.clone();
        element.set_attr(attr, &relative);
        return;
    }

    let mut name = naming::generate_name(&absolute, false);
    if plan.iter().any(|a| a.local_file_name == name) {
        name = naming::disambiguate(&name, &absolute);
    }
    let relative = format!("{assets_dir_name}/{name}");

    tracing::debug!(from = %value, to = %relative, "rewrote local reference");
    element.set_attr(attr, &relative);
    plan.push(ResolvedAsset {
        absolute_url: absolute,
        local_file_name: name,
        relative_path: relative,
    });
}
