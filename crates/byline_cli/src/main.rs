//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `byline_core` linkage with a tiny fixed catalog.
//! - Keep output deterministic for quick local sanity checks.

use byline_core::{core_version, Catalog, RepoResult};

fn main() -> RepoResult<()> {
    let mut catalog = Catalog::new();
    let creator = catalog.add_creator("Smoke Creator")?;
    let wired = catalog.add_publication("Wired", "Tech")?;
    let vogue = catalog.add_publication("Vogue", "Fashion")?;

    let mut factory = catalog.creator_mut(creator)?;
    factory.add_contribution(wired, "Smoke Test One")?;
    factory.add_contribution(wired, "Smoke Test Two")?;
    factory.add_contribution(wired, "Smoke Test Three")?;
    factory.add_contribution(vogue, "Smoke Test Four")?;

    let view = catalog.creator_view(creator)?;
    let topics: Vec<&str> = view.topic_areas().unwrap_or_default().into_iter().collect();
    let frequent = catalog
        .publication_view(wired)?
        .frequent_contributors()
        .map_or(0, |creators| creators.len());

    println!("byline_core version={}", core_version());
    println!("contributions={}", catalog.contribution_count());
    println!("publications={}", view.publications().len());
    println!("topic_areas={}", topics.join(","));
    println!("wired_frequent_contributors={frequent}");
    Ok(())
}
