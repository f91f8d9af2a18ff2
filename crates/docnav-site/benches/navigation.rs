//! Benchmarks for navigation resolution.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use docnav_site::{
    Category, Document, LinkLocation, NavLink, NavTarget, Site, SiteConfig, build_route_table,
    build_sidebar, validate_navigation,
};

/// Create `categories * per_category` documents and a sidebar listing them.
fn create_site_input(categories: usize, per_category: usize) -> (Vec<Document>, Vec<Category>) {
    let mut documents = Vec::new();
    let mut sidebar = Vec::new();

    for c in 0..categories {
        let items: Vec<String> = (0..per_category).map(|i| format!("section-{c}/page-{i}")).collect();
        documents.extend(
            items
                .iter()
                .map(|slug| Document::new(slug.clone(), format!("Page {slug}"))),
        );
        sidebar.push(Category::new(format!("Section {c}"), items));
    }

    (documents, sidebar)
}

fn bench_route_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_table");

    for (categories, per_category) in [(3, 5), (10, 20), (20, 50)] {
        let (documents, _) = create_site_input(categories, per_category);

        group.bench_with_input(
            BenchmarkId::new("build", documents.len()),
            &documents,
            |b, documents| b.iter(|| build_route_table(documents, "docs")),
        );
    }

    group.finish();
}

fn bench_sidebar(c: &mut Criterion) {
    let mut group = c.benchmark_group("sidebar");

    for (categories, per_category) in [(3, 5), (10, 20), (20, 50)] {
        let (documents, sidebar) = create_site_input(categories, per_category);

        group.bench_with_input(
            BenchmarkId::new("build", documents.len()),
            &(documents, sidebar),
            |b, (documents, sidebar)| b.iter(|| build_sidebar(sidebar, documents)),
        );
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let (documents, categories) = create_site_input(20, 50);
    let routes = build_route_table(&documents, "docs").unwrap();
    let sidebar = build_sidebar(&categories, &documents).unwrap().sidebar;
    let links: Vec<NavLink> = (0..10)
        .map(|i| {
            NavLink::new(
                format!("Link {i}"),
                NavTarget::Doc(format!("section-{i}/page-0")),
                LinkLocation::Navbar,
            )
        })
        .collect();

    let mut group = c.benchmark_group("validate");

    group.bench_function("consistent", |b| {
        b.iter(|| validate_navigation(&routes, &sidebar, &links))
    });

    group.finish();
}

fn bench_site_queries(c: &mut Criterion) {
    let (documents, sidebar) = create_site_input(10, 20);
    let config = SiteConfig {
        sidebar,
        ..SiteConfig::default()
    };
    let site = Site::from_documents(&config, documents).unwrap();

    let mut group = c.benchmark_group("site");

    group.bench_function("pagination", |b| {
        b.iter(|| site.pagination("section-5/page-10"))
    });

    group.bench_function("breadcrumbs", |b| {
        b.iter(|| site.breadcrumbs("section-5/page-10"))
    });

    group.bench_function("manifest_json", |b| {
        b.iter(|| serde_json::to_string(&site.manifest()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_route_table,
    bench_sidebar,
    bench_validate,
    bench_site_queries,
);
criterion_main!(benches);
