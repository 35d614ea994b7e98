//! Tests for exporting in-memory references to dependent compilations.

mod common;

use std::sync::Arc;

use common::{platform, FakeBackend, FakeEngine, FakeProject};
use kiln_cache::{Reference, UnitCache};
use kiln_config::LoaderConfig;
use kiln_loader::{ProjectLoader, ReferenceExporter};

fn graph() -> FakeBackend {
    FakeBackend::default()
        .with("A", FakeProject::depending_on(&["B", "C"]))
        .with("B", FakeProject::depending_on(&["C"]))
        .with("C", FakeProject::default())
}

fn names(references: &[Reference]) -> Vec<&str> {
    references.iter().map(Reference::name).collect()
}

#[test]
fn self_reference_comes_first_then_original_order() {
    let exporter = ReferenceExporter::new(Arc::new(UnitCache::new(graph())));
    let references = exporter.export_references("A", &platform()).unwrap();
    assert_eq!(names(&references), vec!["A", "B", "C"]);
}

#[test]
fn self_reference_is_the_live_compilation() {
    let exporter = ReferenceExporter::new(Arc::new(UnitCache::new(graph())));
    let references = exporter.export_references("B", &platform()).unwrap();
    assert!(matches!(&references[0], Reference::Compilation { name, .. } if name.as_str() == "B"));
    assert!(matches!(&references[1], Reference::File { .. }));
}

#[test]
fn leaf_project_exports_only_itself() {
    let exporter = ReferenceExporter::new(Arc::new(UnitCache::new(graph())));
    let references = exporter.export_references("C", &platform()).unwrap();
    assert_eq!(names(&references), vec!["C"]);
}

#[test]
fn unknown_project_exports_nothing() {
    let exporter = ReferenceExporter::new(Arc::new(UnitCache::new(graph())));
    assert!(exporter
        .export_references("Missing", &platform())
        .unwrap()
        .is_empty());
}

#[test]
fn exporter_and_loader_share_one_cache() {
    let backend = graph();
    let loader = ProjectLoader::new(
        Arc::new(UnitCache::new(backend.clone())),
        FakeEngine::default(),
        &LoaderConfig::default(),
    );

    loader.export_references("A", &platform()).unwrap();
    assert!(loader.load("A", &platform()).unwrap().unwrap().is_loaded());
    loader.exporter().export_references("B", &platform()).unwrap();

    for project in ["A", "B", "C"] {
        assert_eq!(backend.compile_count(project), 1, "{project}");
    }
}

#[test]
fn exported_reference_can_be_emitted() {
    let backend = graph();
    let exporter = ReferenceExporter::new(Arc::new(UnitCache::new(backend.clone())));
    let references = exporter.export_references("C", &platform()).unwrap();

    let Reference::Compilation { compilation, .. } = &references[0] else {
        panic!("expected a compilation reference");
    };
    let mut code: Vec<u8> = Vec::new();
    let outcome = compilation.emit(kiln_cache::EmitRequest {
        code: &mut code,
        symbols: None,
        resources: &[],
    });
    assert!(outcome.success);
    assert_eq!(code, b"IMAGE:C");
}

#[test]
fn in_memory_framework_images_follow_project_references() {
    let backend = FakeBackend::default()
        .with(
            "App",
            FakeProject::depending_on(&["Lib"])
                .with_framework_image("System.Runtime", b"runtime image"),
        )
        .with("Lib", FakeProject::default());
    let exporter = ReferenceExporter::new(Arc::new(UnitCache::new(backend)));
    let references = exporter.export_references("App", &platform()).unwrap();

    assert_eq!(names(&references), vec!["App", "Lib", "System.Runtime"]);
    let Reference::Image { image, .. } = &references[2] else {
        panic!("expected an in-memory image reference");
    };
    assert_eq!(image.read().unwrap(), b"runtime image");
}
