use skaflo::{config::load_registry, generator::ProjectGenerator, structure::*};
use test_log::test;
mod utils;
use utils::collect_dirs;

#[test]
fn custom_catalog_structure_can_be_generated() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = tmp.path().join("skaflo.yaml");
    std::fs::write(
        &catalog,
        r#"
schemaVersion: v1
structures:
  - framework: svelte
    structure: kit
    name: SvelteKit
    description: SvelteKit routes layout
    directories:
      - src/routes/(app)
      - src/lib/components
      - static
"#,
    )
    .unwrap();
    let out = tmp.path().join("out");
    std::fs::create_dir(&out).unwrap();

    let registry = load_registry(Some(catalog.as_path())).unwrap();
    assert_eq!(registry.list_frameworks().last(), Some(&"svelte"));

    let report = ProjectGenerator::new(&registry).generate(&GenerationOptions {
        target: ProjectTarget::NewProject("kit-app".into()),
        framework: "svelte".into(),
        structure: "kit".into(),
        output_path: out.clone(),
    });

    assert!(report.success, "{:?}", report.errors);
    assert_eq!(
        collect_dirs(&out),
        vec![
            "kit-app",
            "kit-app/src",
            "kit-app/src/lib",
            "kit-app/src/lib/components",
            "kit-app/src/routes",
            "kit-app/src/routes/(app)",
            "kit-app/static",
        ]
    );
}

#[test]
fn invalid_catalog_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = tmp.path().join("broken.json");
    std::fs::write(&catalog, "{ not json").unwrap();
    assert!(load_registry(Some(catalog.as_path())).is_err());
}
