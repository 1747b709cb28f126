use crudgen::{
    AppError, DestroyOptions, FileStatus, GenerateOptions, LintReport, destroy_at, generate_at,
};
use tempfile::TempDir;

fn options(name: &str, actions: &[&str]) -> GenerateOptions {
    GenerateOptions {
        name: name.to_string(),
        actions: Some(actions.iter().map(|a| a.to_string()).collect()),
        skip_lint: true,
        ..GenerateOptions::default()
    }
}

#[test]
fn public_api_lifecycle_contract() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();

    let outcome = generate_at(root.clone(), options("products", &["index", "show"])).expect("generate failed");
    assert_eq!(outcome.files.len(), 8);
    assert!(outcome.routes.created);
    assert_eq!(outcome.routes.inserted.len(), 2);
    assert_eq!(outcome.lint, LintReport::Skipped);
    assert_eq!(
        outcome.constants.definitions.get("PRODUCTS_INDEX_TAG").map(String::as_str),
        Some("products_index")
    );
    assert!(root.join("app/views/static/products/index.html.haml").exists());

    let rerun = generate_at(root.clone(), options("products", &["index", "show"])).expect("rerun failed");
    assert!(rerun.files.iter().all(|f| f.status == FileStatus::Identical));
    assert!(rerun.constants.appended.is_empty());
    assert_eq!(rerun.constants.definitions.len(), 2);

    let destroyed = destroy_at(
        root.clone(),
        DestroyOptions {
            name: "products".to_string(),
            actions: Some(vec!["index".to_string(), "show".to_string()]),
            dry_run: false,
        },
    )
    .expect("destroy failed");
    assert!(destroyed.files.iter().all(|f| f.status == FileStatus::Remove));
    assert!(!root.join("app/controllers/products_controller.rb").exists());
    assert!(root.join("config/initializers/generated_tags.rb").exists());
}

#[test]
fn public_api_rejects_invalid_names() {
    let temp = TempDir::new().unwrap();
    let err = generate_at(temp.path().to_path_buf(), options("1products", &[])).unwrap_err();
    assert!(matches!(err, AppError::InvalidResourceName(name) if name == "1products"));
}

#[test]
fn pure_core_is_exported() {
    use crudgen::domain::{ActionId, ResourceName, ResourceSpec, merge_constants};

    let spec = ResourceSpec::new(
        &ResourceName::new("products").unwrap(),
        ActionId::parse_all(&["index", "show"]).unwrap(),
    );
    let merge = merge_constants(spec.forms(), spec.actions(), "", "TAG");
    let lines: Vec<String> = merge.appended.iter().map(|e| e.to_string()).collect();
    assert_eq!(lines, vec!["PRODUCTS_INDEX_TAG = 'products_index'", "PRODUCTS_SHOW_TAG = 'products_show'"]);
}
