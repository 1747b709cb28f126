use crate::harness::TestContext;
use crate::harness::test_context::ROUTES_SKELETON;
use predicates::prelude::*;

#[test]
fn generate_creates_default_scaffold() {
    let ctx = TestContext::rails_app();
    ctx.write_lint_config(None);

    ctx.cli()
        .args(["generate", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("      create  app/controllers/static/products_controller.rb"))
        .stdout(predicate::str::contains("       route  resources :products, only: [:index, :edit, :new, :show]"))
        .stdout(predicate::str::contains("✅ Generated products"));

    for path in [
        "app/controllers/static/products_controller.rb",
        "spec/controllers/static/products_controller_spec.rb",
        "app/controllers/products_controller.rb",
        "spec/controllers/products_controller_spec.rb",
        "app/views/static/products/index.html.haml",
        "app/views/products/edit.html.haml",
        "app/views/static/products/new.html.haml",
        "app/views/products/show.html.haml",
    ] {
        assert!(ctx.exists(path), "{} should exist", path);
    }

    assert_eq!(
        ctx.read("config/initializers/generated_tags.rb"),
        "PRODUCTS_INDEX_TAG = 'products_index'\n\
         PRODUCTS_EDIT_TAG = 'products_edit'\n\
         PRODUCTS_NEW_TAG = 'products_new'\n\
         PRODUCTS_SHOW_TAG = 'products_show'\n"
    );
}

#[test]
fn generate_alias_accepts_explicit_actions() {
    let ctx = TestContext::rails_app();
    ctx.write_lint_config(None);

    ctx.cli().args(["g", "order", "index", "archive"]).assert().success();

    assert!(ctx.exists("app/views/orders/archive.html.haml"));
    assert!(!ctx.exists("app/views/orders/show.html.haml"));
    assert!(ctx.read("app/views/orders/archive.html.haml").contains("ORDERS_ARCHIVE_TAG"));

    let routes = ctx.read("config/routes.rb");
    assert!(routes.contains("  resources :orders, only: [:index, :archive]\n"));
    assert!(routes.contains("  namespace :static do\n    resources :orders, only: [:index, :archive]\n  end\n"));
    assert!(routes.ends_with("  root 'home#index'\nend\n"));
}

#[test]
fn rerun_is_idempotent() {
    let ctx = TestContext::rails_app();
    ctx.generate(&["products", "index", "show"]);
    let routes = ctx.read("config/routes.rb");
    let tags = ctx.read("config/initializers/generated_tags.rb");

    ctx.cli()
        .args(["generate", "products", "index", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("   identical  app/controllers/products_controller.rb"))
        .stdout(predicate::str::contains("route").not());

    assert_eq!(ctx.read("config/routes.rb"), routes);
    assert_eq!(ctx.read("config/initializers/generated_tags.rb"), tags);
}

#[test]
fn second_resource_appends_to_existing_constants() {
    let ctx = TestContext::rails_app();
    ctx.generate(&["products", "index"]);
    ctx.generate(&["orders", "index"]);

    assert_eq!(
        ctx.read("config/initializers/generated_tags.rb"),
        "PRODUCTS_INDEX_TAG = 'products_index'\nORDERS_INDEX_TAG = 'orders_index'\n"
    );
}

#[test]
fn modified_file_is_skipped_without_force() {
    let ctx = TestContext::rails_app();
    ctx.generate(&["products", "index"]);
    ctx.write("app/controllers/products_controller.rb", "# mine\n");

    ctx.cli()
        .args(["generate", "products", "index"])
        .assert()
        .success()
        .stdout(predicate::str::contains("        skip  app/controllers/products_controller.rb"));
    assert_eq!(ctx.read("app/controllers/products_controller.rb"), "# mine\n");

    ctx.cli()
        .args(["generate", "products", "index", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("       force  app/controllers/products_controller.rb"));
    assert!(ctx.read("app/controllers/products_controller.rb").contains("class ProductsController"));
}

#[test]
fn dry_run_leaves_project_untouched() {
    let ctx = TestContext::rails_app();
    ctx.write_lint_config(None);

    ctx.cli()
        .args(["generate", "products", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("      create  app/controllers/products_controller.rb"))
        .stdout(predicate::str::contains("nothing was written"));

    assert!(!ctx.exists("app"));
    assert!(!ctx.exists("config/initializers/generated_tags.rb"));
    assert_eq!(ctx.read("config/routes.rb"), ROUTES_SKELETON);
}

#[test]
fn missing_routes_file_is_created() {
    let ctx = TestContext::new();
    ctx.generate(&["products", "index"]);

    assert_eq!(
        ctx.read("config/routes.rb"),
        "Rails.application.routes.draw do\n  resources :products, only: [:index]\n  namespace :static do\n    resources :products, only: [:index]\n  end\nend\n"
    );
}

#[test]
fn invalid_resource_name_fails_without_writing() {
    let ctx = TestContext::rails_app();

    ctx.cli()
        .args(["generate", "../products"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid resource name '../products'"));

    assert!(!ctx.exists("app"));
}

#[test]
fn invalid_action_fails() {
    let ctx = TestContext::rails_app();

    ctx.cli()
        .args(["generate", "products", "Index"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid action 'Index'"));
}

#[test]
fn invalid_config_fails() {
    let ctx = TestContext::rails_app();
    ctx.write(".crudgen.toml", "[generator]\nstatic_namespace = \"Static\"\n");

    ctx.cli()
        .args(["generate", "products"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("static_namespace"));
    assert!(!ctx.exists("app"));
}

#[test]
fn routes_without_draw_block_fail() {
    let ctx = TestContext::new();
    ctx.write_lint_config(None);
    ctx.write("config/routes.rb", "# routes live elsewhere\n");

    ctx.cli()
        .args(["generate", "products"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no `routes.draw do` block"));
    assert!(!ctx.exists("app"));
}

#[test]
fn project_templates_override_embedded_ones() {
    let ctx = TestContext::rails_app();
    ctx.write(
        "lib/templates/crudgen/views/plain/index.html.haml.j2",
        "%h1 Custom {{ resource.human_plural }}\n",
    );
    ctx.generate(&["line_items", "index"]);

    assert_eq!(ctx.read("app/views/line_items/index.html.haml"), "%h1 Custom Line items\n");
    assert!(ctx.read("app/views/static/line_items/index.html.haml").contains("LINE_ITEMS_INDEX_TAG"));
}

#[test]
fn version_and_help_are_available() {
    let ctx = TestContext::new();
    ctx.cli().arg("--version").assert().success().stdout(predicate::str::contains("crudgen"));
    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("destroy"));
}
