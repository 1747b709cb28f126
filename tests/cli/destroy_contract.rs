use crate::harness::TestContext;
use crate::harness::test_context::ROUTES_SKELETON;
use predicates::prelude::*;

#[test]
fn destroy_reverses_generate_but_keeps_constants() {
    let ctx = TestContext::rails_app();
    ctx.generate(&["products", "index", "show"]);
    let tags = ctx.read("config/initializers/generated_tags.rb");

    ctx.cli()
        .args(["destroy", "products", "index", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("      remove  app/controllers/products_controller.rb"))
        .stdout(predicate::str::contains("✅ Destroyed products"));

    assert!(!ctx.exists("app/controllers/products_controller.rb"));
    assert!(!ctx.exists("app/views/static/products/show.html.haml"));
    assert_eq!(ctx.read("config/routes.rb"), ROUTES_SKELETON);
    assert_eq!(ctx.read("config/initializers/generated_tags.rb"), tags);
}

#[test]
fn destroy_alias_reports_missing_files() {
    let ctx = TestContext::rails_app();
    ctx.write_lint_config(None);

    ctx.cli()
        .args(["d", "products", "index"])
        .assert()
        .success()
        .stdout(predicate::str::contains("     missing  app/views/products/index.html.haml"));

    assert_eq!(ctx.read("config/routes.rb"), ROUTES_SKELETON);
}

#[test]
fn destroy_dry_run_removes_nothing() {
    let ctx = TestContext::rails_app();
    ctx.generate(&["products", "index"]);
    let routes = ctx.read("config/routes.rb");

    ctx.cli()
        .args(["destroy", "products", "index", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing was removed"));

    assert!(ctx.exists("app/controllers/products_controller.rb"));
    assert_eq!(ctx.read("config/routes.rb"), routes);
}
