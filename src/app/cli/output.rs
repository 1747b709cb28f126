//! Rails-generator style progress lines.

use crate::app::commands::FileChange;
use crate::app::commands::destroy::DestroyOutcome;
use crate::app::commands::generate::{GenerateOutcome, LintReport};

fn status_line(status: &str, subject: &str) -> String {
    format!("{:>12}  {}", status, subject)
}

fn print_files(files: &[FileChange]) {
    for file in files {
        println!("{}", status_line(file.status.label(), &file.path));
    }
}

pub fn print_generate(outcome: &GenerateOutcome) {
    print_files(&outcome.files);

    if outcome.routes.created {
        println!("{}", status_line("create", &outcome.routes.path));
    }
    for directive in &outcome.routes.inserted {
        let first_line = directive.lines().next().unwrap_or_default();
        println!("{}", status_line("route", first_line));
    }
    for entry in &outcome.constants.appended {
        println!("{}", status_line("append", &format!("{} {}", outcome.constants.path, entry.name)));
    }

    match &outcome.lint {
        LintReport::Skipped => {}
        LintReport::Passed => println!("✅ Lint passed"),
        LintReport::Failed(details) => {
            println!("⚠️  Lint failed; generated files were kept");
            for line in details.lines() {
                println!("  {}", line);
            }
        }
    }

    if outcome.dry_run {
        println!("✅ Dry run for {}: nothing was written", outcome.resource.plural);
    } else {
        println!("✅ Generated {}", outcome.resource.plural);
    }
}

pub fn print_destroy(outcome: &DestroyOutcome) {
    print_files(&outcome.files);

    for directive in &outcome.routes_removed {
        let first_line = directive.lines().next().unwrap_or_default();
        println!("{}", status_line("route", &format!("{} (removed)", first_line)));
    }

    if outcome.dry_run {
        println!("✅ Dry run for {}: nothing was removed", outcome.resource.plural);
    } else {
        println!("✅ Destroyed {}", outcome.resource.plural);
    }
}
