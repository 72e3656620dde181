//! CLI inspection entry point.
//!
//! # Responsibility
//! - Print the core version when run without arguments.
//! - Print slugs, URLs and template candidates for a taxonomy JSON file.
//!
//! Logging is enabled when `TOPICSITE_LOG_DIR` is set; `TOPICSITE_LOG_LEVEL`
//! overrides the build-mode default level.

use std::process::ExitCode;
use topicsite_core::{
    core_version, default_log_level, init_logging, CategoryIndexView, TaxonomyDocument,
    TopicIndexView,
};

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("TOPICSITE_LOG_DIR") {
        let level = std::env::var("TOPICSITE_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let Some(path) = std::env::args().nth(1) else {
        println!("topicsite_core version={}", core_version());
        return ExitCode::SUCCESS;
    };

    match print_taxonomy(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{path}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_taxonomy(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let taxonomy = TaxonomyDocument::from_json(&text)?.build()?;

    for topic in &taxonomy.topics {
        let view = TopicIndexView::new(topic);
        println!(
            "topic slug={} url={} templates={}",
            topic.slug(),
            view.get_url(),
            view.template_candidates().join(",")
        );
        for category in taxonomy.categories_of(topic) {
            let view = CategoryIndexView::new(category);
            println!(
                "  category slug={} url={} templates={}",
                category.slug(),
                view.get_url(),
                view.template_candidates().join(",")
            );
        }
    }
    Ok(())
}
