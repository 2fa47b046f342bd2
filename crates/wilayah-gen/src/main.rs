//! wilayah-gen — renders the static regions API.
//!
//! Reads the four tables under `data/` and writes every listing under
//! `static/api/`, relative to the working directory. Any error aborts the
//! run with a nonzero exit status and a message on stderr.
use anyhow::Context;
use wilayah_core::{pipeline, Layout};
use wilayah_gen::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    let layout = Layout::default();
    let report = pipeline::run(&layout).with_context(|| {
        format!(
            "failed to generate JSON listings from {} into {}",
            layout.data_dir.display(),
            layout.output_dir.display()
        )
    })?;

    tracing::debug!(documents = report.documents, "generation finished");
    println!("All JSON files generated successfully!");
    Ok(())
}
