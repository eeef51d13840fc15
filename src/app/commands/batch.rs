//! The batch command: one verifier invocation per matching source file.

use std::io::Write;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::layout::{output_dir, target_path};
use crate::domain::{
    AppError, BatchReport, FailurePolicy, FileOutcome, Group, SourceFile, VerifierInvocation,
};
use crate::ports::{SourceTree, Verifier};

/// Execute the batch command over `root`.
///
/// Writes one `<group path>:` progress line per group to `progress`. The
/// root is checked before anything is written, so an invalid root produces
/// no progress output.
///
/// Under the abort policy the report gathered so far, including the failed
/// file, travels inside `AppError::VerifierFailed`.
pub fn execute<S, V>(
    ctx: &AppContext<S, V>,
    root: &Path,
    progress: &mut impl Write,
) -> Result<BatchReport, AppError>
where
    S: SourceTree,
    V: Verifier,
{
    let tree = ctx.source_tree();
    let config = ctx.config();
    tree.check_root(root)?;

    let mut report = BatchReport::default();

    for group_path in tree.list_groups(root)? {
        let Some(group) = Group::new(group_path) else {
            continue;
        };

        writeln!(progress, "{}:", group.path.display())?;
        report.record_group();

        let sources: Vec<SourceFile> = tree
            .list_files(&group.path)?
            .into_iter()
            .filter_map(|path| SourceFile::matching(path, &config.layout.source_extension))
            .collect();

        tracing::info!(
            group = %group.name.to_string_lossy(),
            sources = sources.len(),
            "processing group"
        );

        if sources.is_empty() {
            continue;
        }

        tree.ensure_dir(&output_dir(&config.layout, &group.name))?;

        for source in sources {
            let target = target_path(&config.layout, &group.name, source.stem());
            let invocation = VerifierInvocation::new(&config.verifier, &source.path, &target);

            tracing::debug!(command = %invocation, "running verifier");
            let status = ctx.verifier().run(&invocation);

            let failed = !status.is_success();
            let details = status.describe();
            if failed {
                tracing::warn!(source = %source.path.display(), "verifier {}", details);
            }

            report.record(FileOutcome {
                group: group.name.clone(),
                source: source.path.clone(),
                target,
                status,
            });

            if failed && config.run.on_error == FailurePolicy::Abort {
                return Err(AppError::VerifierFailed {
                    source_file: source.path,
                    details,
                    report: Box::new(report),
                });
            }
        }
    }

    tracing::info!(
        processed = report.processed,
        succeeded = report.succeeded,
        failed = report.failed,
        "batch finished"
    );
    Ok(report)
}
