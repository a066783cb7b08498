pub mod identity;
pub mod mounts;
pub mod output;
pub mod report;
pub mod size;
pub mod stats;

use std::path::Path;

use crate::metadata;
use crate::utils::Result;

/// Caller-supplied display options; never read from global state.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    pub show_mounts: bool,
    pub print_stats: bool,
    pub full_paths: bool,
}

/// Inspect one extracted checkpoint directory and render its report.
/// Metadata, classification and size failures abort before anything is
/// printed; a statistics failure surfaces after the base table is out.
pub fn run_inspect(directory: &str, opts: &DisplayOptions) -> Result<()> {
    let dir = Path::new(directory);

    let config = metadata::read_config_dump(dir)?;
    let spec = metadata::read_spec_dump(dir)?;
    let ci = identity::classify(dir, &config, &spec)?;
    let metrics = size::collect(dir)?;

    println!("\nDisplaying container checkpoint data from {}\n", directory);

    let (header, row) = report::assemble(&ci, &config, &metrics);
    output::render_table(&header, &[row]);

    if opts.show_mounts {
        let mount_header: Vec<String> = ["Destination", "Type", "Source"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows = mounts::overview(&spec.mounts, opts.full_paths);

        println!("\nOverview of Mounts");
        output::render_table(&mount_header, &rows);
    }

    if opts.print_stats {
        let row = stats::dump_statistics_row(dir)?;

        println!("\nCRIU dump statistics");
        output::render_table(&stats::header(), &[row]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::CpviewError;
    use std::fs;
    use std::path::Path;

    fn podman_fixture(dir: &Path) {
        fs::write(
            dir.join(metadata::CONFIG_DUMP_FILE),
            r#"{
                "id": "0123456789abcdef",
                "name": "web",
                "rootfsImageName": "docker.io/library/nginx:latest",
                "runtime": "crun",
                "createdTime": "2023-01-28T00:10:45Z"
            }"#,
        )
        .unwrap();
        fs::write(
            dir.join(metadata::SPEC_DUMP_FILE),
            r#"{
                "annotations": {"io.container.manager": "libpod"},
                "mounts": [
                    {"destination": "/proc", "type": "proc", "source": "proc"},
                    {"destination": "/etc/hosts", "type": "bind", "source": "/a/b/c/hosts"}
                ]
            }"#,
        )
        .unwrap();
        fs::create_dir(dir.join(metadata::CHECKPOINT_DIRECTORY)).unwrap();
        fs::write(
            dir.join(metadata::CHECKPOINT_DIRECTORY).join("pages-1.img"),
            vec![0u8; 4096],
        )
        .unwrap();
    }

    #[test]
    fn podman_fixture_inspects_cleanly_without_optional_sections() {
        let tmp = tempfile::tempdir().unwrap();
        podman_fixture(tmp.path());

        let opts = DisplayOptions::default();
        run_inspect(tmp.path().to_str().unwrap(), &opts).unwrap();
    }

    #[test]
    fn mounts_section_does_not_require_stats_dump() {
        let tmp = tempfile::tempdir().unwrap();
        podman_fixture(tmp.path());

        let opts = DisplayOptions { show_mounts: true, ..Default::default() };
        run_inspect(tmp.path().to_str().unwrap(), &opts).unwrap();
    }

    #[test]
    fn print_stats_with_stats_dump_present() {
        let tmp = tempfile::tempdir().unwrap();
        podman_fixture(tmp.path());
        crate::criu::stats::tests::write_stats_dump(
            tmp.path(),
            crate::criu::stats::tests::sample_entry(),
        );

        let opts = DisplayOptions { print_stats: true, ..Default::default() };
        run_inspect(tmp.path().to_str().unwrap(), &opts).unwrap();
    }

    #[test]
    fn stats_failure_only_poisons_the_stats_section() {
        let tmp = tempfile::tempdir().unwrap();
        podman_fixture(tmp.path());

        let opts = DisplayOptions { print_stats: true, ..Default::default() };
        let err = run_inspect(tmp.path().to_str().unwrap(), &opts).unwrap_err();
        assert!(matches!(err, CpviewError::Statistics(_)));
    }

    #[test]
    fn missing_metadata_aborts_the_whole_report() {
        let tmp = tempfile::tempdir().unwrap();

        let err = run_inspect(tmp.path().to_str().unwrap(), &DisplayOptions::default()).unwrap_err();
        assert!(matches!(err, CpviewError::MetadataRead(_)));
    }

    #[test]
    fn missing_checkpoint_subtree_is_a_traversal_error() {
        let tmp = tempfile::tempdir().unwrap();
        podman_fixture(tmp.path());
        fs::remove_dir_all(tmp.path().join(metadata::CHECKPOINT_DIRECTORY)).unwrap();

        let err = run_inspect(tmp.path().to_str().unwrap(), &DisplayOptions::default()).unwrap_err();
        assert!(matches!(err, CpviewError::Traversal(_)));
    }
}
