//! Dump flow - print root trees, then the contents of every collected file
//!
//! Each configured root is indexed and printed independently. Collected files
//! from all roots are dumped together afterwards, followed by the trailer.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use crate::backends::scan::{build_tree, collect_files};
use crate::core::config::{ScanConfig, SEPARATOR_WIDTH, TRAILER};
use crate::core::file_reader::read_source;
use crate::core::model::{CollectedFile, DumpError};
use crate::core::render::print_tree;

/// Counters for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpStats {
    pub roots_scanned: usize,
    pub roots_missing: usize,
    pub files_dumped: usize,
    pub files_failed: usize,
}

/// Print every file's path, its contents and a separator.
///
/// Paths are resolved against `base` for reading but printed as collected.
/// A file that cannot be read gets an error line in place of its contents and
/// the remaining files are still dumped. Only write failures are returned.
pub fn dump_files<W: Write>(
    base: &Path,
    files: &[CollectedFile],
    out: &mut W,
    stats: &mut DumpStats,
) -> io::Result<()> {
    let separator = "-".repeat(SEPARATOR_WIDTH);

    for file in files {
        writeln!(out, "{}", file)?;
        match read_source(base, file) {
            Ok(content) => {
                writeln!(out)?;
                writeln!(out, "{}", content)?;
                stats.files_dumped += 1;
            }
            Err(e) => {
                log::warn!("{}", e);
                writeln!(out, "{}", e)?;
                stats.files_failed += 1;
            }
        }
        writeln!(out, "\n{}\n", separator)?;
    }

    Ok(())
}

/// Scan every configured root under `base` and write the full report to `out`.
///
/// Root names and collected paths are printed relative to `base`.
pub fn write_report<W: Write>(
    base: &Path,
    config: &ScanConfig,
    out: &mut W,
) -> Result<DumpStats> {
    let mut stats = DumpStats::default();
    let mut collected: Vec<CollectedFile> = Vec::new();

    for root in &config.roots {
        let root_path = base.join(root);
        if !root_path.exists() {
            let notice = DumpError::missing_root(root.as_str());
            log::info!("{}", notice);
            writeln!(out, "{}", notice)?;
            stats.roots_missing += 1;
            continue;
        }

        log::info!("Scanning {}", root_path.display());
        let index = build_tree(&root_path, config);
        print_tree(&index, root, out)
            .with_context(|| format!("Failed to write tree for {}", root))?;

        let files = collect_files(&index, Path::new(root), config);
        log::debug!(
            "Collected {} files from {} ({} directories indexed)",
            files.len(),
            root,
            index.node_count()
        );
        collected.extend(files);
        stats.roots_scanned += 1;
    }

    writeln!(out, "\nFiles:")?;
    dump_files(base, &collected, out, &mut stats).context("Failed to write file dump")?;

    writeln!(out, "{}", TRAILER)?;
    out.flush()?;

    Ok(stats)
}

/// Run the dump in the current working directory, writing to stdout
pub fn run_dump(config: &ScanConfig) -> Result<()> {
    log::debug!(
        "Effective configuration: {}",
        serde_json::to_string(config).context("Failed to serialize configuration")?
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = write_report(Path::new("."), config, &mut out)?;

    log::info!(
        "Done: {} roots scanned, {} missing, {} files dumped, {} unreadable",
        stats.roots_scanned,
        stats.roots_missing,
        stats.files_dumped,
        stats.files_failed
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn report(base: &Path) -> (String, DumpStats) {
        let mut buf = Vec::new();
        let stats = write_report(base, &ScanConfig::default(), &mut buf).unwrap();
        (String::from_utf8(buf).unwrap(), stats)
    }

    #[test]
    fn test_dump_files_block_layout() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("app/page.tsx"), "<main />");

        let mut buf = Vec::new();
        let mut stats = DumpStats::default();
        dump_files(
            temp.path(),
            &["app/page.tsx".to_string()],
            &mut buf,
            &mut stats,
        )
        .unwrap();

        let expected = format!("app/page.tsx\n\n<main />\n\n{}\n\n", "-".repeat(80));
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
        assert_eq!(stats.files_dumped, 1);
    }

    #[test]
    fn test_dump_files_continues_after_failure() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("app/b.tsx"), "const b = 2;");

        let files = vec!["app/gone.tsx".to_string(), "app/b.tsx".to_string()];
        let mut buf = Vec::new();
        let mut stats = DumpStats::default();
        dump_files(temp.path(), &files, &mut buf, &mut stats).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Error reading file app/gone.tsx: "));
        assert!(output.contains("const b = 2;"));
        assert_eq!(output.matches(&"-".repeat(80)).count(), 2);
        assert_eq!(stats.files_failed, 1);
        assert_eq!(stats.files_dumped, 1);
    }

    #[test]
    fn test_dump_files_empty_writes_nothing() {
        let temp = tempdir().unwrap();
        let mut buf = Vec::new();
        dump_files(temp.path(), &[], &mut buf, &mut DumpStats::default()).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_report_prunes_excluded_dir() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("app/page.tsx"), "export default Page;");
        write_file(&temp.path().join("app/ui/button.tsx"), "export Button;");

        let (output, stats) = report(temp.path());

        assert!(output.starts_with("app/\n└── page.tsx\n"));
        assert!(!output.contains("ui/"));
        assert!(!output.contains("button.tsx"));
        assert!(output.contains("Files:\napp/page.tsx\n\nexport default Page;\n"));
        assert_eq!(stats.roots_scanned, 1);
        assert_eq!(stats.roots_missing, 4);
        assert_eq!(stats.files_dumped, 1);
    }

    #[test]
    fn test_report_missing_roots() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("types/index.ts"), "export type Id = string;");

        let (output, _) = report(temp.path());

        for root in ["app", "components", "data", "hooks"] {
            assert!(output.contains(&format!("Directory '{}' does not exist.", root)));
        }
        assert!(!output.contains("Directory 'types' does not exist."));
        assert!(output.contains("types/\n└── index.ts\n"));
        // Only .tsx files are dumped
        assert!(!output.contains("export type Id"));
    }

    #[test]
    fn test_report_all_roots_missing() {
        let temp = tempdir().unwrap();
        let (output, stats) = report(temp.path());

        let expected = format!(
            "Directory 'app' does not exist.\n\
             Directory 'components' does not exist.\n\
             Directory 'data' does not exist.\n\
             Directory 'hooks' does not exist.\n\
             Directory 'types' does not exist.\n\
             \nFiles:\n{}\n",
            TRAILER
        );
        assert_eq!(output, expected);
        assert_eq!(stats.roots_missing, 5);
        assert_eq!(stats.files_dumped, 0);
    }

    #[test]
    fn test_report_preserves_root_order() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("types/z.tsx"), "z");
        write_file(&temp.path().join("components/a.tsx"), "a");
        write_file(&temp.path().join("app/m.tsx"), "m");

        let (output, _) = report(temp.path());

        let app = output.find("app/m.tsx\n\n").unwrap();
        let components = output.find("components/a.tsx\n\n").unwrap();
        let types = output.find("types/z.tsx\n\n").unwrap();
        assert!(app < components && components < types);
        assert!(output.ends_with(&format!("{}\n", TRAILER)));
    }
}
