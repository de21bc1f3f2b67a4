//! Integration tests for the merge orchestrator.

use pdfmerge::merge::NoProgress;
use pdfmerge::utils::format_size;
use pdfmerge::{MergeOptions, PdfMergeError, PdfMerger, merge_pdfs};
use rstest::rstest;
use std::fs;

use crate::common::{Workspace, page_count, page_widths};

#[rstest]
#[case(&[1])]
#[case(&[2, 3, 5])]
#[case(&[4, 1, 1, 7])]
fn test_total_pages_equals_sum_of_valid_files(#[case] pages: &[usize]) {
    let ws = Workspace::new();
    let mut merger = PdfMerger::new();

    for (idx, &count) in pages.iter().enumerate() {
        merger.add_file(ws.pdf(&format!("{idx}.pdf"), count, 100));
    }
    merger.add_file(ws.file("broken.pdf", b"garbage"));

    let expected: usize = pages.iter().sum();
    assert_eq!(merger.total_pages(), expected);
    assert_eq!(
        merger.records().iter().map(|r| r.page_count()).sum::<usize>(),
        expected
    );
    assert_eq!(merger.file_count(), pages.len());
}

#[test]
fn test_nonexistent_file_leaves_state_unchanged() {
    let ws = Workspace::new();
    let mut merger = PdfMerger::new();
    merger.add_file(ws.pdf("a.pdf", 3, 100));

    let records_before = merger.records().to_vec();
    let record = merger.add_file(ws.join("missing.pdf"));

    assert!(!record.is_valid());
    assert!(record.error().is_some());
    assert_eq!(merger.records(), records_before.as_slice());
    assert_eq!(merger.total_pages(), 3);
}

#[test]
fn test_empty_merge_writes_nothing() {
    let ws = Workspace::new();
    let output = ws.join("out/merged.pdf");

    let err = PdfMerger::new()
        .merge(&output, &mut NoProgress, &MergeOptions::default())
        .unwrap_err();

    assert!(matches!(err, PdfMergeError::NoFilesToMerge));
    assert!(!output.exists());
    assert!(!ws.join("out").exists());
}

#[test]
fn test_uncompressed_merge_preserves_count_and_order() {
    let ws = Workspace::new();
    let mut merger = PdfMerger::new();
    merger.add_file(ws.pdf_with_widths("one.pdf", &[201, 202]));
    merger.add_file(ws.pdf_with_widths("two.pdf", &[301]));
    merger.add_file(ws.pdf_with_widths("three.pdf", &[401, 402, 403]));

    let output = ws.join("merged.pdf");
    merger
        .merge(&output, &mut NoProgress, &MergeOptions { compress: false })
        .unwrap();

    assert_eq!(page_count(&output), merger.total_pages());
    assert_eq!(page_widths(&output), vec![201, 202, 301, 401, 402, 403]);
}

#[test]
fn test_compressed_merge_preserves_order() {
    let ws = Workspace::new();
    let mut merger = PdfMerger::new();
    merger.add_file(ws.pdf_with_widths("b.pdf", &[20, 21]));
    merger.add_file(ws.pdf_with_widths("a.pdf", &[10]));

    let output = ws.join("merged.pdf");
    merger
        .merge(&output, &mut NoProgress, &MergeOptions::default())
        .unwrap();

    assert_eq!(page_widths(&output), vec![20, 21, 10]);
}

#[test]
fn test_merging_twice_is_idempotent() {
    let ws = Workspace::new();
    let mut merger = PdfMerger::new();
    merger.add_file(ws.pdf("a.pdf", 2, 100));
    merger.add_file(ws.pdf("b.pdf", 3, 200));

    let first = ws.join("first.pdf");
    let second = ws.join("second.pdf");
    let options = MergeOptions { compress: false };
    merger.merge(&first, &mut NoProgress, &options).unwrap();
    merger.merge(&second, &mut NoProgress, &options).unwrap();

    assert_eq!(page_widths(&first), page_widths(&second));
    assert_eq!(page_count(&first), 5);
}

#[test]
fn test_progress_scenario() {
    let ws = Workspace::new();
    let mut merger = PdfMerger::new();
    merger.add_files([
        ws.pdf("a.pdf", 2, 100),
        ws.pdf("b.pdf", 3, 200),
        ws.pdf("c.pdf", 5, 300),
    ]);

    let mut calls: Vec<(usize, usize, String)> = Vec::new();
    let mut progress = |current: usize, total: usize, message: &str| {
        calls.push((current, total, message.to_string()));
    };
    merger
        .merge(ws.join("out.pdf"), &mut progress, &MergeOptions::default())
        .unwrap();

    let counts: Vec<(usize, usize)> = calls.iter().map(|(c, t, _)| (*c, *t)).collect();
    assert_eq!(counts, vec![(0, 10), (2, 10), (5, 10), (10, 10), (10, 10)]);
    assert!(calls[0].2.contains("a.pdf"));
    assert_eq!(calls[3].2, "saving");
    assert_eq!(calls[4].2, "done");
}

#[test]
fn test_corrupted_file_is_excluded_from_output() {
    let ws = Workspace::new();
    let mut merger = PdfMerger::new();
    let records = merger.add_files([
        ws.pdf_with_widths("good.pdf", &[111, 112]),
        ws.file("corrupt.pdf", b"not a pdf at all"),
        ws.pdf_with_widths("also_good.pdf", &[121]),
    ]);

    assert!(records[0].is_valid());
    assert!(!records[1].is_valid());
    assert!(records[2].is_valid());

    let output = ws.join("out.pdf");
    let report = merger
        .merge(&output, &mut NoProgress, &MergeOptions { compress: false })
        .unwrap();

    assert_eq!(report.files_merged, 2);
    assert_eq!(page_widths(&output), vec![111, 112, 121]);
}

#[test]
fn test_file_deleted_between_validation_and_merge() {
    let ws = Workspace::new();
    let mut merger = PdfMerger::new();
    let doomed = ws.pdf("doomed.pdf", 2, 100);
    merger.add_files([doomed.clone(), ws.pdf("kept.pdf", 1, 500)]);
    fs::remove_file(&doomed).unwrap();

    let mut calls = Vec::new();
    let mut progress = |current: usize, total: usize, _: &str| calls.push((current, total));

    let output = ws.join("out.pdf");
    let report = merger
        .merge(&output, &mut progress, &MergeOptions::default())
        .unwrap();

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].path, doomed);
    assert_eq!(page_widths(&output), vec![500]);
    // The skipped file does not advance the running page count
    assert_eq!(calls, vec![(0, 3), (0, 3), (3, 3), (3, 3)]);
}

#[test]
fn test_summary_reports_totals() {
    let ws = Workspace::new();
    let mut merger = PdfMerger::new();
    assert_eq!(merger.summary(), "No files");

    merger.add_files([ws.pdf("a.pdf", 2, 100), ws.pdf("b.pdf", 1, 200)]);
    let size = format_size(merger.total_size());

    assert_eq!(
        merger.summary(),
        format!("Files: 2/2\nTotal pages: 3\nTotal size: {size}")
    );

    merger.clear();
    assert_eq!(merger.summary(), "No files");
    assert_eq!(merger.total_pages(), 0);
}

#[test]
fn test_merge_pdfs_convenience() {
    let ws = Workspace::new();
    let output = ws.join("nested/dir/out.pdf");

    let report = merge_pdfs(
        [
            ws.pdf("a.pdf", 1, 100),
            ws.join("missing.pdf"),
            ws.pdf("b.pdf", 2, 200),
        ],
        &output,
    )
    .unwrap();

    assert_eq!(report.files_merged, 2);
    assert_eq!(report.pages_written, 3);
    assert_eq!(report.output_size, fs::metadata(&output).unwrap().len());
}

#[rstest]
#[case(0, "0B")]
#[case(500, "500B")]
#[case(2048, "2.00KB")]
#[case(5 * 1024 * 1024, "5.00MB")]
fn test_format_size(#[case] bytes: u64, #[case] expected: &str) {
    assert_eq!(format_size(bytes), expected);
}
