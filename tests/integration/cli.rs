//! End-to-end tests for the command-line driver.

use pdfmerge::cli::run_cli;
use std::fs;
use std::path::Path;

use crate::common::{Workspace, arg, page_widths};

/// Run `pdfmerge <inputs> -o <output> <flags>` and return the exit code.
fn run(inputs: &[&Path], output: &Path, flags: &[&str]) -> i32 {
    let mut argv = vec!["pdfmerge".to_string()];
    argv.extend(inputs.iter().map(|input| arg(input)));
    argv.push("-o".to_string());
    argv.push(arg(output));
    argv.extend(flags.iter().map(|flag| flag.to_string()));
    run_cli(argv)
}

#[test]
fn test_merge_files_in_order() {
    let ws = Workspace::new();
    let a = ws.pdf_with_widths("a.pdf", &[11, 12]);
    let b = ws.pdf_with_widths("b.pdf", &[21]);
    let output = ws.join("out.pdf");

    let code = run(&[&b, &a], &output, &["--no-compress", "-q"]);

    assert_eq!(code, 0);
    assert_eq!(page_widths(&output), vec![21, 11, 12]);
}

#[test]
fn test_merge_directory() {
    let ws = Workspace::new();
    ws.pdf_with_widths("in/2.pdf", &[2]);
    ws.pdf_with_widths("in/1.pdf", &[1]);
    ws.pdf_with_widths("in/sub/3.pdf", &[3]);
    let output = ws.join("merged/out.pdf");

    let code = run(&[&ws.join("in")], &output, &["-q"]);

    assert_eq!(code, 0);
    assert_eq!(page_widths(&output), vec![1, 2, 3]);
}

#[test]
fn test_output_inside_input_directory_is_not_merged_into_itself() {
    let ws = Workspace::new();
    ws.pdf_with_widths("in/a.pdf", &[7]);
    let input = ws.join("in");
    let output = ws.join("in/merged.pdf");

    assert_eq!(run(&[&input], &output, &["-q"]), 0);
    // Second run sees the previous output in the directory
    assert_eq!(run(&[&input], &output, &["-q"]), 0);

    assert_eq!(page_widths(&output), vec![7]);
}

#[test]
fn test_output_spelled_differently_is_still_excluded() {
    let ws = Workspace::new();
    ws.pdf_with_widths("in/a.pdf", &[7]);
    let input = ws.join("in");

    assert_eq!(run(&[&input], &ws.join("in/merged.pdf"), &["-q"]), 0);
    // Same file, written with a `.` component
    let dotted = input.join(".").join("merged.pdf");
    assert_eq!(run(&[&input], &dotted, &["-q"]), 0);

    assert_eq!(page_widths(&ws.join("in/merged.pdf")), vec![7]);
}

#[test]
fn test_verbose_run_succeeds_with_invalid_file() {
    let ws = Workspace::new();
    let good = ws.pdf("good.pdf", 2, 100);
    let bad = ws.file("bad.pdf", b"nope");
    let output = ws.join("out.pdf");

    let code = run(&[&good, &bad], &output, &["-v"]);

    assert_eq!(code, 0);
    assert_eq!(page_widths(&output), vec![100, 101]);
}

#[test]
fn test_exit_code_on_missing_input() {
    let ws = Workspace::new();
    let output = ws.join("out.pdf");

    let code = run(&[&ws.join("missing.pdf")], &output, &["-q"]);

    assert_eq!(code, 1);
    assert!(!output.exists());
}

#[test]
fn test_exit_code_on_empty_directory() {
    let ws = Workspace::new();
    fs::create_dir(ws.join("empty")).unwrap();

    let code = run(&[&ws.join("empty")], &ws.join("out.pdf"), &["-q"]);
    assert_eq!(code, 1);
}

#[test]
fn test_exit_code_when_nothing_is_valid() {
    let ws = Workspace::new();
    let bad = ws.file("bad.pdf", b"nope");

    let code = run(&[&bad], &ws.join("out.pdf"), &["-q"]);
    assert_eq!(code, 1);
}

#[test]
fn test_exit_code_on_output_equal_to_input() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", 1, 100);

    let code = run(&[&a], &a, &["-q"]);

    assert_eq!(code, 1);
    assert_eq!(page_widths(&a), vec![100]);
}
