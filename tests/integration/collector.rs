//! Integration tests for input collection.

use pdfmerge::PdfMergeError;
use pdfmerge::walker::{Depth, collect_dropped, collect_inputs, find_pdfs};

use crate::common::{Workspace, arg};

#[test]
fn test_directory_expansion_sorted_by_path() {
    let ws = Workspace::new();
    ws.pdf("docs/b.pdf", 1, 100);
    ws.pdf("docs/A.pdf", 1, 100);
    ws.pdf("docs/a.pdf", 1, 100);
    ws.pdf("docs/nested/z.PDF", 1, 100);
    ws.file("docs/readme.md", b"# docs");

    let collection = collect_inputs([arg(&ws.join("docs"))]).unwrap();

    // Case-sensitive: uppercase sorts first
    assert_eq!(
        collection.files,
        vec![
            ws.join("docs/A.pdf"),
            ws.join("docs/a.pdf"),
            ws.join("docs/b.pdf"),
            ws.join("docs/nested/z.PDF"),
        ]
    );
}

#[test]
fn test_mixed_inputs_keep_argument_order() {
    let ws = Workspace::new();
    let cover = ws.pdf("cover.pdf", 1, 100);
    ws.pdf("chapters/02.pdf", 1, 100);
    ws.pdf("chapters/01.pdf", 1, 100);
    let back = ws.pdf("back.pdf", 1, 100);

    let collection =
        collect_inputs([arg(&cover), arg(&ws.join("chapters")), arg(&back)]).unwrap();

    assert_eq!(
        collection.files,
        vec![
            cover,
            ws.join("chapters/01.pdf"),
            ws.join("chapters/02.pdf"),
            back,
        ]
    );
}

#[test]
fn test_missing_input_aborts_collection() {
    let ws = Workspace::new();
    let good = ws.pdf("good.pdf", 1, 100);

    let err = collect_inputs([arg(&good), arg(&ws.join("nope.pdf"))]).unwrap_err();
    assert!(matches!(err, PdfMergeError::FileNotFound { .. }));
}

#[test]
fn test_glob_inputs() {
    let ws = Workspace::new();
    ws.pdf("part-2.pdf", 1, 100);
    ws.pdf("part-1.pdf", 1, 100);
    ws.file("part-3.txt", b"text");

    let pattern = arg(&ws.join("part-*"));
    let collection = collect_inputs([pattern]).unwrap();

    assert_eq!(
        collection.files,
        vec![ws.join("part-1.pdf"), ws.join("part-2.pdf")]
    );
    assert_eq!(collection.skipped, vec![ws.join("part-3.txt")]);
}

#[test]
fn test_recursive_and_shallow_listing() {
    let ws = Workspace::new();
    ws.pdf("top.pdf", 1, 100);
    ws.pdf("deep/er/bottom.pdf", 1, 100);

    let (recursive, _) = find_pdfs(ws.path(), Depth::Recursive);
    let (shallow, _) = find_pdfs(ws.path(), Depth::Shallow);

    assert_eq!(recursive.len(), 2);
    assert_eq!(shallow, vec![ws.join("top.pdf")]);
}

#[test]
fn test_dropped_payload() {
    let ws = Workspace::new();
    let existing = ws.pdf("already.pdf", 1, 100);
    let spaced = ws.pdf("with space.pdf", 1, 100);
    let txt = ws.file("notes.txt", b"notes");
    ws.pdf("folder/in_folder.pdf", 1, 100);
    ws.pdf("folder/sub/ignored.pdf", 1, 100);

    let payload = vec![
        arg(&existing),
        format!("file://{}", arg(&spaced).replace(' ', "%20")),
        arg(&txt),
        arg(&ws.join("folder")),
        arg(&ws.join("gone.pdf")),
    ];
    let collection = collect_dropped(&payload, &[existing]);

    assert_eq!(
        collection.files,
        vec![spaced, ws.join("folder/in_folder.pdf")]
    );
    assert_eq!(collection.skipped, vec![txt, ws.join("gone.pdf")]);
}
