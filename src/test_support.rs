//! Generated PDF fixtures for unit tests.
//!
//! Every page gets its own MediaBox width so page order survives a merge and can be
//! checked afterwards.

use lopdf::{Document, Object, Stream, dictionary};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Base width used by [`write_test_pdf`]; page `n` is `BASE_WIDTH + n` points wide.
const BASE_WIDTH: i64 = 500;

/// Build an in-memory document with one page per entry of `widths`.
pub fn build_test_document(widths: &[i64]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let resources_id = doc.add_object(dictionary! {
        "ProcSet" => Object::Array(vec![
            Object::Name(b"PDF".to_vec()),
            Object::Name(b"Text".to_vec()),
        ]),
    });

    let mut kids = Vec::with_capacity(widths.len());
    for &width in widths {
        let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(width),
                Object::Integer(842),
            ]),
            "Resources" => Object::Reference(resources_id),
            "Contents" => Object::Reference(content_id),
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => Object::Array(kids),
            "Count" => Object::Integer(widths.len() as i64),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc
}

/// Write a PDF whose pages have the given MediaBox widths.
pub fn write_test_pdf_with_widths(path: &Path, widths: &[i64]) {
    let mut doc = build_test_document(widths);
    let mut file = File::create(path).unwrap();
    doc.save_to(&mut file).unwrap();
    file.flush().unwrap();
}

/// Write a PDF with `pages` pages.
pub fn write_test_pdf(path: &Path, pages: usize) {
    let widths: Vec<i64> = (1..=pages as i64).map(|n| BASE_WIDTH + n).collect();
    write_test_pdf_with_widths(path, &widths);
}

/// MediaBox widths of every page, in page order.
pub fn page_widths(doc: &Document) -> Vec<i64> {
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[2].as_i64().unwrap()
        })
        .collect()
}
