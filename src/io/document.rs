//! [`PdfDocument`] for `lopdf::Document`: page counting and page-tree splicing.

use lopdf::{Document, Object, ObjectId};
use std::path::Path;

use crate::error::Result;
use crate::io::{PdfDocument, SaveOptions, writer};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Upper bound on page-tree depth; also stops `Parent` cycles.
const MAX_TREE_DEPTH: usize = 64;

impl PdfDocument for Document {
    fn page_count(&self) -> usize {
        self.get_pages().len()
    }

    fn insert_all_pages_from(&mut self, mut source: Document) -> Result<usize> {
        // Avoid object id collisions by renumbering the incoming document
        source.renumber_objects_with(self.max_id + 1);

        let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();

        // The source page tree is dropped below, so each page must carry what it inherited
        for &page_id in &page_ids {
            let inherited = inherited_attributes(&source, page_id)?;
            let page = source.get_object_mut(page_id)?.as_dict_mut()?;
            for (key, value) in inherited {
                page.set(key, value);
            }
        }

        let target_pages = pages_root(self)?;

        source.objects.retain(|_, object| !is_tree_node(object));
        for &page_id in &page_ids {
            if let Some(Object::Dictionary(page)) = source.objects.get_mut(&page_id) {
                page.set("Parent", Object::Reference(target_pages));
            }
        }

        self.max_id = self.max_id.max(source.max_id);
        self.objects.extend(source.objects);

        append_to_page_tree(self, target_pages, &page_ids)?;

        Ok(page_ids.len())
    }

    fn save_to_path(&mut self, path: &Path, options: &SaveOptions) -> Result<()> {
        writer::save_atomic(self, path, options)
    }
}

/// Object id of the document's root `Pages` node.
fn pages_root(doc: &Document) -> Result<ObjectId> {
    Ok(doc.catalog()?.get(b"Pages")?.as_reference()?)
}

/// Inheritable attributes a page lacks, resolved from the closest ancestor defining each.
fn inherited_attributes(
    doc: &Document,
    page_id: ObjectId,
) -> Result<Vec<(&'static [u8], Object)>> {
    let page = doc.get_object(page_id)?.as_dict()?;

    let mut missing: Vec<&'static [u8]> = INHERITABLE
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();
    let mut found = Vec::new();

    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;

    while let Some(node_id) = parent {
        if missing.is_empty() || depth >= MAX_TREE_DEPTH {
            break;
        }

        let Ok(node) = doc.get_object(node_id).and_then(Object::as_dict) else {
            break;
        };

        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                found.push((*key, value.clone()));
                false
            }
            Err(_) => true,
        });

        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        depth += 1;
    }

    Ok(found)
}

/// Catalog and intermediate page-tree nodes of an incoming document.
fn is_tree_node(object: &Object) -> bool {
    match object {
        Object::Dictionary(dict) => matches!(
            dict.get(b"Type").and_then(Object::as_name),
            Ok(b"Catalog" | b"Pages")
        ),
        _ => false,
    }
}

/// Extend the `Kids` array of `pages_id` and patch its `Count`.
fn append_to_page_tree(
    doc: &mut Document,
    pages_id: ObjectId,
    page_ids: &[ObjectId],
) -> Result<()> {
    let pages_dict = doc.get_object_mut(pages_id)?.as_dict_mut()?;

    let kids = pages_dict.get_mut(b"Kids")?.as_array_mut()?;
    kids.extend(page_ids.iter().map(|&id| Object::Reference(id)));

    let count = pages_dict.get(b"Count")?.as_i64()?;
    pages_dict.set("Count", Object::Integer(count + page_ids.len() as i64));

    Ok(())
}
