//! Textual rendering of a collection's relation structure.

use termtree::Tree;

use crate::domain::Collection;

/// Render the collection as a [`Tree`]: one branch per element in insertion
/// order, with the element's outgoing relations as leaves.
///
/// The returned tree renders as an ASCII hierarchy via its `Display` impl.
pub fn relation_tree(collection: &Collection) -> Tree<String> {
    let root = format!(
        "collection ({} elements, total value {})",
        collection.size(),
        collection.total_value()
    );

    let leaves: Vec<Tree<String>> = collection
        .elements()
        .iter()
        .map(|element| {
            let related: Vec<Tree<String>> = element
                .related_ids()
                .iter()
                .map(|id| Tree::new(format!("-> {}", id)))
                .collect();

            Tree::new(format!("{} ({})", element.id(), element.value())).with_leaves(related)
        })
        .collect();

    Tree::new(root).with_leaves(leaves)
}
