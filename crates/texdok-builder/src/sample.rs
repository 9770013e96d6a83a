//! Demonstration document exercising every component kind

use std::path::Path;

use crate::document::Document;
use crate::error::Result;
use crate::leaf::{Image, ListItem, MathFormula, Paragraph};
use crate::list::List;
use crate::section::Section;
use crate::table::Table;

/// Build the sample document.
///
/// `image_dir` is registered with `\graphicspath` and used to locate
/// `duck.png`.
pub fn example_document(image_dir: &Path) -> Result<Document> {
    let image_dir = image_dir.display().to_string();

    let mut doc = Document::new();
    doc.add_packages(["graphicx"]);
    doc.add_custom_preamble("graphicspath", image_dir.as_str());

    let mut section = Section::new("Introduction");

    let mut itemized = List::new();
    itemized.add_item(ListItem::new("First item"))?;
    itemized.add_item(ListItem::new("Second item"))?;

    let mut table = Table::with_align(["Header 1", "Header 2"], "cc");
    table.add_row(["Cell 1", "Cell 2"])?;
    table.add_row(["Cell 3", "Cell 4"])?;

    let image = Image::new(Path::new(&image_dir).join("duck.png").display().to_string())
        .with_caption("Example Image")
        .with_label("img:example");

    section.add_content(Paragraph::new(
        "This is the first paragraph of the introduction.",
    ));
    section.add_content(itemized);
    section.add_content(table);
    section.add_content(MathFormula::new("E = mc^2"));
    section.add_content(image);

    doc.add_component(section);
    Ok(doc)
}
