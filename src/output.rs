//! CLI output formatting.
//!
//! Each message has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.
//!
//! ## Index
//!
//! ```text
//! Success! Generated gallery.json with 3 categories.
//! ```
//!
//! ## Missing image root
//!
//! ```text
//! Error: Directory 'images/MASTER' not found.
//! Please create the folder structure: images/MASTER/[Category Name]/
//! ```
//!
//! ## Check
//!
//! ```text
//! Categories
//! 001 Nature (2 images)
//!     images/MASTER/Nature/a.jpg
//!     images/MASTER/Nature/b.png
//! ```

use crate::index::GalleryIndex;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

pub fn format_success(output_file: &Path, category_count: usize) -> Vec<String> {
    vec![format!(
        "Success! Generated {} with {} categories.",
        output_file.display(),
        category_count
    )]
}

pub fn print_success(output_file: &Path, category_count: usize) {
    for line in format_success(output_file, category_count) {
        println!("{}", line);
    }
}

pub fn format_missing_root(image_root: &Path) -> Vec<String> {
    let root = image_root.display();
    vec![
        format!("Error: Directory '{root}' not found."),
        format!("Please create the folder structure: {root}/[Category Name]/"),
    ]
}

pub fn print_missing_root(image_root: &Path) {
    for line in format_missing_root(image_root) {
        println!("{}", line);
    }
}

/// List every category with its images, in index order.
pub fn format_check_output(index: &GalleryIndex) -> Vec<String> {
    if index.is_empty() {
        return vec!["No categories found".to_string()];
    }

    let mut lines = vec!["Categories".to_string()];
    for (pos, (name, images)) in index.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(pos + 1),
            name,
            plural(images.len(), "image", "images")
        ));
        for path in images {
            lines.push(format!("    {path}"));
        }
    }
    lines
}

pub fn print_check_output(index: &GalleryIndex) {
    for line in format_check_output(index) {
        println!("{}", line);
    }
}
