//! Implementation of the `mako init` command.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    commands::ColorChoice,
    error::{Error, Result},
    palette, template,
};

/// Execute the init command.
pub async fn run(
    color: ColorChoice,
    file: PathBuf,
    content_type: &str,
    entity: &str,
    lang: &str,
) -> Result<()> {
    let use_color = color.enabled();
    scaffold(&file, content_type, entity, lang)?;

    println!(
        "{} Created {}",
        palette::fmt_pass("✓", use_color),
        file.display()
    );
    println!("  Type: {}", palette::fmt_accent(content_type, use_color));
    println!("  Entity: {}", palette::fmt_entity(entity, use_color));
    println!("  Language: {lang}");
    println!();
    println!(
        "  {}",
        palette::fmt_detail(
            &format!(
                "Edit the file and run mako validate {} to check it.",
                file.display()
            ),
            use_color
        )
    );
    Ok(())
}

/// Render the template and write it out, refusing to overwrite.
fn scaffold(file: &Path, content_type: &str, entity: &str, lang: &str) -> Result<()> {
    if file.exists() {
        return Err(Error::FileExists {
            path: file.to_path_buf(),
        });
    }

    if let Some(parent) = file.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|error| Error::DirCreate {
            path: parent.to_path_buf(),
            source: error,
        })?;
    }

    let rendered = template::render(content_type, entity, lang)?;
    fs::write(file, rendered).map_err(|error| Error::FileWrite {
        path: file.to_path_buf(),
        source: error,
    })?;

    Ok(())
}
