//! Scaffold tables compiled into the binary.
//!
//! File payloads live under `templates/` in this crate and are embedded with
//! `include_str!`, so what is on disk there is exactly what gets written.
//! The table order below is the order outcomes are reported in.

use quire_core::domain::{DomainError, ScaffoldTable};

/// Directory created when no base directory is configured.
pub const DEFAULT_BASE_DIR: &str = "tise-itb-dissertation-quarto";

/// Name of the Quarto extension (and of the table itself).
pub const EXTENSION_NAME: &str = "tise-itb-dissertation";

macro_rules! payload {
    ($rel:literal) => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/tise-itb-dissertation/",
            $rel
        ))
    };
}

/// The TISE-ITB Quarto dissertation scaffold.
pub fn dissertation() -> Result<ScaffoldTable, DomainError> {
    ScaffoldTable::builder(EXTENSION_NAME)
        .file("_quarto.yml", payload!("_quarto.yml"))
        .file("dissertation.qmd", payload!("dissertation.qmd"))
        .file(
            "chapters/01-pendahuluan.qmd",
            payload!("chapters/01-pendahuluan.qmd"),
        )
        .file(
            "chapters/02-tinjauan-pustaka.qmd",
            payload!("chapters/02-tinjauan-pustaka.qmd"),
        )
        .file(
            "chapters/03-metodologi.qmd",
            payload!("chapters/03-metodologi.qmd"),
        )
        .file("chapters/04-hasil.qmd", payload!("chapters/04-hasil.qmd"))
        .file(
            "chapters/05-kesimpulan.qmd",
            payload!("chapters/05-kesimpulan.qmd"),
        )
        .file(
            "_extensions/tise-itb-dissertation/_extension.yml",
            payload!("_extensions/tise-itb-dissertation/_extension.yml"),
        )
        .file(
            "_extensions/tise-itb-dissertation/tise-itb-header.tex",
            payload!("_extensions/tise-itb-dissertation/tise-itb-header.tex"),
        )
        .file(
            "_extensions/tise-itb-dissertation/tise-itb-frontmatter.tex",
            payload!("_extensions/tise-itb-dissertation/tise-itb-frontmatter.tex"),
        )
        .file("tise-itb.cls", payload!("tise-itb.cls"))
        .file("README.md", payload!("README.md"))
        .file("LICENSE", payload!("LICENSE"))
        .build()
}
