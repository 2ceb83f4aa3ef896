//! Locating the TrueType font family the layout engine renders with.
//!
//! `genpdf` cannot lay out a single line without a font family made of a
//! regular, bold, italic and bold-italic face, so a missing family is the one
//! way the rendering capability can be absent.  Directories are searched in
//! this order:
//!
//! 1. `SAMPLE_PDF_FONTS_DIR` (family taken from `SAMPLE_PDF_FONT_FAMILY` when set)
//! 2. `assets/fonts` next to the running executable
//! 3. `assets/fonts` in the crate directory
//! 4. common system font directories
//!
//! Each directory is probed for every family in [`KNOWN_FAMILIES`].  When all
//! of them fail, the Windows Arial family is tried as a last resort.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{self, FontData, FontFamily};
use log::{debug, warn};

/// Environment variable naming an extra font directory searched first.
pub const FONTS_DIR_ENV: &str = "SAMPLE_PDF_FONTS_DIR";

/// Environment variable restricting the family looked up in [`FONTS_DIR_ENV`].
pub const FONT_FAMILY_ENV: &str = "SAMPLE_PDF_FONT_FAMILY";

/// Environment variable overriding the Windows fallback font directory.
pub const WINDOWS_FONTS_DIR_ENV: &str = "SAMPLE_PDF_WINDOWS_FONTS_DIR";

/// Families whose files follow the `<Family>-<Face>.ttf` naming `genpdf` expects.
pub const KNOWN_FAMILIES: &[&str] = &["Roboto", "LiberationSans", "NotoSans"];

const FACES: &[&str] = &["Regular", "Bold", "Italic", "BoldItalic"];

const SYSTEM_FONT_DIRECTORIES: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/liberation2",
    "/usr/share/fonts/liberation-sans",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/truetype/noto",
    "/usr/share/fonts/noto",
    "/usr/share/fonts/google-noto",
];

const WINDOWS_FALLBACK_FAMILY_NAME: &str = "Arial";

struct WindowsFontFiles {
    regular: &'static str,
    bold: &'static str,
    italic: &'static str,
    bold_italic: &'static str,
}

const WINDOWS_FONT_FILES: WindowsFontFiles = WindowsFontFiles {
    regular: "arial.ttf",
    bold: "arialbd.ttf",
    italic: "ariali.ttf",
    bold_italic: "arialbi.ttf",
};

/// A directory holding all four faces of a font family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSource {
    directory: PathBuf,
    family: String,
}

impl FontSource {
    /// Directory containing the font files.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Family name used as the file name prefix.
    pub fn family(&self) -> &str {
        &self.family
    }
}

/// The `assets/fonts` directory of this crate.
pub fn bundled_fonts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

fn push_unique(candidates: &mut Vec<(PathBuf, Vec<String>)>, path: PathBuf, families: Vec<String>) {
    if !candidates.iter().any(|(existing, _)| existing == &path) {
        candidates.push((path, families));
    }
}

fn known_families() -> Vec<String> {
    KNOWN_FAMILIES.iter().map(|family| family.to_string()).collect()
}

fn font_directory_candidates() -> Vec<(PathBuf, Vec<String>)> {
    let mut candidates = Vec::new();

    if let Some(path) = env_path(FONTS_DIR_ENV) {
        let families = match env::var(FONT_FAMILY_ENV) {
            Ok(family) if !family.trim().is_empty() => vec![family.trim().to_owned()],
            _ => known_families(),
        };
        push_unique(&mut candidates, path, families);
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            push_unique(&mut candidates, bin_dir.join("assets/fonts"), known_families());
        }
    }

    push_unique(&mut candidates, bundled_fonts_dir(), known_families());

    for directory in SYSTEM_FONT_DIRECTORIES {
        push_unique(&mut candidates, PathBuf::from(directory), known_families());
    }

    candidates
}

fn missing_faces(directory: &Path, family: &str) -> Vec<String> {
    FACES
        .iter()
        .map(|face| format!("{}-{}.ttf", family, face))
        .filter(|file| !directory.join(file).is_file())
        .collect()
}

/// Finds the first directory and family for which all four faces exist.
///
/// The error lists every probed location and why it was rejected.
pub fn resolve_font_source() -> Result<FontSource, Error> {
    let mut attempts = Vec::new();

    for (directory, families) in font_directory_candidates() {
        if !directory.is_dir() {
            attempts.push(format!("{} (directory missing)", directory.display()));
            continue;
        }

        for family in families {
            let missing = missing_faces(&directory, &family);
            if missing.is_empty() {
                return Ok(FontSource { directory, family });
            }
            attempts.push(format!(
                "{} (missing {} [{}])",
                directory.display(),
                family,
                missing.join(", ")
            ));
        }
    }

    Err(Error::new(
        format!(
            "Unable to locate a usable font family. Checked: {}.",
            attempts.join(", ")
        ),
        io::Error::new(io::ErrorKind::NotFound, "font family not found"),
    ))
}

fn load_font_source(source: &FontSource) -> Result<FontFamily<FontData>, Error> {
    fonts::from_files(source.directory(), source.family(), None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                source.family(),
                source.directory().display(),
                err
            ),
            io::Error::new(io::ErrorKind::InvalidData, err.to_string()),
        )
    })
}

fn windows_font_directory() -> Option<PathBuf> {
    if let Some(path) = env_path(WINDOWS_FONTS_DIR_ENV) {
        return Some(path);
    }

    #[cfg(windows)]
    {
        for var in ["WINDIR", "SystemRoot"] {
            if let Some(root) = env_path(var) {
                let candidate = root.join("Fonts");
                if candidate.is_dir() {
                    return Some(candidate);
                }
            }
        }
    }

    None
}

fn load_windows_font(directory: &Path, file: &str, face: &str) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, None).map_err(|err| {
        let io_kind = if path.is_file() {
            io::ErrorKind::InvalidData
        } else {
            io::ErrorKind::NotFound
        };
        Error::new(
            format!(
                "Failed to load Windows fallback {} font at {}: {}",
                face,
                path.display(),
                err
            ),
            io::Error::new(io_kind, err.to_string()),
        )
    })
}

fn windows_fallback_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = windows_font_directory().ok_or_else(|| {
        Error::new(
            "Windows font directory not found for fallback",
            io::Error::new(io::ErrorKind::NotFound, "windows fonts directory not found"),
        )
    })?;

    Ok(FontFamily {
        regular: load_windows_font(&directory, WINDOWS_FONT_FILES.regular, "regular")?,
        bold: load_windows_font(&directory, WINDOWS_FONT_FILES.bold, "bold")?,
        italic: load_windows_font(&directory, WINDOWS_FONT_FILES.italic, "italic")?,
        bold_italic: load_windows_font(&directory, WINDOWS_FONT_FILES.bold_italic, "bold italic")?,
    })
}

fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if io_err.kind() == io::ErrorKind::NotFound
                || io_err.kind() == io::ErrorKind::PermissionDenied
    )
}

/// Loads the first usable font family, falling back to Windows Arial when no
/// family is found in the searched directories.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    let found = resolve_font_source().and_then(|source| {
        debug!(
            "Using font family '{}' from {}",
            source.family(),
            source.directory().display()
        );
        load_font_source(&source)
    });

    match found {
        Ok(family) => Ok(family),
        Err(err) if fonts_missing(&err) => match windows_fallback_font_family() {
            Ok(fallback) => {
                warn!(
                    "No font family found ({}); falling back to Windows '{}' family.",
                    err, WINDOWS_FALLBACK_FAMILY_NAME
                );
                Ok(fallback)
            }
            Err(fallback_err) => Err(Error::new(
                format!("{} Windows fallback failed: {}", err, fallback_err),
                io::Error::new(io::ErrorKind::NotFound, "no usable font family"),
            )),
        },
        Err(err) => Err(err),
    }
}

/// Indicates whether a font family can be located without loading it.
pub fn default_fonts_available() -> bool {
    resolve_font_source().is_ok()
}
