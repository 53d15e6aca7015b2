//! Executable Loader.
//!
//! This module extracts the loadable sections of an executable. It provides:
//! 1. **Sections:** The `Section` record handed to the functional memory.
//! 2. **Source trait:** `SectionSource`, the seam between the simulator and the file format.
//! 3. **ELF images:** `ElfImage`, a `SectionSource` backed by the `object` crate.
//!
//! Only sections with a non-zero load address are returned. Sections without file
//! data (e.g. `.bss`) are zero-filled to their size.

use std::fs;
use std::path::{Path, PathBuf};

use object::{Object, ObjectSection};
use tracing::debug;

use crate::common::error::{Result, SimError};

/// A contiguous block of the executable image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Section name, e.g. `.text`.
    pub name: String,
    /// Load address of the first byte.
    pub start_addr: u64,
    /// Size in bytes.
    pub size: u64,
    /// Raw content; `content.len() == size`.
    pub content: Vec<u8>,
}

impl Section {
    /// Builds a section, zero-padding `content` to `size` bytes.
    pub fn new(name: impl Into<String>, start_addr: u64, size: u64, mut content: Vec<u8>) -> Self {
        content.resize(size as usize, 0);
        Self {
            name: name.into(),
            start_addr,
            size,
            content,
        }
    }
}

/// Anything that can enumerate the loadable sections of a program.
pub trait SectionSource {
    /// Returns every loadable section.
    ///
    /// # Errors
    ///
    /// Implementation-specific; typically [`SimError::Elf`] for a malformed image.
    fn sections(&self) -> Result<Vec<Section>>;
}

/// Looks up a section by name.
///
/// # Errors
///
/// [`SimError::MissingSection`] if no section has that name.
pub fn find_section<'a>(sections: &'a [Section], name: &str) -> Result<&'a Section> {
    sections
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| SimError::MissingSection(name.to_string()))
}

/// An ELF executable held in memory.
#[derive(Debug)]
pub struct ElfImage {
    path: PathBuf,
    data: Vec<u8>,
}

impl ElfImage {
    /// Reads an executable from disk.
    ///
    /// # Errors
    ///
    /// [`SimError::Io`] if the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| SimError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_bytes(path, data))
    }

    /// Wraps an image already in memory. `path` is only used in messages.
    pub fn from_bytes(path: impl AsRef<Path>, data: Vec<u8>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            data,
        }
    }

    fn elf_error(&self, reason: impl ToString) -> SimError {
        SimError::Elf {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl SectionSource for ElfImage {
    fn sections(&self) -> Result<Vec<Section>> {
        let file = object::File::parse(self.data.as_slice()).map_err(|e| self.elf_error(e))?;

        let mut sections = Vec::new();
        for section in file.sections() {
            if section.address() == 0 {
                continue;
            }
            let name = section.name().map_err(|e| self.elf_error(e))?;
            let data = section.data().map_err(|e| self.elf_error(e))?;
            debug!(
                name,
                addr = format_args!("{:#x}", section.address()),
                size = section.size(),
                "found section"
            );
            sections.push(Section::new(
                name,
                section.address(),
                section.size(),
                data.to_vec(),
            ));
        }
        Ok(sections)
    }
}
