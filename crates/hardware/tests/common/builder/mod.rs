//! Test-input builders.

/// ELF32 image writer for loader and end-to-end tests.
pub mod elf;
