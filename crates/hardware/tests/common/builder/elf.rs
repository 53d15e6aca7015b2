//! Minimal ELF32 little-endian MIPS image writer.
//!
//! Produces just enough of an executable for the loader: the file header, the
//! section contents, a `.shstrtab` and the section header table. No program
//! headers are emitted.

const EHDR_SIZE: usize = 52;
const SHDR_SIZE: usize = 40;

const SHT_PROGBITS: u32 = 1;
const SHT_STRTAB: u32 = 3;
const SHT_NOBITS: u32 = 8;

const SHF_WRITE: u32 = 0x1;
const SHF_ALLOC: u32 = 0x2;
const SHF_EXECINSTR: u32 = 0x4;

struct SectionSpec {
    name: String,
    kind: u32,
    flags: u32,
    addr: u32,
    size: u32,
    data: Vec<u8>,
}

/// Fluent builder for an ELF32 image.
#[derive(Default)]
pub struct ElfBuilder {
    entry: u32,
    sections: Vec<SectionSpec>,
}

fn push_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

impl ElfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an executable section and makes its address the entry point.
    pub fn text(mut self, addr: u32, words: &[u32]) -> Self {
        self.entry = addr;
        let data = super::instruction::to_bytes(words);
        self.sections.push(SectionSpec {
            name: ".text".into(),
            kind: SHT_PROGBITS,
            flags: SHF_ALLOC | SHF_EXECINSTR,
            addr,
            size: data.len() as u32,
            data,
        });
        self
    }

    /// Adds a writable data section.
    pub fn data(mut self, name: &str, addr: u32, bytes: &[u8]) -> Self {
        self.sections.push(SectionSpec {
            name: name.into(),
            kind: SHT_PROGBITS,
            flags: SHF_ALLOC | SHF_WRITE,
            addr,
            size: bytes.len() as u32,
            data: bytes.to_vec(),
        });
        self
    }

    /// Adds a zero-initialised section that occupies no file space.
    pub fn bss(mut self, name: &str, addr: u32, size: u32) -> Self {
        self.sections.push(SectionSpec {
            name: name.into(),
            kind: SHT_NOBITS,
            flags: SHF_ALLOC | SHF_WRITE,
            addr,
            size,
            data: Vec::new(),
        });
        self
    }

    /// Adds a non-allocated section (address 0), e.g. `.comment`.
    pub fn note(mut self, name: &str, bytes: &[u8]) -> Self {
        self.sections.push(SectionSpec {
            name: name.into(),
            kind: SHT_PROGBITS,
            flags: 0,
            addr: 0,
            size: bytes.len() as u32,
            data: bytes.to_vec(),
        });
        self
    }

    pub fn build(self) -> Vec<u8> {
        // Section name string table: "\0" then each name, then ".shstrtab".
        let mut shstrtab = vec![0u8];
        let mut name_offsets = Vec::new();
        for s in &self.sections {
            name_offsets.push(shstrtab.len() as u32);
            shstrtab.extend_from_slice(s.name.as_bytes());
            shstrtab.push(0);
        }
        let shstrtab_name = shstrtab.len() as u32;
        shstrtab.extend_from_slice(b".shstrtab\0");

        let mut body = Vec::new();
        let mut offsets = Vec::new();
        for s in &self.sections {
            while (EHDR_SIZE + body.len()) % 4 != 0 {
                body.push(0);
            }
            offsets.push((EHDR_SIZE + body.len()) as u32);
            body.extend_from_slice(&s.data);
        }
        let shstrtab_offset = (EHDR_SIZE + body.len()) as u32;
        body.extend_from_slice(&shstrtab);
        while (EHDR_SIZE + body.len()) % 4 != 0 {
            body.push(0);
        }
        let shoff = (EHDR_SIZE + body.len()) as u32;

        // Null section + user sections + .shstrtab.
        let shnum = (self.sections.len() + 2) as u16;
        let shstrndx = shnum - 1;

        let mut out = Vec::with_capacity(shoff as usize + usize::from(shnum) * SHDR_SIZE);
        out.extend_from_slice(&[0x7F, b'E', b'L', b'F', 1, 1, 1, 0]);
        out.extend_from_slice(&[0; 8]);
        push_u16(&mut out, 2); // ET_EXEC
        push_u16(&mut out, 8); // EM_MIPS
        push_u32(&mut out, 1);
        push_u32(&mut out, self.entry);
        push_u32(&mut out, 0); // e_phoff
        push_u32(&mut out, shoff);
        push_u32(&mut out, 0); // e_flags
        push_u16(&mut out, EHDR_SIZE as u16);
        push_u16(&mut out, 32); // e_phentsize
        push_u16(&mut out, 0); // e_phnum
        push_u16(&mut out, SHDR_SIZE as u16);
        push_u16(&mut out, shnum);
        push_u16(&mut out, shstrndx);
        assert_eq!(out.len(), EHDR_SIZE);

        out.extend_from_slice(&body);

        out.extend_from_slice(&[0; SHDR_SIZE]);
        for (i, s) in self.sections.iter().enumerate() {
            let offset = if s.kind == SHT_NOBITS { 0 } else { offsets[i] };
            let header = [
                name_offsets[i],
                s.kind,
                s.flags,
                s.addr,
                offset,
                s.size,
                0,
                0,
                4,
                0,
            ];
            for v in header {
                push_u32(&mut out, v);
            }
        }
        for v in [shstrtab_name, SHT_STRTAB, 0, 0, shstrtab_offset, shstrtab.len() as u32, 0, 0, 1, 0] {
            push_u32(&mut out, v);
        }
        out
    }
}
