//! Emission of the generated header and implementation file.

use std::io::{self, Write};

use crate::escape::{escape_bytes, write_escaped};
use crate::ident;
use crate::templates::*;
use crate::toc::{Toc, TocEntry};

/// Per-run identity of the generated table.
#[derive(Clone, Debug)]
pub struct Context {
   package: String,
   name: String,
   namespace: Option<String>,
   toc_ident: String,
   header_guard: String,
}

impl Context {
   /// Creates a context. An empty `namespace` disables namespace wrapping.
   pub fn new(package: &str, name: &str, namespace: &str) -> Self {
      let toc_ident = ident::toc_ident(name);
      let header_guard = ident::header_guard(package, &toc_ident);
      Self {
         package: package.to_owned(),
         name: name.to_owned(),
         namespace: (!namespace.is_empty()).then(|| namespace.to_owned()),
         toc_ident,
         header_guard,
      }
   }

   pub fn toc_ident(&self) -> &str {
      &self.toc_ident
   }

   pub fn header_guard(&self) -> &str {
      &self.header_guard
   }

   pub fn namespace(&self) -> Option<&str> {
      self.namespace.as_deref()
   }

   /// The path the implementation file includes its header by.
   pub fn include_path(&self) -> String {
      if self.package.is_empty() {
         format!("{}.h", self.name)
      } else {
         format!("{}/{}.h", self.package, self.name)
      }
   }
}

/// Writes the header declaring the table's accessors.
pub fn write_header<W: Write>(context: &Context, mut out: W) -> io::Result<()> {
   let guard = context.header_guard();
   out.write_all(BANNER.as_bytes())?;
   write!(
      out,
      "\n#ifndef {0}\n#define {0}\n\n{1}\n#endif  // {0}\n\n",
      FILE_TOC_GUARD, FILE_TOC_STRUCT
   )?;
   write!(out, "#ifndef {0}\n#define {0}\n\n", guard)?;
   if let Some(namespace) = context.namespace() {
      writeln!(out, "namespace {} {{", namespace)?;
   }
   write!(out, "\nconst FileToc* {0}_create();\nsize_t {0}_size();\n", context.toc_ident())?;
   if let Some(namespace) = context.namespace() {
      write!(out, "\n}}  // namespace {}\n", namespace)?;
   }
   write!(out, "\n#endif  // {}\n", guard)?;
   out.flush()
}

/// Generates the implementation file: one constant per embedded file, then the table of
/// contents and its accessors.
pub struct SourceGenerator<'c, W: Write> {
   context: &'c Context,
   out: W,
   toc: Toc,
}

impl<'c, W: Write> SourceGenerator<'c, W> {
   pub fn new(context: &'c Context, out: W) -> Self {
      Self { context, out, toc: Toc::new() }
   }

   /// Writes the includes and opens the namespace.
   pub fn prelude(&mut self) -> io::Result<()> {
      self.out.write_all(BANNER.as_bytes())?;
      write!(self.out, "\n#include \"{}\"\n\n{}\n", self.context.include_path(), SOURCE_INCLUDES)?;
      if let Some(namespace) = self.context.namespace() {
         write!(self.out, "namespace {} {{\n\n", namespace)?;
      }
      Ok(())
   }

   /// Starts the constant for the file called `name`. Its contents are then fed through the
   /// returned [`ConstData`].
   pub fn embed(mut self, name: &[u8]) -> io::Result<ConstData<'c, W>> {
      let entry = TocEntry::new(name);
      write!(self.out, "constexpr std::string_view {} = {{\"", entry.ident)?;
      Ok(ConstData { generator: self, entry, len: 0, after_nul: false })
   }

   pub fn toc(&self) -> &Toc {
      &self.toc
   }

   /// Writes the table of contents and its accessors, closes the namespace and hands back the
   /// underlying writer.
   pub fn finish(mut self) -> io::Result<W> {
      self.out.write_all(TOC_BEGIN.as_bytes())?;
      for entry in self.toc.entries() {
         writeln!(
            self.out,
            "    {{\"{}\", {1}.data(), {1}.size(), {{}}}},",
            escape_bytes(&entry.name),
            entry.ident
         )?;
      }
      self.out.write_all(TOC_END.as_bytes())?;
      write!(
         self.out,
         r#"
const FileToc* {0}_create() {{
  return kToc;
}}

size_t {0}_size() {{
  return sizeof(kToc) / sizeof(kToc[0]) - 1;
}}
"#,
         self.context.toc_ident()
      )?;
      if let Some(namespace) = self.context.namespace() {
         write!(self.out, "\n}}  // namespace {}\n", namespace)?;
      }
      self.out.flush()?;
      Ok(self.out)
   }
}

/// The string constant of a single file, written out byte by byte.
pub struct ConstData<'c, W: Write> {
   generator: SourceGenerator<'c, W>,
   entry: TocEntry,
   len: u64,
   after_nul: bool,
}

impl<'c, W: Write> ConstData<'c, W> {
   /// Appends a byte.
   pub fn byte(&mut self, byte: u8) -> io::Result<()> {
      let out = &mut self.generator.out;
      // `\0` followed by an octal digit would read back as a longer octal escape.
      if self.after_nul && (b'0'..=b'7').contains(&byte) {
         out.write_all(b"\"\"")?;
      }
      write_escaped(out, byte)?;
      self.after_nul = byte == 0;
      self.len += 1;
      Ok(())
   }

   pub fn bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
      bytes.iter().try_for_each(|&byte| self.byte(byte))
   }

   /// The number of bytes written so far.
   pub fn len(&self) -> u64 {
      self.len
   }

   pub fn is_empty(&self) -> bool {
      self.len == 0
   }

   /// Closes the constant and registers it in the table of contents.
   pub fn finish(self) -> io::Result<SourceGenerator<'c, W>> {
      let Self { mut generator, entry, len, .. } = self;
      writeln!(generator.out, "\", {}}};", len)?;
      generator.toc.push(entry);
      Ok(generator)
   }
}
