//! Bookkeeping for the table of contents.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::ident;

/// One embedded file, as listed in the table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
   /// The file's basename, exposed at run time as the entry's name.
   pub name: Vec<u8>,
   /// The identifier of the constant holding the file's contents.
   pub ident: String,
}

impl TocEntry {
   pub fn new(name: &[u8]) -> Self {
      Self { name: name.to_vec(), ident: ident::data_ident(name) }
   }
}

/// Entries in the order their files were embedded.
#[derive(Clone, Debug, Default)]
pub struct Toc {
   entries: Vec<TocEntry>,
}

impl Toc {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn push(&mut self, entry: TocEntry) {
      self.entries.push(entry);
   }

   pub fn entries(&self) -> &[TocEntry] {
      &self.entries
   }

   pub fn len(&self) -> usize {
      self.entries.len()
   }

   pub fn is_empty(&self) -> bool {
      self.entries.is_empty()
   }
}

/// Makes sure no two input paths produce the same constant identifier.
pub fn check_unique<'a>(paths: impl IntoIterator<Item = &'a [u8]>) -> Result<()> {
   let mut seen: HashMap<String, &[u8]> = HashMap::new();
   for path in paths {
      let ident = ident::data_ident(ident::basename(path));
      if let Some(first) = seen.get(&ident) {
         return Err(Error::DuplicateSymbol {
            ident,
            first: String::from_utf8_lossy(first).into_owned(),
            second: String::from_utf8_lossy(path).into_owned(),
         });
      }
      seen.insert(ident, path);
   }
   Ok(())
}
