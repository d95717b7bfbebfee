//! Escaping of single bytes for inclusion in a C/C++ string literal.
//!
//! Every byte value maps to exactly one [`Escape`] class, independently of the bytes around it.
//! Reading the rendered text back as a string literal yields the original byte.

use std::io::{self, Write};

/// How a byte is represented inside a string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Escape {
   /// Printable ASCII that is safe to emit verbatim.
   Literal,
   /// `\0`, `\n`, `\r` or `\t`.
   Named,
   /// A backslash followed by the character itself: `\"`, `\'`, `\\` and `\?`.
   ///
   /// The question mark is escaped so that no trigraph can ever form in the output.
   Quoted,
   /// A backslash followed by exactly three octal digits.
   Octal,
}

impl Escape {
   /// Classifies a byte.
   pub const fn of(byte: u8) -> Self {
      match byte {
         b'\0' | b'\n' | b'\r' | b'\t' => Self::Named,
         b'"' | b'\'' | b'\\' | b'?' => Self::Quoted,
         0x20..=0x7e => Self::Literal,
         _ => Self::Octal,
      }
   }

   /// The number of characters the escaped form occupies.
   pub const fn len(self) -> usize {
      match self {
         Self::Literal => 1,
         Self::Named | Self::Quoted => 2,
         Self::Octal => 4,
      }
   }
}

/// The class of every byte value, indexed by the byte.
pub const CLASSES: [Escape; 256] = {
   let mut table = [Escape::Octal; 256];
   let mut i = 0;
   while i < 256 {
      table[i] = Escape::of(i as u8);
      i += 1;
   }
   table
};

/// The rendered form of one byte. At most four characters long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Escaped {
   buf: [u8; 4],
   len: u8,
}

impl Escaped {
   pub fn as_bytes(&self) -> &[u8] {
      &self.buf[..self.len as usize]
   }

   pub fn as_str(&self) -> &str {
      // Every rendered form is plain ASCII.
      std::str::from_utf8(self.as_bytes()).unwrap_or_default()
   }
}

impl AsRef<[u8]> for Escaped {
   fn as_ref(&self) -> &[u8] {
      self.as_bytes()
   }
}

/// Renders a single byte.
pub fn escape(byte: u8) -> Escaped {
   let class = CLASSES[byte as usize];
   let buf = match class {
      Escape::Literal => [byte, 0, 0, 0],
      Escape::Named => {
         let name = match byte {
            b'\0' => b'0',
            b'\n' => b'n',
            b'\r' => b'r',
            _ => b't',
         };
         [b'\\', name, 0, 0]
      }
      Escape::Quoted => [b'\\', byte, 0, 0],
      Escape::Octal => [b'\\', b'0' + byte / 64, b'0' + (byte % 64) / 8, b'0' + byte % 8],
   };
   Escaped { buf, len: class.len() as u8 }
}

/// Writes the escaped form of `byte` to `out`.
pub fn write_escaped<W: Write>(out: &mut W, byte: u8) -> io::Result<()> {
   out.write_all(escape(byte).as_bytes())
}

/// Escapes a run of bytes, e.g. a file name that ends up inside a literal.
pub fn escape_bytes(bytes: &[u8]) -> String {
   let mut out = String::with_capacity(bytes.len());
   for &byte in bytes {
      out.push_str(escape(byte).as_str());
   }
   out
}
