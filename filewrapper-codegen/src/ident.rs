//! Turning arbitrary strings into C identifier fragments.
//!
//! File names are handled as raw bytes, since paths need not be valid UTF-8.

/// Replaces every byte that is not an ASCII letter or digit with an underscore.
pub fn sanitize(s: impl AsRef<[u8]>) -> String {
   s.as_ref().iter().map(|&b| if b.is_ascii_alphanumeric() { char::from(b) } else { '_' }).collect()
}

/// Returns the part of `path` after the last `/`.
pub fn basename(path: &[u8]) -> &[u8] {
   path.rsplit(|&b| b == b'/').next().unwrap_or(path)
}

/// The identifier used for the table of contents and its accessors.
pub fn toc_ident(name: &str) -> String {
   sanitize(name.replace('-', "_"))
}

/// The include guard of a generated header.
pub fn header_guard(package: &str, toc_ident: &str) -> String {
   sanitize(format!("{}_{}_H_", package, toc_ident))
}

/// The identifier of the constant holding a file's contents.
pub fn data_ident(basename: &[u8]) -> String {
   format!("k{}", sanitize(basename))
}

#[cfg(test)]
mod tests {
   use super::*;

   fn is_identifier_safe(s: &str) -> bool {
      !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
   }

   #[test]
   fn sanitize_replaces_everything_but_alphanumerics() {
      assert_eq!(sanitize("foo.bin"), "foo_bin");
      assert_eq!(sanitize("a b-c/d"), "a_b_c_d");
      assert_eq!(sanitize("ok123"), "ok123");
      assert_eq!(sanitize("ünï"), "__n__");
      assert_eq!(sanitize(b"n\xe9.bin"), "n__bin");
      assert_eq!(sanitize(""), "");
   }

   #[test]
   fn basename_takes_last_component() {
      assert_eq!(basename(b"foo.bin"), b"foo.bin");
      assert_eq!(basename(b"some/dir/foo.bin"), b"foo.bin");
      assert_eq!(basename(b"/abs/foo"), b"foo");
      assert_eq!(basename(b"dir/"), b"");
      assert_eq!(basename(b"dir/\xff\xfe"), b"\xff\xfe");
   }

   #[test]
   fn identifiers_from_scenario() {
      let toc = toc_ident("my-data");
      assert_eq!(toc, "my_data");
      assert_eq!(data_ident(b"foo.bin"), "kfoo_bin");
      assert_eq!(header_guard("pkg", &toc), "pkg_my_data_H_");
   }

   #[test]
   fn leading_hyphen_name() {
      assert_eq!(toc_ident("-data"), "_data");
   }

   #[test]
   fn identifiers_are_always_safe() {
      let nasty = ["a\"b", "x y.z", "../../etc/passwd", "name\0with\nstuff", "-", "日本"];
      for s in nasty {
         assert!(is_identifier_safe(&toc_ident(s)), "{s:?}");
         assert!(is_identifier_safe(&data_ident(basename(s.as_bytes()))), "{s:?}");
         assert!(is_identifier_safe(&header_guard(s, &toc_ident(s))), "{s:?}");
      }
      assert!(is_identifier_safe(&data_ident(b"\x80\xff\x00")));
   }
}
