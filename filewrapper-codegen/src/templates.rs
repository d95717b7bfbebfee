//! Fixed pieces of generated text.

/// First line of every generated file.
pub const BANNER: &str = "// Automatically generated by filewrapper\n";

/// Guard shared by every generated header, so that `FileToc` is declared only once per
/// translation unit no matter how many tables are included. It matches the guard of Sandboxed
/// API's own `file_toc.h`, which declares the same struct.
pub const FILE_TOC_GUARD: &str = "SANDBOXED_API_FILE_TOC_H_";

/// Declaration of the table of contents entry.
pub const FILE_TOC_STRUCT: &str = r#"#include <cstddef>

struct FileToc {
  const char* name;
  const char* data;
  size_t size;
  // Reserved. Never computed, always zero.
  unsigned char md5digest[16];
};
"#;

/// Headers the implementation file needs besides its own header.
pub const SOURCE_INCLUDES: &str = "#include <string_view>\n";

/// Start of the table of contents array.
pub const TOC_BEGIN: &str = "\nconstexpr FileToc kToc[] = {\n";

/// Sentinel entry and end of the table of contents array.
pub const TOC_END: &str = r#"
    // Terminate array
    {nullptr, nullptr, 0, {}},
};
"#;
