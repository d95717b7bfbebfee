//! Code generation for filewrapper. Turns files into C++ string constants, listed in a table of
//! contents that programs can walk at run time.
//!
//! The generated header declares
//!
//! ```c++
//! const FileToc* <name>_create();
//! size_t <name>_size();
//! ```
//!
//! and the implementation file defines one `std::string_view` constant per file plus the
//! `kToc` array they are listed in, terminated by an entry with null `name` and `data`.

pub mod emit;
pub mod error;
pub mod escape;
pub mod ident;
pub mod templates;
pub mod toc;

pub use emit::{write_header, ConstData, Context, SourceGenerator};
pub use error::{Error, Result};
pub use toc::check_unique;
