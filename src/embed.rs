//! Writing the generated files to disk.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Stderr};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use filewrapper_codegen::ident::basename;
use filewrapper_codegen::{write_header, Context, SourceGenerator};
use pbr::ProgressBar;

const BUFFER_SIZE: usize = 4096;

fn create(path: &Path) -> anyhow::Result<BufWriter<File>> {
   let file = File::create(path).with_context(|| format!("Open {}", path.display()))?;
   Ok(BufWriter::with_capacity(BUFFER_SIZE, file))
}

/// The bytes of `path` exactly as given on the command line.
#[cfg(unix)]
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
   use std::os::unix::ffi::OsStrExt;
   Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
   match path.to_string_lossy() {
      Cow::Borrowed(path) => Cow::Borrowed(path.as_bytes()),
      Cow::Owned(path) => Cow::Owned(path.into_bytes()),
   }
}

/// Writes the header to `path`.
pub fn header(context: &Context, path: &Path) -> anyhow::Result<()> {
   let out = create(path)?;
   write_header(context, out).with_context(|| format!("I/O on {}", path.display()))
}

/// Writes the implementation file to `path`, embedding every input in order.
pub fn source(
   context: &Context,
   path: &Path,
   inputs: &[PathBuf],
   mut progress: Option<ProgressBar<Stderr>>,
) -> anyhow::Result<()> {
   let output_error = || format!("I/O on {}", path.display());

   let mut generator = SourceGenerator::new(context, create(path)?);
   generator.prelude().with_context(output_error)?;

   let mut buffer = [0; BUFFER_SIZE];
   for input in inputs {
      let input_error = || format!("I/O on {}", input.display());
      let mut reader = BufReader::new(
         File::open(input).with_context(|| format!("Open {}", input.display()))?,
      );

      let name = path_bytes(input);
      let mut data = generator.embed(basename(&name)).with_context(output_error)?;
      loop {
         let count = reader.read(&mut buffer).with_context(input_error)?;
         if count == 0 {
            break;
         }
         data.bytes(&buffer[..count]).with_context(output_error)?;
      }
      generator = data.finish().with_context(output_error)?;

      if let Some(progress) = progress.as_mut() {
         progress.inc();
      }
   }

   generator.finish().with_context(output_error)?;
   if let Some(mut progress) = progress {
      progress.finish();
   }
   Ok(())
}
