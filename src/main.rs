use std::path::PathBuf;

use filewrapper_codegen::{check_unique, Context};
use pbr::ProgressBar;
use structopt::clap::AppSettings;
use structopt::StructOpt;

mod embed;
mod progress;

/// Wraps files into a generated C++ header and implementation file.
#[derive(StructOpt)]
#[structopt(name = "filewrapper", setting = AppSettings::AllowLeadingHyphen)]
struct Args {
   /// Package path. Used for the header's include path and its guard.
   package: String,

   /// Name of the table of contents. Its accessors are `<NAME>_create` and `<NAME>_size`.
   name: String,

   /// Namespace to wrap all declarations in. Pass an empty string for none.
   namespace: String,

   /// The generated header file.
   #[structopt(parse(from_os_str))]
   output_h: PathBuf,

   /// The generated implementation file.
   #[structopt(parse(from_os_str))]
   output_cc: PathBuf,

   /// Files to embed, in the order they should appear in the table of contents.
   #[structopt(parse(from_os_str), required = true)]
   inputs: Vec<PathBuf>,

   /// Reports every step of the generation.
   #[structopt(short, long)]
   verbose: bool,

   /// Shows a progress bar while embedding files.
   #[structopt(long)]
   progress: bool,
}

fn run(args: &Args) -> anyhow::Result<()> {
   let task = |name: &str| {
      if args.verbose {
         progress::task(name);
      }
   };

   let context = Context::new(&args.package, &args.name, &args.namespace);
   let input_names: Vec<_> = args.inputs.iter().map(|path| embed::path_bytes(path)).collect();
   check_unique(input_names.iter().map(|name| &name[..]))?;

   task(&format!("Writing header {}", args.output_h.display()));
   embed::header(&context, &args.output_h)?;

   task(&format!("Embedding {} files into {}", args.inputs.len(), args.output_cc.display()));
   let input_count = args.inputs.len() as u64;
   let progress_bar = args.progress.then(|| ProgressBar::on(std::io::stderr(), input_count));
   embed::source(&context, &args.output_cc, &args.inputs, progress_bar)?;

   Ok(())
}

fn main() {
   let args = Args::from_args();
   if let Err(error) = run(&args) {
      progress::error(&error);
      std::process::exit(1);
   }
}
