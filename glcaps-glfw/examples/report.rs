//! Print the capability report of the OpenGL driver of this machine.
//!
//! Set `RUST_LOG=debug` to see which fallbacks the reporter takes.

use glcaps::{ReporterOpt, Version};
use glcaps_glfw::{ContextOpt, GlfwSurface};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct CLIOpts {
  #[structopt(short, long, default_value = "2.1", parse(from_str = Version::parse_lenient))]
  /// Minimum version demanded.
  min_version: Version,

  #[structopt(long)]
  /// Let the platform pick the context instead of requesting a 3.3 core one.
  any_context: bool,

  #[structopt(short, long)]
  /// Print the markup text instead of the plain listing.
  markup: bool,
}

fn main() {
  env_logger::init();

  let cli_opts = CLIOpts::from_args();
  let context_opt = if cli_opts.any_context {
    ContextOpt::any()
  } else {
    ContextOpt::default()
  };

  let surface = match GlfwSurface::new_offscreen(context_opt) {
    Ok(surface) => surface,
    Err(e) => {
      log::error!("cannot create an OpenGL context: {}", e);
      std::process::exit(1);
    }
  };

  let reporter = surface.reporter(ReporterOpt::default().set_min_version(cli_opts.min_version));
  reporter.drain_errors();

  if cli_opts.markup {
    println!("{}", reporter.text_info());
    return;
  }

  let report = reporter.info();

  println!("vendor: {}", reporter.vendor());
  println!("renderer: {}", report.renderer());
  println!("card driver: {}", report.card());
  println!(
    "version: {} (minimum {}, {})",
    report.version(),
    report.min_version(),
    if report.meets_min_version() {
      "ok"
    } else {
      "too old"
    }
  );

  println!("shading languages:");
  for lang in report.shading_languages() {
    println!("  - {}", lang);
  }

  println!("extensions:");
  for ext in report.extensions() {
    println!("  - {}", ext);
  }
}
