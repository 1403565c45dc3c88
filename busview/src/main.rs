use anyhow::{Context, Result};
use busview_core::{names, style::Plain, Node, Renderer, Style, Walker};
use clap::Parser;
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
    process,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod bus;
mod cli;
mod color;
use cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(&args).await {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.files.is_empty() {
        let renderer = Renderer::with_style(args.render_options(), style(args));
        render_files(&renderer, &args.files, &mut out)?;

        return out.flush().context("Failed to write output");
    }

    let mut bus = bus::Bus::connect(args.system).await.with_context(|| {
        format!(
            "Failed to connect to the {} bus",
            if args.system { "system" } else { "session" }
        )
    })?;

    match &args.dest {
        Some(dest) => {
            let renderer = Renderer::with_style(args.render_options(), style(args));
            let mut walker = Walker::new(bus, renderer, args.walk_options());
            walker
                .walk(&mut out, dest, args.start_path())
                .await
                .with_context(|| format!("Failed to inspect {dest}"))?;
        }
        None => {
            names::list(
                &mut bus,
                &mut out,
                &*style(args),
                args.quiet,
                names::proc_cmdline,
            )
            .await
            .context("Failed to list the bus names")?;
        }
    }

    out.flush().context("Failed to write output")
}

fn style(args: &Args) -> Box<dyn Style> {
    if args.no_color {
        Box::new(Plain)
    } else {
        Box::new(color::Colors)
    }
}

/// Render every document in `files` at the top level, `-` being stdin.
fn render_files<W: Write>(renderer: &Renderer, files: &[impl AsRef<Path>], out: &mut W) -> Result<()> {
    for file in files {
        let file = file.as_ref();
        let xml = read_document(file)
            .with_context(|| format!("Failed to read file: {}", file.display()))?;
        let node = Node::from_xml(&xml)
            .with_context(|| format!("Failed to parse document: {}", file.display()))?;

        renderer
            .render(out, &node, 0, None)
            .with_context(|| format!("Failed to render document: {}", file.display()))?;
    }

    Ok(())
}

fn read_document(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut xml = String::new();
        io::stdin().read_to_string(&mut xml)?;

        Ok(xml)
    } else {
        fs::read_to_string(path)
    }
}
