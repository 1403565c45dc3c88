use busview_core::{
    args::TypeDisplay,
    render::{RenderOptions, Sections},
    WalkOptions,
};
use clap::Parser;
use std::path::PathBuf;

/// Inspect D-Bus services, their object trees and introspection documents.
///
/// Without a destination or files, the names on the bus are listed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Short overview: only bus names or object paths.
    #[arg(short = 'q')]
    pub quiet: bool,

    /// Connect to the system bus instead of the session bus.
    #[arg(long)]
    pub system: bool,

    /// Destination to inspect.
    #[arg(long, value_name = "NAME")]
    pub dest: Option<String>,

    /// Inspect only this object path. With `-q`, list the paths of its subtree.
    #[arg(long, value_name = "PATH", requires = "dest")]
    pub path: Option<String>,

    /// Indentation string.
    #[arg(long, value_name = "STR", default_value = "  ")]
    pub indent: String,

    /// Disable color.
    #[arg(long)]
    pub no_color: bool,

    /// Show raw signatures instead of human-readable types.
    #[arg(long)]
    pub signatures: bool,

    /// Show methods.
    #[arg(long)]
    pub methods: bool,

    /// Show properties.
    #[arg(long)]
    pub properties: bool,

    /// Show signals.
    #[arg(long)]
    pub signals: bool,

    /// Do not fetch live property values.
    #[arg(long)]
    pub no_values: bool,

    /// Introspection XML documents to render, `-` reads stdin.
    #[arg(value_name = "FILE", conflicts_with = "dest")]
    pub files: Vec<PathBuf>,
}

impl Args {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent: self.indent.clone(),
            sections: Sections {
                methods: self.methods,
                properties: self.properties,
                signals: self.signals,
            },
            types: if self.signatures {
                TypeDisplay::Raw
            } else {
                TypeDisplay::Human
            },
            values: !self.no_values,
        }
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            terse: self.quiet,
            recursive: self.path.is_none(),
        }
    }

    /// The object path the walk starts at.
    pub fn start_path(&self) -> &str {
        self.path.as_deref().unwrap_or("/")
    }
}
