//! Rendering of a single introspected node.

use std::{collections::HashMap, io::Write};

use crate::{
    args::{split_directions, ArgFormatter, TypeDisplay},
    node::{Annotation, Interface, Node},
    style::{Plain, Role, Style},
    Introspectable,
};

/// A section of an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The methods.
    Methods,
    /// The properties.
    Properties,
    /// The signals.
    Signals,
}

/// Which sections of the interfaces are rendered.
///
/// When nothing is selected, all sections are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sections {
    /// Show methods.
    pub methods: bool,
    /// Show properties.
    pub properties: bool,
    /// Show signals.
    pub signals: bool,
}

impl Sections {
    /// Whether `section` is rendered.
    pub fn shows(&self, section: Section) -> bool {
        let selected = match section {
            Section::Methods => self.methods,
            Section::Properties => self.properties,
            Section::Signals => self.signals,
        };

        selected || !(self.methods || self.properties || self.signals)
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// One level of indentation.
    pub indent: String,
    /// The sections to render.
    pub sections: Sections,
    /// How types are shown.
    pub types: TypeDisplay,
    /// Fetch and show live property values when a provider is available.
    pub values: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
            sections: Sections::default(),
            types: TypeDisplay::Human,
            values: true,
        }
    }
}

/// Live property values, keyed by interface and property name.
///
/// A failed fetch is kept as its error message.
pub type PropertyValues = HashMap<(String, String), Result<String, String>>;

/// Renders nodes as indented text lines.
#[derive(Debug)]
pub struct Renderer {
    options: RenderOptions,
    style: Box<dyn Style>,
}

impl Renderer {
    /// Create a renderer without decoration.
    pub fn new(options: RenderOptions) -> Self {
        Self::with_style(options, Plain)
    }

    /// Create a renderer with the given decoration.
    pub fn with_style(options: RenderOptions, style: impl Style + 'static) -> Self {
        Self {
            options,
            style: Box::new(style),
        }
    }

    /// The decoration in use.
    pub fn style(&self) -> &dyn Style {
        &*self.style
    }

    /// Fetch the values of all properties of `node` that will be rendered.
    ///
    /// Returns `None` if value fetching is disabled or no properties are shown. Failures are
    /// recorded per property and never abort the fetch.
    pub async fn fetch_values<P>(
        &self,
        provider: &mut P,
        destination: &str,
        path: &str,
        node: &Node,
    ) -> Option<PropertyValues>
    where
        P: Introspectable,
    {
        if !self.options.values || !self.options.sections.shows(Section::Properties) {
            return None;
        }

        let mut values = PropertyValues::new();
        for interface in node.interfaces() {
            for property in interface.properties() {
                let value = provider
                    .get_property(destination, path, interface.name(), property.name())
                    .await
                    .map_err(|e| {
                        warn!(
                            "Failed to get {}.{} at {path}: {e}",
                            interface.name(),
                            property.name()
                        );
                        e.to_string()
                    });
                values.insert(
                    (interface.name().to_owned(), property.name().to_owned()),
                    value,
                );
            }
        }

        Some(values)
    }

    /// Render all interfaces of `node`, `depth` levels deep.
    ///
    /// Property values are appended when `values` is given. An argument with an invalid direction
    /// aborts the render with [`crate::Error::InvalidDirection`].
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        node: &Node,
        depth: usize,
        values: Option<&PropertyValues>,
    ) -> crate::Result<()> {
        for interface in node.interfaces() {
            self.render_interface(out, interface, depth, values)?;
        }

        Ok(())
    }

    fn render_interface<W: Write>(
        &self,
        out: &mut W,
        interface: &Interface,
        depth: usize,
        values: Option<&PropertyValues>,
    ) -> crate::Result<()> {
        let indent = |level: usize| self.options.indent.repeat(depth + level);
        let args = ArgFormatter::new(self.options.types, self.style());
        let sections = self.options.sections;

        writeln!(
            out,
            "{}{}",
            indent(0),
            self.style.paint(interface.name(), Role::Interface)
        )?;

        if interface.methods().len() > 0 && sections.shows(Section::Methods) {
            self.render_header(out, &indent(1), "Methods")?;
            for method in interface.methods() {
                self.render_annotations(out, &indent(2), method.annotations())?;
                let (inputs, outputs) = split_directions(method.arg_slice())?;
                writeln!(
                    out,
                    "{}{}({}) → ({})",
                    indent(2),
                    method.name(),
                    args.format(inputs),
                    args.format(outputs),
                )?;
            }
        }

        if interface.properties().len() > 0 && sections.shows(Section::Properties) {
            self.render_header(out, &indent(1), "Properties")?;
            for property in interface.properties() {
                self.render_annotations(out, &indent(2), property.annotations())?;
                write!(
                    out,
                    "{}{} {} {}",
                    indent(2),
                    property.name(),
                    args.format_type(property.signature()),
                    self.style
                        .paint(&format!("[{}]", property.access()), Role::Access),
                )?;
                let key = (interface.name().to_owned(), property.name().to_owned());
                match values.and_then(|values| values.get(&key)) {
                    Some(Ok(value)) => writeln!(out, " = {value}")?,
                    Some(Err(e)) => writeln!(
                        out,
                        " = {}",
                        self.style.paint(&format!("(error: {e})"), Role::Error)
                    )?,
                    None => writeln!(out)?,
                }
            }
        }

        if interface.signals().len() > 0 && sections.shows(Section::Signals) {
            self.render_header(out, &indent(1), "Signals")?;
            for signal in interface.signals() {
                self.render_annotations(out, &indent(2), signal.annotations())?;
                writeln!(
                    out,
                    "{}{}({})",
                    indent(2),
                    signal.name(),
                    args.format(signal.arg_slice()),
                )?;
            }
        }

        Ok(())
    }

    fn render_header<W: Write>(&self, out: &mut W, indent: &str, title: &str) -> crate::Result<()> {
        writeln!(out, "{indent}{}", self.style.paint(title, Role::Section))?;

        Ok(())
    }

    fn render_annotations<'a, W: Write>(
        &self,
        out: &mut W,
        indent: &str,
        annotations: impl Iterator<Item = &'a Annotation>,
    ) -> crate::Result<()> {
        for annotation in annotations {
            writeln!(
                out,
                "{indent}{}",
                self.style.paint(&annotation.to_string(), Role::Annotation)
            )?;
        }

        Ok(())
    }
}
